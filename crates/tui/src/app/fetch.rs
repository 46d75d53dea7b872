//! Coordination between the [`App`] and the background fetch worker.

use folio_catalog::{
	CatalogEndpoint, FetchError, FetchWorker, PendingFetch, Placement, SearchSession,
};
use tracing::{debug, warn};

use super::App;

/// Owns the handle to the background fetch worker.
pub(crate) struct FetchRuntime {
	worker: FetchWorker,
}

impl FetchRuntime {
	pub(crate) fn spawn<E>(endpoint: E) -> Self
	where
		E: CatalogEndpoint + 'static,
	{
		Self {
			worker: FetchWorker::spawn(endpoint),
		}
	}

	/// Send `pending` to the worker, failing it immediately when the worker
	/// has gone away.
	fn dispatch(&self, session: &mut SearchSession, pending: PendingFetch) {
		if let Err(pending) = self.worker.submit(pending) {
			warn!("fetch worker unavailable");
			session.complete(pending, Err(FetchError::WorkerUnavailable));
		}
	}
}

impl App<'_> {
	/// Start a fresh search for the text currently in the input.
	pub(crate) fn submit_search(&mut self) {
		let query = self.search_input.text().to_string();
		let Some(pending) = self.session.begin_search(&query, self.mode) else {
			debug!("search not started");
			return;
		};
		self.fetch.dispatch(&mut self.session, pending);
	}

	/// Request the next page when one exists and nothing is in flight.
	pub(crate) fn request_more(&mut self) -> bool {
		let Some(pending) = self.session.begin_load_more() else {
			return false;
		};
		self.fetch.dispatch(&mut self.session, pending);
		true
	}

	/// Apply every completion the worker has reported so far.
	pub(crate) fn pump_fetch_results(&mut self) {
		while let Some(completion) = self.fetch.worker.try_recv() {
			let replaced =
				completion.pending.placement == Placement::Replace && completion.outcome.is_ok();
			if !self.session.complete(completion.pending, completion.outcome) {
				continue;
			}
			let len = self.session.state().results().len();
			if replaced {
				self.results.reset(len);
			} else {
				self.results.ensure_selection(len);
			}
		}
	}
}
