//! Background thread that runs endpoint calls off the UI thread.
//!
//! The worker executes commands one at a time, so at most one request is in
//! flight. Before starting a command it compares the command's generation
//! with the latest one submitted; commands that were superseded while queued
//! are dropped without touching the network.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

use crate::endpoint::{CatalogEndpoint, RawPage};
use crate::error::FetchError;
use crate::session::PendingFetch;

/// Instructions accepted by the worker thread.
#[derive(Debug)]
pub enum FetchCommand {
	Fetch(PendingFetch),
	Shutdown,
}

/// Answer for one executed [`FetchCommand::Fetch`].
#[derive(Debug)]
pub struct FetchCompletion {
	pub pending: PendingFetch,
	pub outcome: Result<RawPage, FetchError>,
}

/// Handle to a running fetch thread.
pub struct FetchWorker {
	commands: Sender<FetchCommand>,
	completions: Receiver<FetchCompletion>,
	latest: Arc<AtomicU64>,
}

impl FetchWorker {
	/// Move `endpoint` onto a new thread and start serving commands.
	pub fn spawn<E>(endpoint: E) -> Self
	where
		E: CatalogEndpoint + 'static,
	{
		let (command_tx, command_rx) = mpsc::channel();
		let (completion_tx, completion_rx) = mpsc::channel();
		let latest = Arc::new(AtomicU64::new(0));
		let thread_latest = Arc::clone(&latest);

		thread::spawn(move || worker_loop(&endpoint, &command_rx, &completion_tx, &thread_latest));

		Self {
			commands: command_tx,
			completions: completion_rx,
			latest,
		}
	}

	/// Queue `pending` for execution.
	///
	/// Hands the fetch back when the worker thread has stopped so the caller
	/// can complete it with [`FetchError::WorkerUnavailable`].
	pub fn submit(&self, pending: PendingFetch) -> Result<(), PendingFetch> {
		self.latest.store(pending.generation, Ordering::Release);
		self.commands
			.send(FetchCommand::Fetch(pending))
			.map_err(|mpsc::SendError(command)| match command {
				FetchCommand::Fetch(pending) => pending,
				FetchCommand::Shutdown => unreachable!("submit only sends fetch commands"),
			})
	}

	/// Next finished fetch, if one is ready.
	pub fn try_recv(&self) -> Option<FetchCompletion> {
		match self.completions.try_recv() {
			Ok(completion) => Some(completion),
			Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
		}
	}

	/// Wait up to `timeout` for the next finished fetch.
	pub fn recv_timeout(&self, timeout: Duration) -> Option<FetchCompletion> {
		match self.completions.recv_timeout(timeout) {
			Ok(completion) => Some(completion),
			Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
		}
	}

	/// Ask the thread to stop once the command in progress finishes.
	pub fn shutdown(&self) {
		let _ = self.commands.send(FetchCommand::Shutdown);
	}
}

impl Drop for FetchWorker {
	fn drop(&mut self) {
		self.shutdown();
	}
}

fn worker_loop<E>(
	endpoint: &E,
	command_rx: &Receiver<FetchCommand>,
	completion_tx: &Sender<FetchCompletion>,
	latest: &AtomicU64,
) where
	E: CatalogEndpoint + ?Sized,
{
	while let Ok(command) = command_rx.recv() {
		if !handle_command(endpoint, completion_tx, latest, command) {
			break;
		}
	}
	debug!("fetch worker stopped");
}

fn handle_command<E>(
	endpoint: &E,
	completion_tx: &Sender<FetchCompletion>,
	latest: &AtomicU64,
	command: FetchCommand,
) -> bool
where
	E: CatalogEndpoint + ?Sized,
{
	match command {
		FetchCommand::Fetch(pending) => {
			if pending.generation < latest.load(Ordering::Acquire) {
				trace!(generation = pending.generation, "skipping superseded fetch");
				return true;
			}
			let outcome = endpoint.fetch(&pending.request);
			completion_tx.send(FetchCompletion { pending, outcome }).is_ok()
		}
		FetchCommand::Shutdown => false,
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use super::*;
	use crate::endpoint::PageRequest;
	use crate::mode::SearchMode;
	use crate::session::{Placement, SearchSession};
	use crate::testing::{ScriptedEndpoint, page_of};

	const WAIT: Duration = Duration::from_secs(5);

	/// Endpoint that announces each request and blocks until released.
	struct GatedEndpoint {
		started: Sender<PageRequest>,
		release: Mutex<Receiver<()>>,
	}

	impl CatalogEndpoint for GatedEndpoint {
		fn fetch(&self, request: &PageRequest) -> Result<RawPage, FetchError> {
			let _ = self.started.send(request.clone());
			let _ = self.release.lock().unwrap().recv();
			Ok(page_of(0, 1, 1))
		}
	}

	fn pending(generation: u64, query: &str) -> PendingFetch {
		PendingFetch {
			generation,
			request: PageRequest {
				mode: SearchMode::Title,
				query: query.into(),
				page: 1,
				limit: 20,
			},
			placement: Placement::Replace,
		}
	}

	#[test]
	fn completes_submitted_fetch() {
		let endpoint = ScriptedEndpoint::new().respond(page_of(0, 20, 45));
		let worker = FetchWorker::spawn(endpoint.clone());
		let mut session = SearchSession::default();

		let fetch = session.begin_search("tolkien", SearchMode::Author).unwrap();
		worker.submit(fetch).unwrap();
		let completion = worker.recv_timeout(WAIT).expect("worker answered");

		assert!(session.complete(completion.pending, completion.outcome));
		assert_eq!(session.state().results().len(), 20);
		assert!(!session.state().is_loading());
		assert_eq!(endpoint.requests().len(), 1);
	}

	#[test]
	fn reports_endpoint_failures() {
		let endpoint = ScriptedEndpoint::new().fail(FetchError::Status { status: 500 });
		let worker = FetchWorker::spawn(endpoint);

		worker.submit(pending(1, "dune")).unwrap();
		let completion = worker.recv_timeout(WAIT).expect("worker answered");

		assert!(matches!(
			completion.outcome,
			Err(FetchError::Status { status: 500 })
		));
	}

	#[test]
	fn skips_fetches_superseded_while_queued() {
		let (started_tx, started_rx) = mpsc::channel();
		let (release_tx, release_rx) = mpsc::channel();
		let worker = FetchWorker::spawn(GatedEndpoint {
			started: started_tx,
			release: Mutex::new(release_rx),
		});

		worker.submit(pending(1, "first")).unwrap();
		assert_eq!(started_rx.recv_timeout(WAIT).unwrap().query, "first");
		worker.submit(pending(2, "second")).unwrap();
		worker.submit(pending(3, "third")).unwrap();
		release_tx.send(()).unwrap();
		release_tx.send(()).unwrap();

		let first = worker.recv_timeout(WAIT).expect("in-flight fetch reported");
		assert_eq!(first.pending.generation, 1);
		let next = worker.recv_timeout(WAIT).expect("latest fetch reported");
		assert_eq!(next.pending.generation, 3);
		assert_eq!(started_rx.recv_timeout(WAIT).unwrap().query, "third");
		assert!(started_rx.try_recv().is_err());
	}

	#[test]
	fn submit_hands_back_fetch_after_shutdown() {
		let worker = FetchWorker::spawn(ScriptedEndpoint::new());
		worker.shutdown();

		let mut returned = None;
		for _ in 0..100 {
			if let Err(fetch) = worker.submit(pending(7, "late")) {
				returned = Some(fetch);
				break;
			}
			thread::sleep(Duration::from_millis(10));
		}

		assert_eq!(returned.map(|fetch| fetch.generation), Some(7));
	}
}
