//! The search session controller.
//!
//! A [`SearchSession`] owns the [`SearchState`] of one search and mutates it
//! through two operations: [`search`](SearchSession::search) starts a fresh
//! result set and [`load_more`](SearchSession::load_more) appends the next
//! page. Both are built from a two-phase primitive so the network call can run
//! elsewhere: `begin_*` records the intent and returns a [`PendingFetch`],
//! [`complete`](SearchSession::complete) applies the endpoint's answer.
//!
//! Every `begin_*` call bumps a generation counter. A completion carrying an
//! older generation is discarded, so out-of-order responses from overlapping
//! searches can never overwrite newer results.

mod state;

use tracing::{debug, warn};

pub use state::SearchState;

use crate::book::{BookSummary, Links};
use crate::endpoint::{CatalogEndpoint, PageRequest, RawPage};
use crate::error::{FetchError, SearchError};
use crate::mode::SearchMode;

/// Number of records requested per page.
pub const PAGE_SIZE: u32 = 20;

/// How a fetched page combines with the results already held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
	/// Discard previous results (fresh search).
	Replace,
	/// Concatenate onto previous results (pagination).
	Append,
}

/// A fetch that has been started but not yet applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
	pub generation: u64,
	pub request: PageRequest,
	pub placement: Placement,
}

/// Controller owning all mutable search state.
#[derive(Debug, Default)]
pub struct SearchSession {
	state: SearchState,
	links: Links,
	generation: u64,
}

impl SearchSession {
	#[must_use]
	pub fn new(links: Links) -> Self {
		Self {
			links,
			..Self::default()
		}
	}

	#[must_use]
	pub fn state(&self) -> &SearchState {
		&self.state
	}

	#[must_use]
	pub fn into_state(self) -> SearchState {
		self.state
	}

	/// Generation of the most recently started fetch.
	#[must_use]
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Run a fresh search for `query`, replacing any previous results.
	pub fn search<E>(&mut self, query: &str, mode: SearchMode, endpoint: &E)
	where
		E: CatalogEndpoint + ?Sized,
	{
		if let Some(pending) = self.begin_search(query, mode) {
			self.execute(pending, endpoint);
		}
	}

	/// Fetch the next page and append it. Returns `false` without issuing a
	/// request when there is nothing more to load or a fetch is in flight.
	pub fn load_more<E>(&mut self, endpoint: &E) -> bool
	where
		E: CatalogEndpoint + ?Sized,
	{
		match self.begin_load_more() {
			Some(pending) => {
				self.execute(pending, endpoint);
				true
			}
			None => false,
		}
	}

	/// Validate `query` and start a page-one fetch in replace placement.
	///
	/// Returns `None` after recording [`SearchError::EmptyQuery`] when the
	/// trimmed query is empty; prior results are left untouched.
	pub fn begin_search(&mut self, query: &str, mode: SearchMode) -> Option<PendingFetch> {
		let query = query.trim();
		if query.is_empty() {
			debug!("rejected blank query");
			self.state.error = Some(SearchError::EmptyQuery);
			return None;
		}

		let request = PageRequest {
			mode,
			query: query.to_string(),
			page: 1,
			limit: PAGE_SIZE,
		};
		Some(self.begin(request, Placement::Replace))
	}

	/// Start fetching the page after the current one in append placement.
	pub fn begin_load_more(&mut self) -> Option<PendingFetch> {
		if self.state.is_loading || !self.state.has_more() {
			return None;
		}

		let request = PageRequest {
			mode: self.state.mode,
			query: self.state.query.clone(),
			page: self.state.current_page.saturating_add(1),
			limit: PAGE_SIZE,
		};
		Some(self.begin(request, Placement::Append))
	}

	/// Apply the endpoint's answer for `pending`.
	///
	/// Returns `false` and leaves the state untouched when a newer fetch has
	/// been started since `pending` was issued.
	pub fn complete(&mut self, pending: PendingFetch, outcome: Result<RawPage, FetchError>) -> bool {
		if pending.generation != self.generation {
			debug!(
				generation = pending.generation,
				current = self.generation,
				"discarding stale catalog response"
			);
			return false;
		}

		self.state.is_loading = false;
		match outcome {
			Ok(page) => self.apply_page(pending.placement, page),
			Err(error) => {
				warn!(
					%error,
					query = %pending.request.query,
					page = pending.request.page,
					"catalog fetch failed"
				);
				self.state.error = Some(SearchError::transport(&error));
			}
		}
		true
	}

	fn begin(&mut self, request: PageRequest, placement: Placement) -> PendingFetch {
		self.generation = self.generation.wrapping_add(1);
		self.state.query.clone_from(&request.query);
		self.state.mode = request.mode;
		self.state.current_page = request.page;
		self.state.is_loading = true;
		self.state.error = None;
		debug!(
			generation = self.generation,
			query = %request.query,
			mode = %request.mode,
			page = request.page,
			?placement,
			"starting catalog fetch"
		);

		PendingFetch {
			generation: self.generation,
			request,
			placement,
		}
	}

	fn execute<E>(&mut self, pending: PendingFetch, endpoint: &E)
	where
		E: CatalogEndpoint + ?Sized,
	{
		let outcome = endpoint.fetch(&pending.request);
		self.complete(pending, outcome);
	}

	fn apply_page(&mut self, placement: Placement, page: RawPage) {
		let state = &mut self.state;

		if page.docs.is_empty() {
			if placement == Placement::Replace {
				state.results.clear();
			}
			state.total_available = 0;
			state.error = Some(SearchError::EmptyResultSet);
			return;
		}

		let books: Vec<BookSummary> = page
			.docs
			.into_iter()
			.map(|doc| BookSummary::from_doc(doc, &self.links))
			.collect();
		let total = page
			.num_found
			.filter(|count| *count > 0)
			.unwrap_or(books.len() as u64);

		match placement {
			Placement::Replace => state.results = books,
			Placement::Append => state.results.extend(books),
		}
		state.total_available = total;
		debug!(
			shown = state.results.len(),
			total,
			has_more = state.has_more(),
			"catalog page applied"
		);
	}
}
