use super::PAGE_SIZE;
use crate::book::BookSummary;
use crate::error::SearchError;
use crate::mode::SearchMode;

/// Snapshot of everything the presentation layer reads.
///
/// Only [`SearchSession`](super::SearchSession) mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
	pub(super) query: String,
	pub(super) mode: SearchMode,
	pub(super) results: Vec<BookSummary>,
	pub(super) total_available: u64,
	pub(super) current_page: u32,
	pub(super) is_loading: bool,
	pub(super) error: Option<SearchError>,
}

impl Default for SearchState {
	fn default() -> Self {
		Self {
			query: String::new(),
			mode: SearchMode::default(),
			results: Vec::new(),
			total_available: 0,
			current_page: 1,
			is_loading: false,
			error: None,
		}
	}
}

impl SearchState {
	/// Trimmed query of the most recently started search.
	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn mode(&self) -> SearchMode {
		self.mode
	}

	#[must_use]
	pub fn results(&self) -> &[BookSummary] {
		&self.results
	}

	#[must_use]
	pub fn total_available(&self) -> u64 {
		self.total_available
	}

	#[must_use]
	pub fn current_page(&self) -> u32 {
		self.current_page
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.is_loading
	}

	#[must_use]
	pub fn error(&self) -> Option<&SearchError> {
		self.error.as_ref()
	}

	/// User-facing message for the current error, if any.
	#[must_use]
	pub fn error_message(&self) -> Option<String> {
		self.error.as_ref().map(ToString::to_string)
	}

	/// Whether another page is available past the current one.
	#[must_use]
	pub fn has_more(&self) -> bool {
		u64::from(self.current_page) * u64::from(PAGE_SIZE) < self.total_available
	}
}
