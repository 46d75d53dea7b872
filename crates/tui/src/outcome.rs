use folio_catalog::{BookSummary, SearchMode};

/// How the picker was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
	/// `true` when the user picked a book, `false` when they cancelled.
	pub accepted: bool,
	/// Query text in the input when the picker closed.
	pub query: String,
	pub mode: SearchMode,
	pub selection: Option<BookSummary>,
}
