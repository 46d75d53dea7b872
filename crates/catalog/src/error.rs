use thiserror::Error;

/// Failure reported by a [`CatalogEndpoint`](crate::CatalogEndpoint).
#[derive(Debug, Error)]
pub enum FetchError {
	#[error("failed to build HTTP client: {0}")]
	Client(#[source] reqwest::Error),
	#[error("request to the catalog failed: {0}")]
	Request(#[source] reqwest::Error),
	#[error("catalog responded with HTTP status {status}")]
	Status { status: u16 },
	#[error("failed to decode catalog response: {0}")]
	Decode(#[source] reqwest::Error),
	#[error("fetch worker is no longer running")]
	WorkerUnavailable,
}

/// Outcome categories surfaced to the user after a search operation.
///
/// The `Display` implementation yields the message shown in the status line;
/// transport details are kept for logging only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
	/// Blank or whitespace-only query; no request was made.
	#[error("Please enter a book title or author")]
	EmptyQuery,
	/// Network error or non-success HTTP status.
	#[error("Failed to fetch books. Please try again later.")]
	TransportFailure { detail: String },
	/// The request succeeded but matched nothing.
	#[error("No books found. Try another search.")]
	EmptyResultSet,
}

impl SearchError {
	pub(crate) fn transport(error: &FetchError) -> Self {
		Self::TransportFailure {
			detail: error.to_string(),
		}
	}
}
