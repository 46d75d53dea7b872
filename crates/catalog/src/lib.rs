//! Search session controller and catalog client for `folio`.
//!
//! [`SearchSession`] owns the state of one interactive search: the submitted
//! query, the accumulated [`BookSummary`] results and the paging cursor. It
//! talks to the outside world only through the [`CatalogEndpoint`] trait, so
//! embedders can drive it synchronously (see [`SearchSession::search`]) or
//! hand the network call to a [`FetchWorker`] and feed the completion back.

pub mod book;
pub mod endpoint;
mod error;
pub mod mode;
pub mod session;
pub mod worker;

#[cfg(test)]
pub(crate) mod testing;

pub use book::{BookSummary, Links};
pub use endpoint::{CatalogConfig, CatalogEndpoint, HttpEndpoint, PageRequest, RawDoc, RawPage};
pub use error::{FetchError, SearchError};
pub use mode::{ParseModeError, SearchMode};
pub use session::{PAGE_SIZE, PendingFetch, Placement, SearchSession, SearchState};
pub use worker::{FetchCommand, FetchCompletion, FetchWorker};
