//! The catalog search endpoint: request shape, response shape, and the
//! [`CatalogEndpoint`] seam the session talks through.

mod http;

use serde::{Deserialize, Deserializer};
use url::Url;

pub use http::{CatalogConfig, DEFAULT_SEARCH_URL, DEFAULT_USER_AGENT, HttpEndpoint};

use crate::error::FetchError;
use crate::mode::SearchMode;

/// Anything able to answer a single page request.
///
/// Implementations perform exactly one attempt per call; retries are not part
/// of the contract.
pub trait CatalogEndpoint: Send {
	fn fetch(&self, request: &PageRequest) -> Result<RawPage, FetchError>;
}

impl<E: CatalogEndpoint + ?Sized> CatalogEndpoint for Box<E> {
	fn fetch(&self, request: &PageRequest) -> Result<RawPage, FetchError> {
		(**self).fetch(request)
	}
}

/// Parameters for one page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
	pub mode: SearchMode,
	/// Trimmed query text.
	pub query: String,
	/// One-based page number.
	pub page: u32,
	pub limit: u32,
}

impl PageRequest {
	/// Append the request parameters to `base`, URL-encoding the query.
	#[must_use]
	pub fn to_url(&self, base: &Url) -> Url {
		let mut url = base.clone();
		url.query_pairs_mut()
			.append_pair(self.mode.field(), &self.query)
			.append_pair("page", &self.page.to_string())
			.append_pair("limit", &self.limit.to_string());
		url
	}
}

/// Search response body as returned by the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawPage {
	/// Total number of matches across all pages.
	#[serde(rename = "numFound", default)]
	pub num_found: Option<u64>,
	#[serde(default, deserialize_with = "null_as_empty")]
	pub docs: Vec<RawDoc>,
}

/// One record from the `docs` array. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawDoc {
	#[serde(default)]
	pub key: String,
	pub title: Option<String>,
	pub author_name: Option<Vec<String>>,
	pub first_publish_year: Option<i32>,
	pub cover_i: Option<i64>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<RawDoc>, D::Error>
where
	D: Deserializer<'de>,
{
	Option::<Vec<RawDoc>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
