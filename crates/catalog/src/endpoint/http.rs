use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use super::{CatalogEndpoint, PageRequest, RawPage};
use crate::book::Links;
use crate::error::FetchError;

/// Search endpoint of the public Open Library catalog.
pub const DEFAULT_SEARCH_URL: &str = "https://openlibrary.org/search.json";
pub const DEFAULT_USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`HttpEndpoint`] plus the link bases used when
/// shaping results.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
	pub search_url: Url,
	pub user_agent: String,
	/// Whole-request timeout. `None` waits indefinitely.
	pub timeout: Option<Duration>,
	pub links: Links,
}

impl Default for CatalogConfig {
	fn default() -> Self {
		Self {
			search_url: Url::parse(DEFAULT_SEARCH_URL).expect("default search URL is valid"),
			user_agent: DEFAULT_USER_AGENT.to_string(),
			timeout: None,
			links: Links::default(),
		}
	}
}

/// [`CatalogEndpoint`] backed by a blocking HTTP client.
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
	client: Client,
	search_url: Url,
}

impl HttpEndpoint {
	pub fn new(config: &CatalogConfig) -> Result<Self, FetchError> {
		let client = Client::builder()
			.user_agent(config.user_agent.clone())
			.timeout(config.timeout)
			.build()
			.map_err(FetchError::Client)?;

		Ok(Self {
			client,
			search_url: config.search_url.clone(),
		})
	}

	#[must_use]
	pub fn search_url(&self) -> &Url {
		&self.search_url
	}
}

impl CatalogEndpoint for HttpEndpoint {
	fn fetch(&self, request: &PageRequest) -> Result<RawPage, FetchError> {
		let url = request.to_url(&self.search_url);
		debug!(%url, "requesting catalog page");

		let response = self.client.get(url).send().map_err(FetchError::Request)?;
		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status {
				status: status.as_u16(),
			});
		}

		let page: RawPage = response.json().map_err(FetchError::Decode)?;
		debug!(
			docs = page.docs.len(),
			num_found = ?page.num_found,
			"catalog page decoded"
		);
		Ok(page)
	}
}
