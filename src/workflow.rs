use anyhow::{Context, Result, bail};
use folio_catalog::{
	BookSummary, CatalogEndpoint, HttpEndpoint, Links, SearchError, SearchMode, SearchSession,
};
use folio_tui::{Picker, SearchOutcome};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates building and running either the interactive picker or a
/// headless batch search.
pub(crate) struct SearchWorkflow {
	config: ResolvedConfig,
	endpoint: HttpEndpoint,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let endpoint =
			HttpEndpoint::new(&config.catalog).context("failed to prepare the catalog client")?;
		Ok(Self { config, endpoint })
	}

	pub(crate) fn run(self) -> Result<SearchOutcome> {
		let ResolvedConfig {
			catalog,
			initial_query,
			mode,
			theme,
			ui,
			..
		} = self.config;

		let mut picker = Picker::new(self.endpoint)
			.with_links(catalog.links)
			.with_initial_query(initial_query)
			.with_mode(mode)
			.with_ui_labels(ui);
		if let Some(theme) = theme {
			picker = picker.with_theme_name(&theme);
		}

		picker.run()
	}

	pub(crate) fn run_batch(self) -> Result<BatchReport> {
		let query = self.config.initial_query.trim();
		if query.is_empty() {
			bail!("batch mode needs a query (pass --query or set ui.initial_query)");
		}

		Ok(collect_pages(
			&self.endpoint,
			self.config.catalog.links.clone(),
			query,
			self.config.mode,
			self.config.pages,
		))
	}
}

/// Everything a batch run found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BatchReport {
	pub(crate) query: String,
	pub(crate) mode: SearchMode,
	pub(crate) total: u64,
	pub(crate) results: Vec<BookSummary>,
	pub(crate) error: Option<SearchError>,
}

impl BatchReport {
	/// An empty result set is an answer; a transport failure is not.
	pub(crate) fn failed(&self) -> bool {
		matches!(
			self.error,
			Some(SearchError::TransportFailure { .. } | SearchError::EmptyQuery)
		)
	}
}

/// Search for `query` and follow up to `pages - 1` further pages, stopping at
/// the first error or when the catalog has nothing more.
pub(crate) fn collect_pages<E>(
	endpoint: &E,
	links: Links,
	query: &str,
	mode: SearchMode,
	pages: u32,
) -> BatchReport
where
	E: CatalogEndpoint + ?Sized,
{
	let mut session = SearchSession::new(links);
	session.search(query, mode, endpoint);

	let mut fetched = 1;
	while fetched < pages && session.state().error().is_none() && session.load_more(endpoint) {
		fetched += 1;
	}

	let state = session.into_state();
	info!(
		query = state.query(),
		pages = state.current_page(),
		results = state.results().len(),
		total = state.total_available(),
		"batch search finished"
	);

	BatchReport {
		query: query.to_string(),
		mode,
		total: state.total_available(),
		results: state.results().to_vec(),
		error: state.error().cloned(),
	}
}
