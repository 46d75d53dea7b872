use anyhow::Result;
use folio_catalog::{CatalogEndpoint, Links, SearchMode};

use crate::App;
use crate::config::UiLabels;
use crate::outcome::SearchOutcome;
use crate::style::{Theme, by_name};

/// Builder for the interactive book picker.
///
/// ```no_run
/// # use folio_catalog::{CatalogConfig, HttpEndpoint, SearchMode};
/// # fn main() -> anyhow::Result<()> {
/// let endpoint = HttpEndpoint::new(&CatalogConfig::default())?;
/// let outcome = folio_tui::Picker::new(endpoint)
/// 	.with_initial_query("dune")
/// 	.with_mode(SearchMode::Title)
/// 	.run()?;
/// # Ok(())
/// # }
/// ```
pub struct Picker {
	endpoint: Box<dyn CatalogEndpoint>,
	links: Links,
	initial_query: String,
	mode: SearchMode,
	theme: Option<Theme>,
	labels: Option<UiLabels>,
}

impl Picker {
	pub fn new(endpoint: impl CatalogEndpoint + 'static) -> Self {
		Self {
			endpoint: Box::new(endpoint),
			links: Links::default(),
			initial_query: String::new(),
			mode: SearchMode::default(),
			theme: None,
			labels: None,
		}
	}

	/// Base URLs used for cover and detail links.
	#[must_use]
	pub fn with_links(mut self, links: Links) -> Self {
		self.links = links;
		self
	}

	/// Pre-fill the query. A non-blank query is searched immediately.
	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	#[must_use]
	pub fn with_mode(mut self, mode: SearchMode) -> Self {
		self.mode = mode;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Use a registered theme; unknown names keep the default.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	#[must_use]
	pub fn with_ui_labels(mut self, labels: UiLabels) -> Self {
		self.labels = Some(labels);
		self
	}

	/// Assemble the [`App`] without starting the terminal.
	#[must_use]
	pub fn build<'a>(self) -> App<'a> {
		let mut app = App::new(self.endpoint, self.links);
		app.set_mode(self.mode);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(labels) = self.labels {
			app.set_ui_labels(labels);
		}
		if !self.initial_query.trim().is_empty() {
			app.set_query(self.initial_query);
			app.submit_search();
		}
		app
	}

	/// Run the interactive picker until the user accepts or cancels.
	pub fn run(self) -> Result<SearchOutcome> {
		self.build().run()
	}
}
