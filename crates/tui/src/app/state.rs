//! Core state container for the picker.

use folio_catalog::{BookSummary, CatalogEndpoint, Links, SearchMode, SearchSession, SearchState};
use throbber_widgets_tui::ThrobberState;

use super::FetchRuntime;
use super::results::ResultsState;
use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::outcome::SearchOutcome;
use crate::style::{StyleConfig, Theme};

/// Aggregate state shared across the terminal UI.
///
/// The `App` owns the [`SearchSession`] and feeds it completions from the
/// background worker; everything it draws is read back from the session.
pub struct App<'a> {
	/// Text input widget for the query.
	pub search_input: QueryInput<'a>,
	/// Mode used by the next submitted search.
	pub(crate) mode: SearchMode,
	pub(crate) session: SearchSession,
	pub(crate) fetch: FetchRuntime,
	pub(crate) ui: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) results: ResultsState,
}

impl<'a> App<'a> {
	/// Construct an [`App`] whose fetches run against `endpoint` on a
	/// background thread.
	pub fn new<E>(endpoint: E, links: Links) -> Self
	where
		E: CatalogEndpoint + 'static,
	{
		let mut app = Self {
			search_input: QueryInput::default(),
			mode: SearchMode::default(),
			session: SearchSession::new(links),
			fetch: FetchRuntime::spawn(endpoint),
			ui: UiLabels::default(),
			style: StyleConfig::default(),
			throbber_state: ThrobberState::default(),
			results: ResultsState::default(),
		};
		app.apply_input_style();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
		self.apply_input_style();
	}

	pub fn set_ui_labels(&mut self, labels: UiLabels) {
		self.ui = labels;
	}

	pub fn set_mode(&mut self, mode: SearchMode) {
		self.mode = mode;
	}

	/// Replace the input text, e.g. with a query passed on the command line.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.search_input = QueryInput::new(query);
		self.apply_input_style();
	}

	/// Read-only view of the search session state.
	#[must_use]
	pub fn state(&self) -> &SearchState {
		self.session.state()
	}

	#[must_use]
	pub fn mode(&self) -> SearchMode {
		self.mode
	}

	/// The highlighted book, if any.
	pub(crate) fn current_selection(&self) -> Option<&BookSummary> {
		let index = self.results.selected()?;
		self.session.state().results().get(index)
	}

	pub(crate) fn outcome(&self, accepted: bool) -> SearchOutcome {
		SearchOutcome {
			accepted,
			query: self.search_input.text().to_string(),
			mode: self.mode,
			selection: accepted
				.then(|| self.current_selection().cloned())
				.flatten(),
		}
	}

	fn apply_input_style(&mut self) {
		self.search_input.set_style(self.style.theme.prompt);
	}
}
