use anyhow::Result;
use folio_catalog::SearchError;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::App;
use super::results::PAGE_JUMP;
use crate::outcome::SearchOutcome;

impl App<'_> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Ok(Some(self.outcome(false))),
			KeyCode::Char('c') if ctrl => return Ok(Some(self.outcome(false))),
			KeyCode::Enter => {
				if self.should_search_on_enter() {
					self.submit_search();
				} else if !self.state().is_loading() && self.current_selection().is_some() {
					return Ok(Some(self.outcome(true)));
				}
			}
			KeyCode::Tab | KeyCode::BackTab => {
				self.mode = self.mode.toggle();
				debug!(mode = %self.mode, "search mode switched");
			}
			KeyCode::Char('l') if ctrl => {
				self.request_more();
			}
			KeyCode::Up => self.move_selection(-1),
			KeyCode::Down => self.move_selection(1),
			KeyCode::PageUp => self.move_selection(-(PAGE_JUMP as isize)),
			KeyCode::PageDown => self.move_selection(PAGE_JUMP as isize),
			_ => {
				self.search_input.input(key);
			}
		}
		Ok(None)
	}

	/// Whether Enter should run a search rather than accept the selection.
	///
	/// While a fetch is in flight only a query that differs from the one
	/// being fetched starts a new search. Otherwise a search runs when the
	/// input differs from the last search, that search failed, or there is
	/// nothing to pick.
	fn should_search_on_enter(&self) -> bool {
		let query = self.search_input.text().trim();
		let state = self.state();
		let changed = query != state.query() || self.mode != state.mode();

		if state.is_loading() {
			return changed;
		}

		changed
			|| matches!(state.error(), Some(SearchError::TransportFailure { .. }))
			|| self.current_selection().is_none()
	}

	fn move_selection(&mut self, delta: isize) {
		let len = self.state().results().len();
		self.results.move_by(delta, len);
	}
}
