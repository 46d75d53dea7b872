//! Selection state for the results table.

use ratatui::widgets::{ScrollbarState, TableState};

pub(crate) const PAGE_JUMP: usize = 10;

#[derive(Debug, Default)]
pub(crate) struct ResultsState {
	pub table_state: TableState,
	pub scrollbar_state: ScrollbarState,
}

impl ResultsState {
	/// Keep the selection inside `0..len`, selecting the first row when
	/// rows appear and clearing it when they vanish.
	pub fn ensure_selection(&mut self, len: usize) {
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			None => self.table_state.select(Some(0)),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	/// Select the first row of a freshly replaced result set.
	pub fn reset(&mut self, len: usize) {
		self.table_state = TableState::default();
		self.ensure_selection(len);
	}

	pub fn move_by(&mut self, delta: isize, len: usize) {
		if len == 0 {
			return;
		}
		let current = self.table_state.selected().unwrap_or(0);
		let target = current.saturating_add_signed(delta).min(len - 1);
		self.table_state.select(Some(target));
	}

	pub fn selected(&self) -> Option<usize> {
		self.table_state.selected()
	}
}
