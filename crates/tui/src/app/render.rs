use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};

use super::App;
use crate::components::{
	InputContext, StatusContext, TableSpec, render_card, render_input, render_status, render_table,
};

/// Narrowest terminal that shows the detail card next to the table.
pub(crate) const CARD_MIN_WIDTH: u16 = 100;
const CARD_WIDTH: u16 = 44;

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [input_area, status_area, body_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(1),
		])
		.areas(area);

		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				mode: self.mode,
				placeholder: Some(&self.ui.placeholder),
				area: input_area,
				theme: &self.style.theme,
			},
		);
		render_status(
			frame,
			StatusContext {
				state: self.session.state(),
				labels: &self.ui,
				throbber_state: &self.throbber_state,
				area: status_area,
				theme: &self.style.theme,
			},
		);

		if frame.area().width >= CARD_MIN_WIDTH {
			let [table_area, card_area] =
				Layout::horizontal([Constraint::Min(40), Constraint::Length(CARD_WIDTH)])
					.areas(body_area);
			self.render_results(frame, table_area);
			render_card(
				frame,
				card_area,
				&self.ui.detail_panel_title,
				self.current_selection(),
				&self.style.theme,
			);
		} else {
			self.render_results(frame, body_area);
		}
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let mut spec = TableSpec::for_books(self.session.state().results());
		spec.title = Some(self.ui.table_title.clone());
		spec.empty_message = Some(&self.ui.empty_table);

		render_table(
			frame,
			area,
			&mut self.results.table_state,
			&mut self.results.scrollbar_state,
			spec,
			&self.style.theme,
		);
	}
}
