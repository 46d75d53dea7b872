use folio_catalog::SearchState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::config::UiLabels;
use crate::style::Theme;

/// Argument bundle for the status line.
pub struct StatusContext<'a> {
	pub state: &'a SearchState,
	pub labels: &'a UiLabels,
	pub throbber_state: &'a ThrobberState,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the search progress or outcome on the left and the pagination
/// hint on the right.
pub fn render_status(frame: &mut Frame, status: StatusContext<'_>) {
	let StatusContext {
		state,
		labels,
		throbber_state,
		area,
		theme,
	} = status;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let hint = pagination_hint(state, labels);
	let hint_width = u16::try_from(hint.chars().count()).unwrap_or(u16::MAX);
	let [message_area, hint_area] =
		Layout::horizontal([Constraint::Min(1), Constraint::Length(hint_width)]).areas(area);

	let message = status_line(state, labels, throbber_state, theme);
	frame.render_widget(Paragraph::new(message), message_area);

	if !hint.is_empty() {
		let hint = Paragraph::new(Span::styled(hint, theme.empty_style())).alignment(Alignment::Right);
		frame.render_widget(hint, hint_area);
	}
}

fn status_line<'a>(
	state: &SearchState,
	labels: &'a UiLabels,
	throbber_state: &ThrobberState,
	theme: &Theme,
) -> Line<'a> {
	if state.is_loading() {
		let muted = theme.empty_style();
		let spinner = Throbber::default().style(muted).throbber_style(muted);
		return Line::from(vec![
			spinner.to_symbol_span(throbber_state),
			Span::styled(labels.loading.as_str(), muted),
		]);
	}

	if let Some(message) = state.error_message() {
		return Line::from(Span::styled(message, theme.error));
	}

	if state.total_available() > 0 {
		let summary = labels.showing(state.results().len(), state.total_available());
		return Line::from(Span::styled(summary, theme.empty_style()));
	}

	Line::default()
}

fn pagination_hint<'a>(state: &SearchState, labels: &'a UiLabels) -> &'a str {
	match (state.has_more(), state.is_loading()) {
		(true, true) => &labels.loading_more,
		(true, false) => &labels.load_more_hint,
		(false, _) => "",
	}
}
