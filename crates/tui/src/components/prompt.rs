use folio_catalog::SearchMode;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};

use crate::input::QueryInput;
use crate::style::Theme;

const MODE_SEPARATOR: &str = " ";
const PROMPT_SYMBOL: &str = "> ";

/// Argument bundle for rendering the input row.
pub struct InputContext<'a> {
	pub search_input: &'a QueryInput<'a>,
	/// Mode highlighted in the selector.
	pub mode: SearchMode,
	/// Shown in place of the query while it is empty.
	pub placeholder: Option<&'a str>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the mode selector followed by the query editor.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>) {
	let InputContext {
		search_input,
		mode,
		placeholder,
		area,
		theme,
	} = input;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let selector = mode_selector(mode, theme);
	let selector_width = u16::try_from(selector.width()).unwrap_or(u16::MAX);
	let [selector_area, text_area] =
		Layout::horizontal([Constraint::Length(selector_width), Constraint::Min(1)]).areas(area);
	frame.render_widget(selector, selector_area);

	search_input.render_textarea(frame, text_area);
	if search_input.text().is_empty()
		&& let Some(text) = placeholder
	{
		render_placeholder(frame, text_area, text, theme);
	}
}

fn mode_selector(active: SearchMode, theme: &Theme) -> Line<'static> {
	let mut spans = Vec::with_capacity(SearchMode::ALL.len() * 2 + 1);
	for mode in SearchMode::ALL {
		let style = if mode == active {
			theme.tab_highlight_style()
		} else {
			theme.tab_inactive_style()
		};
		spans.push(Span::styled(format!(" {} ", mode.label()), style));
		spans.push(Span::raw(MODE_SEPARATOR));
	}
	spans.push(Span::styled(PROMPT_SYMBOL, theme.prompt));
	Line::from(spans)
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	// Leave the first column to the cursor.
	let start = area.left().saturating_add(1);
	let available = usize::from(area.width.saturating_sub(1));
	let display: String = text.chars().take(available).collect();
	frame.buffer_mut().set_line(
		start,
		area.top(),
		&Line::from(Span::styled(display, theme.empty_style())),
		area.width.saturating_sub(1),
	);
}
