//! Vertical scrollbar for the results table.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Scroll extent of a list shown in a fixed-height viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	pub content_length: usize,
	pub viewport_len: usize,
	pub max_scroll: usize,
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Returns empty metrics if either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length);
		Self {
			content_length,
			viewport_len,
			max_scroll: content_length - viewport_len,
			needs_scrollbar: content_length > viewport_len,
		}
	}
}

/// Render a themed scrollbar along the right edge of `area` and return the
/// remaining content area.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	scrollbar_state: &mut ScrollbarState,
	theme: &Theme,
) -> Rect {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(theme.border_style());

	let bar = Rect {
		x: area.x + area.width.saturating_sub(1),
		y: area.y,
		width: area.width.min(1),
		height: area.height,
	};
	frame.render_stateful_widget(scrollbar, bar, scrollbar_state);

	Rect {
		width: area.width.saturating_sub(1),
		..area
	}
}
