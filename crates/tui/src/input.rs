//! Single-line query editor built on `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Text input holding the query being typed.
#[derive(Debug, Clone)]
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl Default for QueryInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

impl<'a> QueryInput<'a> {
	/// Create an input pre-filled with `initial`, cursor at the end.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let line: String = initial.into().replace(['\r', '\n'], " ");
		let mut textarea = TextArea::new(vec![line]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Forward a key to the editor. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		self.textarea.input(key)
	}

	/// Apply the prompt style to typed text and keep a visible block cursor.
	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
		self.textarea
			.set_cursor_style(style.add_modifier(Modifier::REVERSED));
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
