use ratatui::style::{Color, Style};

/// Styles for each element of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Borders, table headers, and the active mode tab.
	pub header: Style,
	/// The highlighted result row.
	pub row_highlight: Style,
	/// Query text.
	pub prompt: Style,
	/// Placeholders and secondary text.
	pub empty: Style,
	/// Emphasised text such as the selected book title.
	pub highlight: Style,
	/// Status line messages for failed or empty searches.
	pub error: Style,
}

impl Theme {
	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new().fg(self.empty.fg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.bg(self.header.bg.unwrap_or(Color::Reset))
	}

	/// Muted style used for placeholders and hints.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Foreground-only style for borders and separators.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}
}

/// A bundled theme with the alternate names it answers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDescriptor {
	pub name: String,
	pub aliases: Vec<String>,
	pub theme: Theme,
}
