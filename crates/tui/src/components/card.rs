use folio_catalog::BookSummary;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::style::Theme;

/// Render the detail card for `book`, or an empty bordered panel.
pub fn render_card(
	frame: &mut Frame,
	area: Rect,
	title: &str,
	book: Option<&BookSummary>,
	theme: &Theme,
) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(title.to_string());

	let lines = book.map(|book| card_lines(book, theme)).unwrap_or_default();
	let card = Paragraph::new(lines)
		.block(block)
		.wrap(Wrap { trim: true });
	frame.render_widget(card, area);
}

fn card_lines<'a>(book: &'a BookSummary, theme: &Theme) -> Vec<Line<'a>> {
	let muted = theme.empty_style();
	vec![
		Line::from(Span::styled(book.title.as_str(), theme.highlight)),
		Line::from(vec![
			Span::styled("by ", muted),
			Span::raw(book.author_display.as_str()),
		]),
		Line::from(book.publication_label()),
		Line::default(),
		Line::from(Span::styled("Cover", muted)),
		Line::from(book.thumbnail_url.as_str()),
		Line::from(Span::styled("Open Library", muted)),
		Line::from(book.detail_url.as_str()),
	]
}
