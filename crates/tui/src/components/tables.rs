use folio_catalog::BookSummary;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table, TableState,
};

use crate::components::render_scrollbar;
use crate::components::scrollbar::ScrollMetrics;
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

const HEADERS: [&str; 3] = ["Title", "Author(s)", "First published"];
const YEAR_PLACEHOLDER: &str = "n/a";

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	pub headers: Vec<String>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'a>>,
	/// Optional title for the bordered table.
	pub title: Option<String>,
	/// Shown in place of rows when there are none.
	pub empty_message: Option<&'a str>,
}

impl<'a> TableSpec<'a> {
	/// Title, author and year columns for `books`.
	#[must_use]
	pub fn for_books(books: &'a [BookSummary]) -> Self {
		Self {
			headers: HEADERS.iter().map(ToString::to_string).collect(),
			widths: vec![
				Constraint::Fill(3),
				Constraint::Fill(2),
				Constraint::Length(15),
			],
			rows: books.iter().map(book_row).collect(),
			title: None,
			empty_message: None,
		}
	}
}

fn book_row(book: &BookSummary) -> Row<'_> {
	let year = book
		.first_publish_year
		.map_or_else(|| YEAR_PLACEHOLDER.to_string(), |year| year.to_string());
	Row::new([
		Cell::from(book.title.as_str()),
		Cell::from(book.author_display.as_str()),
		Cell::from(year),
	])
}

/// Render a bordered table with a header separator and scrollbar.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	scrollbar_state: &mut ScrollbarState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());
	if let Some(title) = spec.title.clone() {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);
	render_configured_table(frame, inner, table_state, scrollbar_state, theme, spec);
}

fn render_configured_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	scrollbar_state: &mut ScrollbarState,
	theme: &Theme,
	spec: TableSpec<'_>,
) {
	let header = Row::new(spec.headers.into_iter().map(Cell::from))
		.style(theme.border_style())
		.height(1)
		.bottom_margin(1);

	let visible_rows = usize::from(area.height.saturating_sub(TABLE_HEADER_ROWS));
	let metrics = ScrollMetrics::compute(spec.rows.len(), visible_rows);
	let total_rows = spec.rows.len();

	let table_area = if metrics.needs_scrollbar {
		*scrollbar_state = scrollbar_state
			.content_length(metrics.max_scroll + 1)
			.viewport_content_length(metrics.viewport_len)
			.position(table_state.offset().min(metrics.max_scroll));
		render_scrollbar(frame, area, scrollbar_state, theme)
	} else {
		area
	};

	let table = Table::new(spec.rows, spec.widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, table_state);

	render_header_separator(frame, table_area, theme);

	if total_rows == 0
		&& let Some(message) = spec.empty_message
		&& table_area.height > TABLE_HEADER_ROWS
	{
		let message_area = Rect {
			y: table_area.y + TABLE_HEADER_ROWS,
			height: table_area.height - TABLE_HEADER_ROWS,
			..table_area
		};
		let empty = Paragraph::new(Span::styled(message, theme.empty_style()))
			.alignment(Alignment::Center);
		frame.render_widget(empty, message_area);
	}
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 || area.width <= 2 {
		return;
	}

	let separator = Rect {
		y: area.y + 1,
		height: 1,
		..area
	};
	let line = Line::from(vec![
		Span::raw(" "),
		Span::styled("─".repeat(usize::from(area.width) - 2), theme.border_style()),
		Span::raw(" "),
	]);
	frame.render_widget(Paragraph::new(line), separator);
}
