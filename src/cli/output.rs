use anyhow::Result;
use folio_catalog::BookSummary;
use folio_tui::SearchOutcome;
use folio_tui::style::ThemeDescriptor;
use serde_json::json;

use crate::workflow::BatchReport;

const MISSING_YEAR: &str = "n/a";

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	if !outcome.accepted {
		println!("Search cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(book) => println!("{}", book.detail_url),
		None => println!("No selection"),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"mode": outcome.mode,
		"selection": outcome.selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// One tab separated line per book: detail URL, title, authors, year.
pub(crate) fn format_batch_plain(results: &[BookSummary]) -> String {
	let mut lines = String::new();
	for book in results {
		let year = book
			.first_publish_year
			.map_or_else(|| MISSING_YEAR.to_string(), |year| year.to_string());
		lines.push_str(&format!(
			"{}\t{}\t{}\t{year}\n",
			book.detail_url, book.title, book.author_display
		));
	}
	lines
}

/// Print batch results to stdout and any error message to stderr.
pub(crate) fn print_batch_plain(report: &BatchReport) {
	print!("{}", format_batch_plain(&report.results));
	if let Some(error) = &report.error {
		eprintln!("{error}");
	}
}

pub(crate) fn format_batch_json(report: &BatchReport) -> Result<String> {
	let payload = json!({
		"query": report.query,
		"mode": report.mode,
		"total": report.total,
		"results": report.results,
		"error": report.error.as_ref().map(ToString::to_string),
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_batch_json(report: &BatchReport) -> Result<()> {
	println!("{}", format_batch_json(report)?);
	Ok(())
}

/// One line per theme, aliases in parentheses.
pub(crate) fn format_theme_list(themes: &[ThemeDescriptor]) -> String {
	let mut lines = String::new();
	for theme in themes {
		lines.push_str(&theme.name);
		if !theme.aliases.is_empty() {
			lines.push_str(&format!(" ({})", theme.aliases.join(", ")));
		}
		lines.push('\n');
	}
	lines
}

pub(crate) fn print_themes() {
	print!("{}", format_theme_list(&folio_tui::style::descriptors()));
}
