/// Text shown around the picker's widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Placeholder displayed while the query input is empty.
	pub placeholder: String,
	/// Title of the bordered results table.
	pub table_title: String,
	/// Title of the detail card beside the table.
	pub detail_panel_title: String,
	/// Status text while a request is in flight.
	pub loading: String,
	/// Hint shown when another page can be fetched.
	pub load_more_hint: String,
	/// Replaces the hint while the next page is loading.
	pub loading_more: String,
	/// Message rendered inside the table when it has no rows.
	pub empty_table: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			placeholder: "Enter title or author".to_string(),
			table_title: "Open Library".to_string(),
			detail_panel_title: "Book details".to_string(),
			loading: "Searching books...".to_string(),
			load_more_hint: "Ctrl+L load more".to_string(),
			loading_more: "Loading...".to_string(),
			empty_table: "No results".to_string(),
		}
	}
}

impl UiLabels {
	/// Summary line for a settled search, e.g. `Showing 20 of 45 results`.
	#[must_use]
	pub fn showing(&self, shown: usize, total: u64) -> String {
		format!("Showing {shown} of {total} results")
	}
}
