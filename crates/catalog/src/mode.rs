use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which catalog field a query is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
	#[default]
	Title,
	Author,
}

impl SearchMode {
	/// Every mode, in the order they are offered to the user.
	pub const ALL: [SearchMode; 2] = [SearchMode::Title, SearchMode::Author];

	/// Name of the query parameter understood by the search endpoint.
	#[must_use]
	pub fn field(self) -> &'static str {
		match self {
			SearchMode::Title => "title",
			SearchMode::Author => "author",
		}
	}

	/// Human readable label.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			SearchMode::Title => "Title",
			SearchMode::Author => "Author",
		}
	}

	/// Return the other mode.
	#[must_use]
	pub fn toggle(self) -> Self {
		match self {
			SearchMode::Title => SearchMode::Author,
			SearchMode::Author => SearchMode::Title,
		}
	}
}

impl fmt::Display for SearchMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.field())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search mode `{0}` (expected `title` or `author`)")]
pub struct ParseModeError(pub String);

impl FromStr for SearchMode {
	type Err = ParseModeError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"title" => Ok(SearchMode::Title),
			"author" => Ok(SearchMode::Author),
			_ => Err(ParseModeError(value.to_string())),
		}
	}
}
