//! Display-ready representation of catalog records.

use serde::Serialize;

use crate::endpoint::RawDoc;

/// Public site that hosts the detail page for every record.
pub const DEFAULT_SITE_URL: &str = "https://openlibrary.org";
/// Host serving cover thumbnails by numeric cover id.
pub const DEFAULT_COVERS_URL: &str = "https://covers.openlibrary.org";
/// Image shown for records without a cover.
pub const DEFAULT_PLACEHOLDER_URL: &str = "https://via.placeholder.com/128x200?text=No+Image";

const NO_TITLE: &str = "No title";
const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Base URLs used to derive cover and detail links for a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
	pub site: String,
	pub covers: String,
	pub placeholder: String,
}

impl Default for Links {
	fn default() -> Self {
		Self {
			site: DEFAULT_SITE_URL.to_string(),
			covers: DEFAULT_COVERS_URL.to_string(),
			placeholder: DEFAULT_PLACEHOLDER_URL.to_string(),
		}
	}
}

impl Links {
	/// Medium sized cover image for `cover_id`.
	#[must_use]
	pub fn cover(&self, cover_id: i64) -> String {
		format!("{}/b/id/{cover_id}-M.jpg", self.covers.trim_end_matches('/'))
	}

	/// Detail page for a record key such as `/works/OL1W`.
	#[must_use]
	pub fn detail(&self, key: &str) -> String {
		format!("{}{key}", self.site.trim_end_matches('/'))
	}
}

/// One search result, normalized for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
	/// Stable record key reported by the endpoint.
	pub id: String,
	pub title: String,
	/// Author names joined with `", "`.
	pub author_display: String,
	pub first_publish_year: Option<i32>,
	pub thumbnail_url: String,
	pub detail_url: String,
}

impl BookSummary {
	/// Reshape a raw endpoint record, filling defaults for missing fields.
	#[must_use]
	pub fn from_doc(doc: RawDoc, links: &Links) -> Self {
		let title = doc
			.title
			.filter(|title| !title.trim().is_empty())
			.unwrap_or_else(|| NO_TITLE.to_string());
		let author_display = doc
			.author_name
			.filter(|names| !names.is_empty())
			.map(|names| names.join(", "))
			.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
		let thumbnail_url = doc
			.cover_i
			.filter(|id| *id != 0)
			.map(|cover| links.cover(cover))
			.unwrap_or_else(|| links.placeholder.clone());
		let detail_url = links.detail(&doc.key);

		Self {
			id: doc.key,
			title,
			author_display,
			first_publish_year: doc.first_publish_year.filter(|year| *year != 0),
			thumbnail_url,
			detail_url,
		}
	}

	/// Caption describing when the work first appeared.
	#[must_use]
	pub fn publication_label(&self) -> String {
		match self.first_publish_year {
			Some(year) => format!("First published: {year}"),
			None => "Publication info not available".to_string(),
		}
	}
}
