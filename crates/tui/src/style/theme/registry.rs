use std::collections::HashMap;
use std::sync::OnceLock;

use super::builtins::{self, BundledThemes};
use super::types::{Theme, ThemeDescriptor};

/// Bundled themes sorted by name, with every name and alias indexed.
#[derive(Debug)]
struct ThemeCatalog {
	themes: Vec<ThemeDescriptor>,
	lookup: HashMap<String, usize>,
	default_theme: Theme,
}

impl ThemeCatalog {
	fn new(bundled: BundledThemes) -> Self {
		let BundledThemes {
			mut themes,
			default_index,
		} = bundled;
		let default_theme = themes[default_index].theme;
		themes.sort_unstable_by_key(|descriptor| descriptor.name.to_ascii_lowercase());

		let mut lookup = HashMap::new();
		// Canonical names win over aliases; the first theme to claim an alias keeps it.
		for (index, descriptor) in themes.iter().enumerate() {
			lookup.insert(lookup_key(&descriptor.name), index);
		}
		for (index, descriptor) in themes.iter().enumerate() {
			for alias in &descriptor.aliases {
				lookup.entry(lookup_key(alias)).or_insert(index);
			}
		}

		Self {
			themes,
			lookup,
			default_theme,
		}
	}

	fn get(&self, name: &str) -> Option<&ThemeDescriptor> {
		self.lookup
			.get(&lookup_key(name))
			.map(|&index| &self.themes[index])
	}
}

fn lookup_key(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

fn catalog() -> &'static ThemeCatalog {
	static CATALOG: OnceLock<ThemeCatalog> = OnceLock::new();
	CATALOG.get_or_init(|| {
		let bundled = builtins::bundled()
			.unwrap_or_else(|error| panic!("bundled themes are invalid: {error:#}"));
		ThemeCatalog::new(bundled)
	})
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	catalog().get(name).map(|descriptor| descriptor.theme)
}

/// Every bundled theme with its aliases, sorted by name.
#[must_use]
pub fn descriptors() -> Vec<ThemeDescriptor> {
	catalog().themes.clone()
}

/// The theme marked `default = true` among the bundled files.
#[must_use]
pub fn default_theme() -> Theme {
	catalog().default_theme
}

#[cfg(test)]
mod tests {
	use ratatui::style::{Color, Style};

	use super::*;

	fn plain(fg: Color) -> Theme {
		let style = Style::new().fg(fg);
		Theme {
			header: style,
			row_highlight: style,
			prompt: style,
			empty: style,
			highlight: style,
			error: style,
		}
	}

	fn descriptor(name: &str, aliases: &[&str], fg: Color) -> ThemeDescriptor {
		ThemeDescriptor {
			name: name.into(),
			aliases: aliases.iter().map(|alias| (*alias).to_owned()).collect(),
			theme: plain(fg),
		}
	}

	#[test]
	fn names_and_aliases_resolve_case_insensitively() {
		assert_eq!(by_name("SLATE"), by_name("slate"));
		assert_eq!(by_name(" dark "), by_name("slate"));
		assert!(by_name("solarized").is_some());
		assert!(by_name("no-such-theme").is_none());
	}

	#[test]
	fn descriptors_are_sorted_and_carry_aliases() {
		let descriptors = descriptors();
		let names: Vec<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();
		assert_eq!(names, vec!["light", "slate", "solarized"]);

		let slate = &descriptors[1];
		assert_eq!(slate.aliases, vec!["default", "dark"]);
		assert_eq!(default_theme(), slate.theme);
	}

	#[test]
	fn canonical_name_beats_another_themes_alias() {
		let catalog = ThemeCatalog::new(BundledThemes {
			themes: vec![
				descriptor("zebra", &["paper", "stripes"], Color::White),
				descriptor("paper", &["stripes"], Color::Black),
			],
			default_index: 0,
		});

		assert_eq!(catalog.get("paper").map(|d| d.name.as_str()), Some("paper"));
		assert_eq!(catalog.get("Stripes").map(|d| d.name.as_str()), Some("paper"));
		assert_eq!(catalog.default_theme, plain(Color::White));
	}
}
