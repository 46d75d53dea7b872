//! Parses the TOML theme files compiled into the binary.

use anyhow::{Context, Result, bail, ensure};
use include_dir::Dir;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeDescriptor};

/// Every bundled theme in file-name order, and which one is the default.
pub(crate) struct BundledThemes {
	pub(crate) themes: Vec<ThemeDescriptor>,
	pub(crate) default_index: usize,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: Palette,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Palette {
	header: StyleSpec,
	row_highlight: StyleSpec,
	prompt: StyleSpec,
	empty: StyleSpec,
	highlight: StyleSpec,
	error: StyleSpec,
}

impl Palette {
	fn resolve(&self) -> Result<Theme> {
		let slot = |name: &str, spec: &StyleSpec| {
			spec.resolve()
				.with_context(|| format!("styles.{name}"))
		};

		Ok(Theme {
			header: slot("header", &self.header)?,
			row_highlight: slot("row_highlight", &self.row_highlight)?,
			prompt: slot("prompt", &self.prompt)?,
			empty: slot("empty", &self.empty)?,
			highlight: slot("highlight", &self.highlight)?,
			error: slot("error", &self.error)?,
		})
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleSpec {
	fg: Option<String>,
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleSpec {
	fn resolve(&self) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = self.fg.as_deref() {
			style = style.fg(colour(fg).with_context(|| format!("foreground `{fg}`"))?);
		}
		if let Some(bg) = self.bg.as_deref() {
			style = style.bg(colour(bg).with_context(|| format!("background `{bg}`"))?);
		}

		self.modifiers.iter().try_fold(style, |style, name| {
			let flag = modifier(name).with_context(|| format!("unknown modifier `{name}`"))?;
			Ok(style.add_modifier(flag))
		})
	}
}

/// Parses every `*.toml` file in `dir`.
///
/// Exactly one file may set `default = true`; without one the first file
/// in name order is the default.
pub(crate) fn load_bundled(dir: &Dir<'_>) -> Result<BundledThemes> {
	let mut files: Vec<_> = dir
		.files()
		.filter(|file| file.path().extension().is_some_and(|ext| ext == "toml"))
		.collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut themes: Vec<ThemeDescriptor> = Vec::with_capacity(files.len());
	let mut default_index: Option<usize> = None;
	for file in files {
		let path = file.path().display();
		let source = file
			.contents_utf8()
			.with_context(|| format!("{path} is not UTF-8"))?;
		let parsed: ThemeFile =
			toml::from_str(source).with_context(|| format!("cannot parse theme file {path}"))?;
		let theme = parsed
			.styles
			.resolve()
			.with_context(|| format!("invalid style in {path}"))?;

		if parsed.default {
			if let Some(previous) = default_index {
				bail!(
					"`{}` and `{}` are both marked as the default theme",
					themes[previous].name,
					parsed.name
				);
			}
			default_index = Some(themes.len());
		}

		let aliases = parsed
			.aliases
			.into_iter()
			.map(|alias| alias.trim().to_owned())
			.filter(|alias| !alias.is_empty())
			.collect();
		themes.push(ThemeDescriptor {
			name: parsed.name,
			aliases,
			theme,
		});
	}

	ensure!(!themes.is_empty(), "no bundled theme files were found");
	Ok(BundledThemes {
		themes,
		default_index: default_index.unwrap_or(0),
	})
}

/// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `ansi(n)` or a colour name.
fn colour(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(digits) = value.strip_prefix('#') {
		return hex_colour(digits);
	}

	if let Some(args) = call_args(value, "rgb") {
		let channels = args
			.split(',')
			.map(|part| part.trim().parse::<u8>())
			.collect::<Result<Vec<_>, _>>()
			.with_context(|| format!("rgb channels in `{value}` must be 0-255"))?;
		let [r, g, b] = channels[..] else {
			bail!("rgb() takes three channels, got {}", channels.len());
		};
		return Ok(Color::Rgb(r, g, b));
	}

	if let Some(args) = call_args(value, "ansi") {
		return args
			.trim()
			.parse()
			.map(Color::Indexed)
			.with_context(|| format!("`{args}` is not an ANSI palette index"));
	}

	named_colour(&keyword(value)).with_context(|| format!("unknown colour `{value}`"))
}

fn call_args<'a>(value: &'a str, function: &str) -> Option<&'a str> {
	value
		.strip_prefix(function)?
		.strip_prefix('(')?
		.strip_suffix(')')
}

fn hex_colour(digits: &str) -> Result<Color> {
	ensure!(
		digits.is_ascii() && matches!(digits.len(), 3 | 6),
		"`#{digits}` must have 3 or 6 hex digits"
	);
	let width = digits.len() / 3;
	let channel = |index: usize| -> Result<u8> {
		let value = u8::from_str_radix(&digits[index * width..(index + 1) * width], 16)
			.with_context(|| format!("`#{digits}` is not a hex colour"))?;
		// #abc is shorthand for #aabbcc
		Ok(if width == 1 { value * 0x11 } else { value })
	};

	Ok(Color::Rgb(channel(0)?, channel(1)?, channel(2)?))
}

fn named_colour(key: &str) -> Option<Color> {
	let colour = match key {
		"reset" | "default" | "none" => Color::Reset,
		"black" => Color::Black,
		"red" => Color::Red,
		"green" => Color::Green,
		"yellow" => Color::Yellow,
		"blue" => Color::Blue,
		"magenta" => Color::Magenta,
		"cyan" => Color::Cyan,
		"gray" | "grey" => Color::Gray,
		"dark_gray" | "dark_grey" => Color::DarkGray,
		"light_red" => Color::LightRed,
		"light_green" => Color::LightGreen,
		"light_yellow" => Color::LightYellow,
		"light_blue" => Color::LightBlue,
		"light_magenta" => Color::LightMagenta,
		"light_cyan" => Color::LightCyan,
		"white" => Color::White,
		_ => return None,
	};
	Some(colour)
}

fn modifier(name: &str) -> Option<Modifier> {
	let flag = match keyword(name).as_str() {
		"bold" => Modifier::BOLD,
		"dim" => Modifier::DIM,
		"italic" => Modifier::ITALIC,
		"underline" | "underlined" => Modifier::UNDERLINED,
		"reverse" | "reversed" => Modifier::REVERSED,
		"strikethrough" | "crossed_out" => Modifier::CROSSED_OUT,
		_ => return None,
	};
	Some(flag)
}

/// Lowercases and maps `-` and spaces to `_` so `Dark Grey` matches `dark_grey`.
fn keyword(value: &str) -> String {
	value.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

#[cfg(test)]
mod tests {
	use include_dir::{DirEntry, File};

	use super::*;

	const PAPER: &str = r##"
name = "paper"
aliases = [" light ", ""]
default = true

[styles.header]
fg = "black"
[styles.row_highlight]
bg = "#eee"
[styles.prompt]
fg = "blue"
[styles.empty]
fg = "gray"
[styles.highlight]
modifiers = ["bold"]
[styles.error]
fg = "red"
"##;

	#[test]
	fn colour_notations() {
		assert_eq!(colour("#0f172a").unwrap(), Color::Rgb(15, 23, 42));
		assert_eq!(colour("#fff").unwrap(), Color::Rgb(255, 255, 255));
		assert_eq!(colour("rgb(1, 2, 3)").unwrap(), Color::Rgb(1, 2, 3));
		assert_eq!(colour("ansi(244)").unwrap(), Color::Indexed(244));
		assert_eq!(colour("Dark Grey").unwrap(), Color::DarkGray);
		assert_eq!(colour("light-cyan").unwrap(), Color::LightCyan);
	}

	#[test]
	fn malformed_colours_are_rejected() {
		for input in ["#12345", "#gg0000", "rgb(1, 2)", "rgb(1, 2, 300)", "ansi(x)", "chartreuse"] {
			assert!(colour(input).is_err(), "{input} should not parse");
		}
	}

	#[test]
	fn modifiers_accumulate() {
		let spec = StyleSpec {
			fg: Some("yellow".into()),
			modifiers: vec!["Bold".into(), "underline".into()],
			..StyleSpec::default()
		};
		let style = spec.resolve().unwrap();

		assert_eq!(style.fg, Some(Color::Yellow));
		assert!(style.add_modifier.contains(Modifier::BOLD | Modifier::UNDERLINED));
	}

	#[test]
	fn bundled_themes_have_a_single_default() {
		let bundled = load_bundled(&super::super::BUILTIN_THEME_DIR).unwrap();
		let names: Vec<&str> = bundled.themes.iter().map(|theme| theme.name.as_str()).collect();

		assert_eq!(names, vec!["light", "slate", "solarized"]);
		assert_eq!(bundled.default_index, 1);
	}

	#[test]
	fn blank_aliases_are_dropped() {
		const ENTRIES: &[DirEntry<'static>] =
			&[DirEntry::File(File::new("paper.toml", PAPER.as_bytes()))];
		let bundled = load_bundled(&Dir::new("", ENTRIES)).unwrap();

		assert_eq!(bundled.themes[0].aliases, vec!["light"]);
		assert_eq!(bundled.themes[0].theme.row_highlight.bg, Some(Color::Rgb(238, 238, 238)));
	}

	#[test]
	fn second_default_theme_is_an_error() {
		const ENTRIES: &[DirEntry<'static>] = &[
			DirEntry::File(File::new("a.toml", PAPER.as_bytes())),
			DirEntry::File(File::new("b.toml", PAPER.as_bytes())),
		];
		let error = load_bundled(&Dir::new("", ENTRIES)).err().unwrap();

		assert!(error.to_string().contains("both marked as the default"));
	}

	#[test]
	fn every_style_slot_is_required() {
		let source = r##"
name = "partial"

[styles.header]
fg = "#ffffff"
"##;
		assert!(toml::from_str::<ThemeFile>(source).is_err());
	}
}
