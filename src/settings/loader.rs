use anyhow::{Context, Result};
use tracing::debug;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.apply_cli_overrides(cli);
	debug!(?raw, "merged raw configuration");
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::path::Path;

	use clap::Parser;
	use folio_catalog::SearchMode;

	use super::*;

	fn write_config(dir: &Path, contents: &str) -> String {
		let path = dir.join("folio.toml");
		fs::write(&path, contents).expect("write config");
		path.display().to_string()
	}

	#[test]
	fn explicit_config_file_is_loaded() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = write_config(
			dir.path(),
			r#"
				[catalog]
				search_url = "http://127.0.0.1:8080/search.json"
				timeout_secs = 5

				[ui]
				mode = "author"
				initial_query = "le guin"
				load_more_hint = "more"

				[batch]
				pages = 2
			"#,
		);
		let cli = CliArgs::parse_from(["folio", "--no-config", "--config", path.as_str()]);

		let resolved = load(&cli).expect("config loads");

		assert_eq!(
			resolved.catalog.search_url.as_str(),
			"http://127.0.0.1:8080/search.json"
		);
		assert_eq!(resolved.catalog.timeout.map(|t| t.as_secs()), Some(5));
		assert_eq!(resolved.mode, SearchMode::Author);
		assert_eq!(resolved.initial_query, "le guin");
		assert_eq!(resolved.ui.load_more_hint, "more");
		assert_eq!(resolved.pages, 2);
	}

	#[test]
	fn cli_flags_override_config_file() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = write_config(
			dir.path(),
			"[ui]\nmode = \"author\"\n\n[batch]\npages = 2\n",
		);
		let cli = CliArgs::parse_from([
			"folio",
			"--no-config",
			"--config",
			path.as_str(),
			"--mode",
			"title",
			"--pages",
			"4",
		]);

		let resolved = load(&cli).expect("config loads");

		assert_eq!(resolved.mode, SearchMode::Title);
		assert_eq!(resolved.pages, 4);
	}

	#[test]
	fn invalid_file_value_names_its_key() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = write_config(dir.path(), "[batch]\npages = 0\n");
		let cli = CliArgs::parse_from(["folio", "--no-config", "--config", path.as_str()]);

		let err = load(&cli).unwrap_err().to_string();

		assert!(err.contains("batch.pages"));
		assert!(err.contains("configuration key `batch.pages`"));
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempfile::tempdir().expect("tempdir");
		let missing = dir.path().join("absent.toml").display().to_string();
		let cli = CliArgs::parse_from(["folio", "--no-config", "--config", missing.as_str()]);

		assert!(load(&cli).is_err());
	}
}
