use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod catalog;
mod logging;
mod ui;

use catalog::CatalogSection;
use logging::LoggingSection;
use ui::UiSection;

const DEFAULT_PAGES: u32 = 1;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	ui: UiSection,
	logging: LoggingSection,
	batch: BatchSection,
}

/// Headless run settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct BatchSection {
	pages: Option<u32>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.catalog.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
		if let Some(pages) = cli.pages {
			self.batch.pages = Some(pages);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			search_url: detect_source(
				cli.endpoint.is_some(),
				self.catalog.search_url.is_some(),
				"FOLIO__CATALOG__SEARCH_URL",
				"--endpoint",
				"catalog.search_url",
			),
			user_agent: detect_source(
				cli.user_agent.is_some(),
				self.catalog.user_agent.is_some(),
				"FOLIO__CATALOG__USER_AGENT",
				"--user-agent",
				"catalog.user_agent",
			),
			timeout: detect_source(
				cli.timeout_secs.is_some(),
				self.catalog.timeout_secs.is_some(),
				"FOLIO__CATALOG__TIMEOUT_SECS",
				"--timeout",
				"catalog.timeout_secs",
			),
			mode: detect_source(
				cli.mode.is_some(),
				self.ui.mode.is_some(),
				"FOLIO__UI__MODE",
				"--mode",
				"ui.mode",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"FOLIO__UI__THEME",
				"--theme",
				"ui.theme",
			),
			pages: detect_source(
				cli.pages.is_some(),
				self.batch.pages.is_some(),
				"FOLIO__BATCH__PAGES",
				"--pages",
				"batch.pages",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"FOLIO__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let catalog = self.catalog.finalize(&sources)?;
		let ui = self.ui.finalize(&sources)?;
		let logging = self.logging.finalize();

		let config = ResolvedConfig {
			catalog,
			initial_query: ui.initial_query,
			mode: ui.mode,
			theme: ui.theme,
			ui: ui.labels,
			pages: self.batch.pages.unwrap_or(DEFAULT_PAGES),
			logging,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
