use std::time::Duration;

use folio_catalog::{CatalogConfig, Links};
use serde::Deserialize;
use url::Url;

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

/// Endpoint and link settings prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) search_url: Option<String>,
	pub(super) site_url: Option<String>,
	pub(super) covers_url: Option<String>,
	pub(super) placeholder_url: Option<String>,
	pub(super) user_agent: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

impl CatalogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.endpoint.clone() {
			self.search_url = Some(url);
		}
		if let Some(agent) = cli.user_agent.clone() {
			self.user_agent = Some(agent);
		}
		if let Some(secs) = cli.timeout_secs {
			self.timeout_secs = Some(secs);
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<CatalogConfig, ConfigError> {
		let mut config = CatalogConfig::default();

		if let Some(raw) = self.search_url {
			config.search_url = Url::parse(raw.trim()).map_err(|err| {
				ConfigError::invalid(
					"catalog.search_url",
					raw.clone(),
					sources.source_for_search_url(),
					err.to_string(),
				)
			})?;
		}
		if let Some(agent) = self.user_agent {
			config.user_agent = agent;
		}
		config.timeout = self.timeout_secs.map(Duration::from_secs);

		let defaults = Links::default();
		config.links = Links {
			site: self.site_url.unwrap_or(defaults.site),
			covers: self.covers_url.unwrap_or(defaults.covers),
			placeholder: self.placeholder_url.unwrap_or(defaults.placeholder),
		};

		Ok(config)
	}
}
