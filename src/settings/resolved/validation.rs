use tracing_subscriber::EnvFilter;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let url = &config.catalog.search_url;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(ConfigError::invalid(
			"catalog.search_url",
			url.as_str(),
			sources.source_for_search_url(),
			"must use http or https",
		));
	}

	if config.catalog.user_agent.trim().is_empty() {
		return Err(ConfigError::invalid(
			"catalog.user_agent",
			config.catalog.user_agent.clone(),
			sources.source_for_user_agent(),
			"must not be empty",
		));
	}

	if let Some(timeout) = config.catalog.timeout
		&& timeout.is_zero()
	{
		return Err(ConfigError::invalid(
			"catalog.timeout_secs",
			"0",
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if config.pages == 0 {
		return Err(ConfigError::invalid(
			"batch.pages",
			"0",
			sources.source_for_pages(),
			"must be at least 1",
		));
	}

	if let Err(err) = EnvFilter::try_new(&config.logging.level) {
		return Err(ConfigError::invalid(
			"logging.level",
			config.logging.level.clone(),
			sources.source_for_log_level(),
			err.to_string(),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use folio_catalog::{CatalogConfig, SearchMode};
	use folio_tui::UiLabels;
	use url::Url;

	use super::super::{LoggingSettings, SettingSource};
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			catalog: CatalogConfig::default(),
			initial_query: String::new(),
			mode: SearchMode::Title,
			theme: None,
			ui: UiLabels::default(),
			pages: 1,
			logging: LoggingSettings {
				level: "info".into(),
				file: None,
			},
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let mut config = config();
		config.catalog.timeout = Some(Duration::ZERO);
		let sources = ConfigSources {
			timeout: Some(SettingSource::CliFlag("--timeout")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "catalog.timeout_secs");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_zero_pages() {
		let mut config = config();
		config.pages = 0;
		let sources = ConfigSources {
			pages: Some(SettingSource::Environment("FOLIO__BATCH__PAGES")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "batch.pages");
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn validation_rejects_non_http_endpoint() {
		let mut config = config();
		config.catalog.search_url = Url::parse("ftp://openlibrary.org/search.json").unwrap();

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "catalog.search_url");
		assert!(err.to_string().contains("configuration key `catalog.search_url`"));
	}

	#[test]
	fn validation_rejects_blank_user_agent() {
		let mut config = config();
		config.catalog.user_agent = "  ".into();

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "catalog.user_agent");
	}

	#[test]
	fn validation_rejects_malformed_log_filter() {
		let mut config = config();
		config.logging.level = "folio=verbose".into();

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "logging.level");
	}
}
