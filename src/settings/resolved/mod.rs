use std::path::PathBuf;

use folio_catalog::{CatalogConfig, SearchMode};
use folio_tui::UiLabels;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) catalog: CatalogConfig,
	pub(crate) initial_query: String,
	pub(crate) mode: SearchMode,
	/// Theme name or alias; `None` keeps the library default.
	pub(crate) theme: Option<String>,
	pub(crate) ui: UiLabels,
	/// Pages fetched by a batch run.
	pub(crate) pages: u32,
	pub(crate) logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LoggingSettings {
	/// `EnvFilter` directive used when `RUST_LOG` is unset.
	pub(crate) level: String,
	/// Explicit log file; defaults to the data directory.
	pub(crate) file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}
}
