use folio_catalog::SearchMode;
use folio_tui::UiLabels;
use folio_tui::style::by_name;
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) initial_query: Option<String>,
	pub(super) mode: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) table_title: Option<String>,
	pub(super) detail_panel_title: Option<String>,
	pub(super) loading: Option<String>,
	pub(super) load_more_hint: Option<String>,
	pub(super) empty_table: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) labels: UiLabels,
	pub(super) initial_query: String,
	pub(super) mode: SearchMode,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(mode) = cli.mode {
			self.mode = Some(mode.as_str().to_string());
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(label) = cli.placeholder.clone() {
			self.placeholder = Some(label);
		}
		if let Some(label) = cli.detail_title.clone() {
			self.detail_panel_title = Some(label);
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<UiResolution, ConfigError> {
		let mode = match self.mode {
			Some(raw) => raw.parse::<SearchMode>().map_err(|err| {
				ConfigError::invalid("ui.mode", raw.clone(), sources.source_for_mode(), err.to_string())
			})?,
			None => SearchMode::default(),
		};

		if let Some(theme) = &self.theme
			&& by_name(theme).is_none()
		{
			return Err(ConfigError::invalid(
				"ui.theme",
				theme.clone(),
				sources.source_for_theme(),
				"unknown theme (see --list-themes)",
			));
		}

		let mut labels = UiLabels::default();
		let overrides = [
			(self.placeholder, &mut labels.placeholder),
			(self.table_title, &mut labels.table_title),
			(self.detail_panel_title, &mut labels.detail_panel_title),
			(self.loading, &mut labels.loading),
			(self.load_more_hint, &mut labels.load_more_hint),
			(self.empty_table, &mut labels.empty_table),
		];
		for (value, target) in overrides {
			if let Some(value) = value {
				*target = value;
			}
		}

		Ok(UiResolution {
			labels,
			initial_query: self.initial_query.unwrap_or_default(),
			mode,
			theme: self.theme,
		})
	}
}
