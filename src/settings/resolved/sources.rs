use std::fmt;

/// Where a configuration value came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) search_url: Option<SettingSource>,
	pub(crate) user_agent: Option<SettingSource>,
	pub(crate) timeout: Option<SettingSource>,
	pub(crate) mode: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) pages: Option<SettingSource>,
	pub(crate) log_level: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_search_url(&self) -> SettingSource {
		or_key(self.search_url.as_ref(), "catalog.search_url")
	}

	pub(crate) fn source_for_user_agent(&self) -> SettingSource {
		or_key(self.user_agent.as_ref(), "catalog.user_agent")
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		or_key(self.timeout.as_ref(), "catalog.timeout_secs")
	}

	pub(crate) fn source_for_mode(&self) -> SettingSource {
		or_key(self.mode.as_ref(), "ui.mode")
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		or_key(self.theme.as_ref(), "ui.theme")
	}

	pub(crate) fn source_for_pages(&self) -> SettingSource {
		or_key(self.pages.as_ref(), "batch.pages")
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		or_key(self.log_level.as_ref(), "logging.level")
	}
}

fn or_key(source: Option<&SettingSource>, key: &'static str) -> SettingSource {
	source.cloned().unwrap_or(SettingSource::ConfigKey(key))
}
