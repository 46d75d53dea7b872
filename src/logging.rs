//! File-backed `tracing` subscriber.
//!
//! The picker owns the terminal, so events are written to a log file
//! instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;
use crate::settings::LoggingSettings;

const LOG_FILE_NAME: &str = "folio.log";

/// Install the global subscriber and return the file it writes to.
///
/// `RUST_LOG` takes precedence over the configured level.
pub(crate) fn initialize(settings: &LoggingSettings) -> Result<PathBuf> {
	let path = match &settings.file {
		Some(path) => path.clone(),
		None => app_dirs::get_data_dir()?.join(LOG_FILE_NAME),
	};
	let file = open_log_file(&path)?;

	let filter = match EnvFilter::try_from_default_env() {
		Ok(filter) => filter,
		Err(_) => EnvFilter::try_new(&settings.level)
			.with_context(|| format!("invalid log level `{}`", settings.level))?,
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	Ok(path)
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}

	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}
