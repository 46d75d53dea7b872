use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Search endpoint: {}", config.catalog.search_url);
	println!("  Site: {}", config.catalog.links.site);
	println!("  Covers: {}", config.catalog.links.covers);
	println!("  User agent: {}", config.catalog.user_agent);
	match config.catalog.timeout {
		Some(timeout) => println!("  Timeout: {}s", timeout.as_secs()),
		None => println!("  Timeout: none"),
	}
	println!("  Search mode: {}", config.mode);
	if !config.initial_query.is_empty() {
		println!("  Initial query: {}", config.initial_query);
	}
	println!(
		"  UI theme: {}",
		config
			.theme
			.as_deref()
			.unwrap_or("(use the library default)")
	);
	println!("  Batch pages: {}", config.pages);
	println!("  Log level: {}", config.logging.level);
	match &config.logging.file {
		Some(path) => println!("  Log file: {}", path.display()),
		None => println!("  Log file: (data directory)"),
	}
}

#[cfg(test)]
mod tests {
	use folio_catalog::{CatalogConfig, SearchMode};
	use folio_tui::UiLabels;

	use super::super::LoggingSettings;
	use super::*;

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			catalog: CatalogConfig::default(),
			initial_query: "dune".into(),
			mode: SearchMode::Author,
			theme: Some("light".into()),
			ui: UiLabels::default(),
			pages: 2,
			logging: LoggingSettings {
				level: "debug".into(),
				file: None,
			},
		};

		print_summary(&config);
	}
}
