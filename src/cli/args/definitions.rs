use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{ModeArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `folio` binary.
#[derive(Parser, Debug)]
#[command(
	name = "folio",
	version,
	long_version = long_version(),
	about = "Search the Open Library catalog from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "FOLIO_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Search for this text on start (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 'm',
		long,
		value_enum,
		help = "Match the query against titles or authors (default: title)"
	)]
	pub(crate) mode: Option<ModeArg>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name or alias (default: library theme)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "placeholder",
		value_name = "TEXT",
		help = "Override the empty input placeholder (default: Enter title or author)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long = "detail-title",
		value_name = "TEXT",
		help = "Override the detail panel title (default: Book details)"
	)]
	pub(crate) detail_title: Option<String>,
	#[arg(
		long = "endpoint",
		value_name = "URL",
		help = "Search endpoint to query (default: https://openlibrary.org/search.json)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		long = "user-agent",
		value_name = "TEXT",
		help = "User-Agent header sent with every request (default: folio/<version>)"
	)]
	pub(crate) user_agent: Option<String>,
	#[arg(
		long = "timeout",
		value_name = "SECS",
		help = "Abort requests that take longer than this (default: no timeout)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		short = 'b',
		long = "batch",
		help = "Print results without starting the interactive picker (default: disabled)"
	)]
	pub(crate) batch: bool,
	#[arg(
		long = "pages",
		value_name = "NUM",
		help = "Number of pages to fetch in batch mode (default: 1)"
	)]
	pub(crate) pages: Option<u32>,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter written to the log file when RUST_LOG is unset (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: folio.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
