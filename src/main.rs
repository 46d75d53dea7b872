mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use cli::{OutputFormat, parse_cli};
use settings::ResolvedConfig;
use tracing::info;
use workflow::{BatchReport, SearchWorkflow};

fn main() -> Result<ExitCode> {
	let cli = parse_cli();

	if cli.list_themes {
		cli::print_themes();
		return Ok(ExitCode::SUCCESS);
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let log_file = logging::initialize(&resolved.logging)?;
	info!(log_file = ?log_file, batch = cli.batch, "folio starting");

	if cli.batch {
		run_batch(cli.output, resolved)
	} else {
		run_interactive(cli.output, resolved)?;
		Ok(ExitCode::SUCCESS)
	}
}

/// Run the picker and print the accepted book in the chosen format.
fn run_interactive(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = SearchWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => cli::print_plain(&outcome),
		OutputFormat::Json => cli::print_json(&outcome)?,
	}

	Ok(())
}

/// Fetch results without a terminal UI and print every book.
fn run_batch(format: OutputFormat, settings: ResolvedConfig) -> Result<ExitCode> {
	let workflow = SearchWorkflow::from_config(settings)?;
	let report = workflow.run_batch()?;

	match format {
		OutputFormat::Plain => cli::print_batch_plain(&report),
		OutputFormat::Json => cli::print_batch_json(&report)?,
	}

	Ok(exit_code_for(&report))
}

fn exit_code_for(report: &BatchReport) -> ExitCode {
	if report.failed() {
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	}
}
