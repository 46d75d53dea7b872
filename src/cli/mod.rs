mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use output::{print_batch_json, print_batch_plain, print_json, print_plain, print_themes};
