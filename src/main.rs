mod app_dirs;
mod cli;
mod input;
mod logging;
mod settings;
mod workflow;

use anyhow::Result;
use cli::parse_cli;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbose);

	let config = settings::load(&cli)?;

	if cli.print_config {
		settings::print_summary(&config);
	}

	SearchWorkflow::from_cli(&cli, config)?.run(&cli)
}
