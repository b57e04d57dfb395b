//! Drive one session: load hits, then replay keys or run the terminal picker.

use anyhow::Result;
use sitesearch_core::{
	AttributeMap, ListboxConfig, NavKey, PickOutcome, RecordingNavigator, ResultList,
	SearchResponse,
};
use tracing::debug;

use crate::cli::{CliArgs, OutputFormat, print_json, print_plain};
use crate::input;

/// Everything a session needs once configuration is resolved.
pub(crate) struct SearchWorkflow {
	config: ListboxConfig,
	response: SearchResponse,
	visible: bool,
}

/// Result of replaying keys without a terminal.
#[derive(Debug)]
pub(crate) struct Replay {
	pub(crate) outcome: PickOutcome,
	pub(crate) markup: String,
}

impl SearchWorkflow {
	pub(crate) fn from_cli(cli: &CliArgs, config: ListboxConfig) -> Result<Self> {
		let mut response = input::read_response(cli.hits.as_deref())?;
		if let Some(query) = &cli.query {
			response.query = query.clone();
		}
		Ok(Self::new(config, response, !cli.hidden))
	}

	pub(crate) fn new(config: ListboxConfig, response: SearchResponse, visible: bool) -> Self {
		Self {
			config,
			response,
			visible,
		}
	}

	/// Run according to the CLI mode and print the result.
	pub(crate) fn run(self, cli: &CliArgs) -> Result<()> {
		if cli.is_headless() {
			let replay = self.replay(&cli.keys);
			if cli.html {
				println!("{}", replay.markup);
				return Ok(());
			}
			return print_outcome(cli.output, &replay.outcome);
		}

		let mut app = sitesearch_tui::App::with_list(self.into_list());
		let outcome = app.run()?;
		print_outcome(cli.output, &outcome)
	}

	/// Feed `keys` through the controller. Replay stops at the first key that
	/// navigates away, since nothing after it would reach the page.
	pub(crate) fn replay(self, keys: &[NavKey]) -> Replay {
		let mut list = self.into_list();
		for &key in keys {
			list.navigate_key(key);
			if list.navigator().last().is_some() {
				debug!(%key, "replay ended by navigation");
				break;
			}
		}

		let markup = list.view().to_string();
		let outcome = match list.navigator().last() {
			Some(url) => PickOutcome::accepted(list.query(), url),
			None => PickOutcome::cancelled(list.query()),
		};
		Replay { outcome, markup }
	}

	fn into_list(self) -> ResultList<RecordingNavigator, AttributeMap> {
		let mut list = ResultList::new(self.config, RecordingNavigator::new(), AttributeMap::new());
		list.apply(self.response);
		list.set_visible(self.visible);
		list
	}
}

fn print_outcome(format: OutputFormat, outcome: &PickOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => print_plain(outcome),
		OutputFormat::Json => print_json(outcome)?,
	}
	Ok(())
}
