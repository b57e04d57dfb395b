use std::fmt::Write;
use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{ArgAction, ColorChoice, Parser, ValueEnum};
use sitesearch_core::NavKey;

use crate::app_dirs;

/// Output formats for the pick outcome.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Command-line arguments accepted by the `sitesearch` binary.
#[derive(Parser, Debug)]
#[command(
	name = "sitesearch",
	version,
	long_version = long_version(),
	about = "Browse search hits in an accessible, keyboard-driven dropdown",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "HITS",
		help = "JSON file with hits or a search response; '-' reads stdin (default: stdin)"
	)]
	pub(crate) hits: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SITESEARCH_CONFIG",
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
		long,
		value_name = "QUERY",
		help = "Override the query text (default: taken from the response)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 'k',
		long,
		value_name = "KEYS",
		value_delimiter = ',',
		help = "Replay navigation keys without a terminal, e.g. ArrowDown,ArrowDown,Enter"
	)]
	pub(crate) keys: Vec<NavKey>,
	#[arg(long, help = "Print the rendered listbox markup instead of picking")]
	pub(crate) html: bool,
	#[arg(long, help = "Render with the dropdown closed (default: open)")]
	pub(crate) hidden: bool,
	#[arg(
		long = "id-prefix",
		value_name = "PREFIX",
		help = "Override the element id prefix (default: search-results)"
	)]
	pub(crate) id_prefix: Option<String>,
	#[arg(
		long = "site-bias",
		value_name = "TEXT",
		help = "Override the text prepended to fallback web searches (default: web.dev)"
	)]
	pub(crate) site_bias: Option<String>,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how the outcome is printed"
	)]
	pub(crate) output: OutputFormat,
	#[arg(long = "print-config", help = "Print the resolved configuration before running")]
	pub(crate) print_config: bool,
	#[arg(short, long, help = "Log debug output to stderr")]
	pub(crate) verbose: bool,
}

impl CliArgs {
	/// Whether the run replays keys instead of opening the terminal UI.
	pub(crate) fn is_headless(&self) -> bool {
		self.html || !self.keys.is_empty()
	}
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("sitesearch {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}
