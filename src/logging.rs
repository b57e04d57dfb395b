//! Diagnostic logging to stderr.
//!
//! Off by default so the terminal UI is never disturbed; enable with
//! `SITESEARCH_LOG=<filter>` or `-v`.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SITESEARCH_LOG";

/// Install the global subscriber. Safe to call more than once.
pub(crate) fn initialize(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"))
	};

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
