use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use config::{Config, Environment, File, Map};
use sitesearch_core::ListboxConfig;

use crate::app_dirs;
use crate::cli::CliArgs;

const ENV_PREFIX: &str = "sitesearch";
const ENV_SEPARATOR: &str = "__";

/// Load configuration by combining config files, environment variables and
/// CLI arguments.
pub(crate) fn load(cli: &CliArgs) -> Result<ListboxConfig> {
	load_with_env(cli, None)
}

/// Like [`load`], reading `SITESEARCH__*` variables from `env` instead of the
/// process environment when given.
fn load_with_env(cli: &CliArgs, env: Option<Map<String, String>>) -> Result<ListboxConfig> {
	let mut config: ListboxConfig = layered_sources(cli, env)?
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	apply_cli_overrides(&mut config, cli);
	config.validate().context("invalid configuration")?;
	Ok(config)
}

/// Files first, then `--config` files, then the environment. Later sources win.
fn layered_sources(cli: &CliArgs, env: Option<Map<String, String>>) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	let environment = Environment::with_prefix(ENV_PREFIX)
		.separator(ENV_SEPARATOR)
		.source(env);

	builder
		.add_source(environment)
		.build()
		.context("failed to read configuration sources")
}

/// User config dir first, then the working directory.
fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".sitesearch.toml"));
		files.push(current_dir.join("sitesearch.toml"));
	}

	files
}

fn apply_cli_overrides(config: &mut ListboxConfig, cli: &CliArgs) {
	if let Some(prefix) = &cli.id_prefix {
		config.listbox.id_prefix = prefix.clone();
	}
	if let Some(bias) = &cli.site_bias {
		config.fallback.site_bias = bias.clone();
	}
}

/// Print the effective configuration.
pub(crate) fn print_summary(config: &ListboxConfig) {
	println!("Effective configuration:");
	println!("  Id prefix: {}", config.listbox.id_prefix);
	println!("  Listbox label: {}", config.listbox.label);
	println!("  Fallback engine: {}", config.fallback.engine_url);
	println!("  Fallback parameter: {}", config.fallback.query_param);
	if config.fallback.site_bias.is_empty() {
		println!("  Site bias: (none)");
	} else {
		println!("  Site bias: {}", config.fallback.site_bias);
	}
}
