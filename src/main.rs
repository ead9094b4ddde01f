use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use config_loader::Config;
use config_loader::loader::ENV_VAR;

#[derive(Parser)]
#[command(name = "config-loader")]
#[command(
	author,
	version,
	about = "Load layered project configuration and check it for missing keys"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Project root containing the config/ directory
	#[arg(long, global = true, value_name = "DIR", default_value = ".")]
	project_dir: PathBuf,

	/// Comma-separated environments to merge (defaults to $CONFIG_ENV)
	#[arg(long, global = true, value_name = "LIST")]
	env: Option<String>,

	/// Enable verbose logging (sets log level to DEBUG)
	#[arg(short, long, global = true)]
	verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the merged configuration as JSON
	Load,
	/// Check that every key declared by the given environment files is defined
	Check {
		/// Environment files listing the required keys (defaults to _development)
		#[arg(value_name = "ENV")]
		envs: Vec<String>,
	},
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match run(cli) {
		Ok(code) => code,
		Err(e) => die(&format!("{e:#}")),
	}
}

fn init_tracing(verbose: bool) {
	// RUST_LOG, when set, replaces the level chosen here.
	let level = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into());
	let _ = tracing_subscriber::registry()
		.with(fmt::layer().with_writer(std::io::stderr))
		.with(filter)
		.try_init();
}

fn run(cli: Cli) -> Result<ExitCode> {
	let config = load_config(&cli)?;

	match cli.command {
		Commands::Load => handle_load(&config),
		Commands::Check { envs } => Ok(handle_check(&config, &envs)),
	}
}

fn load_config(cli: &Cli) -> Result<Config> {
	let config = match cli.env {
		Some(ref envs) => Config::new(&cli.project_dir, envs),
		None => Config::from_env(&cli.project_dir),
	};

	config.load().with_context(|| {
		format!(
			"Failed to load configuration from {} (environments from --env or {})",
			cli.project_dir.display(),
			ENV_VAR
		)
	})
}

fn handle_load(config: &Config) -> Result<ExitCode> {
	let tree = config.all()?;
	let json = serde_json::to_string_pretty(&tree).context("Failed to serialize configuration")?;
	println!("{json}");
	Ok(ExitCode::SUCCESS)
}

fn handle_check(config: &Config, envs: &[String]) -> ExitCode {
	match config.pre_check_from_env(envs) {
		Ok(paths) => {
			tracing::debug!(count = paths.len(), "all declared keys are defined");
			println!("OK.");
			ExitCode::SUCCESS
		}
		Err(e) => {
			eprintln!("{}", style(e).red().for_stderr());
			ExitCode::FAILURE
		}
	}
}

/// Print a highlighted error banner and fail the process.
fn die(msg: &str) -> ExitCode {
	let rule = "-".repeat(50);
	eprintln!("{rule}");
	eprintln!("{}", style(msg).red().for_stderr());
	eprintln!("{rule}");
	ExitCode::FAILURE
}
