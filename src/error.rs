use std::fmt;
use std::path::PathBuf;

/// A 1-based line/column location inside a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
	pub line: usize,
	pub column: usize,
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "line {}, column {}", self.line, self.column)
	}
}

/// Library-level structured errors for the config loader.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("{label} config file not found: {}", .path.display())]
	FileNotFound { label: String, path: PathBuf },

	#[error("Failed to read {label} config file: {}", .path.display())]
	ReadError {
		label: String,
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Unsupported format {extension:?} for {label} config file: {}", .path.display())]
	UnsupportedFormat {
		label: String,
		path: PathBuf,
		extension: String,
	},

	#[error(
		"{label} config file {} is malformed{}: {message}",
		.path.display(),
		format_position(.position)
	)]
	ParseError {
		label: String,
		path: PathBuf,
		message: String,
		position: Option<Position>,
	},

	#[error("No environment specified; set {var}=<name>[,<name>...]")]
	NoEnvironmentSpecified { var: &'static str },

	#[error("Configuration is not loaded; call Config::load() first")]
	NotLoaded,

	#[error("Config key {path} is not defined")]
	KeyNotFound { path: String },

	#[error("Config key {path} has an unexpected type")]
	InvalidValue {
		path: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("{}", format_missing(.envs, .missing))]
	MissingConfiguration {
		envs: Vec<String>,
		missing: Vec<String>,
	},
}

fn format_position(position: &Option<Position>) -> String {
	match position {
		Some(pos) => format!(" ({pos})"),
		None => String::new(),
	}
}

fn format_missing(envs: &[String], missing: &[String]) -> String {
	let mut msg = format!(
		"Checked against environment(s) {}; the following config keys are missing:\n",
		envs.join(", ")
	);
	for path in missing {
		msg.push_str("\n  ");
		msg.push_str(path);
	}
	msg
}

/// Result type alias using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;
