use crate::config::types::{ConfigFormat, ConfigTree, ConfigValue};
use crate::error::{ConfigError, Position, Result};
use std::path::Path;

/// Read and parse a config file.
///
/// `label` names the logical source ("default" or an environment name) and
/// is carried into every error so the failing file can be located.
pub fn read_config_file(path: &Path, label: &str) -> Result<ConfigTree> {
	if !path.exists() {
		return Err(ConfigError::FileNotFound {
			label: label.to_string(),
			path: path.to_path_buf(),
		});
	}

	let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
		label: label.to_string(),
		path: path.to_path_buf(),
		source,
	})?;

	let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
		label: label.to_string(),
		path: path.to_path_buf(),
		extension: path
			.extension()
			.map(|ext| ext.to_string_lossy().into_owned())
			.unwrap_or_default(),
	})?;

	tracing::debug!(file = %path.display(), label, ?format, "parsing config file");
	parse_config_str(&content, format, path, label)
}

/// Parse config text in the given format (useful for testing).
pub fn parse_config_str(
	content: &str,
	format: ConfigFormat,
	path: &Path,
	label: &str,
) -> Result<ConfigTree> {
	let parse_error = |message: String, position: Option<Position>| ConfigError::ParseError {
		label: label.to_string(),
		path: path.to_path_buf(),
		message,
		position,
	};

	let value: ConfigValue = match format {
		ConfigFormat::Json5 => json5::from_str(content).map_err(|err| {
			let position = match &err {
				json5::Error::Message {
					location: Some(loc),
					..
				} => Some(Position {
					line: loc.line,
					column: loc.column,
				}),
				_ => None,
			};
			parse_error(err.to_string(), position)
		})?,
		ConfigFormat::Yaml => {
			let mut yaml: serde_yaml::Value = serde_yaml::from_str(content).map_err(|err| {
				let position = err.location().map(|loc| Position {
					line: loc.line(),
					column: loc.column(),
				});
				parse_error(err.to_string(), position)
			})?;
			// resolve `<<: *anchor` merge keys before leaving the YAML model
			yaml.apply_merge()
				.map_err(|err| parse_error(err.to_string(), None))?;
			serde_json::to_value(yaml).map_err(|err| parse_error(err.to_string(), None))?
		}
	};

	match value {
		ConfigValue::Object(tree) => Ok(tree),
		ConfigValue::Null => Ok(ConfigTree::new()),
		_ => Err(parse_error(
			"top-level value must be a mapping".to_string(),
			None,
		)),
	}
}
