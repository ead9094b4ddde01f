use std::path::{Path, PathBuf};

/// A single configuration value: null, bool, number, string, sequence or map.
pub type ConfigValue = serde_json::Value;

/// A nested mapping of string keys to values, in file order.
pub type ConfigTree = serde_json::Map<String, ConfigValue>;

/// Label attached to errors raised while reading the default config file.
pub const DEFAULT_LABEL: &str = "default";

/// Text formats a config file may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
	/// `.json5` and `.json`; JSON is parsed as JSON5.
	Json5,
	/// `.yaml` and `.yml`.
	Yaml,
}

impl ConfigFormat {
	/// Pick the format for a file extension (without the leading dot).
	pub fn from_extension(ext: &str) -> Option<Self> {
		match ext {
			"json5" | "json" => Some(Self::Json5),
			"yaml" | "yml" => Some(Self::Yaml),
			_ => None,
		}
	}

	pub fn from_path(path: &Path) -> Option<Self> {
		path.extension()
			.and_then(|ext| ext.to_str())
			.and_then(Self::from_extension)
	}
}

/// A parsed environment file, kept only until it is merged or flattened.
#[derive(Debug, Clone)]
pub struct EnvironmentDescriptor {
	/// The environment name, e.g. `production` or `_development`.
	pub name: String,

	/// The file the tree was read from.
	pub path: PathBuf,

	/// The parsed contents.
	pub tree: ConfigTree,
}
