//! Config file discovery and parsing.
//!
//! This module handles:
//! - Resolving a base name to the highest-priority existing file
//! - Parsing JSON5/JSON and YAML files into a [`ConfigTree`]
//! - Normalizing parser failures into [`crate::ConfigError`]

pub mod parser;
pub mod resolver;
pub mod types;

pub use parser::{parse_config_str, read_config_file};
pub use resolver::{CONFIG_EXTENSIONS, resolve_config_file, resolve_env_file};
pub use types::{ConfigFormat, ConfigTree, ConfigValue, DEFAULT_LABEL, EnvironmentDescriptor};
