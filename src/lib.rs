//! config-loader - layered configuration with dotted-path lookups.
//!
//! This library provides the core functionality for config-loader, including:
//! - Resolving and parsing JSON5/JSON and YAML config files
//! - Merging a default file with environment override files
//! - Dotted-path get/set/has over the merged tree
//! - Pre-checking that every key declared by template environments exists
//!
//! # Example
//!
//! ```no_run
//! use config_loader::Config;
//!
//! let config = Config::new(".", "production").load().unwrap();
//! let port: u16 = config.get_as("server.port").unwrap();
//!
//! config.pre_check_from_env(&["_development"]).unwrap();
//! println!("listening on {port}");
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod namespace;

pub use config::{ConfigTree, ConfigValue};
pub use error::{ConfigError, Position, Result};
pub use loader::Config;
pub use namespace::NamespaceStore;
