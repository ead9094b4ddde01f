//! The config façade: load a default file plus environment overrides and
//! answer dotted-path queries against the merged result.

pub mod env;
pub mod precheck;

pub use env::{ENV_VAR, envs_from_process, parse_env_list};
pub use precheck::DEFAULT_PRECHECK_ENV;

use crate::config::types::{ConfigTree, ConfigValue, DEFAULT_LABEL, EnvironmentDescriptor};
use crate::config::{read_config_file, resolve_config_file, resolve_env_file};
use crate::error::{ConfigError, Result};
use crate::namespace::NamespaceStore;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Name of the config directory under the project root.
pub const CONFIG_DIR: &str = "config";

/// Base name of the default config file inside the config directory.
pub const DEFAULT_CONFIG_NAME: &str = "config";

/// Layered configuration for one project.
///
/// Construct with [`Config::new`] or [`Config::from_env`], then call
/// [`Config::load`] once at startup.
#[derive(Debug, Clone)]
pub struct Config {
	project_dir: PathBuf,
	config_dir: PathBuf,
	envs: Vec<String>,
	files: Vec<PathBuf>,
	store: Option<NamespaceStore>,
}

impl Config {
	/// Create an unloaded config for `project_dir` with a comma-separated
	/// environment list.
	pub fn new(project_dir: impl AsRef<Path>, envs: &str) -> Self {
		Self::with_envs(project_dir, parse_env_list(envs))
	}

	/// Create an unloaded config taking its environments from [`ENV_VAR`].
	pub fn from_env(project_dir: impl AsRef<Path>) -> Self {
		Self::with_envs(project_dir, envs_from_process())
	}

	fn with_envs(project_dir: impl AsRef<Path>, envs: Vec<String>) -> Self {
		let project_dir = project_dir.as_ref();
		let project_dir =
			std::path::absolute(project_dir).unwrap_or_else(|_| project_dir.to_path_buf());
		let config_dir = project_dir.join(CONFIG_DIR);

		Config {
			project_dir,
			config_dir,
			envs,
			files: Vec::new(),
			store: None,
		}
	}

	pub fn project_dir(&self) -> &Path {
		&self.project_dir
	}

	pub fn config_dir(&self) -> &Path {
		&self.config_dir
	}

	/// The default config file as currently resolved on disk.
	pub fn default_config_file(&self) -> PathBuf {
		resolve_config_file(&self.config_dir.join(DEFAULT_CONFIG_NAME))
	}

	/// Environment names, in merge order.
	pub fn envs(&self) -> &[String] {
		&self.envs
	}

	/// Files consulted by [`Config::load`], default file first.
	pub fn files(&self) -> &[PathBuf] {
		&self.files
	}

	pub fn is_loaded(&self) -> bool {
		self.store.is_some()
	}

	/// Load the default file and merge every environment file over it.
	pub fn load(mut self) -> Result<Self> {
		if self.envs.is_empty() {
			return Err(ConfigError::NoEnvironmentSpecified { var: ENV_VAR });
		}

		let default_file = self.default_config_file();
		let tree = read_config_file(&default_file, DEFAULT_LABEL)?;
		tracing::info!(file = %default_file.display(), "loaded default config");

		let mut store = NamespaceStore::from_tree(tree);
		let mut files = vec![default_file];

		for name in &self.envs {
			let env = read_environment(&self.config_dir, name)?;
			tracing::info!(env = %env.name, file = %env.path.display(), "merging environment config");
			store.merge(env.tree);
			files.push(env.path);
		}

		self.files = files;
		self.store = Some(store);
		Ok(self)
	}

	fn store(&self) -> Result<&NamespaceStore> {
		self.store.as_ref().ok_or(ConfigError::NotLoaded)
	}

	/// Get the value at `path`.
	pub fn get(&self, path: &str) -> Result<&ConfigValue> {
		self.store()?.get(path)
	}

	/// Get the value at `path` deserialized into `T`.
	pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
		let value = self.get(path)?.clone();
		serde_json::from_value(value).map_err(|source| ConfigError::InvalidValue {
			path: path.to_string(),
			source,
		})
	}

	/// Get the value at `path`, or `default` when it is not defined.
	///
	/// Still fails with `NotLoaded` before [`Config::load`].
	pub fn get_or_default(&self, path: &str, default: ConfigValue) -> Result<ConfigValue> {
		match self.get(path) {
			Ok(value) => Ok(value.clone()),
			Err(ConfigError::KeyNotFound { .. }) => Ok(default),
			Err(e) => Err(e),
		}
	}

	/// Check whether `path` is defined. Always false before loading.
	pub fn has(&self, path: &str) -> bool {
		self.store.as_ref().is_some_and(|store| store.has(path))
	}

	/// Fail unless `path` is defined.
	pub fn check(&self, path: &str) -> Result<()> {
		self.get(path).map(|_| ())
	}

	/// Set the value at `path` in the merged tree.
	pub fn set(&mut self, path: &str, value: ConfigValue) -> Result<()> {
		let store = self.store.as_mut().ok_or(ConfigError::NotLoaded)?;
		store.set(path, value);
		Ok(())
	}

	/// Owned snapshot of the merged tree.
	pub fn all(&self) -> Result<ConfigTree> {
		Ok(self.store()?.all())
	}
}

/// Resolve and parse the file for environment `name`.
pub fn read_environment(config_dir: &Path, name: &str) -> Result<EnvironmentDescriptor> {
	let path = resolve_env_file(config_dir, name);
	let tree = read_config_file(&path, name)?;
	Ok(EnvironmentDescriptor {
		name: name.to_string(),
		path,
		tree,
	})
}
