use crate::error::{ConfigError, Result};
use crate::loader::{Config, read_environment};
use crate::namespace::leaf_paths;

/// Environment checked when no names are given.
pub const DEFAULT_PRECHECK_ENV: &str = "_development";

impl Config {
	/// Verify the live config defines every key declared by `envs`.
	///
	/// Each environment file is read fresh from the config directory, so the
	/// environments need not be part of the active merge. Its leaf paths are
	/// collected in order (duplicates kept) and each is looked up in the
	/// merged tree. All missing paths are reported together.
	///
	/// With no names, [`DEFAULT_PRECHECK_ENV`] is checked. On success the full
	/// list of checked paths is returned.
	pub fn pre_check_from_env<S: AsRef<str>>(&self, envs: &[S]) -> Result<Vec<String>> {
		let envs: Vec<String> = if envs.is_empty() {
			vec![DEFAULT_PRECHECK_ENV.to_string()]
		} else {
			envs.iter().map(|env| env.as_ref().to_string()).collect()
		};

		let store = self.store()?;

		let mut declared = Vec::new();
		for name in &envs {
			let env = read_environment(&self.config_dir, name)?;
			tracing::debug!(env = %env.name, file = %env.path.display(), "collecting declared keys");
			declared.extend(leaf_paths(&env.tree));
		}

		let missing: Vec<String> = declared
			.iter()
			.filter(|path| !store.has(path))
			.cloned()
			.collect();

		if !missing.is_empty() {
			tracing::warn!(count = missing.len(), "pre-check found missing config keys");
			return Err(ConfigError::MissingConfiguration { envs, missing });
		}

		tracing::debug!(count = declared.len(), "pre-check passed");
		Ok(declared)
	}
}
