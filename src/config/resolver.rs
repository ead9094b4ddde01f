use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Config file extensions in priority order (highest first).
pub const CONFIG_EXTENSIONS: [&str; 4] = [".json5", ".json", ".yaml", ".yml"];

/// Resolve a config file from its base name (path without extension).
///
/// Each extension in [`CONFIG_EXTENSIONS`] is appended in turn and the first
/// existing file wins. When none exists the base name is returned unchanged,
/// leaving the caller to report the missing file when it tries to read it.
pub fn resolve_config_file(base: &Path) -> PathBuf {
	for ext in CONFIG_EXTENSIONS {
		let mut candidate = OsString::from(base.as_os_str());
		candidate.push(ext);
		let candidate = PathBuf::from(candidate);

		if candidate.exists() {
			tracing::debug!(file = %candidate.display(), "resolved config file");
			return candidate;
		}
	}

	tracing::debug!(base = %base.display(), "no config file found for base name");
	base.to_path_buf()
}

/// Resolve the file for an environment inside the config directory.
pub fn resolve_env_file(config_dir: &Path, env: &str) -> PathBuf {
	resolve_config_file(&config_dir.join(env))
}
