/// Environment variable holding the comma-separated list of environments.
pub const ENV_VAR: &str = "CONFIG_ENV";

/// Split a comma-separated environment list, trimming entries and dropping
/// empty ones.
pub fn parse_env_list(value: &str) -> Vec<String> {
	value
		.split(',')
		.map(str::trim)
		.filter(|name| !name.is_empty())
		.map(str::to_string)
		.collect()
}

/// Read the environment list from [`ENV_VAR`]. Unset means no environments.
pub fn envs_from_process() -> Vec<String> {
	match std::env::var(ENV_VAR) {
		Ok(value) => parse_env_list(&value),
		Err(_) => Vec::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_env_list() {
		assert_eq!(parse_env_list("prod"), vec!["prod"]);
		assert_eq!(parse_env_list(" prod , eu ,, "), vec!["prod", "eu"]);
		assert!(parse_env_list("").is_empty());
		assert!(parse_env_list(" , ,").is_empty());
	}

	#[test]
	fn test_parse_env_list_keeps_order_and_duplicates() {
		assert_eq!(parse_env_list("b,a,b"), vec!["b", "a", "b"]);
	}
}
