use crate::config::types::{ConfigTree, ConfigValue};

/// Separator between segments of a dotted path.
pub const SEPARATOR: char = '.';

/// Split a dotted path into its segments.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
	path.split(SEPARATOR)
}

/// Join a parent path and a key into a dotted path.
pub fn join(parent: &str, key: &str) -> String {
	if parent.is_empty() {
		key.to_string()
	} else {
		format!("{parent}{SEPARATOR}{key}")
	}
}

/// Walk `path` from the root of `tree`.
///
/// Maps are descended by key; sequences by numeric index. Anything else ends
/// the walk with `None`.
pub fn lookup<'a>(tree: &'a ConfigTree, path: &str) -> Option<&'a ConfigValue> {
	let mut parts = segments(path);
	let first = parts.next()?;
	let mut current = tree.get(first)?;

	for segment in parts {
		current = match current {
			ConfigValue::Object(map) => map.get(segment)?,
			ConfigValue::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
			_ => return None,
		};
	}

	Some(current)
}

/// Write `value` at `path`, creating intermediate maps.
///
/// A non-map node found along the way is replaced by an empty map.
pub fn insert(tree: &mut ConfigTree, path: &str, value: ConfigValue) {
	let mut parts: Vec<&str> = segments(path).collect();
	// split always yields at least one segment
	let last = parts.pop().unwrap_or_default();

	let mut current = tree;
	for segment in parts {
		let node = current
			.entry(segment.to_string())
			.or_insert_with(|| ConfigValue::Object(ConfigTree::new()));
		if !node.is_object() {
			*node = ConfigValue::Object(ConfigTree::new());
		}
		current = match node {
			ConfigValue::Object(map) => map,
			_ => unreachable!("node was just replaced by a map"),
		};
	}

	current.insert(last.to_string(), value);
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn tree(value: ConfigValue) -> ConfigTree {
		match value {
			ConfigValue::Object(map) => map,
			_ => panic!("test tree must be an object"),
		}
	}

	#[test]
	fn test_join() {
		assert_eq!(join("", "a"), "a");
		assert_eq!(join("a", "b"), "a.b");
		assert_eq!(join("a.b", "c"), "a.b.c");
	}

	#[test]
	fn test_lookup_nested() {
		let t = tree(json!({ "global": { "a": 1, "inner": { "b": "x" } } }));
		assert_eq!(lookup(&t, "global.a"), Some(&json!(1)));
		assert_eq!(lookup(&t, "global.inner.b"), Some(&json!("x")));
		assert_eq!(lookup(&t, "global.inner"), Some(&json!({ "b": "x" })));
		assert_eq!(lookup(&t, "global.missing"), None);
		assert_eq!(lookup(&t, "global.a.deeper"), None);
	}

	#[test]
	fn test_lookup_into_sequence() {
		let t = tree(json!({ "servers": [{ "host": "a" }, { "host": "b" }] }));
		assert_eq!(lookup(&t, "servers.1.host"), Some(&json!("b")));
		assert_eq!(lookup(&t, "servers.2.host"), None);
		assert_eq!(lookup(&t, "servers.x"), None);
	}

	#[test]
	fn test_insert_creates_intermediates() {
		let mut t = ConfigTree::new();
		insert(&mut t, "a.b.c", json!(1));
		assert_eq!(ConfigValue::Object(t), json!({ "a": { "b": { "c": 1 } } }));
	}

	#[test]
	fn test_insert_replaces_scalar_intermediate() {
		let mut t = tree(json!({ "a": 5 }));
		insert(&mut t, "a.b", json!(true));
		assert_eq!(ConfigValue::Object(t), json!({ "a": { "b": true } }));
	}

	#[test]
	fn test_insert_over_subtree_is_destructive() {
		let mut t = tree(json!({ "a": { "b": 1, "c": 2 } }));
		insert(&mut t, "a", json!("flat"));
		assert_eq!(ConfigValue::Object(t), json!({ "a": "flat" }));
	}
}
