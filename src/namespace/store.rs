use crate::config::types::{ConfigTree, ConfigValue};
use crate::error::{ConfigError, Result};
use crate::namespace::path::{insert, lookup};

/// A nested key-value store addressed by dotted paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamespaceStore {
	tree: ConfigTree,
}

impl NamespaceStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a store seeded with an existing tree.
	pub fn from_tree(tree: ConfigTree) -> Self {
		Self { tree }
	}

	/// Get the value at `path`, failing with `KeyNotFound` when absent.
	///
	/// A stored `null` counts as defined.
	pub fn get(&self, path: &str) -> Result<&ConfigValue> {
		lookup(&self.tree, path).ok_or_else(|| ConfigError::KeyNotFound {
			path: path.to_string(),
		})
	}

	/// Check whether a value exists at `path`.
	pub fn has(&self, path: &str) -> bool {
		lookup(&self.tree, path).is_some()
	}

	/// Set the value at `path`.
	///
	/// Intermediate maps are created as needed. Whatever currently sits at
	/// `path` (or at a non-map intermediate) is replaced.
	pub fn set(&mut self, path: &str, value: ConfigValue) {
		insert(&mut self.tree, path, value);
	}

	/// Merge `other` into this store; values from `other` win on conflicts.
	pub fn merge(&mut self, other: ConfigTree) {
		merge_trees(&mut self.tree, other);
	}

	/// Owned snapshot of the full tree.
	pub fn all(&self) -> ConfigTree {
		self.tree.clone()
	}

	/// Borrowed view of the full tree.
	pub fn tree(&self) -> &ConfigTree {
		&self.tree
	}
}

/// Recursively merge `incoming` into `target`.
///
/// When both sides hold a map under the same key the maps are merged;
/// otherwise the incoming value replaces the existing one.
pub fn merge_trees(target: &mut ConfigTree, incoming: ConfigTree) {
	for (key, value) in incoming {
		match value {
			ConfigValue::Object(child) => match target.get_mut(&key) {
				Some(ConfigValue::Object(existing)) => merge_trees(existing, child),
				_ => {
					target.insert(key, ConfigValue::Object(child));
				}
			},
			value => {
				target.insert(key, value);
			}
		}
	}
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
	fn test_merge_last_wins_and_keeps_earlier_keys() {
		let mut store = NamespaceStore::from_tree(tree(json!({ "global": { "a": 1, "b": 2 } })));
		store.merge(tree(json!({ "global": { "b": 3, "c": 4 } })));

		assert_eq!(
			ConfigValue::Object(store.all()),
			json!({ "global": { "a": 1, "b": 3, "c": 4 } })
		);
		assert_eq!(store.get("global.b").unwrap(), &json!(3));
	}

	#[test]
	fn test_merge_only_in_either_side() {
		let mut store = NamespaceStore::from_tree(tree(json!({ "only_a": { "x": 1 } })));
		store.merge(tree(json!({ "only_b": { "y": 2 } })));

		assert_eq!(store.get("only_a.x").unwrap(), &json!(1));
		assert_eq!(store.get("only_b.y").unwrap(), &json!(2));
	}

	#[test]
	fn test_merge_scalar_replaces_subtree_and_back() {
		let mut store = NamespaceStore::from_tree(tree(json!({ "a": { "b": 1 }, "c": 1 })));
		store.merge(tree(json!({ "a": "flat", "c": { "d": 2 } })));

		assert_eq!(store.get("a").unwrap(), &json!("flat"));
		assert_eq!(store.get("c.d").unwrap(), &json!(2));
	}

	#[test]
	fn test_merge_sequences_are_replaced_not_concatenated() {
		let mut store = NamespaceStore::from_tree(tree(json!({ "list": [1, 2, 3] })));
		store.merge(tree(json!({ "list": [9] })));

		assert_eq!(store.get("list").unwrap(), &json!([9]));
	}

	#[test]
	fn test_merge_keeps_original_key_order() {
		let mut store = NamespaceStore::from_tree(tree(json!({ "a": 1, "b": 2 })));
		store.merge(tree(json!({ "c": 3, "a": 4 })));

		let keys: Vec<&String> = store.tree().keys().collect();
		assert_eq!(keys, vec!["a", "b", "c"]);
	}

	#[test]
	fn test_set_then_get() {
		let mut store = NamespaceStore::new();
		store.set("db.primary.host", json!("localhost"));
		store.set("db.primary.port", json!(5432));

		assert_eq!(store.get("db.primary.host").unwrap(), &json!("localhost"));
		assert_eq!(store.get("db.primary.port").unwrap(), &json!(5432));
		assert!(store.has("db.primary"));
	}

	#[test]
	fn test_null_is_defined() {
		let mut store = NamespaceStore::new();
		store.set("a", ConfigValue::Null);

		assert!(store.has("a"));
		assert_eq!(store.get("a").unwrap(), &ConfigValue::Null);
	}

	#[test]
	fn test_missing_key_not_found() {
		let store = NamespaceStore::from_tree(tree(json!({ "global": { "a": 1 } })));

		for path in ["global.x", "nope", "global.a.b", ""] {
			assert!(!store.has(path));
			match store.get(path).unwrap_err() {
				ConfigError::KeyNotFound { path: p } => assert_eq!(p, path),
				other => panic!("Expected KeyNotFound, got {other:?}"),
			}
		}
	}

	#[test]
	fn test_all_is_a_snapshot() {
		let mut store = NamespaceStore::from_tree(tree(json!({ "a": 1 })));
		let mut snapshot = store.all();
		snapshot.insert("b".to_string(), json!(2));
		store.set("a", json!(3));

		assert!(!store.has("b"));
		assert_eq!(snapshot["a"], json!(1));
	}
}
