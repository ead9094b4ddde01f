use crate::config::types::{ConfigTree, ConfigValue};
use crate::namespace::path::join;

/// List the dotted path of every leaf in `tree`.
///
/// Traversal is depth-first in each map's key order. Scalars, nulls and
/// sequences are leaves; empty maps contribute nothing.
pub fn leaf_paths(tree: &ConfigTree) -> Vec<String> {
	let mut paths = Vec::new();
	collect_leaves(tree, "", &mut paths);
	paths
}

fn collect_leaves(tree: &ConfigTree, prefix: &str, paths: &mut Vec<String>) {
	for (key, value) in tree {
		let path = join(prefix, key);
		match value {
			ConfigValue::Object(child) => collect_leaves(child, &path, paths),
			_ => paths.push(path),
		}
	}
}
