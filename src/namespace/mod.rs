//! Dotted-path namespace over a nested config tree.
//!
//! This module handles:
//! - Dotted-path get/set/has lookups
//! - Deep merging of override trees
//! - Flattening a tree into its leaf paths

pub mod leaf;
pub mod path;
pub mod store;

pub use leaf::leaf_paths;
pub use store::{NamespaceStore, merge_trees};
