//! Root selection for an inferred tree.

use indexmap::IndexSet;
use log::debug;

use mapscribe_core::{name::NodeName, record::NodeRecord};

use crate::tree::Tree;

/// Picks the root of `tree` among `nodes` (extraction order).
///
/// The root is the first node that never appears as a child. When every node
/// has a parent, the unique names are searched again against the recorded
/// children, and failing that the first extracted node is used. Returns
/// `None` only for an empty extraction.
pub fn resolve_root(nodes: &[NodeRecord], tree: &Tree) -> Option<NodeName> {
    if let Some(root) = nodes
        .iter()
        .map(NodeRecord::name)
        .find(|name| !tree.has_parent(*name))
    {
        debug!(fallback = false; "Root resolved");
        return Some(root);
    }

    let unique: IndexSet<NodeName> = nodes.iter().map(NodeRecord::name).collect();
    let root = unique
        .iter()
        .copied()
        .find(|name| !tree.child_names().contains(name))
        .or_else(|| nodes.first().map(NodeRecord::name));

    debug!(fallback = true, found = root.is_some(); "Root resolved");
    root
}
