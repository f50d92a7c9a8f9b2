//! Parent/child structure inferred from link geometry.
//!
//! The tree is an ordered adjacency list plus the set of names that appeared
//! as a child. Nothing prevents a cycle from being recorded; consumers
//! traverse with a visited set.

use indexmap::{IndexMap, IndexSet};
use log::debug;

use mapscribe_core::{name::NodeName, record::LinkEndpoints};

use crate::matcher::{EndpointMatcher, Role};

/// Outcome of offering one (parent, child) pair to a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Accepted,
    /// The pair is already present.
    Duplicate,
    /// Parent and child are the same node.
    SelfLoop,
}

/// Ordered parent to children mapping.
///
/// Parents appear in the order their first child was accepted; children in
/// the order they were accepted.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    children: IndexMap<NodeName, Vec<NodeName>>,
    has_parent: IndexSet<NodeName>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree by resolving every link through `matcher`.
    ///
    /// A link's start is resolved as a parent and its end as a child. Links
    /// with an unresolvable end, self-loops and repeated pairs are dropped.
    pub fn build(links: &[LinkEndpoints], matcher: &mut EndpointMatcher) -> Self {
        let mut tree = Self::new();
        let mut accepted = 0usize;
        let mut duplicates = 0usize;
        let mut self_loops = 0usize;
        let mut unresolved = 0usize;

        for link in links {
            let parent = matcher.resolve(link.start(), Role::Parent);
            let child = matcher.resolve(link.end(), Role::Child);

            let (Some(parent), Some(child)) = (parent, child) else {
                unresolved += 1;
                continue;
            };

            match tree.insert(parent, child) {
                Insertion::Accepted => accepted += 1,
                Insertion::Duplicate => duplicates += 1,
                Insertion::SelfLoop => self_loops += 1,
            }
        }

        debug!(
            links = links.len(),
            accepted,
            duplicates,
            self_loops,
            unresolved;
            "Tree built"
        );

        tree
    }

    /// Records `child` under `parent` unless the pair is a self-loop or
    /// already present.
    pub fn insert(&mut self, parent: NodeName, child: NodeName) -> Insertion {
        if parent == child {
            return Insertion::SelfLoop;
        }

        let children = self.children.entry(parent).or_default();
        if children.contains(&child) {
            return Insertion::Duplicate;
        }

        children.push(child);
        self.has_parent.insert(child);
        Insertion::Accepted
    }

    /// Children of `name` in insertion order; empty for leaves.
    pub fn children(&self, name: NodeName) -> &[NodeName] {
        self.children.get(&name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `name` was recorded as somebody's child.
    pub fn has_parent(&self, name: NodeName) -> bool {
        self.has_parent.contains(&name)
    }

    /// All names recorded as a child, in first-seen order.
    pub fn child_names(&self) -> &IndexSet<NodeName> {
        &self.has_parent
    }

    /// Number of accepted (parent, child) pairs.
    pub fn edge_count(&self) -> usize {
        self.children.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use mapscribe_core::{
        geometry::{EdgePoint, Point, Size},
        name::NameTable,
        record::NodeRecord,
    };

    use super::*;

    fn link(x1: i64, y1: i64, x2: i64, y2: i64) -> LinkEndpoints {
        LinkEndpoints::new(EdgePoint::new(x1, y1), EdgePoint::new(x2, y2))
    }

    #[test]
    fn test_insert_outcomes() {
        let mut names = NameTable::new();
        let (a, b) = (names.intern("A"), names.intern("B"));
        let mut tree = Tree::new();

        assert_eq!(tree.insert(a, b), Insertion::Accepted);
        assert_eq!(tree.insert(a, b), Insertion::Duplicate);
        assert_eq!(tree.insert(a, a), Insertion::SelfLoop);

        assert_eq!(tree.children(a), &[b]);
        assert!(tree.children(b).is_empty());
        assert!(tree.has_parent(b));
        assert!(!tree.has_parent(a));
        assert_eq!(tree.edge_count(), 1);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut names = NameTable::new();
        let [root, x, y, z] = ["R", "X", "Y", "Z"].map(|label| names.intern(label));
        let mut tree = Tree::new();

        tree.insert(root, z);
        tree.insert(root, x);
        tree.insert(root, y);

        assert_eq!(tree.children(root), &[z, x, y]);
        let order: Vec<NodeName> = tree.child_names().iter().copied().collect();
        assert_eq!(order, [z, x, y]);
    }

    #[test]
    fn test_build_from_links() {
        let mut names = NameTable::new();
        let nodes = [
            NodeRecord::new(names.intern("A"), Point::new(0.0, 0.0), Size::new(100.0, 40.0)),
            NodeRecord::new(names.intern("B"), Point::new(200.0, -50.0), Size::new(80.0, 40.0)),
            NodeRecord::new(names.intern("C"), Point::new(200.0, 50.0), Size::new(80.0, 40.0)),
        ];
        let links = [
            link(100, 20, 200, -30),
            link(100, 20, 200, 70),
            // Repeated pair.
            link(100, 20, 200, -30),
            // Both ends closest to A's anchors.
            link(100, 20, 0, 20),
        ];

        let mut matcher = EndpointMatcher::new(&nodes);
        let tree = Tree::build(&links, &mut matcher);

        let a = nodes[0].name();
        assert_eq!(tree.children(a), &[nodes[1].name(), nodes[2].name()]);
        assert!(!tree.has_parent(a));
        assert_eq!(tree.edge_count(), 2);
    }

    #[test]
    fn test_build_without_nodes_is_empty() {
        let mut matcher = EndpointMatcher::new(&[]);
        let tree = Tree::build(&[link(0, 0, 1, 1)], &mut matcher);
        assert!(tree.is_empty());
    }
}
