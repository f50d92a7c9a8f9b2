//! Resolution of link endpoints to node records.
//!
//! Links leave a parent at the centre of its right side and enter a child at
//! the centre of its left side. Renderers rarely place path endpoints exactly
//! on those anchors, so an exact lookup is tried first and the nearest anchor
//! is taken otherwise.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::trace;

use mapscribe_core::{geometry::EdgePoint, name::NodeName, record::NodeRecord};

/// Which end of a link an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The link's start, matched against right edges.
    Parent,
    /// The link's end, matched against left edges.
    Child,
}

/// Maps link endpoints to the node whose anchor is closest.
///
/// Anchor maps keep first-insertion order; a later node on the same anchor
/// replaces the earlier one in place. Results are memoized per endpoint and
/// role for the lifetime of the matcher.
#[derive(Debug)]
pub struct EndpointMatcher {
    right_edges: IndexMap<EdgePoint, NodeName>,
    left_edges: IndexMap<EdgePoint, NodeName>,
    resolved: HashMap<(EdgePoint, Role), NodeName>,
}

impl EndpointMatcher {
    /// Builds the anchor maps for `nodes`.
    pub fn new(nodes: &[NodeRecord]) -> Self {
        let mut right_edges = IndexMap::with_capacity(nodes.len());
        let mut left_edges = IndexMap::with_capacity(nodes.len());

        for node in nodes {
            right_edges.insert(node.right_edge(), node.name());
            left_edges.insert(node.left_edge(), node.name());
        }

        Self {
            right_edges,
            left_edges,
            resolved: HashMap::new(),
        }
    }

    fn edges(&self, role: Role) -> &IndexMap<EdgePoint, NodeName> {
        match role {
            Role::Parent => &self.right_edges,
            Role::Child => &self.left_edges,
        }
    }

    /// Resolves `point` to a node name for the given `role`.
    ///
    /// Returns `None` only when there are no nodes at all.
    pub fn resolve(&mut self, point: EdgePoint, role: Role) -> Option<NodeName> {
        if let Some(name) = self.resolved.get(&(point, role)) {
            return Some(*name);
        }

        let edges = self.edges(role);
        let name = match edges.get(&point) {
            Some(name) => *name,
            None => {
                let name = nearest(edges, point)?;
                trace!(point:% = point, role:? = role; "Endpoint resolved by nearest anchor");
                name
            }
        };

        self.resolved.insert((point, role), name);
        Some(name)
    }
}

/// Name at the anchor closest to `point`; the earliest anchor wins ties.
fn nearest(edges: &IndexMap<EdgePoint, NodeName>, point: EdgePoint) -> Option<NodeName> {
    let mut best: Option<(f64, NodeName)> = None;

    for (anchor, name) in edges {
        let distance = anchor.distance(point);
        if best.is_none_or(|(min, _)| distance < min) {
            best = Some((distance, *name));
        }
    }

    best.map(|(_, name)| name)
}
