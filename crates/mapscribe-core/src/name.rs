//! Node names interned per extraction pass.
//!
//! A node's label is its identity: two boxes carrying the same label are the
//! same node as far as tree assembly is concerned. [`NameTable`] interns labels
//! into copyable [`NodeName`] symbols so that the matcher, tree and outline can
//! pass names around without cloning strings.
//!
//! Unlike a process-wide interner, a [`NameTable`] is owned by a single
//! extraction, so nothing survives between exports.

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Interned node label.
///
/// Only meaningful together with the [`NameTable`] that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeName(DefaultSymbol);

/// Interner mapping node labels to [`NodeName`] symbols.
///
/// # Examples
///
/// ```
/// use mapscribe_core::name::NameTable;
///
/// let mut names = NameTable::new();
/// let root = names.intern("Root");
/// assert_eq!(names.intern("Root"), root);
/// assert_eq!(names.resolve(root), "Root");
/// assert_eq!(names.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct NameTable {
    interner: DefaultStringInterner,
}

impl NameTable {
    /// Creates an empty name table.
    pub fn new() -> Self {
        Self {
            interner: DefaultStringInterner::new(),
        }
    }

    /// Interns `label`, returning the existing symbol if it was seen before.
    pub fn intern(&mut self, label: &str) -> NodeName {
        NodeName(self.interner.get_or_intern(label))
    }

    /// Looks up `label` without interning it.
    pub fn get(&self, label: &str) -> Option<NodeName> {
        self.interner.get(label).map(NodeName)
    }

    /// Returns the label for `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` was produced by a different table.
    pub fn resolve(&self, name: NodeName) -> &str {
        self.interner
            .resolve(name.0)
            .expect("Node name should belong to this table")
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.interner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interner.is_empty()
    }
}

impl Default for NameTable {
    fn default() -> Self {
        Self::new()
    }
}
