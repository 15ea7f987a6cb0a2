//! Element tree for the Wombat HTML toolkit.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all
//! relationships, providing O(1) access and traversal without borrow checker
//! issues. There is no implicit document node: the arena starts empty and the
//! parser records whichever element becomes the root.
//!
//! Unlike a standards-conformant DOM there are no text or comment nodes;
//! every node is an element carrying its directly-owned text in a field.

pub mod traverse;

pub use traverse::{BreadthFirst, DepthFirst, Order, Traversal};

/// A type-safe index into the element tree.
///
/// `NodeId` provides O(1) access to any node in the tree without borrowing
/// issues. Ids are only meaningful for the arena that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Ordered attribute map for an element.
///
/// Insertion order is preserved and keys are unique, case-sensitive as
/// written in the source markup. Updating an existing key overwrites its
/// value in place, keeping the first-insertion position. Attribute counts on
/// real elements are tiny, so lookup is a linear scan over a `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Create an empty attribute map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or overwrite an attribute.
    ///
    /// An existing key keeps its position in iteration order.
    pub fn set(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((name.to_string(), value.to_string()));
        }
    }

    /// Look up an attribute value.
    ///
    /// Returns `None` when the attribute is absent; an attribute set to the
    /// empty string returns `Some("")`. Callers must distinguish the two.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether an attribute with this exact name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Remove an attribute, returning its former value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    #[must_use]
    pub fn iter(&self) -> AttrIter<'_> {
        AttrIter {
            inner: self.entries.iter(),
        }
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a str, &'a str);
    type IntoIter = AttrIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over attribute `(name, value)` pairs in insertion order.
#[derive(Debug, Clone)]
pub struct AttrIter<'a> {
    inner: std::slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for AttrIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// A single element node in the arena.
///
/// Stores the parent as an index back-reference, so the tree stays acyclic
/// from an ownership point of view: the arena owns every node, children lists
/// own the parent-to-child edges, and `parent` is only a lookup aid.
#[derive(Debug, Clone)]
pub struct ElementNode {
    /// Tag name with the original source casing preserved.
    pub tag_name: String,
    /// Attributes in insertion order.
    pub attributes: Attributes,
    /// Child elements in document order.
    pub children: Vec<NodeId>,
    /// Directly-owned text, not descendant text.
    pub text: String,
    /// Back-reference to the parent, `None` for the root (or a detached node).
    pub parent: Option<NodeId>,
}

/// Arena-based element tree.
///
/// All nodes live in a contiguous `Vec`, indexed by [`NodeId`]. Invariant:
/// the tree is acyclic, every non-root node has exactly one parent, and
/// appears in `parent.children` exactly once.
#[derive(Debug, Clone, Default)]
pub struct ElementTree {
    nodes: Vec<ElementNode>,
}

impl ElementTree {
    /// Create an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocate a new detached node and return its id.
    pub fn alloc(&mut self, tag_name: &str, attributes: Attributes) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ElementNode {
            tag_name: tag_name.to_string(),
            attributes,
            children: Vec::new(),
            text: String::new(),
            parent: None,
        });
        id
    }

    /// Get a node by its id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&ElementNode> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its id.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut ElementNode> {
        self.nodes.get_mut(id.0)
    }

    /// Number of nodes in the arena (attached or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// Sets the child's parent back-reference and preserves insertion order.
    ///
    /// # Panics
    /// Panics if either id is not in this arena.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Insert `child` at `index` within the children of `parent`.
    ///
    /// Used to undo a removal at the child's original position.
    ///
    /// # Panics
    /// Panics if either id is not in this arena or `index` is out of bounds.
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(index, child);
    }

    /// Detach `child` from `parent`, returning its former index.
    ///
    /// Returns `None` (and changes nothing) when `child` is not among the
    /// children of `parent`. The node stays in the arena, merely detached.
    ///
    /// # Panics
    /// Panics if either id is not in this arena.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Option<usize> {
        let index = self.nodes[parent.0]
            .children
            .iter()
            .position(|&c| c == child)?;
        let _ = self.nodes[parent.0].children.remove(index);
        self.nodes[child.0].parent = None;
        Some(index)
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get the children of a node (empty slice for unknown ids).
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Get the tag name of a node, if it exists.
    #[must_use]
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.tag_name.as_str())
    }

    /// Structural equality of two subtrees, possibly across arenas.
    ///
    /// Compares tag names, attributes (order-sensitive), directly-owned text,
    /// and children recursively. Node ids and parent links are irrelevant.
    #[must_use]
    pub fn subtree_eq(&self, a: NodeId, other: &Self, b: NodeId) -> bool {
        let (Some(left), Some(right)) = (self.get(a), other.get(b)) else {
            return false;
        };
        left.tag_name == right.tag_name
            && left.attributes == right.attributes
            && left.text == right.text
            && left.children.len() == right.children.len()
            && left
                .children
                .iter()
                .zip(&right.children)
                .all(|(&ca, &cb)| self.subtree_eq(ca, other, cb))
    }
}
