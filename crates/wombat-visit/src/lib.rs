//! Read-only visitors over the Wombat element tree.
//!
//! [`walk`] owns the recursion: it calls [`Visitor::enter`] before descending
//! into an element's children and [`Visitor::exit`] after, so visitors that
//! track depth need no bookkeeping of their own. All visitors here only read
//! the tree; mutation belongs to `wombat-edit`.

use std::collections::HashMap;

use serde::Serialize;

use wombat_dom::{ElementTree, NodeId};

/// A read-only tree visitor.
pub trait Visitor {
    /// Called for every element, parents before children.
    fn enter(&mut self, tree: &ElementTree, id: NodeId);

    /// Called after an element's subtree has been visited.
    fn exit(&mut self, tree: &ElementTree, id: NodeId) {
        let _ = (tree, id);
    }
}

/// Visit the subtree rooted at `root` in document order.
pub fn walk<V: Visitor + ?Sized>(tree: &ElementTree, root: NodeId, visitor: &mut V) {
    if tree.get(root).is_none() {
        return;
    }
    visitor.enter(tree, root);
    for &child in tree.children(root) {
        walk(tree, child, visitor);
    }
    visitor.exit(tree, root);
}

/// HTML void elements, which must not have children.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Collects structural and accessibility diagnostics.
///
/// Checks: empty tag names, void elements with children, empty attribute
/// names, `img` without `src`/`alt`, `a` without `href`.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<String>,
}

impl Validator {
    /// Create a validator with no recorded diagnostics.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Diagnostics recorded so far, in visit order.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether the visited tree passed every check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Visitor for Validator {
    fn enter(&mut self, tree: &ElementTree, id: NodeId) {
        let Some(node) = tree.get(id) else {
            return;
        };

        if node.tag_name.is_empty() {
            self.errors.push("element has empty tag name".to_string());
            return;
        }

        let tag = node.tag_name.to_ascii_lowercase();
        if VOID_ELEMENTS.contains(&tag.as_str()) && !node.children.is_empty() {
            self.errors
                .push(format!("void element '{}' cannot have children", node.tag_name));
        }

        for (name, _) in &node.attributes {
            if name.is_empty() {
                self.errors.push(format!(
                    "element '{}' has attribute with empty name",
                    node.tag_name
                ));
            }
        }

        match tag.as_str() {
            "img" => {
                if !node.attributes.contains("src") {
                    self.errors.push("img element must have 'src' attribute".to_string());
                }
                if !node.attributes.contains("alt") {
                    self.errors.push(
                        "img element should have 'alt' attribute for accessibility".to_string(),
                    );
                }
            }
            "a" => {
                if !node.attributes.contains("href") {
                    self.errors.push("a element should have 'href' attribute".to_string());
                }
            }
            _ => {}
        }
    }
}

/// Accumulates counts, text length, and maximum nesting depth.
#[derive(Debug, Default)]
pub struct Statistics {
    tag_counts: HashMap<String, usize>,
    total_elements: usize,
    total_text_length: usize,
    max_depth: usize,
    current_depth: usize,
}

/// A finished statistics snapshot, ready for display or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    /// Number of elements visited.
    pub total_elements: usize,
    /// Sum of the `char` lengths of every element's directly-owned text.
    pub total_text_length: usize,
    /// Deepest nesting level encountered (root is depth 1).
    pub max_depth: usize,
    /// Per-tag occurrence counts, most frequent first (name breaks ties).
    pub tag_counts: Vec<(String, usize)>,
}

impl Statistics {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the accumulated numbers.
    #[must_use]
    pub fn report(&self) -> StatsReport {
        let mut tag_counts: Vec<(String, usize)> = self
            .tag_counts
            .iter()
            .map(|(tag, &count)| (tag.clone(), count))
            .collect();
        tag_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        StatsReport {
            total_elements: self.total_elements,
            total_text_length: self.total_text_length,
            max_depth: self.max_depth,
            tag_counts,
        }
    }
}

impl Visitor for Statistics {
    fn enter(&mut self, tree: &ElementTree, id: NodeId) {
        self.current_depth += 1;
        self.max_depth = self.max_depth.max(self.current_depth);

        let Some(node) = tree.get(id) else {
            return;
        };
        self.total_elements += 1;
        *self.tag_counts.entry(node.tag_name.clone()).or_insert(0) += 1;
        self.total_text_length += node.text.chars().count();
    }

    fn exit(&mut self, _tree: &ElementTree, _id: NodeId) {
        self.current_depth -= 1;
    }
}

impl std::fmt::Display for StatsReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "HTML statistics report")?;
        writeln!(f, "Total elements: {}", self.total_elements)?;
        writeln!(f, "Total text length: {}", self.total_text_length)?;
        writeln!(f, "Maximum depth: {}", self.max_depth)?;
        writeln!(f, "Tag counts:")?;
        for (tag, count) in &self.tag_counts {
            writeln!(f, "  {tag}: {count}")?;
        }
        Ok(())
    }
}

/// Collects elements matching a tag and/or attribute criterion.
///
/// Criteria compose with *and* semantics: an element matches when it passes
/// every one that was set. Tag matching is ASCII case-insensitive; attribute
/// names and values compare exactly as written.
#[derive(Debug, Default)]
pub struct Search {
    tag: Option<String>,
    attribute: Option<String>,
    value: Option<String>,
    matches: Vec<NodeId>,
}

impl Search {
    /// Create a search with no criteria (matches every element).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a tag name (ASCII case-insensitive).
    #[must_use]
    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    /// Require an attribute to be present.
    #[must_use]
    pub fn attribute(mut self, name: &str) -> Self {
        self.attribute = Some(name.to_string());
        self
    }

    /// Require the attribute set via [`Self::attribute`] to hold this value.
    #[must_use]
    pub fn value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    /// Ids of matching elements, in document order.
    #[must_use]
    pub fn matches(&self) -> &[NodeId] {
        &self.matches
    }

    /// Consume the search, yielding the matches.
    #[must_use]
    pub fn into_matches(self) -> Vec<NodeId> {
        self.matches
    }
}

impl Visitor for Search {
    fn enter(&mut self, tree: &ElementTree, id: NodeId) {
        let Some(node) = tree.get(id) else {
            return;
        };

        if let Some(tag) = &self.tag
            && !node.tag_name.eq_ignore_ascii_case(tag)
        {
            return;
        }
        if let Some(attribute) = &self.attribute {
            match (&self.value, node.attributes.get(attribute)) {
                (Some(expected), Some(actual)) if expected.as_str() == actual => {}
                (None, Some(_)) => {}
                _ => return,
            }
        }
        self.matches.push(id);
    }
}
