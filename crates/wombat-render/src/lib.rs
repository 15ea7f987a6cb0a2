//! Serializers for the Wombat element tree.
//!
//! [`Render`] fixes the tree walk (opening tag, text, children, closing tag)
//! and leaves the formatting decisions — preamble, indentation, tag and text
//! layout — to the implementations. Three are provided: [`Pretty`],
//! [`Minified`], and [`Xml`].
//!
//! Elements with neither children nor text are serialized in self-closed
//! form by the opening-tag hook, and the closing-tag hook is skipped for
//! them.

use wombat_dom::{ElementNode, ElementTree, NodeId};

/// A tree serializer with a fixed walking skeleton and pluggable formatting.
pub trait Render {
    /// Serialize the subtree rooted at `root`.
    fn render(&self, tree: &ElementTree, root: NodeId) -> String {
        let mut out = String::new();
        self.preamble(&mut out);
        self.element(tree, root, 0, &mut out);
        self.postamble(&mut out);
        out
    }

    /// Render one element: opening tag, directly-owned text, children (one
    /// level deeper), and — only when the element has text or children — the
    /// closing tag.
    fn element(&self, tree: &ElementTree, id: NodeId, level: usize, out: &mut String) {
        let Some(node) = tree.get(id) else {
            return;
        };
        self.opening_tag(node, level, out);
        if !node.text.is_empty() {
            self.text(&node.text, level + 1, out);
        }
        for &child in &node.children {
            self.element(tree, child, level + 1, out);
        }
        if !node.children.is_empty() || !node.text.is_empty() {
            self.closing_tag(node, level, out);
        }
    }

    /// Render the attributes as ` name="value"` pairs in stored order.
    fn attributes(&self, node: &ElementNode, out: &mut String) {
        for (name, value) in &node.attributes {
            out.push_str(&format!(" {name}=\"{value}\""));
        }
    }

    /// Written once before the root element.
    fn preamble(&self, out: &mut String);
    /// Written once after the root element.
    fn postamble(&self, out: &mut String);
    /// Indentation for the given nesting level.
    fn indent(&self, level: usize) -> String;
    /// Render an opening tag (self-closed when the element is an empty leaf).
    fn opening_tag(&self, node: &ElementNode, level: usize, out: &mut String);
    /// Render a closing tag.
    fn closing_tag(&self, node: &ElementNode, level: usize, out: &mut String);
    /// Render a text run.
    fn text(&self, text: &str, level: usize, out: &mut String);
}

/// Whether the element renders in self-closed form.
fn is_empty_leaf(node: &ElementNode) -> bool {
    node.children.is_empty() && node.text.is_empty()
}

/// Human-readable serializer: doctype preamble, two-space indentation, one
/// item per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pretty;

impl Render for Pretty {
    fn preamble(&self, out: &mut String) {
        out.push_str("<!DOCTYPE html>\n");
    }

    fn postamble(&self, out: &mut String) {
        out.push('\n');
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }

    fn opening_tag(&self, node: &ElementNode, level: usize, out: &mut String) {
        out.push_str(&self.indent(level));
        out.push('<');
        out.push_str(&node.tag_name);
        self.attributes(node, out);
        if is_empty_leaf(node) {
            out.push_str("/>\n");
        } else {
            out.push_str(">\n");
        }
    }

    fn closing_tag(&self, node: &ElementNode, level: usize, out: &mut String) {
        out.push_str(&self.indent(level));
        out.push_str(&format!("</{}>\n", node.tag_name));
    }

    fn text(&self, text: &str, level: usize, out: &mut String) {
        out.push_str(&self.indent(level));
        out.push_str(text);
        out.push('\n');
    }
}

/// Compact serializer: no preamble, no indentation, no newlines.
///
/// Emits no doctype so that the output re-parses to the same tree — the
/// round-trip fixed point the minified form is meant to satisfy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minified;

impl Render for Minified {
    fn preamble(&self, _out: &mut String) {}

    fn postamble(&self, _out: &mut String) {}

    fn indent(&self, _level: usize) -> String {
        String::new()
    }

    fn opening_tag(&self, node: &ElementNode, _level: usize, out: &mut String) {
        out.push('<');
        out.push_str(&node.tag_name);
        self.attributes(node, out);
        if is_empty_leaf(node) {
            out.push_str("/>");
        } else {
            out.push('>');
        }
    }

    fn closing_tag(&self, node: &ElementNode, _level: usize, out: &mut String) {
        out.push_str(&format!("</{}>", node.tag_name));
    }

    fn text(&self, text: &str, _level: usize, out: &mut String) {
        out.push_str(text.trim());
    }
}

/// XML-style serializer: XML declaration, tab indentation, ` />` leaf form.
#[derive(Debug, Clone, Copy, Default)]
pub struct Xml;

impl Render for Xml {
    fn preamble(&self, out: &mut String) {
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    }

    fn postamble(&self, out: &mut String) {
        out.push('\n');
    }

    fn indent(&self, level: usize) -> String {
        "\t".repeat(level)
    }

    fn opening_tag(&self, node: &ElementNode, level: usize, out: &mut String) {
        out.push_str(&self.indent(level));
        out.push('<');
        out.push_str(&node.tag_name);
        self.attributes(node, out);
        if is_empty_leaf(node) {
            out.push_str(" />\n");
        } else {
            out.push_str(">\n");
        }
    }

    fn closing_tag(&self, node: &ElementNode, level: usize, out: &mut String) {
        out.push_str(&self.indent(level));
        out.push_str(&format!("</{}>\n", node.tag_name));
    }

    fn text(&self, text: &str, level: usize, out: &mut String) {
        out.push_str(&self.indent(level));
        out.push_str(text);
        out.push('\n');
    }
}
