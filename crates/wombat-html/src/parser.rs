//! The parser driver: owns the session, runs the character loop.

use thiserror::Error;

use wombat_dom::{ElementTree, NodeId};

use crate::session::ParserSession;
use crate::states::{ParserState, step};

/// Errors reported by [`HtmlParser::parse`].
///
/// The tokenizer itself never fails on malformed markup; the only reportable
/// condition is the structural absence of a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input never opened or self-closed a tag, so no tree exists.
    #[error("input produced no root element")]
    EmptyDocument,
}

/// A finished parse: the element tree plus the id of its root.
#[derive(Debug, Clone)]
pub struct Document {
    tree: ElementTree,
    root: NodeId,
}

impl Document {
    /// Id of the root element.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// The element tree.
    #[must_use]
    pub const fn tree(&self) -> &ElementTree {
        &self.tree
    }

    /// Mutable access to the element tree (post-parse edits).
    pub const fn tree_mut(&mut self) -> &mut ElementTree {
        &mut self.tree
    }

    /// Consume the document, yielding the tree and the root id.
    #[must_use]
    pub fn into_parts(self) -> (ElementTree, NodeId) {
        (self.tree, self.root)
    }
}

/// The parser driver.
///
/// Owns the scratch session and feeds it one character at a time. A single
/// instance can be reused; every [`parse`](Self::parse) call is fully
/// independent. `&mut self` makes concurrent use of one instance impossible;
/// independent instances are safe to run in parallel.
#[derive(Debug, Default)]
pub struct HtmlParser {
    session: ParserSession,
}

impl HtmlParser {
    /// Create a parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `input` into a [`Document`].
    ///
    /// Processes the input as a tight sequential loop over its `char`s, with
    /// no backtracking or lookahead, then flushes any trailing text into the
    /// innermost still-open element. Unclosed tags are left as built; they
    /// are not force-closed.
    ///
    /// # Errors
    /// [`ParseError::EmptyDocument`] when the input never opened or
    /// self-closed a tag (empty or tag-less input).
    pub fn parse(&mut self, input: &str) -> Result<Document, ParseError> {
        // Fresh session per call: no state leaks between parses.
        self.session = ParserSession::default();

        let mut state = ParserState::Text;
        for ch in input.chars() {
            state = step(state, ch, &mut self.session);
        }
        self.session.flush_text();

        let session = std::mem::take(&mut self.session);
        let root = session.root.ok_or(ParseError::EmptyDocument)?;
        Ok(Document {
            tree: session.tree,
            root,
        })
    }
}

/// Print an indented dump of the subtree rooted at `id` to stdout.
///
/// Debug helper for the CLI; text content is shown in quotes after the tag.
pub fn print_tree(tree: &ElementTree, id: NodeId, depth: usize) {
    let Some(node) = tree.get(id) else {
        return;
    };
    let indent = "  ".repeat(depth);
    let mut line = format!("{indent}<{}", node.tag_name);
    for (name, value) in &node.attributes {
        line.push_str(&format!(" {name}=\"{value}\""));
    }
    line.push('>');
    if !node.text.is_empty() {
        line.push_str(&format!(" {:?}", node.text));
    }
    println!("{line}");
    for &child in &node.children {
        print_tree(tree, child, depth + 1);
    }
}
