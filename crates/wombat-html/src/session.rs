//! Mutable scratch state owned by the parser driver.
//!
//! One [`ParserSession`] holds everything the state machine mutates: the four
//! accumulation buffers, the stack of open elements, the attributes pending
//! for the tag currently being opened, the active quote character, and the
//! tree under construction. The transition function receives it by exclusive
//! borrow, so no aliasing exists beyond the single owner.

use wombat_dom::{Attributes, ElementTree, NodeId};

/// Per-parse scratch state. Dropped (replaced wholesale) on every reset, so
/// nothing leaks between `parse` calls.
#[derive(Debug, Default)]
pub(crate) struct ParserSession {
    /// Text run accumulated since the last tag.
    pub(crate) text_buffer: String,
    /// Tag name being scanned (opening or closing).
    pub(crate) tag_buffer: String,
    /// Attribute name being scanned.
    pub(crate) attr_name_buffer: String,
    /// Attribute value being scanned.
    pub(crate) attr_value_buffer: String,
    /// Stack of currently open elements, innermost on top. Entries index
    /// into `tree`, which owns the nodes.
    pub(crate) open_elements: Vec<NodeId>,
    /// Attributes accumulated for the tag currently being opened.
    pub(crate) pending_attributes: Attributes,
    /// Active quote character; `None` while scanning an unquoted value.
    pub(crate) quote: Option<char>,
    /// The element recorded as the document root, if any yet.
    pub(crate) root: Option<NodeId>,
    /// The tree being built.
    pub(crate) tree: ElementTree,
}

impl ParserSession {
    /// Flush the text buffer into the innermost open element.
    ///
    /// The run is trimmed first; whitespace-only runs are dropped entirely.
    /// Assignment overwrites any text the element already carried — a later
    /// run on the same element wins.
    pub(crate) fn flush_text(&mut self) {
        if self.text_buffer.is_empty() {
            return;
        }
        let text = self.text_buffer.trim();
        if !text.is_empty()
            && let Some(&top) = self.open_elements.last()
            && let Some(node) = self.tree.get_mut(top)
        {
            node.text = text.to_string();
        }
        self.text_buffer.clear();
    }

    /// Emit an opening tag: build the element from the tag buffer and the
    /// pending attributes, attach it (as root if the stack is empty, else as
    /// the last child of the stack top), and push it onto the stack.
    ///
    /// A second top-level element overwrites the recorded root.
    pub(crate) fn emit_open_tag(&mut self) {
        let element = self.attach_pending_element();
        self.open_elements.push(element);
        self.clear_tag_state();
    }

    /// Emit a self-closing tag: attached exactly like an opening tag but
    /// never pushed onto the stack, so it cannot acquire children.
    pub(crate) fn emit_self_closing_tag(&mut self) {
        let _ = self.attach_pending_element();
        self.clear_tag_state();
    }

    /// Emit a closing tag: pop the stack iff its top matches the buffered
    /// name (ASCII case-insensitive). Mismatches are silently ignored — no
    /// pop, no error, no implicit auto-close.
    pub(crate) fn emit_closing_tag(&mut self) {
        if let Some(&top) = self.open_elements.last()
            && let Some(node) = self.tree.get(top)
            && node.tag_name.eq_ignore_ascii_case(&self.tag_buffer)
        {
            let _ = self.open_elements.pop();
        }
        self.clear_tag_state();
    }

    /// Commit the pending attribute name/value pair.
    ///
    /// Only recorded when the name buffer is non-empty; both buffers and the
    /// quote character are cleared regardless.
    pub(crate) fn commit_attribute(&mut self) {
        if !self.attr_name_buffer.is_empty() {
            self.pending_attributes
                .set(&self.attr_name_buffer, &self.attr_value_buffer);
        }
        self.attr_name_buffer.clear();
        self.attr_value_buffer.clear();
        self.quote = None;
    }

    /// Allocate the pending element and attach it to the tree.
    fn attach_pending_element(&mut self) -> NodeId {
        let attributes = std::mem::take(&mut self.pending_attributes);
        let element = self.tree.alloc(&self.tag_buffer, attributes);
        if let Some(&parent) = self.open_elements.last() {
            self.tree.append_child(parent, element);
        } else {
            self.root = Some(element);
        }
        element
    }

    /// Clear the tag-scoped buffers after a tag has been emitted.
    fn clear_tag_state(&mut self) {
        self.tag_buffer.clear();
        self.attr_name_buffer.clear();
        self.attr_value_buffer.clear();
        self.quote = None;
    }
}
