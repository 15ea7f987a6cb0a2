//! Undoable structural edits over the Wombat element tree.
//!
//! Edits are tagged variants rather than trait objects: [`Edit`] describes
//! the forward operation, and applying one through an [`EditLog`] captures
//! whatever inverse data is needed to undo it (former child index, previous
//! attribute value or absence, previous text). Applied edits live in two
//! ordered stacks; a new edit clears the redo stack.

use thiserror::Error;

use wombat_dom::{ElementTree, NodeId};

/// Errors reported when applying an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    /// An edit referenced a node id outside the arena.
    #[error("edit references a node that does not exist")]
    NoSuchNode,
    /// A removal named a child that is not attached to the given parent.
    #[error("node is not a child of the given parent")]
    NotAChild,
}

/// A structural edit, described forward-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Append `child` as the last child of `parent`.
    InsertChild {
        /// Element gaining a child.
        parent: NodeId,
        /// Element being attached (must already be allocated in the arena).
        child: NodeId,
    },
    /// Detach `child` from `parent`.
    RemoveChild {
        /// Element losing a child.
        parent: NodeId,
        /// Element being detached.
        child: NodeId,
    },
    /// Insert or overwrite an attribute.
    SetAttribute {
        /// Element being edited.
        element: NodeId,
        /// Attribute name.
        name: String,
        /// New value.
        value: String,
    },
    /// Replace an element's directly-owned text.
    SetText {
        /// Element being edited.
        element: NodeId,
        /// New text.
        text: String,
    },
}

/// An applied edit with the inverse data captured at apply time.
#[derive(Debug, Clone)]
enum AppliedEdit {
    InsertChild {
        parent: NodeId,
        child: NodeId,
    },
    RemoveChild {
        parent: NodeId,
        child: NodeId,
        /// The child's index before removal, so undo restores its position.
        index: usize,
    },
    SetAttribute {
        element: NodeId,
        name: String,
        value: String,
        /// `None` when the attribute was absent before this edit.
        previous: Option<String>,
    },
    SetText {
        element: NodeId,
        text: String,
        previous: String,
    },
}

impl AppliedEdit {
    /// Re-run the forward operation (used by redo).
    fn apply(&self, tree: &mut ElementTree) {
        match self {
            Self::InsertChild { parent, child } => tree.append_child(*parent, *child),
            Self::RemoveChild { parent, child, .. } => {
                let _ = tree.remove_child(*parent, *child);
            }
            Self::SetAttribute {
                element,
                name,
                value,
                ..
            } => {
                if let Some(node) = tree.get_mut(*element) {
                    node.attributes.set(name, value);
                }
            }
            Self::SetText { element, text, .. } => {
                if let Some(node) = tree.get_mut(*element) {
                    node.text = text.clone();
                }
            }
        }
    }

    /// Run the inverse operation (used by undo).
    fn revert(&self, tree: &mut ElementTree) {
        match self {
            Self::InsertChild { parent, child } => {
                let _ = tree.remove_child(*parent, *child);
            }
            Self::RemoveChild {
                parent,
                child,
                index,
            } => tree.insert_child(*parent, *index, *child),
            Self::SetAttribute {
                element,
                name,
                previous,
                ..
            } => {
                if let Some(node) = tree.get_mut(*element) {
                    match previous {
                        Some(value) => node.attributes.set(name, value),
                        None => {
                            let _ = node.attributes.remove(name);
                        }
                    }
                }
            }
            Self::SetText {
                element, previous, ..
            } => {
                if let Some(node) = tree.get_mut(*element) {
                    node.text = previous.clone();
                }
            }
        }
    }
}

/// Executes edits against a tree and keeps undo/redo history.
#[derive(Debug, Default)]
pub struct EditLog {
    undo_stack: Vec<AppliedEdit>,
    redo_stack: Vec<AppliedEdit>,
}

impl EditLog {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Execute `edit` against `tree`, recording it for undo.
    ///
    /// Any redoable history is discarded: redo only replays edits undone
    /// since the most recent apply.
    ///
    /// # Errors
    /// [`EditError::NoSuchNode`] when an edit names an id outside the arena;
    /// [`EditError::NotAChild`] when removing a child not attached to the
    /// given parent.
    pub fn apply(&mut self, tree: &mut ElementTree, edit: Edit) -> Result<(), EditError> {
        let applied = match edit {
            Edit::InsertChild { parent, child } => {
                if tree.get(parent).is_none() || tree.get(child).is_none() {
                    return Err(EditError::NoSuchNode);
                }
                tree.append_child(parent, child);
                AppliedEdit::InsertChild { parent, child }
            }
            Edit::RemoveChild { parent, child } => {
                if tree.get(parent).is_none() || tree.get(child).is_none() {
                    return Err(EditError::NoSuchNode);
                }
                let index = tree.remove_child(parent, child).ok_or(EditError::NotAChild)?;
                AppliedEdit::RemoveChild {
                    parent,
                    child,
                    index,
                }
            }
            Edit::SetAttribute {
                element,
                name,
                value,
            } => {
                let node = tree.get_mut(element).ok_or(EditError::NoSuchNode)?;
                let previous = node.attributes.get(&name).map(ToString::to_string);
                node.attributes.set(&name, &value);
                AppliedEdit::SetAttribute {
                    element,
                    name,
                    value,
                    previous,
                }
            }
            Edit::SetText { element, text } => {
                let node = tree.get_mut(element).ok_or(EditError::NoSuchNode)?;
                let previous = std::mem::replace(&mut node.text, text.clone());
                AppliedEdit::SetText {
                    element,
                    text,
                    previous,
                }
            }
        };
        self.undo_stack.push(applied);
        self.redo_stack.clear();
        Ok(())
    }

    /// Undo the most recent edit. Returns whether anything was undone.
    pub fn undo(&mut self, tree: &mut ElementTree) -> bool {
        self.undo_stack.pop().is_some_and(|edit| {
            edit.revert(tree);
            self.redo_stack.push(edit);
            true
        })
    }

    /// Redo the most recently undone edit. Returns whether anything was
    /// redone.
    pub fn redo(&mut self, tree: &mut ElementTree) -> bool {
        self.redo_stack.pop().is_some_and(|edit| {
            edit.apply(tree);
            self.undo_stack.push(edit);
            true
        })
    }

    /// Whether an undoable edit is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether a redoable edit is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
