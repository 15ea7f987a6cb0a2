//! Lazy traversal iterators over a fixed element tree.
//!
//! Both iterators borrow the tree immutably and yield [`NodeId`]s; restarting
//! a traversal means constructing a fresh iterator, which is free.

use std::collections::VecDeque;

use strum_macros::Display;

use crate::{ElementTree, NodeId};

/// Which traversal order to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Order {
    /// Pre-order depth-first: parent, then each child's subtree left to right.
    DepthFirst,
    /// Level order: root, then all depth-1 nodes, then depth-2, and so on.
    BreadthFirst,
}

/// Pre-order depth-first iterator.
#[derive(Debug, Clone)]
pub struct DepthFirst<'a> {
    tree: &'a ElementTree,
    stack: Vec<NodeId>,
}

impl Iterator for DepthFirst<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        // Children are pushed in reverse so the leftmost comes off first.
        self.stack.extend(self.tree.children(id).iter().rev());
        Some(id)
    }
}

/// Level-order (breadth-first) iterator.
#[derive(Debug, Clone)]
pub struct BreadthFirst<'a> {
    tree: &'a ElementTree,
    queue: VecDeque<NodeId>,
}

impl Iterator for BreadthFirst<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        self.queue.extend(self.tree.children(id));
        Some(id)
    }
}

/// Either traversal, selected at runtime via [`Order`].
#[derive(Debug, Clone)]
pub enum Traversal<'a> {
    /// Depth-first walk.
    Depth(DepthFirst<'a>),
    /// Breadth-first walk.
    Breadth(BreadthFirst<'a>),
}

impl Iterator for Traversal<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Depth(it) => it.next(),
            Self::Breadth(it) => it.next(),
        }
    }
}

impl ElementTree {
    /// Iterate over the subtree rooted at `root` in depth-first order.
    #[must_use]
    pub fn depth_first(&self, root: NodeId) -> DepthFirst<'_> {
        DepthFirst {
            tree: self,
            stack: vec![root],
        }
    }

    /// Iterate over the subtree rooted at `root` in breadth-first order.
    #[must_use]
    pub fn breadth_first(&self, root: NodeId) -> BreadthFirst<'_> {
        BreadthFirst {
            tree: self,
            queue: VecDeque::from([root]),
        }
    }

    /// Iterate over the subtree rooted at `root` in the given order.
    #[must_use]
    pub fn traverse(&self, root: NodeId, order: Order) -> Traversal<'_> {
        match order {
            Order::DepthFirst => Traversal::Depth(self.depth_first(root)),
            Order::BreadthFirst => Traversal::Breadth(self.breadth_first(root)),
        }
    }
}
