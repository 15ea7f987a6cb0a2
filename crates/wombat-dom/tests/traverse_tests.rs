//! Tests for depth-first and breadth-first traversal.

use wombat_dom::{Attributes, ElementTree, NodeId, Order};

/// Build the fixture tree:
///
/// ```text
/// html
/// ├── head
/// │   └── title
/// └── body
///     ├── h1
///     └── div
///         └── p
/// ```
fn fixture() -> (ElementTree, NodeId) {
    let mut tree = ElementTree::new();
    let alloc = |tree: &mut ElementTree, tag: &str| tree.alloc(tag, Attributes::new());

    let html = alloc(&mut tree, "html");
    let head = alloc(&mut tree, "head");
    let title = alloc(&mut tree, "title");
    let body = alloc(&mut tree, "body");
    let h1 = alloc(&mut tree, "h1");
    let div = alloc(&mut tree, "div");
    let p = alloc(&mut tree, "p");

    tree.append_child(html, head);
    tree.append_child(head, title);
    tree.append_child(html, body);
    tree.append_child(body, h1);
    tree.append_child(body, div);
    tree.append_child(div, p);

    (tree, html)
}

/// Collect tag names along a traversal.
fn tags(tree: &ElementTree, iter: impl Iterator<Item = NodeId>) -> Vec<String> {
    iter.filter_map(|id| tree.tag_name(id).map(ToString::to_string))
        .collect()
}

#[test]
fn test_depth_first_order() {
    let (tree, root) = fixture();
    let order = tags(&tree, tree.depth_first(root));
    assert_eq!(order, ["html", "head", "title", "body", "h1", "div", "p"]);
}

#[test]
fn test_breadth_first_order() {
    let (tree, root) = fixture();
    let order = tags(&tree, tree.breadth_first(root));
    assert_eq!(order, ["html", "head", "body", "title", "h1", "div", "p"]);
}

#[test]
fn test_traverse_selects_order() {
    let (tree, root) = fixture();
    let dfs = tags(&tree, tree.traverse(root, Order::DepthFirst));
    let bfs = tags(&tree, tree.traverse(root, Order::BreadthFirst));
    assert_eq!(dfs, tags(&tree, tree.depth_first(root)));
    assert_eq!(bfs, tags(&tree, tree.breadth_first(root)));
}

#[test]
fn test_traversal_is_restartable() {
    let (tree, root) = fixture();
    let first: Vec<NodeId> = tree.depth_first(root).collect();
    let second: Vec<NodeId> = tree.depth_first(root).collect();
    assert_eq!(first, second);
}

#[test]
fn test_single_node_traversal() {
    let mut tree = ElementTree::new();
    let root = tree.alloc("img", Attributes::new());
    assert_eq!(tree.depth_first(root).count(), 1);
    assert_eq!(tree.breadth_first(root).count(), 1);
}
