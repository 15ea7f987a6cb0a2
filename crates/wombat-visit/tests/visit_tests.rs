//! Tests for the validator, statistics, and search visitors.

use wombat_dom::{Attributes, ElementTree, NodeId};
use wombat_html::HtmlParser;
use wombat_visit::{Search, Statistics, Validator, walk};

/// Parse a fixture and return its tree and root.
fn parse(html: &str) -> (ElementTree, NodeId) {
    HtmlParser::new()
        .parse(html)
        .expect("fixture parses")
        .into_parts()
}

// ========== Validator ==========

#[test]
fn test_validator_accepts_clean_document() {
    let (tree, root) = parse(
        "<div><a href='https://example.com'>link</a><img src='x.png' alt='x'/></div>",
    );
    let mut validator = Validator::new();
    walk(&tree, root, &mut validator);

    assert!(validator.is_valid(), "unexpected errors: {:?}", validator.errors());
}

#[test]
fn test_validator_flags_missing_img_attributes() {
    let (tree, root) = parse("<div><img/></div>");
    let mut validator = Validator::new();
    walk(&tree, root, &mut validator);

    assert_eq!(validator.errors().len(), 2);
    assert!(validator.errors()[0].contains("src"));
    assert!(validator.errors()[1].contains("alt"));
}

#[test]
fn test_validator_flags_anchor_without_href() {
    let (tree, root) = parse("<div><a>dangling</a></div>");
    let mut validator = Validator::new();
    walk(&tree, root, &mut validator);

    assert_eq!(validator.errors().len(), 1);
    assert!(validator.errors()[0].contains("href"));
}

#[test]
fn test_validator_flags_void_element_with_children() {
    // Built by hand: the parser's self-closing path cannot produce this.
    let mut tree = ElementTree::new();
    let br = tree.alloc("br", Attributes::new());
    let child = tree.alloc("span", Attributes::new());
    tree.append_child(br, child);

    let mut validator = Validator::new();
    walk(&tree, br, &mut validator);

    assert_eq!(validator.errors().len(), 1);
    assert!(validator.errors()[0].contains("void element 'br'"));
}

#[test]
fn test_validator_flags_empty_tag_name() {
    let mut tree = ElementTree::new();
    let node = tree.alloc("", Attributes::new());

    let mut validator = Validator::new();
    walk(&tree, node, &mut validator);

    assert_eq!(validator.errors(), ["element has empty tag name"]);
}

// ========== Statistics ==========

#[test]
fn test_statistics_counts_and_depth() {
    let (tree, root) = parse(
        "<html><body><div><p>four</p><p>char</p></div><p>more</p></body></html>",
    );
    let mut stats = Statistics::new();
    walk(&tree, root, &mut stats);
    let report = stats.report();

    assert_eq!(report.total_elements, 6);
    assert_eq!(report.max_depth, 4); // html > body > div > p
    assert_eq!(report.total_text_length, 12);

    // p is most frequent; ties broken by name.
    assert_eq!(report.tag_counts[0], ("p".to_string(), 3));
    let names: Vec<&str> = report.tag_counts.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["p", "body", "div", "html"]);
}

#[test]
fn test_statistics_report_display() {
    let (tree, root) = parse("<div><p>hi</p></div>");
    let mut stats = Statistics::new();
    walk(&tree, root, &mut stats);

    let text = stats.report().to_string();
    assert!(text.contains("Total elements: 2"));
    assert!(text.contains("Maximum depth: 2"));
    assert!(text.contains("  p: 1"));
}

#[test]
fn test_statistics_report_serializes() {
    let (tree, root) = parse("<div><p>hi</p></div>");
    let mut stats = Statistics::new();
    walk(&tree, root, &mut stats);

    let json = serde_json::to_value(stats.report()).unwrap();
    assert_eq!(json["total_elements"], 2);
    assert_eq!(json["max_depth"], 2);
}

// ========== Search ==========

#[test]
fn test_search_by_tag_is_case_insensitive() {
    let (tree, root) = parse("<div><P>a</P><p>b</p><span>c</span></div>");
    let mut search = Search::new().tag("p");
    walk(&tree, root, &mut search);

    assert_eq!(search.matches().len(), 2);
}

#[test]
fn test_search_by_attribute_presence() {
    let (tree, root) = parse("<div class='x'><p class='y'>a</p><p>b</p></div>");
    let mut search = Search::new().attribute("class");
    walk(&tree, root, &mut search);

    assert_eq!(search.matches().len(), 2);
}

#[test]
fn test_search_by_attribute_value() {
    let (tree, root) = parse("<div class='x'><p class='y'>a</p><p class='x'>b</p></div>");
    let mut search = Search::new().attribute("class").value("x");
    walk(&tree, root, &mut search);

    let matches = search.into_matches();
    assert_eq!(matches.len(), 2);
    assert_eq!(tree.tag_name(matches[0]), Some("div"));
    assert_eq!(tree.tag_name(matches[1]), Some("p"));
}

#[test]
fn test_search_combines_criteria() {
    let (tree, root) = parse("<div class='x'><p class='x'>a</p></div>");
    let mut search = Search::new().tag("p").attribute("class").value("x");
    walk(&tree, root, &mut search);

    assert_eq!(search.matches().len(), 1);
    assert_eq!(tree.tag_name(search.matches()[0]), Some("p"));
}

#[test]
fn test_search_without_criteria_matches_all() {
    let (tree, root) = parse("<div><p>a</p><p>b</p></div>");
    let mut search = Search::new();
    walk(&tree, root, &mut search);

    assert_eq!(search.matches().len(), 3);
}

#[test]
fn test_search_results_in_document_order() {
    let (tree, root) = parse("<div><span>1</span><p><span>2</span></p><span>3</span></div>");
    let mut search = Search::new().tag("span");
    walk(&tree, root, &mut search);

    let texts: Vec<&str> = search
        .matches()
        .iter()
        .map(|&id| tree.get(id).unwrap().text.as_str())
        .collect();
    assert_eq!(texts, ["1", "2", "3"]);
}
