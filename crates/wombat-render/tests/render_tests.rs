//! Golden-string and round-trip tests for the serializers.

use wombat_html::{Document, HtmlParser};
use wombat_render::{Minified, Pretty, Render, Xml};

/// Helper to parse markup, panicking on an empty document.
fn parse(html: &str) -> Document {
    HtmlParser::new().parse(html).expect("expected a root element")
}

/// Minify a freshly parsed document.
fn minify(html: &str) -> String {
    let doc = parse(html);
    Minified.render(doc.tree(), doc.root())
}

// ========== golden strings ==========

#[test]
fn test_pretty_render() {
    let doc = parse("<div id='a'>hello<span>x</span></div>");
    let rendered = Pretty.render(doc.tree(), doc.root());

    let expected = "<!DOCTYPE html>\n\
        <div id=\"a\">\n  hello\n  <span>\n    x\n  </span>\n</div>\n\n";
    assert_eq!(rendered, expected);
}

#[test]
fn test_pretty_self_closes_empty_leaf() {
    let doc = parse("<div><br/></div>");
    let rendered = Pretty.render(doc.tree(), doc.root());
    assert_eq!(rendered, "<!DOCTYPE html>\n<div>\n  <br/>\n</div>\n\n");
}

#[test]
fn test_minified_render() {
    let doc = parse("<div id='a'>hello<span>x</span></div>");
    let rendered = Minified.render(doc.tree(), doc.root());
    assert_eq!(rendered, "<div id=\"a\">hello<span>x</span></div>");
}

#[test]
fn test_xml_render() {
    let doc = parse("<root><item>v</item><empty/></root>");
    let rendered = Xml.render(doc.tree(), doc.root());

    let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
        <root>\n\t<item>\n\t\tv\n\t</item>\n\t<empty />\n</root>\n\n";
    assert_eq!(rendered, expected);
}

#[test]
fn test_attributes_render_in_insertion_order() {
    let doc = parse("<a href='x' rel='nofollow' id='l'>t</a>");
    let rendered = Minified.render(doc.tree(), doc.root());
    assert_eq!(rendered, "<a href=\"x\" rel=\"nofollow\" id=\"l\">t</a>");
}

// ========== round trip ==========

#[test]
fn test_minified_round_trip_is_fixed_point() {
    // Elements, attributes, trimmed text; the only empty leaf carries no
    // attributes, so it serializes as <br/> and re-parses self-closed.
    let first = minify("<div class='c'>\n  hello\n  <span>x</span>\n  <p><br/>tail</p>\n</div>");
    let second = minify(&first);
    assert_eq!(first, second);
}

#[test]
fn test_minified_reaches_fixed_point_with_attributed_leaf() {
    // An attributed empty leaf serializes as <img .../>, which the tokenizer
    // reads back as a plain open tag; the tree shifts once and then the
    // minified form is stable.
    let first = minify("<div><img src='a.jpg'/><p>t</p></div>");
    let second = minify(&first);
    let third = minify(&second);
    assert_eq!(second, third);
}

#[test]
fn test_round_trip_preserves_structure() {
    let doc = parse("<ul id='menu'><li>one</li><li>two</li></ul>");
    let minified = Minified.render(doc.tree(), doc.root());

    let reparsed = parse(&minified);
    assert!(doc.tree().subtree_eq(doc.root(), reparsed.tree(), reparsed.root()));
}
