//! Wombat CLI
//!
//! Parses an HTML file (or inline string) and inspects the resulting element
//! tree: indented dump, serialization, statistics, validation, search, and
//! traversal listings.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;

use wombat_dom::Order;
use wombat_html::{Document, HtmlParser, print_tree};
use wombat_render::{Minified, Pretty, Render, Xml};
use wombat_visit::{Search, Statistics, Validator, walk};

/// Wombat — single-pass HTML parser and element-tree inspector
#[derive(Parser, Debug)]
#[command(name = "wombat")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r"EXAMPLES:
    # Dump the element tree of a file
    wombat index.html

    # Parse an inline snippet
    wombat --html '<div class=box>hi</div>'

    # Re-serialize, minified
    wombat index.html --render minified

    # Statistics as JSON
    wombat index.html --stats --json

    # Validate; exit code 1 when problems are found
    wombat index.html --check

    # List every <a> element
    wombat index.html --find a

    # Breadth-first tag listing
    wombat index.html --traverse breadth-first
")]
struct Cli {
    /// Path to an HTML file to parse
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Parse an HTML string directly instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Re-serialize the tree in the given format
    #[arg(long, value_enum, value_name = "FORMAT")]
    render: Option<RenderFormat>,

    /// Print document statistics
    #[arg(long)]
    stats: bool,

    /// Emit statistics as JSON (implies --stats)
    #[arg(long)]
    json: bool,

    /// Validate the tree; exit non-zero when problems are found
    #[arg(long)]
    check: bool,

    /// List elements with the given tag name
    #[arg(long, value_name = "TAG")]
    find: Option<String>,

    /// List tag names in the given traversal order
    #[arg(long, value_enum, value_name = "ORDER")]
    traverse: Option<TraverseOrder>,
}

/// Serialization formats exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RenderFormat {
    Pretty,
    Minified,
    Xml,
}

/// Traversal orders exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TraverseOrder {
    DepthFirst,
    BreadthFirst,
}

impl From<TraverseOrder> for Order {
    fn from(order: TraverseOrder) -> Self {
        match order {
            TraverseOrder::DepthFirst => Self::DepthFirst,
            TraverseOrder::BreadthFirst => Self::BreadthFirst,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let html = match (&cli.path, &cli.html) {
        (_, Some(inline)) => inline.clone(),
        (Some(path), None) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => bail!("provide a FILE argument or --html"),
    };

    let doc = HtmlParser::new()
        .parse(&html)
        .context("input contained no elements")?;

    let mut printed = false;
    let mut failed = false;

    if let Some(format) = cli.render {
        let rendered = match format {
            RenderFormat::Pretty => Pretty.render(doc.tree(), doc.root()),
            RenderFormat::Minified => Minified.render(doc.tree(), doc.root()),
            RenderFormat::Xml => Xml.render(doc.tree(), doc.root()),
        };
        print!("{rendered}");
        if format == RenderFormat::Minified {
            println!();
        }
        printed = true;
    }

    if cli.stats || cli.json {
        print_stats(&doc, cli.json)?;
        printed = true;
    }

    if cli.check {
        failed = !print_check(&doc);
        printed = true;
    }

    if let Some(tag) = &cli.find {
        print_matches(&doc, tag);
        printed = true;
    }

    if let Some(order) = cli.traverse {
        print_traversal(&doc, order.into());
        printed = true;
    }

    if !printed {
        print_tree(doc.tree(), doc.root(), 0);
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Print document statistics, either human-readable or as JSON.
fn print_stats(doc: &Document, json: bool) -> Result<()> {
    let mut stats = Statistics::new();
    walk(doc.tree(), doc.root(), &mut stats);
    let report = stats.report();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

/// Run the validator and print its findings. Returns whether the tree passed.
fn print_check(doc: &Document) -> bool {
    let mut validator = Validator::new();
    walk(doc.tree(), doc.root(), &mut validator);

    if validator.is_valid() {
        println!("{}", "document is valid".green());
        true
    } else {
        for error in validator.errors() {
            eprintln!("{} {error}", "problem:".yellow());
        }
        eprintln!(
            "{}",
            format!("{} problem(s) found", validator.errors().len()).red()
        );
        false
    }
}

/// List elements matching a tag name.
fn print_matches(doc: &Document, tag: &str) {
    let mut search = Search::new().tag(tag);
    walk(doc.tree(), doc.root(), &mut search);

    println!("{} match(es) for <{tag}>", search.matches().len());
    for &id in search.matches() {
        print_tree(doc.tree(), id, 1);
    }
}

/// Print tag names in the requested traversal order, one per line.
fn print_traversal(doc: &Document, order: Order) {
    println!("{order} traversal:");
    for id in doc.tree().traverse(doc.root(), order) {
        if let Some(tag) = doc.tree().tag_name(id) {
            println!("  {tag}");
        }
    }
}
