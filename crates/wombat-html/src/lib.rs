//! Single-pass HTML tokenizer/tree-builder for the Wombat toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer state machine** — seven mutually exclusive states driving
//!   character-by-character transitions over shared scratch buffers and a
//!   stack of open elements. Recognizes tags, quoted and unquoted attributes,
//!   self-closing tags, and closing tags. No backtracking, no lookahead.
//! - **Parser driver** — [`HtmlParser::parse`] resets the session, feeds the
//!   input one `char` at a time, flushes trailing text, and hands back a
//!   [`Document`] owning the finished [`wombat_dom::ElementTree`].
//!
//! # Error policy
//!
//! Malformed input degrades gracefully and never aborts the parse:
//! out-of-place characters are ignored, unmatched closing tags are dropped,
//! and partial buffers at end-of-input are discarded. The only reportable
//! failure is [`ParseError::EmptyDocument`] — input that never opened or
//! self-closed a tag.
//!
//! # Not Implemented
//!
//! - DOCTYPE, comment, script, and style special-casing
//! - Entity decoding and encoding detection
//! - Void-element lists and implicit tag closing

/// Parser driver and document type.
pub mod parser;
/// Scratch state shared by the state machine.
mod session;
/// The tokenizer states and transition function.
pub mod states;

pub use parser::{Document, HtmlParser, ParseError, print_tree};
pub use states::ParserState;
