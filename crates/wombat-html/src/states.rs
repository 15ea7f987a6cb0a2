//! The tokenizer state machine.
//!
//! A closed enum of seven states plus a single transition function keeps the
//! machine exhaustiveness-checked at compile time: adding a state without
//! handling its transitions is a build error, not a runtime surprise.

use strum_macros::Display;

use crate::session::ParserSession;

/// The tokenizer states.
///
/// Exactly one state is active at any time; each consumed character may
/// append to a session buffer, mutate the tree, and/or select the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ParserState {
    /// Accumulating a text run between tags.
    Text,
    /// Just consumed `<`; deciding between an opening and a closing tag.
    TagOpen,
    /// Accumulating an opening tag's name.
    TagName,
    /// Accumulating an attribute name (or skipping whitespace between
    /// attributes).
    AttributeName,
    /// Just consumed `=`; waiting for a quote or the first value character.
    AttributeValueStart,
    /// Accumulating an attribute value, quoted or unquoted.
    AttributeValue,
    /// Saw `/` after a tag name; waiting for `>` to emit a self-closing tag.
    SelfClosingTag,
    /// Accumulating a closing tag's name.
    ClosingTag,
}

/// Advance the machine by one character.
///
/// This is the whole tokenizer: it inspects `ch` under the current state,
/// optionally mutates the session (buffers, stack, tree), and returns the
/// next state. Out-of-place characters are dropped rather than reported.
pub(crate) fn step(state: ParserState, ch: char, session: &mut ParserSession) -> ParserState {
    match state {
        ParserState::Text => {
            if ch == '<' {
                session.flush_text();
                ParserState::TagOpen
            } else {
                session.text_buffer.push(ch);
                ParserState::Text
            }
        }
        ParserState::TagOpen => {
            if ch == '/' {
                ParserState::ClosingTag
            } else if ch.is_alphabetic() {
                session.tag_buffer.push(ch);
                ParserState::TagName
            } else {
                // Stray non-letter after `<` (e.g. `<!`, `<1`) is dropped.
                ParserState::TagOpen
            }
        }
        ParserState::TagName => match ch {
            '>' => {
                session.emit_open_tag();
                ParserState::Text
            }
            '/' => ParserState::SelfClosingTag,
            c if c.is_whitespace() => ParserState::AttributeName,
            _ => {
                session.tag_buffer.push(ch);
                ParserState::TagName
            }
        },
        ParserState::AttributeName => match ch {
            '=' => ParserState::AttributeValueStart,
            '>' => {
                // A valueless attribute name is discarded here: only
                // committed name/value pairs reach the element.
                session.emit_open_tag();
                ParserState::Text
            }
            c if c.is_whitespace() => ParserState::AttributeName,
            _ => {
                session.attr_name_buffer.push(ch);
                ParserState::AttributeName
            }
        },
        ParserState::AttributeValueStart => match ch {
            '\'' | '"' => {
                session.quote = Some(ch);
                ParserState::AttributeValue
            }
            c if c.is_whitespace() => ParserState::AttributeValueStart,
            _ => {
                // Unquoted value starts with this very character.
                session.attr_value_buffer.push(ch);
                ParserState::AttributeValue
            }
        },
        ParserState::AttributeValue => {
            let terminated = match session.quote {
                Some(quote) => ch == quote,
                None => ch.is_whitespace(),
            };
            if terminated {
                session.commit_attribute();
                ParserState::AttributeName
            } else if session.quote.is_none() && ch == '>' {
                session.commit_attribute();
                session.emit_open_tag();
                ParserState::Text
            } else {
                // Inside a quoted value every character counts, `>` included.
                session.attr_value_buffer.push(ch);
                ParserState::AttributeValue
            }
        }
        ParserState::SelfClosingTag => {
            if ch == '>' {
                session.emit_self_closing_tag();
                ParserState::Text
            } else {
                ParserState::SelfClosingTag
            }
        }
        ParserState::ClosingTag => match ch {
            '>' => {
                session.emit_closing_tag();
                ParserState::Text
            }
            c if c.is_whitespace() => ParserState::ClosingTag,
            _ => {
                session.tag_buffer.push(ch);
                ParserState::ClosingTag
            }
        },
    }
}
