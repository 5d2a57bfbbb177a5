//! Recursive descent over the markup grammar
//!
//! ```text
//! sequence  := item*
//! item      := "$$" | "~~" | variable | span | overbar-word | text
//! variable  := "${" [namespace ":"] name "}"
//! span      := ("^{" | "_{" | "~{") sequence "}"
//! overbar-word := "~" ident
//! ```
//!
//! Any special character that does not start one of the forms above is
//! literal, so `a_b` stays `a_b`.

use crate::error::MarkupError;
use crate::node::MarkupNode;

/// Parses a markup string into a [`MarkupNode`] tree
pub struct MarkupParser<'a> {
    text: &'a str,
    pos: usize,
}

/// Where a sequence ends
#[derive(Clone, Copy)]
enum Terminator {
    /// End of input
    Eof,
    /// Closing brace of a span or brace group opened at this byte offset
    Brace(usize),
}

impl<'a> MarkupParser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Parse the whole input into a root node
    pub fn parse(mut self) -> Result<MarkupNode, MarkupError> {
        let children = self.parse_sequence(Terminator::Eof)?;
        Ok(MarkupNode::root(children))
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.text[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn error(&self, message: impl Into<String>, offset: usize) -> MarkupError {
        MarkupError::at(self.text, offset, message)
    }

    fn parse_sequence(&mut self, end: Terminator) -> Result<Vec<MarkupNode>, MarkupError> {
        let mut nodes = Vec::new();

        loop {
            let Some(c) = self.peek() else {
                return match end {
                    Terminator::Eof => Ok(nodes),
                    Terminator::Brace(start) => Err(self.error("unterminated span", start)),
                };
            };

            let start = self.pos;
            match (c, self.peek_second()) {
                ('}', _) if matches!(end, Terminator::Brace(_)) => {
                    self.bump();
                    return Ok(nodes);
                }
                ('{', _) if matches!(end, Terminator::Brace(_)) => {
                    // Literal brace group, kept as text but it must balance
                    self.bump();
                    push_text(&mut nodes, "{");
                    for node in self.parse_sequence(Terminator::Brace(start))? {
                        push_node(&mut nodes, node);
                    }
                    push_text(&mut nodes, "}");
                }
                ('$', Some('$')) => {
                    self.pos += 2;
                    push_text(&mut nodes, "$");
                }
                ('~', Some('~')) => {
                    self.pos += 2;
                    push_text(&mut nodes, "~");
                }
                ('$', Some('{')) => {
                    self.pos += 2;
                    nodes.push(self.parse_variable(start)?);
                }
                ('^', Some('{')) => {
                    self.pos += 2;
                    let children = self.parse_sequence(Terminator::Brace(start))?;
                    nodes.push(MarkupNode::superscript(children));
                }
                ('_', Some('{')) => {
                    self.pos += 2;
                    let children = self.parse_sequence(Terminator::Brace(start))?;
                    nodes.push(MarkupNode::subscript(children));
                }
                ('~', Some('{')) => {
                    self.pos += 2;
                    let children = self.parse_sequence(Terminator::Brace(start))?;
                    nodes.push(MarkupNode::overbar(children));
                }
                ('~', Some(next)) if is_ident_char(next) => {
                    self.bump();
                    let word = self.take_identifier();
                    if word.is_empty() {
                        push_text(&mut nodes, "~");
                    } else {
                        nodes.push(MarkupNode::overbar(vec![MarkupNode::text(word)]));
                    }
                }
                _ => {
                    let text = self.take_text(end);
                    push_text(&mut nodes, text);
                }
            }
        }
    }

    /// Body of `${...}`; the opening `${` is already consumed
    fn parse_variable(&mut self, start: usize) -> Result<MarkupNode, MarkupError> {
        let body_start = self.pos;
        let rest = &self.text[body_start..];

        let Some(close) = rest.find(['{', '}']) else {
            return Err(self.error("unterminated variable reference", start));
        };
        if rest.as_bytes()[close] == b'{' {
            return Err(self.error(
                "'{' is not allowed in a variable name",
                body_start + close,
            ));
        }

        let body = &rest[..close];
        self.pos = body_start + close + 1;

        let (namespace, name) = split_reference(body);

        if name.is_empty() {
            return Err(self.error("empty variable name", start));
        }

        Ok(MarkupNode::variable(namespace, name))
    }

    fn take_identifier(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !is_ident_char(c) || (c == '_' && self.peek_second() == Some('{')) {
                break;
            }
            self.bump();
        }
        &self.text[start..self.pos]
    }

    /// Consume plain text up to the next character that may start markup.
    ///
    /// Always consumes at least one character, so a special character that
    /// did not start a form is taken literally.
    fn take_text(&mut self, end: Terminator) -> &'a str {
        let start = self.pos;
        self.bump();
        while let Some(c) = self.peek() {
            let stops = match c {
                '$' | '~' | '^' | '_' => true,
                '{' | '}' => matches!(end, Terminator::Brace(_)),
                _ => false,
            };
            if stops {
                break;
            }
            self.bump();
        }
        &self.text[start..self.pos]
    }
}

/// Split a variable body into namespace and name
pub(crate) fn split_reference(body: &str) -> (Option<&str>, &str) {
    match body.split_once(':') {
        Some((ns, name)) if !ns.is_empty() && ns.chars().all(is_namespace_char) => {
            (Some(ns), name)
        }
        _ => (None, body),
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-')
}

/// Append text, merging with a preceding text node
fn push_text(nodes: &mut Vec<MarkupNode>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(crate::NodeKind::Text(prev)) = nodes.last_mut().map(|n| &mut n.kind) {
        prev.push_str(text);
    } else {
        nodes.push(MarkupNode::text(text));
    }
}

fn push_node(nodes: &mut Vec<MarkupNode>, node: MarkupNode) {
    if let crate::NodeKind::Text(text) = &node.kind {
        push_text(nodes, text);
        return;
    }
    nodes.push(node);
}
