//! Vecfont Markup: inline formatting inside a single string
//!
//! Labels and field values carry their formatting in the text itself:
//!
//! | Form | Meaning |
//! |---|---|
//! | `^{...}` | superscript |
//! | `_{...}` | subscript |
//! | `~{...}` or `~word` | overbar |
//! | `${name}` / `${ns:name}` | variable reference |
//! | `$$`, `~~` | literal `$`, `~` |
//!
//! ```
//! use vecfont_markup::{parse, MarkupNode};
//!
//! let root = parse("V^{2}_{out}").unwrap();
//! assert_eq!(root.children[0], MarkupNode::text("V"));
//! assert!(root.children[1].is_superscript());
//! assert!(root.children[2].is_subscript());
//! ```

mod error;
mod node;
mod parser;

pub use error::MarkupError;
pub use node::{MarkupNode, NodeKind};
pub use parser::MarkupParser;

/// Parse `text` into a markup tree
pub fn parse(text: &str) -> Result<MarkupNode, MarkupError> {
    let result = MarkupParser::new(text).parse();
    if let Err(err) = &result {
        log::debug!("markup parse failed for {:?}: {}", text, err);
    }
    result
}

/// Does the text need the markup engine to render correctly?
///
/// Malformed markup counts: the caller decides how to show it.
pub fn has_markup(text: &str) -> bool {
    match parse(text) {
        Ok(root) => match root.children.as_slice() {
            [] => false,
            [only] => only.text_content() != Some(text),
            _ => true,
        },
        Err(_) => true,
    }
}

/// Double every `$` and `~` so the text parses back to itself
///
/// `^{` and `_{` have no escape form and are left alone.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '$' || c == '~' {
            out.push(c);
        }
        out.push(c);
    }
    out
}

/// Replace `${...}` references using `resolver(namespace, name)`
///
/// References the resolver returns `None` for stay as written. Other markup
/// and `$$` escapes pass through untouched so the result can still be
/// parsed. An unterminated reference is copied verbatim.
pub fn expand_variables<F>(text: &str, mut resolver: F) -> String
where
    F: FnMut(Option<&str>, &str) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find('$') {
        out.push_str(&rest[..idx]);
        let tail = &rest[idx..];

        if tail.starts_with("$$") {
            out.push_str("$$");
            rest = &tail[2..];
            continue;
        }

        if let Some(body) = tail.strip_prefix("${") {
            if let Some(close) = body.find('}') {
                let (namespace, name) = parser::split_reference(&body[..close]);
                match resolver(namespace, name) {
                    Some(value) => out.push_str(&value),
                    None => out.push_str(&tail[..close + 3]),
                }
                rest = &body[close + 1..];
                continue;
            }
        }

        out.push('$');
        rest = &tail[1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;
