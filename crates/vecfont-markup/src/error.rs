//! Markup parse errors

use thiserror::Error;
use vecfont_core::VecfontError;

/// A markup syntax error with its location in the source text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{column}: {message}")]
pub struct MarkupError {
    pub message: String,
    /// Byte offset into the source
    pub offset: usize,
    /// 1-based line
    pub line: usize,
    /// 1-based column, counted in characters
    pub column: usize,
}

impl MarkupError {
    /// Build an error at `offset`, deriving line and column from `source`
    pub fn at(source: &str, offset: usize, message: impl Into<String>) -> Self {
        let offset = offset.min(source.len());
        let before = source.get(..offset).unwrap_or(source);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;

        Self {
            message: message.into(),
            offset,
            line,
            column,
        }
    }
}

impl From<MarkupError> for VecfontError {
    fn from(err: MarkupError) -> Self {
        VecfontError::Markup(err.to_string())
    }
}
