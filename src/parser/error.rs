use super::locations::{Locatable, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A paren without its partner.
    Unbalanced,
    /// Tokens that do not form a single atom or a single parenthesized form.
    Unexpected,
    /// Parens nested deeper than `MAX_NESTING`.
    TooDeep,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message} at {span}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span, msg: &str) -> Self {
        Self {
            kind,
            message: msg.to_string(),
            span,
        }
    }
    pub fn unbalanced(span: Span, msg: &str) -> Self {
        Self::new(ParseErrorKind::Unbalanced, span, msg)
    }
    pub fn with_range<R: Locatable>(kind: ParseErrorKind, start: Span, end: &R, msg: &str) -> Self {
        Self::new(kind, start.till(end), msg)
    }
}
