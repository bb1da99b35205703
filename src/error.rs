use crate::parser::{ParseError, Span};

/// Everything that can abort an evaluation. None of these are recoverable:
/// the program either reduces to a value or fails with exactly one error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("cannot resolve `{text}` at {span}: not a number")]
    Unresolved { text: String, span: Span },
    #[error("failed to simplify form at {span}: no operator `{name}` taking {args} argument(s)")]
    NoOperator {
        name: String,
        args: usize,
        span: Span,
    },
    #[error("failed to simplify form at {span}: expected an operator name, found {found}")]
    InvalidHead { found: String, span: Span },
    #[error("{operator}: argument #{position} must be {expected}, found {found}")]
    ArgumentType {
        operator: &'static str,
        position: usize,
        expected: &'static str,
        found: String,
    },
    #[error("{operator}: {message}")]
    Arithmetic {
        operator: &'static str,
        message: &'static str,
    },
    #[error("empty program")]
    EmptyProgram,
    #[error("empty form `()` at {span} does not reduce to a value")]
    EmptyForm { span: Span },
}

impl Error {
    pub(crate) fn arithmetic(operator: &'static str, message: &'static str) -> Self {
        Self::Arithmetic { operator, message }
    }

    pub(crate) fn argument_type(
        operator: &'static str,
        position: usize,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::ArgumentType {
            operator,
            position,
            expected,
            found: found.into(),
        }
    }
}
