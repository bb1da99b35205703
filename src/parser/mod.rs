mod ast;
mod builder;
mod error;
mod locations;
pub mod tokenizer;

pub use ast::{Atom, Form, Node};
pub use builder::{build, MAX_NESTING};
pub use error::{ParseError, ParseErrorKind};
pub use locations::{Locatable, Location, Span};
pub use tokenizer::{paren_state, tokenize_string, ParserState, Token, TokenType, Tokenizer};

/// Tokenizes and builds `input` in one step.
pub fn parse(input: &str) -> Result<Option<Node<'_>>, ParseError> {
    let tokens = tokenize_string(input);
    build(&tokens)
}

#[cfg(test)]
mod test;
