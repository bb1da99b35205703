//! A small prefix-notation expression language.
//!
//! Programs such as `(+ 1 (* 2 3))` are tokenized, built into a tree and then
//! reduced in place, operator by operator, until the root is a number or a
//! list of numbers.

pub mod error;
pub use error::Error;

pub mod parser;
pub use parser::{parse, ParseError, ParserState};

mod interpreter;
pub use interpreter::{
    Arity, Interpreter, Item, List, NotANumber, Number, Operator, OperatorTable, Rewrite, Value,
    MAX_RANGE_LEN,
};

/// Evaluates `input` with the built-in operators.
pub fn evaluate(input: &str) -> Result<Value, Error> {
    Interpreter::new().evaluate(input)
}
