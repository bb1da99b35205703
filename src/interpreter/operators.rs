//! The operator table: which rewrite runs for a given operator name and
//! argument count.
//!
//! Several entries may share a name. Lookup returns the first entry, in
//! registration order, whose arity accepts the argument count, so the order in
//! which operators are registered decides between overlapping entries.
//!
//! The built-in table is created once per process and never changes. Embedders
//! who want more operators start from [`OperatorTable::with_builtins`],
//! register their own entries and hand the table to
//! [`Interpreter::with_operators`](super::Interpreter::with_operators) before
//! evaluating anything.

use std::collections::HashMap;

use derivative::Derivative;
use once_cell::sync::Lazy;

use super::builtins;
use super::{Interpreter, Value};
use crate::error::Error;
use crate::parser::Node;

/// Rewrites the arguments of a form (everything after the operator name) into
/// the value that replaces the form.
pub type Rewrite = fn(&Interpreter<'_>, &mut [Node<'_>]) -> Result<Value, Error>;

/// Number of arguments an operator takes, not counting the operator name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
    Variadic,
}

impl Arity {
    pub fn accepts(&self, args: usize) -> bool {
        match self {
            Self::Exact(n) => args == *n,
            Self::AtLeast(n) => args >= *n,
            Self::Variadic => true,
        }
    }
}

#[derive(Derivative, Clone, Copy)]
#[derivative(Debug)]
pub struct Operator {
    pub name: &'static str,
    pub arity: Arity,
    #[derivative(Debug = "ignore")]
    pub rewrite: Rewrite,
}

#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
    by_name: HashMap<&'static str, Vec<Operator>>,
    len: usize,
}

static BUILTIN_OPERATORS: Lazy<OperatorTable> = Lazy::new(|| {
    let mut table = OperatorTable::new();
    table
        .register("+", Arity::Variadic, builtins::add)
        .register("*", Arity::Variadic, builtins::mul)
        .register("list", Arity::Variadic, builtins::list)
        .register("sum", Arity::Exact(1), builtins::sum)
        .register("range", Arity::Exact(2), builtins::range)
        .register("-", Arity::AtLeast(1), builtins::sub)
        .register("/", Arity::AtLeast(1), builtins::div)
        .register("=", Arity::Exact(2), builtins::eq)
        .register("<", Arity::Exact(2), builtins::lt)
        .register(">", Arity::Exact(2), builtins::gt)
        .register("<=", Arity::Exact(2), builtins::le)
        .register(">=", Arity::Exact(2), builtins::ge);
    table
});

impl OperatorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide table of built-in operators.
    pub fn builtins() -> &'static Self {
        &BUILTIN_OPERATORS
    }

    /// A private copy of the built-in table, to extend before use.
    pub fn with_builtins() -> Self {
        BUILTIN_OPERATORS.clone()
    }

    pub fn register(&mut self, name: &'static str, arity: Arity, rewrite: Rewrite) -> &mut Self {
        self.by_name.entry(name).or_default().push(Operator {
            name,
            arity,
            rewrite,
        });
        self.len += 1;
        self
    }

    pub fn lookup(&self, name: &str, args: usize) -> Option<&Operator> {
        self.by_name
            .get(name)?
            .iter()
            .find(|op| op.arity.accepts(args))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
