mod builtins;
mod list;
mod number;
mod operators;
mod value;

pub use builtins::MAX_RANGE_LEN;
pub use list::{Item, List};
pub use number::{NotANumber, Number};
pub use operators::{Arity, Operator, OperatorTable, Rewrite};
pub use value::Value;

use crate::error::Error;
use crate::parser::{build, tokenize_string, Atom, Form, Locatable, Node};

/// Reduces program trees to values by expanding operators in place.
#[derive(Debug, Clone, Copy)]
pub struct Interpreter<'t> {
    operators: &'t OperatorTable,
}

impl Default for Interpreter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter<'static> {
    /// An interpreter over the built-in operators.
    pub fn new() -> Self {
        Self {
            operators: OperatorTable::builtins(),
        }
    }
}

impl<'t> Interpreter<'t> {
    pub fn with_operators(operators: &'t OperatorTable) -> Self {
        Self { operators }
    }

    pub fn operators(&self) -> &'t OperatorTable {
        self.operators
    }

    /// Tokenizes, builds and simplifies one program.
    pub fn evaluate(&self, input: &str) -> Result<Value, Error> {
        let tokens = tokenize_string(input);
        let root = build(&tokens)?.ok_or(Error::EmptyProgram)?;
        match self.simplify(root)? {
            Node::Resolved(value, _) => Ok(value),
            other => Err(Error::EmptyForm { span: other.span() }),
        }
    }

    /// Consumes a node and returns its simplified replacement.
    pub fn simplify<'a>(&self, mut node: Node<'a>) -> Result<Node<'a>, Error> {
        self.simplify_in_place(&mut node)?;
        Ok(node)
    }

    /// Replaces an unresolved node with the value it reduces to.
    ///
    /// Resolved nodes and empty forms are left as they are. Children are
    /// simplified by the operator rewrites, as they need them.
    pub fn simplify_in_place(&self, node: &mut Node<'_>) -> Result<(), Error> {
        let value = match node {
            Node::Resolved(..) => return Ok(()),
            Node::Form(form) if form.is_empty() => return Ok(()),
            Node::Atom(atom) => Value::Number(self.resolve_atom(atom)?),
            Node::Form(form) => self.expand(form)?,
        };
        let span = node.span();
        *node = Node::Resolved(value, span);
        Ok(())
    }

    fn resolve_atom(&self, atom: &Atom<'_>) -> Result<Number, Error> {
        atom.text().parse().map_err(|_| {
            tracing::debug!(atom = atom.text(), span = %atom.span(), "atom is not a number");
            Error::Unresolved {
                text: atom.text().to_string(),
                span: atom.span(),
            }
        })
    }

    fn expand(&self, form: &mut Form<'_>) -> Result<Value, Error> {
        let span = form.span();
        let Some((head, args)) = form.children.split_first_mut() else {
            unreachable!("empty forms are not expanded")
        };
        let name = match head {
            Node::Atom(atom) => atom.text(),
            other => {
                return Err(Error::InvalidHead {
                    found: other.describe(),
                    span: other.span(),
                })
            }
        };
        let Some(operator) = self.operators.lookup(name, args.len()) else {
            tracing::debug!(operator = name, args = args.len(), "no matching operator");
            return Err(Error::NoOperator {
                name: name.to_string(),
                args: args.len(),
                span,
            });
        };
        tracing::debug!(operator = operator.name, args = args.len(), "expanding form");
        (operator.rewrite)(self, args)
    }
}
