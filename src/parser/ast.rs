use super::locations::Span;
use super::tokenizer::{Token, TokenType as TT};
use crate::interpreter::Value;

/// Unresolved atom text, borrowed from the program.
#[derive(Clone, Copy, PartialEq)]
pub struct Atom<'a> {
    pub(crate) text: &'a str,
    pub(crate) span: Span,
}

impl<'a> Atom<'a> {
    pub fn text(&self) -> &'a str {
        self.text
    }
}

impl std::fmt::Debug for Atom<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Atom(\"{}\")", self.text)
    }
}

impl<'a> From<Token<'a>> for Atom<'a> {
    fn from(value: Token<'a>) -> Self {
        match value.typ {
            TT::ATOM => Self {
                text: value.lexeme,
                span: value.span,
            },
            _ => unreachable!(),
        }
    }
}

/// A parenthesized sequence whose meaning is not known yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Form<'a> {
    pub(crate) children: Vec<Node<'a>>,
    pub(crate) span: Span,
}

impl<'a> Form<'a> {
    pub(crate) fn new(span: Span) -> Self {
        Self {
            children: vec![],
            span,
        }
    }

    pub fn children(&self) -> &[Node<'a>] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn push(&mut self, child: Node<'a>) {
        self.children.push(child);
    }

    /// Operator name in head position, if the head is an atom.
    pub fn head(&self) -> Option<&Atom<'a>> {
        match self.children.first() {
            Some(Node::Atom(atom)) => Some(atom),
            _ => None,
        }
    }
}

/// One node of the program tree. A node starts out as `Atom` or `Form` and is
/// replaced by `Resolved` exactly once, when it is simplified.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    Atom(Atom<'a>),
    Form(Form<'a>),
    Resolved(Value, Span),
}

impl<'a> Node<'a> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(..))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Resolved(value, _) => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Resolved(value, _) => Some(value),
            _ => None,
        }
    }

    /// Short description used in error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Atom(atom) => format!("atom `{}`", atom.text),
            Self::Form(form) if form.is_empty() => "empty form `()`".to_string(),
            Self::Form(_) => "unresolved form".to_string(),
            Self::Resolved(value, _) => value.type_name().to_string(),
        }
    }

    fn write_tree(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        for _ in 0..level {
            write!(f, "  |")?;
        }
        match self {
            Self::Atom(atom) => writeln!(f, "Atom \"{}\"", atom.text),
            Self::Resolved(value, _) => writeln!(f, "{} {}", value.type_name(), value),
            Self::Form(form) => {
                writeln!(f, "Form, {} nodes", form.children.len())?;
                for child in form.children.iter() {
                    child.write_tree(f, level + 1)?;
                }
                Ok(())
            }
        }
    }
}

impl std::fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_tree(f, 0)
    }
}
