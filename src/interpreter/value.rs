use super::list::List;
use super::number::Number;

/// What a program reduces to.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(Number),
    List(List),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Number(Number::Integer(_)) => "int",
            Self::Number(Number::Float(_)) => "float",
            Self::List(_) => "list",
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(n) => Some(*n),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(l) => Some(l),
            Self::Number(_) => None,
        }
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Self::List(value)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::List(l) => write!(f, "{l}"),
        }
    }
}
