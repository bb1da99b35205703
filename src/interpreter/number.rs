use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::Error;
use crate::parser::tokenizer::{BINNUMBER, DECNUMBER, FLOATNUMBER, HEXNUMBER, OCTNUMBER};

/// A number of the tower: an exact integer or a float.
///
/// Binary operations promote: if either side is a float, both are treated as
/// floats and the result is a float. Equality is tag-sensitive, so
/// `Integer(3) != Float(3.0)`; use [`Number::compare`] for numeric ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotANumber;

impl Number {
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    pub fn to_int(self) -> i64 {
        match self {
            Self::Integer(i) => i,
            Self::Float(d) => d as i64,
        }
    }

    pub fn to_float(self) -> f64 {
        match self {
            Self::Integer(i) => i as f64,
            Self::Float(d) => d,
        }
    }

    /// Numeric ordering with promotion. `None` only when a NaN is involved.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(&b)),
            (a, b) => a.to_float().partial_cmp(&b.to_float()),
        }
    }

    pub fn add(self, other: Self) -> Result<Self, Error> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a
                .checked_add(b)
                .map(Self::Integer)
                .ok_or_else(|| Error::arithmetic("+", "integer overflow in addition")),
            (a, b) => Ok(Self::Float(a.to_float() + b.to_float())),
        }
    }

    pub fn sub(self, other: Self) -> Result<Self, Error> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a
                .checked_sub(b)
                .map(Self::Integer)
                .ok_or_else(|| Error::arithmetic("-", "integer overflow in subtraction")),
            (a, b) => Ok(Self::Float(a.to_float() - b.to_float())),
        }
    }

    pub fn mul(self, other: Self) -> Result<Self, Error> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a
                .checked_mul(b)
                .map(Self::Integer)
                .ok_or_else(|| Error::arithmetic("*", "integer overflow in multiplication")),
            (a, b) => Ok(Self::Float(a.to_float() * b.to_float())),
        }
    }

    /// Integer division truncates toward zero.
    pub fn div(self, other: Self) -> Result<Self, Error> {
        match (self, other) {
            (Self::Integer(_), Self::Integer(0)) => {
                Err(Error::arithmetic("/", "integer division by zero"))
            }
            (Self::Integer(a), Self::Integer(b)) => a
                .checked_div(b)
                .map(Self::Integer)
                .ok_or_else(|| Error::arithmetic("/", "integer overflow in division")),
            (a, b) => Ok(Self::Float(a.to_float() / b.to_float())),
        }
    }

    pub fn neg(self) -> Result<Self, Error> {
        match self {
            Self::Integer(i) => i
                .checked_neg()
                .map(Self::Integer)
                .ok_or_else(|| Error::arithmetic("-", "integer overflow in negation")),
            Self::Float(d) => Ok(Self::Float(-d)),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl FromStr for Number {
    type Err = NotANumber;

    /// Tries an integer literal first (with `0x`, `0o` or `0b` base prefixes),
    /// then a float literal. The whole text has to match.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_int(text)
            .map(Self::Integer)
            .or_else(|| parse_float(text).map(Self::Float))
            .ok_or(NotANumber)
    }
}

fn parse_int(text: &str) -> Option<i64> {
    let (sign, body) = match text.as_bytes().first() {
        Some(b'-') => ("-", &text[1..]),
        Some(b'+') => ("", &text[1..]),
        _ => ("", text),
    };
    let radix = if HEXNUMBER.is_match(text) {
        16
    } else if OCTNUMBER.is_match(text) {
        8
    } else if BINNUMBER.is_match(text) {
        2
    } else if DECNUMBER.is_match(text) {
        10
    } else {
        return None;
    };
    let digits = if radix == 10 { body } else { &body[2..] };
    let digits: String = sign.chars().chain(digits.chars().filter(|c| *c != '_')).collect();
    i64::from_str_radix(&digits, radix).ok()
}

fn parse_float(text: &str) -> Option<f64> {
    // decimal integers too wide for i64 still read as floats
    if FLOATNUMBER.is_match(text) || DECNUMBER.is_match(text) {
        text.replace('_', "").parse().ok()
    } else {
        None
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(d) => write!(f, "{d:?}"),
        }
    }
}
