use super::list::{Item, List};
use super::number::Number;
use super::{Interpreter, Value};
use crate::error::Error;
use crate::parser::Node;

// Argument positions in errors are 1-based, the operator name being #0.

fn value_arg<'n>(
    interp: &Interpreter<'_>,
    operator: &'static str,
    position: usize,
    expected: &'static str,
    node: &'n mut Node<'_>,
) -> Result<&'n Value, Error> {
    match interp.simplify_in_place(node) {
        Ok(()) => {}
        // only a bare atom argument can fail this way
        Err(Error::Unresolved { text, .. }) => {
            return Err(Error::argument_type(
                operator,
                position,
                expected,
                format!("unresolved atom `{text}`"),
            ))
        }
        Err(e) => return Err(e),
    }
    let node: &'n Node<'_> = node;
    match node {
        Node::Resolved(value, _) => Ok(value),
        other => Err(Error::argument_type(
            operator,
            position,
            expected,
            other.describe(),
        )),
    }
}

fn number_arg(
    interp: &Interpreter<'_>,
    operator: &'static str,
    position: usize,
    node: &mut Node<'_>,
) -> Result<Number, Error> {
    match value_arg(interp, operator, position, "a number", node)? {
        Value::Number(n) => Ok(*n),
        other => Err(Error::argument_type(
            operator,
            position,
            "a number",
            other.type_name(),
        )),
    }
}

fn integer_arg(
    interp: &Interpreter<'_>,
    operator: &'static str,
    position: usize,
    node: &mut Node<'_>,
) -> Result<i64, Error> {
    match value_arg(interp, operator, position, "an int", node)? {
        Value::Number(Number::Integer(i)) => Ok(*i),
        other => Err(Error::argument_type(
            operator,
            position,
            "an int",
            other.type_name(),
        )),
    }
}

/// Folds the arguments left to right. No arguments gives `identity`, a single
/// argument is returned as is.
fn fold_numbers(
    interp: &Interpreter<'_>,
    operator: &'static str,
    args: &mut [Node<'_>],
    identity: Number,
    op: fn(Number, Number) -> Result<Number, Error>,
) -> Result<Value, Error> {
    let mut acc: Option<Number> = None;
    for (i, arg) in args.iter_mut().enumerate() {
        let n = number_arg(interp, operator, i + 1, arg)?;
        acc = Some(match acc {
            None => n,
            Some(acc) => op(acc, n)?,
        });
    }
    Ok(Value::Number(acc.unwrap_or(identity)))
}

pub(super) fn add(interp: &Interpreter<'_>, args: &mut [Node<'_>]) -> Result<Value, Error> {
    fold_numbers(interp, "+", args, Number::Integer(0), Number::add)
}

pub(super) fn mul(interp: &Interpreter<'_>, args: &mut [Node<'_>]) -> Result<Value, Error> {
    fold_numbers(interp, "*", args, Number::Integer(1), Number::mul)
}

/// `(- x)` negates, `(- x y ...)` subtracts left to right.
pub(super) fn sub(interp: &Interpreter<'_>, args: &mut [Node<'_>]) -> Result<Value, Error> {
    if let [arg] = args {
        return Ok(Value::Number(number_arg(interp, "-", 1, arg)?.neg()?));
    }
    fold_numbers(interp, "-", args, Number::Integer(0), Number::sub)
}

/// `(/ x)` is `(/ 1 x)`, `(/ x y ...)` divides left to right.
pub(super) fn div(interp: &Interpreter<'_>, args: &mut [Node<'_>]) -> Result<Value, Error> {
    if let [arg] = args {
        let n = number_arg(interp, "/", 1, arg)?;
        return Ok(Value::Number(Number::Integer(1).div(n)?));
    }
    fold_numbers(interp, "/", args, Number::Integer(1), Number::div)
}

pub(super) fn list(interp: &Interpreter<'_>, args: &mut [Node<'_>]) -> Result<Value, Error> {
    let mut list = List::with_capacity(args.len());
    for (i, arg) in args.iter_mut().enumerate() {
        match value_arg(interp, "list", i + 1, "a number or a list", arg)? {
            Value::Number(n) => list.push_number(*n),
            Value::List(l) => list.push_list(l.clone()),
        }
    }
    Ok(Value::List(list))
}

pub(super) fn sum(interp: &Interpreter<'_>, args: &mut [Node<'_>]) -> Result<Value, Error> {
    let list = match value_arg(interp, "sum", 1, "a list", &mut args[0])? {
        Value::List(l) => l,
        other => return Err(Error::argument_type("sum", 1, "a list", other.type_name())),
    };
    let mut total = Number::Integer(0);
    for (i, item) in list.iter().enumerate() {
        match item {
            Item::Number(n) => total = total.add(*n)?,
            Item::List(_) => {
                return Err(Error::argument_type(
                    "sum",
                    1,
                    "a list of numbers",
                    format!("a list at index {i}"),
                ))
            }
        }
    }
    Ok(Value::Number(total))
}

/// Longest list `range` builds.
pub const MAX_RANGE_LEN: usize = 1 << 24;

/// Integers from the first argument up to, but not including, the second.
pub(super) fn range(interp: &Interpreter<'_>, args: &mut [Node<'_>]) -> Result<Value, Error> {
    let start = integer_arg(interp, "range", 1, &mut args[0])?;
    let stop = integer_arg(interp, "range", 2, &mut args[1])?;
    if start >= stop {
        return Ok(Value::List(List::new()));
    }
    let len = usize::try_from(stop.abs_diff(start))
        .ok()
        .filter(|&len| len <= MAX_RANGE_LEN)
        .ok_or_else(|| {
            tracing::debug!(start, stop, "range exceeds MAX_RANGE_LEN");
            Error::arithmetic("range", "range too large")
        })?;
    let mut list = List::new();
    list.try_reserve(len)
        .map_err(|_| Error::arithmetic("range", "range too large"))?;
    for i in start..stop {
        list.push_number(Number::Integer(i));
    }
    Ok(Value::List(list))
}

fn compare(
    interp: &Interpreter<'_>,
    operator: &'static str,
    args: &mut [Node<'_>],
    holds: fn(std::cmp::Ordering) -> bool,
) -> Result<Value, Error> {
    let lhs = number_arg(interp, operator, 1, &mut args[0])?;
    let rhs = number_arg(interp, operator, 2, &mut args[1])?;
    let truth = lhs.compare(&rhs).is_some_and(holds);
    Ok(Value::Number(Number::Integer(truth as i64)))
}

pub(super) fn eq(interp: &Interpreter<'_>, args: &mut [Node<'_>]) -> Result<Value, Error> {
    compare(interp, "=", args, |o| o.is_eq())
}

pub(super) fn lt(interp: &Interpreter<'_>, args: &mut [Node<'_>]) -> Result<Value, Error> {
    compare(interp, "<", args, |o| o.is_lt())
}

pub(super) fn gt(interp: &Interpreter<'_>, args: &mut [Node<'_>]) -> Result<Value, Error> {
    compare(interp, ">", args, |o| o.is_gt())
}

pub(super) fn le(interp: &Interpreter<'_>, args: &mut [Node<'_>]) -> Result<Value, Error> {
    compare(interp, "<=", args, |o| o.is_le())
}

pub(super) fn ge(interp: &Interpreter<'_>, args: &mut [Node<'_>]) -> Result<Value, Error> {
    compare(interp, ">=", args, |o| o.is_ge())
}
