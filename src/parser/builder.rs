use super::ast::{Atom, Form, Node};
use super::error::{ParseError, ParseErrorKind};
use super::tokenizer::{Token, TokenType as TT};

/// Deepest paren nesting the builder accepts.
pub const MAX_NESTING: usize = 256;

/// Builds the program tree from a token sequence.
///
/// Returns `Ok(None)` for an empty program. A program is either a single atom
/// or one parenthesized form; anything else is a structural error.
pub fn build<'a>(tokens: &[Token<'a>]) -> Result<Option<Node<'a>>, ParseError> {
    let (first, last) = match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Ok(None),
    };

    match first.typ {
        TT::ATOM if tokens.len() == 1 => Ok(Some(Node::Atom(Atom::from(first)))),
        TT::LPAR => {
            let (form, close) = build_form(tokens, 0, 1)?;
            match tokens.get(close + 1) {
                None => Ok(Some(form)),
                Some(extra) if extra.typ == TT::RPAR => Err(ParseError::unbalanced(
                    extra.span,
                    "unexpected `)` with no matching `(`",
                )),
                Some(extra) => Err(ParseError::with_range(
                    ParseErrorKind::Unexpected,
                    extra.span,
                    &last,
                    "expected a single atom or a single parenthesized form",
                )),
            }
        }
        TT::RPAR => Err(ParseError::unbalanced(
            first.span,
            "unexpected `)` with no matching `(`",
        )),
        TT::ATOM => Err(ParseError::with_range(
            ParseErrorKind::Unexpected,
            first.span,
            &last,
            "expected a single atom or a single parenthesized form",
        )),
    }
}

// Builds the form opened at `tokens[open]` and returns it with the index of
// its closing paren.
fn build_form<'a>(
    tokens: &[Token<'a>],
    open: usize,
    depth: usize,
) -> Result<(Node<'a>, usize), ParseError> {
    let open_token = tokens[open];
    if depth > MAX_NESTING {
        return Err(ParseError::new(
            ParseErrorKind::TooDeep,
            open_token.span,
            "parens nested too deeply",
        ));
    }

    let mut form = Form::new(open_token.span);
    let mut i = open + 1;
    while let Some(token) = tokens.get(i) {
        match token.typ {
            TT::ATOM => {
                form.push(Node::Atom(Atom::from(*token)));
                i += 1;
            }
            TT::LPAR => {
                let (child, close) = build_form(tokens, i, depth + 1)?;
                form.push(child);
                i = close + 1;
            }
            TT::RPAR => {
                form.span = open_token.span.till(token);
                tracing::trace!(children = form.children.len(), span = %form.span, "built form");
                return Ok((Node::Form(form), i));
            }
        }
    }

    Err(ParseError::unbalanced(
        open_token.span,
        "no matching `)` for `(`",
    ))
}
