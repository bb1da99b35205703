use super::locations::Span;
use const_format::concatcp;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token<'a> {
    pub(crate) typ: TokenType,
    pub(crate) lexeme: &'a str,
    pub(crate) span: Span,
}

impl<'a> Token<'a> {
    pub fn typ(&self) -> TokenType {
        self.typ
    }
    pub fn lexeme(&self) -> &'a str {
        self.lexeme
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}('{}')", self.typ, self.lexeme)
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenType {
    LPAR,
    RPAR,
    ATOM,
}

const LPAR: (&str, TokenType) = ("(", TokenType::LPAR);
const RPAR: (&str, TokenType) = (")", TokenType::RPAR);

const SIMPLE_TOKENS: [(&str, TokenType); 2] = [LPAR, RPAR];

macro_rules! alternative {
    ($t:expr) => {{
        $t
    }};
    ($t:expr, $($ts:expr),+) => {{
        concatcp!($t, "|", alternative!($($ts),+))
    }}
}

macro_rules! group {
    ($($ts:expr),+) => {{
        concatcp!(r"(?:", alternative!($($ts),+), ")")
    }}
}

macro_rules! maybe {
    ($($ts:expr),+) => {
        concatcp!(group!($($ts),+), r"?")
    }
}

const S_WHITESPACE: &str = r"^\s+";
const S_ATOM: &str = r"^[^\s()]+";
const S_SIGN: &str = r"[-+]?";
const S_DIGITS: &str = r"[0-9](?:_?[0-9])*";
const S_HEXNUMBER: &str = r"0[xX](?:_?[0-9a-fA-F])+";
const S_BINNUMBER: &str = r"0[bB](?:_?[01])+";
const S_OCTNUMBER: &str = r"0[oO](?:_?[0-7])+";
const S_WHOLE_HEXNUMBER: &str = concatcp!("^", S_SIGN, S_HEXNUMBER, "$");
const S_WHOLE_BINNUMBER: &str = concatcp!("^", S_SIGN, S_BINNUMBER, "$");
const S_WHOLE_OCTNUMBER: &str = concatcp!("^", S_SIGN, S_OCTNUMBER, "$");
const S_WHOLE_DECNUMBER: &str = concatcp!("^", S_SIGN, S_DIGITS, "$");
const S_EXPONENT: &str = r"[eE][-+]?[0-9](?:_?[0-9])*";
const S_POINTFLOAT: &str = concatcp!(
    group!(
        concatcp!(S_DIGITS, r"\.", maybe!(S_DIGITS)),
        concatcp!(r"\.", S_DIGITS)
    ),
    maybe!(S_EXPONENT)
);
const S_EXPFLOAT: &str = concatcp!(S_DIGITS, S_EXPONENT);
const S_FLOATNUMBER: &str = group!(S_POINTFLOAT, S_EXPFLOAT);
const S_WHOLE_FLOATNUMBER: &str = concatcp!("^", S_SIGN, S_FLOATNUMBER, "$");

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_WHITESPACE).expect("Error compiling regex."));
static ATOM: Lazy<Regex> = Lazy::new(|| Regex::new(S_ATOM).expect("Error compiling regex."));
pub(crate) static HEXNUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_WHOLE_HEXNUMBER).expect("Error compiling regex."));
pub(crate) static BINNUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_WHOLE_BINNUMBER).expect("Error compiling regex."));
pub(crate) static OCTNUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_WHOLE_OCTNUMBER).expect("Error compiling regex."));
pub(crate) static DECNUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_WHOLE_DECNUMBER).expect("Error compiling regex."));
pub(crate) static FLOATNUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_WHOLE_FLOATNUMBER).expect("Error compiling regex."));

/// Whether the text seen so far closes every paren it opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserState {
    Ok,
    ContinuationNeeded,
    Overclosed,
}

/// Splits program text into parens and atoms. Lexemes borrow from the input.
pub struct Tokenizer<'a> {
    tokens: Vec<Token<'a>>,
    start: usize,
    paren_lvl: isize,
    overclosed: bool,
}

impl<'a> Default for Tokenizer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Tokenizer<'a> {
    pub fn new() -> Self {
        Self {
            tokens: vec![],
            start: 0,
            paren_lvl: 0,
            overclosed: false,
        }
    }

    pub fn tokenize(&mut self, input: impl Iterator<Item = &'a str>) -> ParserState {
        for (lineno, line) in input.enumerate() {
            self.tokenize_line(line, lineno + 1);
        }
        tracing::trace!(tokens = self.tokens.len(), "tokenized input");
        self.state()
    }

    pub fn state(&self) -> ParserState {
        if self.overclosed {
            ParserState::Overclosed
        } else if self.paren_lvl > 0 {
            ParserState::ContinuationNeeded
        } else {
            ParserState::Ok
        }
    }

    pub fn finalize(self) -> Vec<Token<'a>> {
        self.tokens
    }

    fn tokenize_line(&mut self, line: &'a str, lineno: usize) {
        self.start = 0;

        'scan: while self.start < line.len() {
            let rest = &line[self.start..];

            if let Some(m) = WHITESPACE.find(rest) {
                self.start += m.end();
                continue;
            }

            for (lexeme, tok_type) in SIMPLE_TOKENS {
                if rest.starts_with(lexeme) {
                    match tok_type {
                        TokenType::LPAR => self.paren_lvl += 1,
                        TokenType::RPAR => {
                            self.paren_lvl -= 1;
                            if self.paren_lvl < 0 {
                                self.overclosed = true;
                            }
                        }
                        TokenType::ATOM => {}
                    }
                    self.push(tok_type, &line[self.start..self.start + lexeme.len()], lineno);
                    continue 'scan;
                }
            }

            if self.find_by_regex(&ATOM, TokenType::ATOM, line, lineno) {
                continue;
            }

            unreachable!("every character is whitespace, a paren or part of an atom");
        }
    }

    fn push(&mut self, typ: TokenType, lexeme: &'a str, lineno: usize) {
        let end = self.start + lexeme.len();
        self.tokens.push(Token {
            typ,
            lexeme,
            span: Span::new(lineno, self.start, lineno, end),
        });
        self.start = end;
    }

    fn find_by_regex(
        &mut self,
        regex: &Regex,
        token_type: TokenType,
        line: &'a str,
        lineno: usize,
    ) -> bool {
        if let Some(m) = regex.find(&line[self.start..]) {
            let lexeme = &line[self.start..self.start + m.end()];
            self.push(token_type, lexeme, lineno);
            return true;
        }
        false
    }
}

pub fn tokenize_string(input: &str) -> Vec<Token<'_>> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize(input.lines());
    tokenizer.finalize()
}

/// Reports whether `input` needs more lines before it can be built.
pub fn paren_state(input: &str) -> ParserState {
    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize(input.lines())
}
