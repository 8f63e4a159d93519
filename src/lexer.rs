//! Tokenization for rpncalc
//!
//! Numeric runs (digits and `.`) are split from any adjacent run of other
//! non-whitespace characters, so `3+4` lexes the same as `3 + 4` and `2dup`
//! the same as `2 dup`.

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    combinator::map,
    multi::many0,
    sequence::{preceded, terminated},
    IResult,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A run of digits and dots. Usually a literal, but `.` or `1.2.3`
    /// will not parse as a number.
    Numeric(String),
    /// Anything else: an operation name or a command such as `undo`
    Word(String),
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Numeric(s) | Token::Word(s) => s,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("Unconsumed input: {0:?}")]
    Unconsumed(String),
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn is_word_char(c: char) -> bool {
    !is_numeric_char(c) && !c.is_whitespace()
}

fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

fn numeric(input: &str) -> IResult<&str, Token> {
    map(take_while1(is_numeric_char), |s: &str| {
        Token::Numeric(s.to_string())
    })(input)
}

fn word(input: &str) -> IResult<&str, Token> {
    map(take_while1(is_word_char), |s: &str| Token::Word(s.to_string()))(input)
}

fn tokens(input: &str) -> IResult<&str, Vec<Token>> {
    terminated(many0(preceded(whitespace, alt((numeric, word)))), whitespace)(input)
}

/// Split a line into tokens. Blank input gives an empty vector.
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    match tokens(input) {
        Ok(("", toks)) => Ok(toks),
        Ok((rest, _)) => Err(LexError::Unconsumed(rest.to_string())),
        Err(e) => Err(LexError::Unconsumed(e.to_string())),
    }
}
