use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("unsupported character: '{0}'")]
    UnsupportedChar(char),
    #[error("malformed number: '{0}'")]
    MalformedNumber(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("mismatched parentheses")]
    UnmatchedParen,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("incomplete expression")]
    IncompleteExpression,
    #[error("malformed expression")]
    MalformedExpression,
    #[error("result is not a finite number")]
    NonFiniteResult,
}

/// Any failure while turning a user string into a value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}
