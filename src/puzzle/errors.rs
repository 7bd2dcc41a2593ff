use thiserror::Error;

use crate::expression::LexError;

/// Ways a submission can break the use-each-card-once rule.
///
/// Callers usually collapse these into a single "illegal usage" message;
/// the split exists for logging and tests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UsageError {
    #[error("expected {required} numbers, found {used}")]
    WrongCount { used: usize, required: usize },
    #[error("literal {0} is not a whole card value")]
    NonIntegerLiteral(f64),
    #[error("card {0} is not available in this puzzle")]
    NumberNotInPuzzle(i64),
    #[error("card {0} was not used")]
    UnusedNumber(u8),
    #[error("expression cannot be read: {0}")]
    Unreadable(#[from] LexError),
}
