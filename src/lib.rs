//! Twentyfour - solver and checker for the 24 points card game
//!
//! Four cards in 1..=13 must be combined with the four basic arithmetic
//! operators and parentheses into an expression worth exactly 24. This
//! library generates rounds that are guaranteed solvable (with a witness
//! expression as proof), and judges free-form submissions: the value must
//! hit the target and every card must be used exactly once.

pub mod constants;
pub mod expression;
pub mod puzzle;
pub mod solver;

// Re-export the main public API
pub use expression::{evaluate, format_for_display, ExpressionError};
pub use puzzle::{CheckOutcome, PuzzleGenerator, Round, UsageError};
pub use solver::solve;

/// Deal a fresh solvable round with the default generator.
///
/// In the practically unreachable case that no solvable card set is found
/// within the retry ceiling, the returned round is degraded: it carries
/// fallback cards and no witness (see [`Round::is_degraded`]).
pub fn new_puzzle() -> Round {
    PuzzleGenerator::default().generate()
}

/// Judge a submission against an ad-hoc set of cards.
///
/// Convenience wrapper over [`Round::check`] for callers that track cards
/// themselves.
///
/// # Errors
///
/// Returns an error when the expression cannot be lexed, parsed or
/// evaluated.
///
/// # Examples
///
/// ```
/// use twentyfour::evaluate_and_check;
///
/// let outcome = evaluate_and_check("(1+2+3)*4", &[1, 2, 3, 4]).expect("well-formed expression");
/// assert!(outcome.matches_target);
/// assert!(outcome.usage_violation.is_none());
/// ```
pub fn evaluate_and_check(expr: &str, cards: &[u8; 4]) -> Result<CheckOutcome, ExpressionError> {
    Round::new(*cards, None).check(expr)
}
