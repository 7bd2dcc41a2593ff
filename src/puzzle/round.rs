use log::debug;

use crate::constants::{EPSILON, TARGET};
use crate::expression::{evaluate, ExpressionError};
use crate::puzzle::usage::validate_usage;

/// One round of play: four cards and, when the generator found one, a
/// witness expression proving the round solvable.
#[derive(Debug, Clone)]
pub struct Round {
    cards: [u8; 4],
    witness: Option<String>,
}

/// Outcome of judging a submitted expression.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// Value the submission evaluates to.
    pub value: f64,
    /// Whether the value hits the target within tolerance.
    pub matches_target: bool,
    /// Set when the value is right but the cards were used illegally.
    pub usage_violation: Option<String>,
}

impl CheckOutcome {
    /// A submission wins when it reaches the target using every card once.
    pub fn is_win(&self) -> bool {
        self.matches_target && self.usage_violation.is_none()
    }
}

impl Round {
    pub fn new(cards: [u8; 4], witness: Option<String>) -> Self {
        Self { cards, witness }
    }

    pub fn cards(&self) -> [u8; 4] {
        self.cards
    }

    /// Witness expression, absent only for a degraded round.
    pub fn witness(&self) -> Option<&str> {
        self.witness.as_deref()
    }

    /// True when generation gave up and fell back to an unsolvable set.
    pub fn is_degraded(&self) -> bool {
        self.witness.is_none()
    }

    /// Judge a submitted expression against this round's cards.
    ///
    /// The usage check only runs once the value matches the target; a
    /// wrong value is reported as such even if the submission also
    /// misuses cards.
    ///
    /// # Errors
    ///
    /// Returns the lex/parse/eval failure when the submission cannot be
    /// evaluated at all.
    pub fn check(&self, input: &str) -> Result<CheckOutcome, ExpressionError> {
        let value = evaluate(input)?;
        let matches_target = (value - TARGET).abs() < EPSILON;
        let usage_violation = if matches_target {
            validate_usage(input, &self.cards)
                .err()
                .map(|violation| violation.to_string())
        } else {
            None
        };

        debug!(
            "Checked '{}': value={}, matches_target={}, usage_violation={:?}",
            input, value, matches_target, usage_violation
        );

        Ok(CheckOutcome {
            value,
            matches_target,
            usage_violation,
        })
    }
}
