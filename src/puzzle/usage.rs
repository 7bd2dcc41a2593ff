use std::collections::HashMap;

use log::debug;

use crate::constants::EPSILON;
use crate::expression::{normalize, tokenize, Token};
use crate::puzzle::errors::UsageError;

/// Check that the numeric literals of `expr` are exactly the puzzle's four
/// cards, each used once.
///
/// Only the tokenizer runs here; the expression is not parsed or
/// evaluated. Literal signs are ignored, so `-3` counts as a use of
/// card 3 whichever minus produced it.
///
/// # Errors
///
/// Returns the specific rule breach; see [`UsageError`].
pub fn validate_usage(expr: &str, cards: &[u8; 4]) -> Result<(), UsageError> {
    let clean = normalize(expr);
    let tokens = tokenize(&clean)?;

    let used: Vec<f64> = tokens
        .iter()
        .filter_map(|token| match token {
            Token::Number(n) => Some(n.abs()),
            _ => None,
        })
        .collect();

    debug!("Submission uses literals {:?} against cards {:?}", used, cards);

    if used.len() != cards.len() {
        return Err(UsageError::WrongCount {
            used: used.len(),
            required: cards.len(),
        });
    }

    let mut remaining: HashMap<u8, usize> = HashMap::new();
    for &card in cards {
        *remaining.entry(card).or_insert(0) += 1;
    }

    for value in used {
        let rounded = value.round();
        if (value - rounded).abs() > EPSILON {
            return Err(UsageError::NonIntegerLiteral(value));
        }
        let card = match u8::try_from(rounded as i64) {
            Ok(card) => card,
            Err(_) => return Err(UsageError::NumberNotInPuzzle(rounded as i64)),
        };
        match remaining.get_mut(&card) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return Err(UsageError::NumberNotInPuzzle(i64::from(card))),
        }
    }

    // any remaining count means a required card went unused
    for (&card, &count) in &remaining {
        if count != 0 {
            return Err(UsageError::UnusedNumber(card));
        }
    }

    Ok(())
}
