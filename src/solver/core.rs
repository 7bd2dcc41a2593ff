use log::{debug, info};

use crate::constants::{EPSILON, TARGET};

/// A partial result in the reduction search: a numeric value together with
/// the parenthesized expression string that produced it.
#[derive(Debug, Clone)]
struct ValueExpr {
    value: f64,
    expr: String,
}

/// Search for an expression over the four cards that reaches the target.
///
/// The search repeatedly replaces one unordered pair of entries with a
/// combined entry until a single value remains, and returns the first
/// witness found. The witness is fully parenthesized around every binary
/// operation, uses each card exactly once and evaluates to the target
/// within [`EPSILON`].
pub fn solve(cards: [u8; 4]) -> Option<String> {
    debug!("Solving cards {:?}", cards);

    let items: Vec<ValueExpr> = cards
        .iter()
        .map(|&card| ValueExpr {
            value: f64::from(card),
            expr: card.to_string(),
        })
        .collect();

    let witness = reduce(&items);
    match &witness {
        Some(expr) => info!("Cards {:?} solved by {}", cards, expr),
        None => info!("Cards {:?} have no solution", cards),
    }
    witness
}

fn reduce(items: &[ValueExpr]) -> Option<String> {
    if let [only] = items {
        if (only.value - TARGET).abs() < EPSILON {
            return Some(only.expr.clone());
        }
        return None;
    }

    for i in 0..items.len() {
        for j in i + 1..items.len() {
            let a = &items[i];
            let b = &items[j];

            // sibling iterations need `items` intact, so each branch gets
            // its own shortened list
            let rest: Vec<ValueExpr> = items
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != i && k != j)
                .map(|(_, item)| item.clone())
                .collect();

            for candidate in combine(a, b) {
                let mut next = rest.clone();
                next.push(candidate);
                if let Some(found) = reduce(&next) {
                    return Some(found);
                }
            }
        }
    }
    None
}

/// All ways to merge two entries with one operator application.
///
/// Addition and multiplication commute and appear once; subtraction and
/// division appear in both operand orders. A division whose divisor is
/// within [`EPSILON`] of zero is skipped.
fn combine(a: &ValueExpr, b: &ValueExpr) -> Vec<ValueExpr> {
    let mut candidates = vec![
        ValueExpr {
            value: a.value + b.value,
            expr: format!("({}+{})", a.expr, b.expr),
        },
        ValueExpr {
            value: a.value * b.value,
            expr: format!("({}*{})", a.expr, b.expr),
        },
        ValueExpr {
            value: a.value - b.value,
            expr: format!("({}-{})", a.expr, b.expr),
        },
        ValueExpr {
            value: b.value - a.value,
            expr: format!("({}-{})", b.expr, a.expr),
        },
    ];

    if b.value.abs() > EPSILON {
        candidates.push(ValueExpr {
            value: a.value / b.value,
            expr: format!("({}/{})", a.expr, b.expr),
        });
    }
    if a.value.abs() > EPSILON {
        candidates.push(ValueExpr {
            value: b.value / a.value,
            expr: format!("({}/{})", b.expr, a.expr),
        });
    }

    candidates
}
