//! Process-wide game constants.
//!
//! The solver, the expression evaluator and the card-usage validator all
//! compare values through the same tolerance; a stage with its own epsilon
//! could accept a witness that the next stage rejects.

/// Value every winning expression must reach.
pub const TARGET: f64 = 24.0;

/// Tolerance for all floating-point equality checks.
pub const EPSILON: f64 = 1e-6;
