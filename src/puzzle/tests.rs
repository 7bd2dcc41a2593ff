use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::constants::{EPSILON, TARGET};
use crate::puzzle::constants::{CARD_MAX, CARD_MIN, FALLBACK_CARDS};
use crate::puzzle::{validate_usage, GeneratorConfig, PuzzleGenerator, Round, UsageError};

#[test]
fn test_validate_usage_accepts_exact_cards() {
    assert!(validate_usage("(1+2)*3+8", &[1, 2, 3, 8]).is_ok());
}

#[test]
fn test_validate_usage_rejects_foreign_number() {
    assert!(validate_usage("(1+2)*3+9", &[1, 2, 3, 8]).is_err());
}

#[test]
fn test_validate_usage_rejects_wrong_count() {
    assert_eq!(
        validate_usage("1+2+3", &[1, 2, 3, 8]),
        Err(UsageError::WrongCount {
            used: 3,
            required: 4
        })
    );
}

#[test]
fn test_validate_usage_rejects_fractional_literal() {
    assert!(matches!(
        validate_usage("1.5+2+3+8", &[1, 2, 3, 8]),
        Err(UsageError::NonIntegerLiteral(_))
    ));
}

#[test]
fn test_validate_usage_rejects_composed_digits() {
    // "12" is one literal, not a use of cards 1 and 2
    assert!(validate_usage("(4-2)*12", &[4, 2, 1, 2]).is_err());
}

#[test]
fn test_validate_usage_counts_duplicates() {
    assert!(validate_usage("8/(3-8/3)", &[8, 3, 8, 3]).is_ok());
    assert!(validate_usage("8/(3-8/3)", &[8, 3, 3, 3]).is_err());
}

#[test]
fn test_validate_usage_ignores_literal_sign() {
    assert!(validate_usage("-1*-8*(1+2)", &[1, 2, 1, 8]).is_ok());
}

#[test]
fn test_check_win_exact_fractional_chain() {
    let round = Round::new([8, 3, 8, 3], None);
    let outcome = round.check("8/(3-8/3)").expect("evaluates");
    assert!((outcome.value - TARGET).abs() < EPSILON);
    assert!(outcome.matches_target);
    assert!(outcome.usage_violation.is_none());
    assert!(outcome.is_win());
}

#[test]
fn test_check_accepts_display_glyphs() {
    let round = Round::new([3, 8, 1, 1], None);
    let outcome = round.check("3×8÷(1×1)").expect("evaluates");
    assert!(outcome.is_win());
}

#[test]
fn test_check_right_value_wrong_cards() {
    let round = Round::new([4, 2, 1, 2], None);
    let outcome = round.check("(4-2)*12").expect("evaluates");
    assert!(outcome.matches_target);
    assert!(outcome.usage_violation.is_some());
    assert!(!outcome.is_win());
}

#[test]
fn test_check_wrong_value_skips_usage() {
    let round = Round::new([1, 2, 3, 4], None);
    let outcome = round.check("1+2+3+4").expect("evaluates");
    assert!(!outcome.matches_target);
    assert!(outcome.usage_violation.is_none());
    assert!(!outcome.is_win());
}

#[test]
fn test_check_malformed_input() {
    let round = Round::new([1, 2, 3, 4], None);
    assert!(round.check("(1+2").is_err());
}

#[test]
fn test_generate_with_seeded_rng_is_solvable() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let round = PuzzleGenerator::default().generate_with(&mut rng);

    assert!(!round.is_degraded());
    for card in round.cards() {
        assert!((CARD_MIN..=CARD_MAX).contains(&card));
    }

    let witness = round
        .witness()
        .expect("solvable round has a witness")
        .to_string();
    let outcome = round.check(&witness).expect("witness evaluates");
    assert!(outcome.is_win());
}

#[test]
fn test_generate_exhausted_falls_back() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let generator = PuzzleGenerator::new(GeneratorConfig { max_attempts: 0 });
    let round = generator.generate_with(&mut rng);

    assert!(round.is_degraded());
    assert_eq!(round.cards(), FALLBACK_CARDS);
    assert!(round.witness().is_none());
}
