use log::{debug, warn};
use rand::Rng;

use crate::puzzle::constants::{CARD_MAX, CARD_MIN, FALLBACK_CARDS, MAX_GENERATION_ATTEMPTS};
use crate::puzzle::round::Round;
use crate::solver::solve;

/// Configuration for puzzle generation
pub struct GeneratorConfig {
    /// Attempts before giving up and returning the degraded fallback.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_GENERATION_ATTEMPTS,
        }
    }
}

/// Draws random card sets until the solver proves one solvable.
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate a solvable round using the thread-local RNG.
    pub fn generate(&self) -> Round {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generate a solvable round from the given RNG.
    ///
    /// Falls back to [`FALLBACK_CARDS`] with no witness once the attempt
    /// ceiling is exhausted; the caller sees this through
    /// [`Round::is_degraded`] rather than a panic.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Round {
        for attempt in 1..=self.config.max_attempts {
            let cards = draw_cards(rng);
            if let Some(witness) = solve(cards) {
                debug!("Drew solvable cards {:?} on attempt {}", cards, attempt);
                return Round::new(cards, Some(witness));
            }
        }

        warn!(
            "No solvable card set within {} attempts, falling back to {:?}",
            self.config.max_attempts, FALLBACK_CARDS
        );
        Round::new(FALLBACK_CARDS, None)
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

fn draw_cards<R: Rng>(rng: &mut R) -> [u8; 4] {
    let mut cards = [0u8; 4];
    for card in &mut cards {
        *card = rng.gen_range(CARD_MIN..=CARD_MAX);
    }
    cards
}
