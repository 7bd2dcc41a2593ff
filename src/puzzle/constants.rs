// Configuration constants for puzzle generation
pub const CARD_MIN: u8 = 1;
pub const CARD_MAX: u8 = 13;
pub const MAX_GENERATION_ATTEMPTS: usize = 5000;
pub const FALLBACK_CARDS: [u8; 4] = [1, 1, 1, 1];
