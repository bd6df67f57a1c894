//! Pattern system with compile-time known pattern variants
//!
//! All patterns are stored in an enum to avoid heap allocations.
//! Each pattern implements the `Pattern` trait and carries its own hue
//! phase, so no process-wide state is involved.

mod confetti;
mod rainbow;
mod sinelon;

use embassy_time::Instant;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use rand::{SeedableRng, rngs::SmallRng};

pub use confetti::ConfettiPattern;
pub use rainbow::{DEFAULT_FOLD, FoldedRainbowPattern, RainbowPattern};
pub use sinelon::SinelonPattern;

use crate::color::Rgb;

const PATTERN_NAME_RAINBOW: &str = "rainbow";
const PATTERN_NAME_FOLDED_RAINBOW: &str = "folded_rainbow";
const PATTERN_NAME_CONFETTI: &str = "confetti";
const PATTERN_NAME_SINELON: &str = "sinelon";

const PATTERN_ID_RAINBOW: u8 = 0;
const PATTERN_ID_FOLDED_RAINBOW: u8 = 1;
const PATTERN_ID_CONFETTI: u8 = 2;
const PATTERN_ID_SINELON: u8 = 3;

/// One frame-generating animation
///
/// A pattern borrows the pixel buffer for the duration of one call,
/// mutates it in place, and advances its private phase counter. It must
/// never index outside the buffer and never resize it.
pub trait Pattern {
    /// Render a single frame
    fn render(&mut self, now: Instant, leds: &mut [Rgb]);

    /// Reset pattern state
    fn reset(&mut self) {}
}

/// Pattern slot - enum containing all possible patterns
#[derive(Debug, Clone)]
pub enum PatternSlot {
    /// Full-strip rainbow gradient
    Rainbow(RainbowPattern),
    /// Mirrored rainbow for a folded strip
    FoldedRainbow(FoldedRainbowPattern),
    /// Random fading speckles
    Confetti(ConfettiPattern<SmallRng>),
    /// Two sweeping dots with trails
    Sinelon(SinelonPattern),
}

/// Known pattern ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternId {
    Rainbow = PATTERN_ID_RAINBOW,
    FoldedRainbow = PATTERN_ID_FOLDED_RAINBOW,
    Confetti = PATTERN_ID_CONFETTI,
    Sinelon = PATTERN_ID_SINELON,
}

impl Default for PatternSlot {
    fn default() -> Self {
        Self::Rainbow(RainbowPattern::new())
    }
}

impl PatternId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_RAINBOW => Self::Rainbow,
            PATTERN_ID_FOLDED_RAINBOW => Self::FoldedRainbow,
            PATTERN_ID_CONFETTI => Self::Confetti,
            PATTERN_ID_SINELON => Self::Sinelon,
            _ => return None,
        })
    }

    /// Build a slot for this pattern with default tuning
    ///
    /// `seed` feeds the random source of patterns that use one; patterns
    /// without randomness ignore it.
    pub fn to_slot(self, seed: u64) -> PatternSlot {
        #[cfg(feature = "esp32-log")]
        println!("pattern: {}", self.as_str());

        match self {
            Self::Rainbow => PatternSlot::Rainbow(RainbowPattern::new()),
            Self::FoldedRainbow => {
                PatternSlot::FoldedRainbow(FoldedRainbowPattern::new(DEFAULT_FOLD))
            }
            Self::Confetti => {
                PatternSlot::Confetti(ConfettiPattern::new(SmallRng::seed_from_u64(seed)))
            }
            Self::Sinelon => PatternSlot::Sinelon(SinelonPattern::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => PATTERN_NAME_RAINBOW,
            Self::FoldedRainbow => PATTERN_NAME_FOLDED_RAINBOW,
            Self::Confetti => PATTERN_NAME_CONFETTI,
            Self::Sinelon => PATTERN_NAME_SINELON,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_RAINBOW => Some(Self::Rainbow),
            PATTERN_NAME_FOLDED_RAINBOW => Some(Self::FoldedRainbow),
            PATTERN_NAME_CONFETTI => Some(Self::Confetti),
            PATTERN_NAME_SINELON => Some(Self::Sinelon),
            _ => None,
        }
    }
}

impl PatternSlot {
    /// Render the current pattern
    pub fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        match self {
            Self::Rainbow(pattern) => pattern.render(now, leds),
            Self::FoldedRainbow(pattern) => pattern.render(now, leds),
            Self::Confetti(pattern) => pattern.render(now, leds),
            Self::Sinelon(pattern) => pattern.render(now, leds),
        }
    }

    /// Reset the pattern state
    pub fn reset(&mut self) {
        match self {
            Self::Rainbow(pattern) => Pattern::reset(pattern),
            Self::FoldedRainbow(pattern) => Pattern::reset(pattern),
            Self::Confetti(pattern) => Pattern::reset(pattern),
            Self::Sinelon(pattern) => Pattern::reset(pattern),
        }
    }

    /// Current hue phase of the pattern
    pub const fn phase(&self) -> u8 {
        match self {
            Self::Rainbow(pattern) => pattern.phase(),
            Self::FoldedRainbow(pattern) => pattern.phase(),
            Self::Confetti(pattern) => pattern.phase(),
            Self::Sinelon(pattern) => pattern.phase(),
        }
    }

    /// Get the pattern ID for external observation
    pub const fn id(&self) -> PatternId {
        match self {
            Self::Rainbow(_) => PatternId::Rainbow,
            Self::FoldedRainbow(_) => PatternId::FoldedRainbow,
            Self::Confetti(_) => PatternId::Confetti,
            Self::Sinelon(_) => PatternId::Sinelon,
        }
    }
}
