//! Rainbow cycling patterns
//!
//! Provides two variants:
//! - `RainbowPattern`: hue gradient across the whole strip
//! - `FoldedRainbowPattern`: gradient over the front half of a strip that
//!   is physically folded back on itself, mirrored onto the rear half

use embassy_time::Instant;

use super::Pattern;
use crate::color::{Rgb, fill_rainbow, mirror_fold};

const DEFAULT_HUE_STEP: u8 = 7;

/// Pixels in one physical half of the folded strip this pattern was
/// written for (64 LEDs as two co-located 32-pixel runs).
pub const DEFAULT_FOLD: usize = 32;

/// Full-strip rainbow gradient, scrolling one hue step per frame
#[derive(Debug, Clone)]
pub struct RainbowPattern {
    /// Hue advance per pixel (out of the 256-step color wheel)
    hue_step: u8,
    /// Wrapping frame counter, anchors the gradient
    hue: u8,
}

impl Default for RainbowPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl RainbowPattern {
    pub const fn new() -> Self {
        Self {
            hue_step: DEFAULT_HUE_STEP,
            hue: 0,
        }
    }

    /// Set the hue advance per pixel
    #[must_use]
    pub const fn with_hue_step(mut self, hue_step: u8) -> Self {
        self.hue_step = hue_step;
        self
    }

    /// Current hue phase (advances by one per rendered frame)
    pub const fn phase(&self) -> u8 {
        self.hue
    }
}

impl Pattern for RainbowPattern {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        fill_rainbow(leds, self.hue, self.hue_step);
        self.hue = self.hue.wrapping_add(1);
    }

    fn reset(&mut self) {
        self.hue = 0;
    }
}

/// Rainbow for a strip folded into two co-located halves
///
/// Renders the gradient over the first `fold` pixels and mirrors it onto
/// the tail in reverse order, so both physical halves light up
/// identically. With the default fold of 32 this expects a 64-pixel
/// buffer; other lengths mirror as much as fits.
#[derive(Debug, Clone)]
pub struct FoldedRainbowPattern {
    /// Number of leading pixels carrying the gradient
    fold: usize,
    /// Hue advance per pixel
    hue_step: u8,
    /// Wrapping frame counter, anchors the gradient
    hue: u8,
}

impl Default for FoldedRainbowPattern {
    fn default() -> Self {
        Self::new(DEFAULT_FOLD)
    }
}

impl FoldedRainbowPattern {
    pub const fn new(fold: usize) -> Self {
        Self {
            fold,
            hue_step: DEFAULT_HUE_STEP,
            hue: 0,
        }
    }

    /// Set the hue advance per pixel
    #[must_use]
    pub const fn with_hue_step(mut self, hue_step: u8) -> Self {
        self.hue_step = hue_step;
        self
    }

    /// Current hue phase (advances by one per rendered frame)
    pub const fn phase(&self) -> u8 {
        self.hue
    }
}

impl Pattern for FoldedRainbowPattern {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        let fold = self.fold.min(leds.len());
        let (front, _) = leds.split_at_mut(fold);
        fill_rainbow(front, self.hue, self.hue_step);
        mirror_fold(leds, self.fold);
        self.hue = self.hue.wrapping_add(1);
    }

    fn reset(&mut self) {
        self.hue = 0;
    }
}
