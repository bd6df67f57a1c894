//! Confetti pattern
//!
//! Random colored speckles that blink in and fade smoothly.

use embassy_time::Instant;
use rand_core::RngCore;

use super::Pattern;
use crate::{
    color::{Hsv, Rgb, fade_to_black_by, hsv2rgb, saturating_add_colors},
    random::{random8, random8_bounded, random16_bounded},
};

const DEFAULT_FADE_BY: u8 = 7;
const DEFAULT_SPECKLE_THRESHOLD: u8 = 100;
const SPECKLE_HUE_SPAN: u8 = 64;
const SPECKLE_SAT: u8 = 200;

/// Speckle pattern over an injected random source
///
/// Each frame decays the whole strip, then (with probability
/// `(255 - threshold) / 256`) adds one speckle at a random position with
/// a hue near the current phase. The random source is owned by the
/// pattern, so replaying the same seed replays the same frames.
#[derive(Debug, Clone)]
pub struct ConfettiPattern<R: RngCore> {
    rng: R,
    /// Per-frame decay amount
    fade_by: u8,
    /// Gate bytes above this value produce a speckle
    threshold: u8,
    /// Wrapping frame counter, drives the speckle hue
    hue: u8,
}

impl<R: RngCore> ConfettiPattern<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            fade_by: DEFAULT_FADE_BY,
            threshold: DEFAULT_SPECKLE_THRESHOLD,
            hue: 0,
        }
    }

    /// Set the per-frame decay amount
    #[must_use]
    pub fn with_fade_by(mut self, fade_by: u8) -> Self {
        self.fade_by = fade_by;
        self
    }

    /// Set the speckle gate threshold (higher = fewer speckles)
    #[must_use]
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Current hue phase (advances by one per rendered frame)
    pub const fn phase(&self) -> u8 {
        self.hue
    }
}

impl<R: RngCore> Pattern for ConfettiPattern<R> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        fade_to_black_by(leds, self.fade_by);

        // Draw order is fixed (gate, position, hue offset) so a replayed
        // random sequence reproduces the frame exactly.
        if random8(&mut self.rng) > self.threshold && !leds.is_empty() {
            let pos = random16_bounded(&mut self.rng, leds.len() as u16) as usize;
            let speckle = hsv2rgb(Hsv {
                hue: self
                    .hue
                    .wrapping_add(random8_bounded(&mut self.rng, SPECKLE_HUE_SPAN)),
                sat: SPECKLE_SAT,
                val: 255,
            });
            leds[pos] = saturating_add_colors(leds[pos], speckle);
        }

        self.hue = self.hue.wrapping_add(1);
    }

    fn reset(&mut self) {
        self.hue = 0;
    }
}
