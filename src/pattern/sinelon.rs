//! Sinelon pattern
//!
//! Two colored dots sweeping back and forth with fading trails.

use embassy_time::Instant;

use super::Pattern;
use crate::{
    beat::beatsin16,
    color::{Hsv, Rgb, fade_to_black_by, hsv2rgb, max_colors},
};

const DEFAULT_FADE_BY: u8 = 20;
const DEFAULT_FIRST_BPM: u16 = 11;
const DEFAULT_SECOND_BPM: u16 = 13;

/// Complementary hue offset between the two dots
const SECOND_DOT_HUE_OFFSET: u8 = 128;

/// Two sweeping dots driven by out-of-phase sine oscillators
///
/// The dots run at slightly different beat rates, so they drift in and
/// out of sync over time. Each dot is max-blended onto the strip, which
/// keeps it visible on top of the other dot's trail.
#[derive(Debug, Clone)]
pub struct SinelonPattern {
    /// Per-frame decay amount
    fade_by: u8,
    /// Sweep rates in beats per minute
    first_bpm: u16,
    second_bpm: u16,
    /// Wrapping frame counter, drives the dot hues
    hue: u8,
}

impl Default for SinelonPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl SinelonPattern {
    pub const fn new() -> Self {
        Self {
            fade_by: DEFAULT_FADE_BY,
            first_bpm: DEFAULT_FIRST_BPM,
            second_bpm: DEFAULT_SECOND_BPM,
            hue: 0,
        }
    }

    /// Set the per-frame decay amount
    #[must_use]
    pub const fn with_fade_by(mut self, fade_by: u8) -> Self {
        self.fade_by = fade_by;
        self
    }

    /// Set the sweep rates of the two dots
    #[must_use]
    pub const fn with_bpm(mut self, first: u16, second: u16) -> Self {
        self.first_bpm = first;
        self.second_bpm = second;
        self
    }

    /// Current hue phase (advances by one per rendered frame)
    pub const fn phase(&self) -> u8 {
        self.hue
    }

    fn draw_dot(leds: &mut [Rgb], pos: usize, hue: u8) {
        let dot = hsv2rgb(Hsv {
            hue,
            sat: 255,
            val: 255,
        });
        leds[pos] = max_colors(leds[pos], dot);
    }
}

impl Pattern for SinelonPattern {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        fade_to_black_by(leds, self.fade_by);

        if !leds.is_empty() {
            // Oscillate over 0..=len-1 so the dots stay in bounds.
            let top = (leds.len() - 1) as u16;
            let pos = beatsin16(self.first_bpm, 0, top, now) as usize;
            Self::draw_dot(leds, pos, self.hue);

            let pos = beatsin16(self.second_bpm, 0, top, now) as usize;
            Self::draw_dot(leds, pos, self.hue.wrapping_add(SECOND_DOT_HUE_OFFSET));
        }

        self.hue = self.hue.wrapping_add(1);
    }

    fn reset(&mut self) {
        self.hue = 0;
    }
}
