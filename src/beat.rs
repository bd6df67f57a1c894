//! Time-synchronized waveform generators
//!
//! Fixed-point oscillators driven by a shared [`Instant`] time base. Beat
//! rates are expressed in cycles per minute (BPM) and accumulate in Q8.8,
//! so all generators with the same rate stay in phase with each other.
//! The sine itself is an 8-sector linear approximation, no floats.

use embassy_time::Instant;

use crate::math8::scale16;

const SIN16_BASE: [u16; 8] = [0, 6393, 12539, 18204, 23170, 27245, 30273, 32137];
const SIN16_SLOPE: [u8; 8] = [49, 48, 44, 38, 31, 23, 14, 4];

/// Fixed-point sine over a full u16 circle (0-65535 = 0-360 degrees)
///
/// Returns a value in `[-32767, 32767]`. Piecewise linear with 8 sectors
/// per quarter wave, accurate to within about 0.7% of a true sine.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const fn sin16(theta: u16) -> i16 {
    let mut offset = (theta & 0x3FFF) >> 3; // 0..2047
    if theta & 0x4000 != 0 {
        offset = 2047 - offset;
    }

    let section = (offset / 256) as usize; // 0..7
    let base = SIN16_BASE[section];
    let slope = SIN16_SLOPE[section];

    let sec_offset = (offset as u8) / 2; // 0..127
    let mx = slope as u16 * sec_offset as u16;
    let y = (mx + base) as i16;

    if theta & 0x8000 != 0 { -y } else { y }
}

/// Free-running beat counter in Q8.8 cycles
///
/// `bpm88` is the rate in Q8.8 beats per minute. One full cycle spans the
/// whole u16 range, so the return value is directly usable as a [`sin16`]
/// angle. Wraps with the 32-bit millisecond clock, like the rest of the
/// time base.
#[allow(clippy::cast_possible_truncation)]
pub fn beat88(bpm88: u16, now: Instant) -> u16 {
    let millis = now.as_millis() as u32;
    (millis
        .wrapping_mul(u32::from(bpm88))
        .wrapping_mul(280)
        >> 16) as u16
}

/// Free-running beat counter for whole-number BPM rates
pub fn beat16(mut bpm: u16, now: Instant) -> u16 {
    // Rates below 256 are whole BPM; promote to Q8.8
    if bpm < 256 {
        bpm <<= 8;
    }
    beat88(bpm, now)
}

/// Sinusoidal oscillation between `lowest` and `highest` (both inclusive)
///
/// Produces a smoothly sweeping integer at `bpm` cycles per minute,
/// suitable for bouncing a dot along a strip.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn beatsin16(bpm: u16, lowest: u16, highest: u16, now: Instant) -> u16 {
    let beat = beat16(bpm, now);
    let wave = (i32::from(sin16(beat)) + 32768) as u16;
    let range = highest - lowest;
    lowest + scale16(wave, range)
}
