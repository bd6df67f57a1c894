//! Bounded uniform draws over an injected random source
//!
//! Thin helpers over [`rand_core::RngCore`] so callers control seeding and
//! can replay a sequence deterministically. Every helper consumes exactly
//! one `next_u32`, which keeps a scripted source and a real one in
//! lockstep. Bounded draws scale down from the full-width draw instead of
//! rejecting, so they complete in constant time.

use rand_core::RngCore;

/// Draw one uniform byte
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn random8<R: RngCore>(rng: &mut R) -> u8 {
    rng.next_u32() as u8
}

/// Draw one uniform 16-bit value
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn random16<R: RngCore>(rng: &mut R) -> u16 {
    rng.next_u32() as u16
}

/// Draw a uniform value in `[0, bound)`
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn random8_bounded<R: RngCore>(rng: &mut R, bound: u8) -> u8 {
    ((u16::from(random8(rng)) * u16::from(bound)) >> 8) as u8
}

/// Draw a uniform value in `[0, bound)`
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn random16_bounded<R: RngCore>(rng: &mut R, bound: u16) -> u16 {
    ((u32::from(random16(rng)) * u32::from(bound)) >> 16) as u16
}
