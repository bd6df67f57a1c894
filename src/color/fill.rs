use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};

/// Fill a slice with a rainbow gradient
///
/// The first pixel gets `initial_hue`; each following pixel advances the
/// hue by `hue_step` (wrapping around the color wheel). Saturation and
/// brightness are pinned at full.
pub fn fill_rainbow(leds: &mut [Rgb], initial_hue: u8, hue_step: u8) {
    let mut hue = initial_hue;
    for led in leds.iter_mut() {
        *led = hsv2rgb(Hsv {
            hue,
            sat: 255,
            val: 255,
        });
        hue = hue.wrapping_add(hue_step);
    }
}

/// Mirror the first `fold` pixels onto the tail of the slice in reverse
///
/// Pixel `i` is copied to pixel `len - 1 - i` for `i in 0..fold`. On a
/// strip folded back on itself this makes both physical halves show the
/// same image. Copies that would land inside the source region
/// `[0, fold)` are skipped, so the first `fold` pixels are never
/// overwritten even when the slice is shorter than two folds.
pub fn mirror_fold(leds: &mut [Rgb], fold: usize) {
    let len = leds.len();
    for i in 0..fold.min(len) {
        let mirrored = len - 1 - i;
        if mirrored >= fold {
            leds[mirrored] = leds[i];
        }
    }
}
