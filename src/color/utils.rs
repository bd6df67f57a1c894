use crate::{
    color::Rgb,
    math8::{qadd8, scale8},
};

/// Fade every pixel toward black by `amount` (0 = no change, 255 = black)
///
/// Each channel keeps `(255 - amount) / 255` of its value, rounding
/// toward zero, so repeated calls produce smooth decaying trails and
/// always reach black eventually.
pub fn fade_to_black_by(leds: &mut [Rgb], amount: u8) {
    let keep = 255 - amount;
    for led in leds.iter_mut() {
        led.r = scale8(led.r, keep);
        led.g = scale8(led.g, keep);
        led.b = scale8(led.b, keep);
    }
}

/// Add two RGB colors with per-channel saturation
#[inline]
pub const fn saturating_add_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: qadd8(a.r, b.r),
        g: qadd8(a.g, b.g),
        b: qadd8(a.b, b.b),
    }
}

/// Combine two RGB colors by taking the per-channel maximum
///
/// Brightens without ever dimming an already-lit channel, which keeps a
/// moving dot visible on top of a fading trail.
#[inline]
pub fn max_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.max(b.r),
        g: a.g.max(b.g),
        b: a.b.max(b.b),
    }
}
