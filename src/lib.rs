#![no_std]

pub mod beat;
pub mod color;
pub mod math8;
pub mod pattern;
pub mod random;

pub use pattern::{
    ConfettiPattern, FoldedRainbowPattern, Pattern, PatternId, PatternSlot,
    RainbowPattern, SinelonPattern,
};

pub use beat::beatsin16;
pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};
