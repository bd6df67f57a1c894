mod fill;
mod utils;

pub use fill::{fill_rainbow, mirror_fold};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use smart_leds::hsv::hsv2rgb;
pub use utils::{fade_to_black_by, max_colors, saturating_add_colors};

pub type Rgb = RGB8;
pub type Hsv = HSV;
