mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use smart_leds::hsv::hsv2rgb;
pub use utils::{
    fade_to_black_by, fill_rainbow, fill_solid, nscale8, qadd_rgb, rgb_from_u32, rgb_max,
};

pub type Rgb = RGB8;
pub type Hsv = HSV;
