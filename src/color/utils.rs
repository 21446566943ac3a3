//! Strip-wide color helpers
//!
//! Slice fills and decays in the `FastLED` manner, plus the two pixel-merge
//! rules the dot effects use (saturating add and channel-wise max).

use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};
use crate::math8::{qadd8, scale8};

/// Saturation used by [`fill_rainbow`] (matches the `FastLED` gradient).
const RAINBOW_SAT: u8 = 240;

/// Fill every pixel with one color
pub fn fill_solid(leds: &mut [Rgb], color: Rgb) {
    for led in leds {
        *led = color;
    }
}

/// Fill the strip with a hue gradient anchored at `start_hue`
///
/// `hue_delta` is the hue step per pixel and controls how many hues span the
/// strip (smaller = more stretched).
pub fn fill_rainbow(leds: &mut [Rgb], start_hue: u8, hue_delta: u8) {
    let mut hue = start_hue;
    for led in leds {
        *led = hsv2rgb(Hsv {
            hue,
            sat: RAINBOW_SAT,
            val: 255,
        });
        hue = hue.wrapping_add(hue_delta);
    }
}

/// Scale every channel of every pixel by `scale` (0-255 = 0.0-1.0)
pub fn nscale8(leds: &mut [Rgb], scale: u8) {
    for led in leds {
        led.r = scale8(led.r, scale);
        led.g = scale8(led.g, scale);
        led.b = scale8(led.b, scale);
    }
}

/// Decay every pixel toward black by `amount` out of 255
pub fn fade_to_black_by(leds: &mut [Rgb], amount: u8) {
    nscale8(leds, 255 - amount);
}

/// Per-channel saturating add of `b` onto `a`
#[inline]
pub const fn qadd_rgb(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: qadd8(a.r, b.r),
        g: qadd8(a.g, b.g),
        b: qadd8(a.b, b.b),
    }
}

/// Per-channel maximum, the "brighten" merge used when dots overlap
#[inline]
pub fn rgb_max(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.max(b.r),
        g: a.g.max(b.g),
        b: a.b.max(b.b),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
