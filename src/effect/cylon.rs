//! Single dot sweeping back and forth

use embassy_time::Instant;

use super::{Effect, EffectState};
use crate::color::{Hsv, Rgb, hsv2rgb, nscale8};
use crate::scheduler::SpeedLevel;

/// Per-tick decay factor for the trail behind the dot.
const TRAIL_SCALE: u8 = 247;

/// Bright dot ping-ponging across the strip, leaving a fading trail
///
/// Scan position and direction live in [`EffectState`] and keep their place
/// when the active effect changes.
#[derive(Debug, Clone, Default)]
pub struct CylonEffect;

impl CylonEffect {
    pub const fn new() -> Self {
        Self
    }
}

impl Effect for CylonEffect {
    fn advance(
        &mut self,
        fx: &mut EffectState,
        _speed: SpeedLevel,
        _now: Instant,
        leds: &mut [Rgb],
    ) {
        fx.cycle_hue();
        nscale8(leds, TRAIL_SCALE);

        if leds.is_empty() {
            return;
        }
        // Reverse at either end before stepping
        if fx.scan_pos >= leds.len() - 1 {
            fx.scan_forward = false;
        } else if fx.scan_pos == 0 {
            fx.scan_forward = true;
        }
        if fx.scan_forward {
            fx.scan_pos += 1;
        } else {
            fx.scan_pos = fx.scan_pos.saturating_sub(1);
        }

        leds[fx.scan_pos.min(leds.len() - 1)] = hsv2rgb(Hsv {
            hue: fx.hue,
            sat: 255,
            val: 255,
        });
    }
}
