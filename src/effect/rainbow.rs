//! Moving hue gradient

use embassy_time::Instant;

use super::{Effect, EffectState};
use crate::color::{Rgb, fill_rainbow};
use crate::scheduler::SpeedLevel;

/// Hue step per pixel; controls how many hues span the strip.
const HUE_DELTA: u8 = 7;

/// Hue gradient anchored at the cursor, scrolling as the cursor advances
#[derive(Debug, Clone, Default)]
pub struct RainbowEffect;

impl RainbowEffect {
    pub const fn new() -> Self {
        Self
    }
}

impl Effect for RainbowEffect {
    fn advance(
        &mut self,
        fx: &mut EffectState,
        _speed: SpeedLevel,
        _now: Instant,
        leds: &mut [Rgb],
    ) {
        fx.cycle_hue();
        fill_rainbow(leds, fx.hue, HUE_DELTA);
    }
}
