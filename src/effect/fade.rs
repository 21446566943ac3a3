//! Solid fill walking the hue circle

use embassy_time::Instant;

use super::{Effect, EffectState};
use crate::color::{Hsv, Rgb, fill_solid, hsv2rgb};
use crate::scheduler::SpeedLevel;

/// Fills the strip with one fully saturated color, advancing the hue cursor
/// one unit per gated tick so the whole strip slowly cycles the spectrum.
#[derive(Debug, Clone, Default)]
pub struct FadeEffect;

impl FadeEffect {
    pub const fn new() -> Self {
        Self
    }
}

impl Effect for FadeEffect {
    fn advance(
        &mut self,
        fx: &mut EffectState,
        _speed: SpeedLevel,
        _now: Instant,
        leds: &mut [Rgb],
    ) {
        fx.cycle_hue();
        fill_solid(
            leds,
            hsv2rgb(Hsv {
                hue: fx.hue,
                sat: 255,
                val: 255,
            }),
        );
    }
}
