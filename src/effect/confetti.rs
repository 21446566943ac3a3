//! Random sparkles on a decaying background

use embassy_time::Instant;

use super::{Effect, EffectState};
use crate::color::{Hsv, Rgb, fade_to_black_by, hsv2rgb, qadd_rgb};
use crate::scheduler::SpeedLevel;

const DECAY: u8 = 10;
const HUE_JITTER: u32 = 64;

/// Decays the strip each tick, then lights one pixel at a random position
/// with a hue near the cursor.
#[derive(Debug, Clone, Default)]
pub struct ConfettiEffect;

impl ConfettiEffect {
    pub const fn new() -> Self {
        Self
    }
}

impl Effect for ConfettiEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn advance(
        &mut self,
        fx: &mut EffectState,
        _speed: SpeedLevel,
        _now: Instant,
        leds: &mut [Rgb],
    ) {
        fx.cycle_hue();
        fade_to_black_by(leds, DECAY);

        if leds.is_empty() {
            return;
        }
        let pos = fx.rng.below(leds.len() as u32) as usize;
        let jitter = fx.rng.below(HUE_JITTER) as u8;
        let sparkle = hsv2rgb(Hsv {
            hue: fx.hue.wrapping_add(jitter),
            sat: 200,
            val: 255,
        });
        leds[pos] = qadd_rgb(leds[pos], sparkle);
    }
}
