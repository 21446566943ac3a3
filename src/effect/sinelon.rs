//! Single beat-driven dot on a decaying background

use embassy_time::Instant;

use super::bpm::bpm_for;
use super::{Effect, EffectState};
use crate::beat::beatsin16;
use crate::color::{Hsv, Rgb, fade_to_black_by, hsv2rgb, qadd_rgb};
use crate::scheduler::SpeedLevel;

const DECAY: u8 = 20;

/// One bright dot swinging across the strip on a sine of wall-clock time,
/// at a fifth of the Bpm effect's pulse rate.
#[derive(Debug, Clone, Default)]
pub struct SinelonEffect;

impl SinelonEffect {
    pub const fn new() -> Self {
        Self
    }
}

impl Effect for SinelonEffect {
    const CONTINUOUS: bool = true;

    fn advance(
        &mut self,
        fx: &mut EffectState,
        _speed: SpeedLevel,
        _now: Instant,
        _leds: &mut [Rgb],
    ) {
        fx.cycle_hue();
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(
        &mut self,
        fx: &mut EffectState,
        speed: SpeedLevel,
        now: Instant,
        leds: &mut [Rgb],
    ) {
        fade_to_black_by(leds, DECAY);

        if leds.is_empty() {
            return;
        }
        let last = (leds.len() - 1) as u16;
        let pos = usize::from(beatsin16(bpm_for(speed) / 5, 0, last, now));
        let dot = hsv2rgb(Hsv {
            hue: fx.hue,
            sat: 255,
            val: 192,
        });
        leds[pos] = qadd_rgb(leds[pos], dot);
    }
}
