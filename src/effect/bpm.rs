//! Palette gradient pulsing at a beats-per-minute rate

use embassy_time::Instant;

use super::{Effect, EffectState};
use crate::beat::beatsin8;
use crate::color::Rgb;
use crate::palette::{PARTY_PALETTE, color_from_palette};
use crate::scheduler::SpeedLevel;

/// Pulse rate per speed level.
const BPM_BY_SPEED: [u16; 7] = [10, 15, 30, 60, 90, 120, 150];

pub(crate) fn bpm_for(speed: SpeedLevel) -> u16 {
    BPM_BY_SPEED[speed.index()]
}

/// Whole-strip palette gradient whose brightness pulses on the beat
///
/// The hue cursor advances on the update gate; brightness and color index
/// are recomputed from wall-clock time every frame.
#[derive(Debug, Clone, Default)]
pub struct BpmEffect;

impl BpmEffect {
    pub const fn new() -> Self {
        Self
    }
}

impl Effect for BpmEffect {
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
        let beat = beatsin8(bpm_for(speed), 64, 255, now);
        for (i, led) in leds.iter_mut().enumerate() {
            let i = i as u8;
            let index = fx.hue.wrapping_add(i.wrapping_mul(2));
            let brightness = beat.wrapping_sub(fx.hue).wrapping_add(i.wrapping_mul(10));
            *led = color_from_palette(&PARTY_PALETTE, index, brightness);
        }
    }
}
