//! Eight beat-driven dots weaving in and out of sync

use embassy_time::Instant;

use super::{Effect, EffectState};
use crate::beat::beatsin16;
use crate::color::{Hsv, Rgb, fade_to_black_by, hsv2rgb, rgb_max};
use crate::scheduler::SpeedLevel;

const DECAY: u8 = 20;
const DOT_COUNT: u16 = 8;
/// Hue spacing between the dots.
const DOT_HUE_STEP: u8 = 32;

/// Eight dots, each on its own slightly offset beat frequency, merged with a
/// channel-max blend where they cross. Position comes straight from the beat
/// function of wall-clock time, so this renders every frame and has no gated
/// state of its own.
#[derive(Debug, Clone, Default)]
pub struct JuggleEffect;

impl JuggleEffect {
    pub const fn new() -> Self {
        Self
    }
}

impl Effect for JuggleEffect {
    const CONTINUOUS: bool = true;

    fn advance(
        &mut self,
        _fx: &mut EffectState,
        _speed: SpeedLevel,
        _now: Instant,
        _leds: &mut [Rgb],
    ) {
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(
        &mut self,
        _fx: &mut EffectState,
        _speed: SpeedLevel,
        now: Instant,
        leds: &mut [Rgb],
    ) {
        fade_to_black_by(leds, DECAY);

        if leds.is_empty() {
            return;
        }
        let last = (leds.len() - 1) as u16;
        let mut dot_hue: u8 = 0;
        for i in 0..DOT_COUNT {
            let pos = usize::from(beatsin16(i + 7, 0, last, now));
            let dot = hsv2rgb(Hsv {
                hue: dot_hue,
                sat: 200,
                val: 255,
            });
            leds[pos] = rgb_max(leds[pos], dot);
            dot_hue = dot_hue.wrapping_add(DOT_HUE_STEP);
        }
    }
}
