//! Solid color flash cycling red, green, blue

use embassy_time::Instant;

use super::{Effect, EffectState};
use crate::color::{Rgb, fill_solid};
use crate::scheduler::SpeedLevel;

const FLASH_COLORS: [Rgb; 3] = [
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 0, g: 255, b: 0 },
    Rgb { r: 0, g: 0, b: 255 },
];

/// Cycles the whole strip through solid red, green and blue
///
/// The phase is effect-local: reselecting the effect starts over at red.
#[derive(Debug, Clone, Default)]
pub struct FlashEffect {
    phase: u8,
}

impl FlashEffect {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }
}

impl Effect for FlashEffect {
    fn advance(
        &mut self,
        _fx: &mut EffectState,
        _speed: SpeedLevel,
        _now: Instant,
        leds: &mut [Rgb],
    ) {
        fill_solid(leds, FLASH_COLORS[usize::from(self.phase)]);
        self.phase = (self.phase + 1) % 3;
    }

    fn reset(&mut self) {
        self.phase = 0;
    }
}
