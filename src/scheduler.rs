//! Timing gates and effect update cadence
//!
//! Two independent elapsed-time gates drive the loop: the update gate decides
//! when an effect advances its state (per-effect, per-speed thresholds) and
//! the render gate decides when the frame is pushed to the output sink (fixed
//! rate). Decoupling the two lets per-pixel compositing run cheaper than the
//! physical refresh while beat-driven effects render every frame.

use embassy_time::{Duration, Instant};

use crate::effect::EffectId;

/// Target output refresh rate (60 FPS)
pub const RENDER_FPS: u32 = 60;

/// Render-gate threshold derived from the target refresh rate
pub const RENDER_INTERVAL: Duration = Duration::from_millis(1000 / RENDER_FPS as u64);

/// Effect speed setting, clamped to the valid 1..=7 range
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(7);

    /// Build from a raw setting; out-of-range values clamp to the nearest
    /// bound rather than indexing out of the threshold tables.
    pub fn new(raw: u8) -> Self {
        Self(raw.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub(crate) const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        Self(4)
    }
}

const FLASH_INTERVALS_MS: [u64; 7] = [4000, 2000, 1000, 500, 350, 200, 100];
const FADE_INTERVALS_MS: [u64; 7] = [200, 100, 50, 33, 20, 10, 4];
const RAINBOW_INTERVALS_MS: [u64; 7] = [100, 50, 33, 17, 12, 10, 4];
const CONFETTI_INTERVALS_MS: [u64; 7] = [50, 33, 23, 17, 13, 10, 8];

/// Cylon speed is expressed as strip sweep rate, percent of the strip length
/// per second, and converted to a per-pixel interval at lookup time.
const CYLON_PERCENT_PER_SECOND: [u64; 7] = [10, 25, 50, 75, 100, 150, 200];

fn cylon_interval_ms(strip_len: usize, index: usize) -> u64 {
    let pixels_per_second = strip_len as u64 * CYLON_PERCENT_PER_SECOND[index] / 100;
    if pixels_per_second == 0 {
        // Sub-pixel-per-second sweep on a tiny strip; fall back to one step
        // per second rather than dividing by zero.
        return 1000;
    }
    (1000 / pixels_per_second).max(1)
}

/// Update-gate threshold for `effect` at `speed`
///
/// Bpm and Sinelon advance their hue cursor at the rainbow cadence; their
/// motion itself is beat-driven and rendered every frame.
pub fn update_interval(effect: EffectId, speed: SpeedLevel, strip_len: usize) -> Duration {
    let index = speed.index();
    let ms = match effect {
        EffectId::Flash => FLASH_INTERVALS_MS[index],
        EffectId::Fade => FADE_INTERVALS_MS[index],
        EffectId::Confetti => CONFETTI_INTERVALS_MS[index],
        EffectId::Cylon => cylon_interval_ms(strip_len, index),
        EffectId::Rainbow
        | EffectId::Juggle
        | EffectId::Bpm
        | EffectId::Sinelon
        | EffectId::Visualize => RAINBOW_INTERVALS_MS[index],
    };
    Duration::from_millis(ms)
}

/// Elapsed-time gate
///
/// Permits an action only once more than `threshold` has passed since the
/// last permission. The first poll always fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gate {
    last_fired: Option<Instant>,
}

impl Gate {
    pub const fn new() -> Self {
        Self { last_fired: None }
    }

    pub fn poll(&mut self, now: Instant, threshold: Duration) -> bool {
        let fired = match self.last_fired {
            None => true,
            Some(last) => now.duration_since(last) > threshold,
        };
        if fired {
            self.last_fired = Some(now);
        }
        fired
    }
}
