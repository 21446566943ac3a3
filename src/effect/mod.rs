//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations. Each effect
//! implements the [`Effect`] trait: `advance` runs when the update gate
//! fires and owns all gated state changes, while `render` runs every frame
//! for effects whose motion is a pure function of wall-clock time.

mod bpm;
mod confetti;
mod cylon;
mod fade;
mod flash;
mod juggle;
mod rainbow;
mod sinelon;

use embassy_time::Instant;

pub use bpm::BpmEffect;
pub use confetti::ConfettiEffect;
pub use cylon::CylonEffect;
pub use fade::FadeEffect;
pub use flash::FlashEffect;
pub use juggle::JuggleEffect;
pub use rainbow::RainbowEffect;
pub use sinelon::SinelonEffect;

use crate::color::Rgb;
use crate::rand8::Rand8;
use crate::scheduler::SpeedLevel;

const EFFECT_NAME_FLASH: &str = "Flash";
const EFFECT_NAME_FADE: &str = "Fade";
const EFFECT_NAME_RAINBOW: &str = "Rainbow";
const EFFECT_NAME_CONFETTI: &str = "Confetti";
const EFFECT_NAME_CYLON: &str = "Cylon";
const EFFECT_NAME_JUGGLE: &str = "Juggle";
const EFFECT_NAME_BPM: &str = "BPM";
const EFFECT_NAME_SINELON: &str = "Sinelon";
const EFFECT_NAME_VISUALIZE: &str = "Visualize";

const EFFECT_ID_FLASH: u8 = 0;
const EFFECT_ID_FADE: u8 = 1;
const EFFECT_ID_RAINBOW: u8 = 2;
const EFFECT_ID_CONFETTI: u8 = 3;
const EFFECT_ID_CYLON: u8 = 4;
const EFFECT_ID_JUGGLE: u8 = 5;
const EFFECT_ID_BPM: u8 = 6;
const EFFECT_ID_SINELON: u8 = 7;
const EFFECT_ID_VISUALIZE: u8 = 8;

const RNG_SEED: u64 = 0x1d87_1096_45b1_9aa5;

/// Progress state shared across effects
///
/// The hue cursor keeps cycling and the scan position keeps its place when
/// the active effect changes; only effect-local state (the flash phase) is
/// rebuilt on selection.
#[derive(Debug, Clone)]
pub(crate) struct EffectState {
    /// Free-running 8-bit hue cursor, wraps at 256
    pub hue: u8,
    /// Cylon scan position
    pub scan_pos: usize,
    /// Cylon scan direction
    pub scan_forward: bool,
    pub rng: Rand8,
}

impl EffectState {
    pub(crate) const fn new() -> Self {
        Self {
            hue: 0,
            scan_pos: 0,
            scan_forward: true,
            rng: Rand8::new(RNG_SEED),
        }
    }

    pub(crate) fn cycle_hue(&mut self) {
        self.hue = self.hue.wrapping_add(1);
    }
}

pub(crate) trait Effect {
    /// Motion is a pure function of wall-clock time; the frame must be
    /// re-rendered every frame rather than on the update gate.
    const CONTINUOUS: bool = false;

    /// Advance effect-local progress. Called when the update gate fires.
    fn advance(
        &mut self,
        fx: &mut EffectState,
        speed: SpeedLevel,
        now: Instant,
        leds: &mut [Rgb],
    );

    /// Render from continuous time. Called every frame for continuous
    /// effects.
    fn render(
        &mut self,
        _fx: &mut EffectState,
        _speed: SpeedLevel,
        _now: Instant,
        _leds: &mut [Rgb],
    ) {
    }

    /// Reset effect-local state
    fn reset(&mut self) {}
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Flash = EFFECT_ID_FLASH,
    Fade = EFFECT_ID_FADE,
    Rainbow = EFFECT_ID_RAINBOW,
    Confetti = EFFECT_ID_CONFETTI,
    Cylon = EFFECT_ID_CYLON,
    Juggle = EFFECT_ID_JUGGLE,
    Bpm = EFFECT_ID_BPM,
    Sinelon = EFFECT_ID_SINELON,
    Visualize = EFFECT_ID_VISUALIZE,
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Solid red/green/blue cycling
    Flash(FlashEffect),
    /// Solid fill walking the hue circle
    Fade(FadeEffect),
    /// Moving hue gradient across the strip
    Rainbow(RainbowEffect),
    /// Random sparkles on a decaying background
    Confetti(ConfettiEffect),
    /// Single dot sweeping back and forth
    Cylon(CylonEffect),
    /// Eight beat-driven dots weaving in and out of sync
    Juggle(JuggleEffect),
    /// Palette gradient pulsing at a beats-per-minute rate
    Bpm(BpmEffect),
    /// Single beat-driven dot on a decaying background
    Sinelon(SinelonEffect),
    /// Frame content supplied externally, nothing rendered here
    Visualize,
}

impl EffectId {
    /// All selectable effects, in id order.
    pub const ALL: [Self; 9] = [
        Self::Flash,
        Self::Fade,
        Self::Rainbow,
        Self::Confetti,
        Self::Cylon,
        Self::Juggle,
        Self::Bpm,
        Self::Sinelon,
        Self::Visualize,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_FLASH => Self::Flash,
            EFFECT_ID_FADE => Self::Fade,
            EFFECT_ID_RAINBOW => Self::Rainbow,
            EFFECT_ID_CONFETTI => Self::Confetti,
            EFFECT_ID_CYLON => Self::Cylon,
            EFFECT_ID_JUGGLE => Self::Juggle,
            EFFECT_ID_BPM => Self::Bpm,
            EFFECT_ID_SINELON => Self::Sinelon,
            EFFECT_ID_VISUALIZE => Self::Visualize,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flash => EFFECT_NAME_FLASH,
            Self::Fade => EFFECT_NAME_FADE,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::Confetti => EFFECT_NAME_CONFETTI,
            Self::Cylon => EFFECT_NAME_CYLON,
            Self::Juggle => EFFECT_NAME_JUGGLE,
            Self::Bpm => EFFECT_NAME_BPM,
            Self::Sinelon => EFFECT_NAME_SINELON,
            Self::Visualize => EFFECT_NAME_VISUALIZE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_FLASH => Some(Self::Flash),
            EFFECT_NAME_FADE => Some(Self::Fade),
            EFFECT_NAME_RAINBOW => Some(Self::Rainbow),
            EFFECT_NAME_CONFETTI => Some(Self::Confetti),
            EFFECT_NAME_CYLON => Some(Self::Cylon),
            EFFECT_NAME_JUGGLE => Some(Self::Juggle),
            EFFECT_NAME_BPM => Some(Self::Bpm),
            EFFECT_NAME_SINELON => Some(Self::Sinelon),
            EFFECT_NAME_VISUALIZE => Some(Self::Visualize),
            _ => None,
        }
    }

    /// Build a fresh slot for this effect, resetting effect-local progress.
    pub fn to_slot(self) -> EffectSlot {
        match self {
            Self::Flash => EffectSlot::Flash(FlashEffect::new()),
            Self::Fade => EffectSlot::Fade(FadeEffect::new()),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::new()),
            Self::Confetti => EffectSlot::Confetti(ConfettiEffect::new()),
            Self::Cylon => EffectSlot::Cylon(CylonEffect::new()),
            Self::Juggle => EffectSlot::Juggle(JuggleEffect::new()),
            Self::Bpm => EffectSlot::Bpm(BpmEffect::new()),
            Self::Sinelon => EffectSlot::Sinelon(SinelonEffect::new()),
            Self::Visualize => EffectSlot::Visualize,
        }
    }
}

impl EffectSlot {
    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Flash(_) => EffectId::Flash,
            Self::Fade(_) => EffectId::Fade,
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::Confetti(_) => EffectId::Confetti,
            Self::Cylon(_) => EffectId::Cylon,
            Self::Juggle(_) => EffectId::Juggle,
            Self::Bpm(_) => EffectId::Bpm,
            Self::Sinelon(_) => EffectId::Sinelon,
            Self::Visualize => EffectId::Visualize,
        }
    }

    /// Whether the effect renders from continuous time every frame
    pub(crate) fn is_continuous(&self) -> bool {
        match self {
            Self::Juggle(_) => JuggleEffect::CONTINUOUS,
            Self::Bpm(_) => BpmEffect::CONTINUOUS,
            Self::Sinelon(_) => SinelonEffect::CONTINUOUS,
            Self::Flash(_)
            | Self::Fade(_)
            | Self::Rainbow(_)
            | Self::Confetti(_)
            | Self::Cylon(_)
            | Self::Visualize => false,
        }
    }

    /// Advance gated effect state
    pub(crate) fn advance(
        &mut self,
        fx: &mut EffectState,
        speed: SpeedLevel,
        now: Instant,
        leds: &mut [Rgb],
    ) {
        match self {
            Self::Flash(effect) => effect.advance(fx, speed, now, leds),
            Self::Fade(effect) => effect.advance(fx, speed, now, leds),
            Self::Rainbow(effect) => effect.advance(fx, speed, now, leds),
            Self::Confetti(effect) => effect.advance(fx, speed, now, leds),
            Self::Cylon(effect) => effect.advance(fx, speed, now, leds),
            Self::Juggle(effect) => effect.advance(fx, speed, now, leds),
            Self::Bpm(effect) => effect.advance(fx, speed, now, leds),
            Self::Sinelon(effect) => effect.advance(fx, speed, now, leds),
            Self::Visualize => {}
        }
    }

    /// Render continuous effects from wall-clock time
    pub(crate) fn render(
        &mut self,
        fx: &mut EffectState,
        speed: SpeedLevel,
        now: Instant,
        leds: &mut [Rgb],
    ) {
        match self {
            Self::Juggle(effect) => effect.render(fx, speed, now, leds),
            Self::Bpm(effect) => effect.render(fx, speed, now, leds),
            Self::Sinelon(effect) => effect.render(fx, speed, now, leds),
            Self::Flash(_)
            | Self::Fade(_)
            | Self::Rainbow(_)
            | Self::Confetti(_)
            | Self::Cylon(_)
            | Self::Visualize => {}
        }
    }

    /// Reset effect-local state
    pub(crate) fn reset(&mut self) {
        match self {
            Self::Flash(effect) => Effect::reset(effect),
            Self::Fade(effect) => Effect::reset(effect),
            Self::Rainbow(effect) => Effect::reset(effect),
            Self::Confetti(effect) => Effect::reset(effect),
            Self::Cylon(effect) => Effect::reset(effect),
            Self::Juggle(effect) => Effect::reset(effect),
            Self::Bpm(effect) => Effect::reset(effect),
            Self::Sinelon(effect) => Effect::reset(effect),
            Self::Visualize => {}
        }
    }
}
