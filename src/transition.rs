//! Stepped crossfades for color and brightness
//!
//! A transition distributes the delta between the current and target values
//! over a fixed number of discrete steps. Integer division leaves a
//! remainder; [`step_change`] spreads that remainder evenly across the step
//! sequence (Bresenham-style) so the accumulated value lands exactly on the
//! target after the final step, with no drift and no corrective snap.

use embassy_time::{Duration, Instant};

use crate::color::Rgb;

/// Color crossfades run at a fixed pace regardless of distance.
pub const COLOR_FADE_DURATION: Duration = Duration::from_millis(500);
pub const COLOR_FADE_STEPS: u32 = 30;

/// Brightness fades scale with distance: a full-span change takes
/// `BRIGHTNESS_FULL_SPAN_DURATION`, half-span takes half, and so on.
pub const BRIGHTNESS_FULL_SPAN_DURATION: Duration = Duration::from_millis(1000);
pub const BRIGHTNESS_FULL_SPAN_STEPS: u32 = 60;
const BRIGHTNESS_SPAN: u32 = 100;

/// Increment to apply at step `step_index` (1-based)
///
/// `step` and `remainder` come from truncating division of the total delta by
/// `total_steps`. One extra unit, sign-matched to the delta, is applied
/// exactly when the cumulative allocation of the remainder crosses an integer
/// boundary:
///
/// `extra = 1 iff floor(i*|rem|/total) > floor((i-1)*|rem|/total)`
pub(crate) fn step_change(step: i32, remainder: i32, step_index: u32, total_steps: u32) -> i32 {
    let rem = u64::from(remainder.unsigned_abs());
    let index = u64::from(step_index);
    let total = u64::from(total_steps);
    let crossed = (index * rem) / total > ((index - 1) * rem) / total;
    if !crossed {
        return step;
    }
    if step < 0 || remainder < 0 {
        step - 1
    } else {
        step + 1
    }
}

/// One scalar channel of a stepped transition
#[derive(Debug, Clone, Copy, Default)]
struct ChannelRamp {
    current: i32,
    step: i32,
    remainder: i32,
}

impl ChannelRamp {
    /// Arm toward `target`, keeping the current value as the start point.
    #[allow(clippy::cast_possible_wrap)]
    fn arm(&mut self, target: i32, total_steps: u32) {
        let delta = target - self.current;
        self.step = delta / total_steps as i32;
        self.remainder = delta % total_steps as i32;
    }

    fn advance(&mut self, step_index: u32, total_steps: u32) {
        self.current += step_change(self.step, self.remainder, step_index, total_steps);
    }
}

/// Multi-channel stepped transition with shared step timing
///
/// Created idle; armed by [`start`](Self::start); takes at most one step per
/// [`tick`](Self::tick), and only once the per-step duration has elapsed.
/// Re-arming while in progress restarts from the current interpolated value
/// and discards the remaining steps; transitions are never queued.
#[derive(Debug, Clone)]
pub struct SteppedTransition<const CHANNELS: usize> {
    channels: [ChannelRamp; CHANNELS],
    total_steps: u32,
    /// Next step to take, 1-based; `> total_steps` once complete
    step_index: u32,
    step_duration: Duration,
    last_step: Instant,
    active: bool,
}

impl<const CHANNELS: usize> SteppedTransition<CHANNELS> {
    pub fn new(initial: [u8; CHANNELS]) -> Self {
        let mut channels = [ChannelRamp::default(); CHANNELS];
        for (ch, value) in channels.iter_mut().zip(initial) {
            ch.current = i32::from(value);
        }
        Self {
            channels,
            total_steps: 0,
            step_index: 1,
            step_duration: Duration::from_millis(0),
            last_step: Instant::from_millis(0),
            active: false,
        }
    }

    /// Arm a transition toward `target` over `total_steps` steps
    ///
    /// A zero step count is forced to 1 so the per-step duration is always
    /// well defined.
    pub fn start(
        &mut self,
        target: [u8; CHANNELS],
        total_steps: u32,
        total_duration: Duration,
        now: Instant,
    ) {
        let total_steps = total_steps.max(1);
        for (ch, value) in self.channels.iter_mut().zip(target) {
            ch.arm(i32::from(value), total_steps);
        }
        self.total_steps = total_steps;
        self.step_index = 1;
        self.step_duration = Duration::from_millis(total_duration.as_millis() / u64::from(total_steps));
        self.last_step = now;
        self.active = true;
    }

    /// Cancel any in-flight transition and jump straight to `value`
    pub fn snap(&mut self, value: [u8; CHANNELS]) {
        for (ch, value) in self.channels.iter_mut().zip(value) {
            ch.current = i32::from(value);
            ch.step = 0;
            ch.remainder = 0;
        }
        self.active = false;
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn current(&self) -> [u8; CHANNELS] {
        let mut out = [0u8; CHANNELS];
        for (value, ch) in out.iter_mut().zip(&self.channels) {
            *value = ch.current.clamp(0, 255) as u8;
        }
        out
    }

    /// Advance at most one step; returns the new value when a step was taken
    pub fn tick(&mut self, now: Instant) -> Option<[u8; CHANNELS]> {
        if !self.active {
            return None;
        }
        if now.duration_since(self.last_step) <= self.step_duration {
            return None;
        }
        self.last_step = now;

        for ch in &mut self.channels {
            ch.advance(self.step_index, self.total_steps);
        }
        self.step_index += 1;
        if self.step_index > self.total_steps {
            self.active = false;
        }
        Some(self.current())
    }
}

/// RGB crossfade at the fixed color pace
#[derive(Debug, Clone)]
pub struct ColorFade {
    inner: SteppedTransition<3>,
}

impl ColorFade {
    pub fn new(initial: Rgb) -> Self {
        Self {
            inner: SteppedTransition::new([initial.r, initial.g, initial.b]),
        }
    }

    pub fn start(&mut self, target: Rgb, now: Instant) {
        self.inner
            .start([target.r, target.g, target.b], COLOR_FADE_STEPS, COLOR_FADE_DURATION, now);
    }

    pub fn snap(&mut self, value: Rgb) {
        self.inner.snap([value.r, value.g, value.b]);
    }

    pub const fn is_active(&self) -> bool {
        self.inner.is_active()
    }

    pub fn current(&self) -> Rgb {
        let [r, g, b] = self.inner.current();
        Rgb { r, g, b }
    }

    pub fn tick(&mut self, now: Instant) -> Option<Rgb> {
        self.inner.tick(now).map(|[r, g, b]| Rgb { r, g, b })
    }
}

/// Brightness fade over the 0-100 domain
///
/// Step count and duration are proportional to the distance travelled, so
/// small adjustments finish quickly and a full sweep takes the configured
/// maximum. Both derivations bottom out at one step.
#[derive(Debug, Clone)]
pub struct BrightnessFade {
    inner: SteppedTransition<1>,
}

impl BrightnessFade {
    pub fn new(initial: u8) -> Self {
        Self {
            inner: SteppedTransition::new([initial]),
        }
    }

    pub fn start(&mut self, target: u8, now: Instant) {
        let [current] = self.inner.current();
        let distance = u32::from(current.abs_diff(target));
        let steps = (distance * BRIGHTNESS_FULL_SPAN_STEPS / BRIGHTNESS_SPAN).max(1);
        let duration_ms =
            u64::from(distance) * BRIGHTNESS_FULL_SPAN_DURATION.as_millis() / u64::from(BRIGHTNESS_SPAN);
        self.inner
            .start([target], steps, Duration::from_millis(duration_ms), now);
    }

    pub fn snap(&mut self, value: u8) {
        self.inner.snap([value]);
    }

    pub const fn is_active(&self) -> bool {
        self.inner.is_active()
    }

    pub fn current(&self) -> u8 {
        let [value] = self.inner.current();
        value
    }

    pub fn tick(&mut self, now: Instant) -> Option<u8> {
        self.inner.tick(now).map(|[value]| value)
    }
}
