//! Loop pacing without async/await or platform-specific timers.
//!
//! The caller is responsible for sleeping/waiting between polls. The poll
//! rate is deliberately higher than the render gate: effect update
//! thresholds go down to a few milliseconds, and a loop paced at the frame
//! rate would quantize them away.

use embassy_time::{Duration, Instant};

use crate::{LightEngine, OutputDriver};

/// Default poll rate (250 Hz); presents are still gated at the render rate.
pub const DEFAULT_POLL_HZ: u64 = 250;

/// Default poll interval based on the poll rate.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000 / DEFAULT_POLL_HZ);

/// Result of a poll tick.
#[derive(Debug, Clone, Copy)]
pub struct PollResult {
    /// The deadline for the next poll.
    pub next_deadline: Instant,
    /// How long to wait until the next poll (zero if behind schedule).
    pub sleep_duration: Duration,
    /// Whether a frame was pushed to the output driver this tick.
    pub presented: bool,
}

/// Poll-driven strip scheduler
///
/// Owns the engine and the output driver, drives one engine tick per poll,
/// and pushes the frame plus the global brightness level whenever the engine
/// yields one. Returns timing info so the caller can sleep appropriately.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = StripScheduler::new(engine, driver);
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(now_ms()));
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct StripScheduler<'a, O: OutputDriver, const MAX_LEDS: usize, const COMMAND_CHANNEL_SIZE: usize>
{
    output: O,
    engine: LightEngine<'a, MAX_LEDS, COMMAND_CHANNEL_SIZE>,
    next_poll: Instant,
    poll_interval: Duration,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize, const COMMAND_CHANNEL_SIZE: usize>
    StripScheduler<'a, O, MAX_LEDS, COMMAND_CHANNEL_SIZE>
{
    /// Create a new scheduler polling at [`DEFAULT_POLL_INTERVAL`].
    pub fn new(engine: LightEngine<'a, MAX_LEDS, COMMAND_CHANNEL_SIZE>, driver: O) -> Self {
        Self::with_poll_interval(engine, driver, DEFAULT_POLL_INTERVAL)
    }

    /// Create a new scheduler with a custom poll interval.
    pub fn with_poll_interval(
        engine: LightEngine<'a, MAX_LEDS, COMMAND_CHANNEL_SIZE>,
        driver: O,
        poll_interval: Duration,
    ) -> Self {
        Self {
            output: driver,
            engine,
            next_poll: Instant::from_millis(0),
            poll_interval,
        }
    }

    /// Run one poll iteration and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again; a slow output sink simply stretches the
    /// achievable frame rate.
    pub fn tick(&mut self, now: Instant) -> PollResult {
        // Drift correction: if we've fallen too far behind, skip the backlog
        // instead of catching up in a burst
        let max_drift = self.poll_interval * 2;
        if now > self.next_poll + max_drift {
            self.next_poll = now;
        }

        let presented = match self.engine.tick(now) {
            Some(frame) => {
                self.output.set_brightness(frame.brightness);
                self.output.present(frame.pixels);
                true
            }
            None => false,
        };

        self.next_poll += self.poll_interval;

        let sleep_duration = if self.next_poll > now {
            self.next_poll - now
        } else {
            Duration::from_millis(0)
        };

        PollResult {
            next_deadline: self.next_poll,
            sleep_duration,
            presented,
        }
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &LightEngine<'a, MAX_LEDS, COMMAND_CHANNEL_SIZE> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut LightEngine<'a, MAX_LEDS, COMMAND_CHANNEL_SIZE> {
        &mut self.engine
    }
}
