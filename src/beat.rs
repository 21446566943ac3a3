//! Beat functions: smooth oscillators driven by wall-clock time
//!
//! Position and brightness in the dot effects come straight from these, so
//! their motion is independent of how often the loop is scheduled and never
//! accumulates drift.

use core::f32::consts::TAU;

use embassy_time::Instant;
use libm::sinf;

/// Sine wave in 0.0..=1.0 at `bpm` beats per minute.
#[allow(clippy::cast_precision_loss)]
fn beat_wave(bpm: u16, now: Instant) -> f32 {
    let cycles = (now.as_millis() as f32) * f32::from(bpm) / 60_000.0;
    (sinf(cycles * TAU) + 1.0) * 0.5
}

/// 8-bit sinusoid between `lowest` and `highest` at `bpm` beats per minute
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn beatsin8(bpm: u16, lowest: u8, highest: u8, now: Instant) -> u8 {
    let span = f32::from(highest.saturating_sub(lowest));
    lowest.saturating_add((beat_wave(bpm, now) * span + 0.5) as u8)
}

/// 16-bit sinusoid between `lowest` and `highest` at `bpm` beats per minute
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn beatsin16(bpm: u16, lowest: u16, highest: u16, now: Instant) -> u16 {
    let span = f32::from(highest.saturating_sub(lowest));
    lowest.saturating_add((beat_wave(bpm, now) * span + 0.5) as u16)
}
