#![no_std]

pub mod beat;
pub mod color;
pub mod command;
pub mod effect;
pub mod engine;
pub mod frame_scheduler;
pub mod math8;
pub mod palette;
mod rand8;
pub mod scheduler;
pub mod transition;
pub mod visualize;

pub use command::{Command, CommandQueue, CommandReceiver, CommandSender, QueueFull};
pub use effect::{EffectId, EffectSlot};
pub use engine::{FrameUpdate, LightEngine, LightEngineConfig};
pub use frame_scheduler::{PollResult, StripScheduler};
pub use scheduler::{Gate, SpeedLevel};
pub use transition::{BrightnessFade, ColorFade, SteppedTransition};
pub use visualize::FrameSizeError;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The strip scheduler is generic over this trait: it pushes finished frames
/// and the global brightness level through it and never touches pins,
/// chipset or color order itself.
pub trait OutputDriver {
    /// Push the current pixel buffer to the strip
    fn present(&mut self, pixels: &[Rgb]);

    /// Set the strip-wide brightness multiplier (0-255)
    fn set_brightness(&mut self, level: u8);
}
