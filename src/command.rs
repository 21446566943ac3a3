//! Command ingestion
//!
//! The command layer (MQTT/UDP parsing, out of scope here) talks to the
//! engine through a bounded queue built on `critical-section` and
//! `heapless::Deque`, safe to feed from interrupt or network context. The
//! engine drains it non-blockingly at the top of every tick; none of the
//! commands perform I/O themselves.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::color::{Hsv, Rgb};
use crate::effect::EffectId;

/// State change requested by the command layer
#[derive(Clone, Copy)]
pub enum Command {
    /// Turn the light on or off
    SetPower(bool),
    /// Set the static color (clears any active effect)
    SetColorRgb(Rgb),
    /// Set the static color from HSV (clears any active effect)
    SetColorHsv(Hsv),
    /// Set brightness, 0-100
    SetBrightness(u8),
    /// Select an effect
    SetEffect(EffectId),
    /// Set the effect speed, 1-7
    SetEffectSpeed(u8),
}

/// Error returned when the queue is full, carrying the rejected command.
#[derive(Clone, Copy)]
pub struct QueueFull(pub Command);

/// Bounded command queue shared between the command layer and the engine
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle. Multiple senders can coexist.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    /// Get the receiver handle for the engine.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    fn push(&self, command: Command) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            self.inner
                .borrow(cs)
                .borrow_mut()
                .push_back(command)
                .map_err(QueueFull)
        })
    }

    fn pop(&self) -> Option<Command> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sender half of a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Enqueue a command; fails when the queue is full.
    pub fn send(&self, command: Command) -> Result<(), QueueFull> {
        self.queue.push(command)
    }
}

/// Receiver half of a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    /// Dequeue the oldest pending command, if any.
    pub fn try_receive(&self) -> Option<Command> {
        self.queue.pop()
    }
}
