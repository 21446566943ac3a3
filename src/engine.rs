//! Light engine - the main orchestrator
//!
//! Owns the logical light state, the pixel buffer, both crossfades and the
//! timing gates, and advances all of them from a single poll-driven `tick`.
//! Nothing here blocks: waiting is always a gate re-checked on the next
//! iteration, and a new command unconditionally supersedes whatever it
//! replaces.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Rgb, fill_solid, hsv2rgb};
use crate::command::{Command, CommandReceiver};
use crate::effect::{EffectId, EffectSlot, EffectState};
use crate::scheduler::{Gate, RENDER_INTERVAL, SpeedLevel, update_interval};
use crate::transition::{BrightnessFade, ColorFade};
use crate::visualize::{FrameSizeError, copy_frame};

const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Stored color while an effect is selected.
const EFFECT_BASE_COLOR: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Brightness is exposed as a percentage.
const BRIGHTNESS_SPAN: u8 = 100;

/// Configuration for the light engine
#[derive(Debug, Clone)]
pub struct LightEngineConfig {
    /// Initial static color
    pub color: Rgb,
    /// Initial brightness, 0-100
    pub brightness: u8,
    /// Initial effect speed, 1-7
    pub effect_speed: u8,
    /// Hardware brightness ceiling the 0-100 range maps onto
    pub max_brightness: u8,
}

impl Default for LightEngineConfig {
    fn default() -> Self {
        Self {
            color: Rgb { r: 255, g: 0, b: 0 },
            brightness: 100,
            effect_speed: 4,
            max_brightness: 255,
        }
    }
}

#[derive(Debug, Clone)]
struct LightState {
    power: bool,
    /// Target brightness percentage, 0-100
    brightness: u8,
    color: Rgb,
    effect: Option<EffectSlot>,
    effect_speed: SpeedLevel,
}

/// One tick's output: the frame to present and the global brightness level
/// (already mapped onto the hardware ceiling) to set alongside it.
#[derive(Debug, Clone, Copy)]
pub struct FrameUpdate<'a> {
    pub pixels: &'a [Rgb],
    pub brightness: u8,
}

/// The light aggregate: state, pixel buffer, crossfades, gates
pub struct LightEngine<'a, const MAX_LEDS: usize, const COMMAND_CHANNEL_SIZE: usize> {
    commands: CommandReceiver<'a, COMMAND_CHANNEL_SIZE>,
    max_brightness: u8,

    state: LightState,
    fx: EffectState,
    frame: [Rgb; MAX_LEDS],

    color_fade: ColorFade,
    brightness_fade: BrightnessFade,
    /// Fill requested while an effect owned the buffer; applied once the
    /// effect no longer does.
    pending_fill: Option<Rgb>,

    update_gate: Gate,
    render_gate: Gate,
    force_present: bool,
}

impl<'a, const MAX_LEDS: usize, const COMMAND_CHANNEL_SIZE: usize>
    LightEngine<'a, MAX_LEDS, COMMAND_CHANNEL_SIZE>
{
    pub fn new(
        commands: CommandReceiver<'a, COMMAND_CHANNEL_SIZE>,
        config: &LightEngineConfig,
    ) -> Self {
        let brightness = config.brightness.min(BRIGHTNESS_SPAN);
        Self {
            commands,
            max_brightness: config.max_brightness,
            state: LightState {
                power: false,
                brightness,
                color: config.color,
                effect: None,
                effect_speed: SpeedLevel::new(config.effect_speed),
            },
            fx: EffectState::new(),
            frame: [BLACK; MAX_LEDS],
            color_fade: ColorFade::new(BLACK),
            brightness_fade: BrightnessFade::new(brightness),
            pending_fill: None,
            update_gate: Gate::new(),
            render_gate: Gate::new(),
            force_present: false,
        }
    }

    /// Process one loop iteration
    ///
    /// Advances the crossfades, the active effect and the gates, and returns
    /// a frame to push to the output sink when the render gate permits (or a
    /// visualize frame demands) it.
    pub fn tick(&mut self, now: Instant) -> Option<FrameUpdate<'_>> {
        self.drain_commands(now);
        self.service_fill(now);
        if self.brightness_fade.tick(now).is_some() {
            self.force_present = true;
        }
        self.service_effect(now);

        let render = self.render_gate.poll(now, RENDER_INTERVAL);
        if render && self.state.power {
            let speed = self.state.effect_speed;
            if let Some(slot) = self.state.effect.as_mut() {
                if slot.is_continuous() {
                    slot.render(&mut self.fx, speed, now, &mut self.frame);
                }
            }
        }

        if render || self.force_present {
            self.force_present = false;
            Some(FrameUpdate {
                pixels: &self.frame,
                brightness: self.output_brightness(),
            })
        } else {
            None
        }
    }

    /// Accept an externally supplied pixel frame (Visualize)
    ///
    /// Length is validated regardless of the active effect so the transport
    /// hears about malformed frames; the copy is only applied while the
    /// Visualize effect is active and the light is on. A copied frame forces
    /// a present on the next tick.
    pub fn ingest_frame(&mut self, bytes: &[u8]) -> Result<(), FrameSizeError> {
        if !self.visualize_active() {
            let expected = MAX_LEDS * 3;
            if bytes.is_empty() || bytes.len() == expected {
                return Ok(());
            }
            let err = FrameSizeError {
                got: bytes.len(),
                expected,
            };
            #[cfg(feature = "esp32-log")]
            println!("[LightEngine.ingest_frame] {}", err);
            return Err(err);
        }

        match copy_frame(&mut self.frame, bytes) {
            Ok(copied) => {
                if copied {
                    self.force_present = true;
                }
                Ok(())
            }
            Err(err) => {
                #[cfg(feature = "esp32-log")]
                println!("[LightEngine.ingest_frame] {}", err);
                Err(err)
            }
        }
    }

    // ------------------------------------------------------------------
    // State accessors, for command-layer state reporting
    // ------------------------------------------------------------------

    pub fn is_on(&self) -> bool {
        self.state.power
    }

    pub fn brightness(&self) -> u8 {
        self.state.brightness
    }

    pub fn color(&self) -> Rgb {
        self.state.color
    }

    pub fn effect(&self) -> Option<EffectId> {
        self.state.effect.as_ref().map(EffectSlot::id)
    }

    pub fn effect_speed(&self) -> SpeedLevel {
        self.state.effect_speed
    }

    /// Current pixel content
    pub fn frame(&self) -> &[Rgb] {
        &self.frame
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn visualize_active(&self) -> bool {
        self.state.power && self.effect() == Some(EffectId::Visualize)
    }

    fn drain_commands(&mut self, now: Instant) {
        while let Some(command) = self.commands.try_receive() {
            self.apply(command, now);
        }
    }

    fn apply(&mut self, command: Command, now: Instant) {
        match command {
            Command::SetPower(on) => {
                self.state.power = on;
                let target = if on { self.state.color } else { BLACK };
                self.pending_fill = Some(target);
            }
            Command::SetColorRgb(color) => self.set_color(color),
            Command::SetColorHsv(hsv) => self.set_color(hsv2rgb(hsv)),
            Command::SetBrightness(raw) => {
                let level = raw.min(BRIGHTNESS_SPAN);
                #[cfg(feature = "esp32-log")]
                if raw != level {
                    println!("[LightEngine.apply] brightness {} clamped to {}", raw, level);
                }
                self.state.brightness = level;
                if self.state.power {
                    self.brightness_fade.start(level, now);
                } else {
                    // Nothing visible while off; skip the fade
                    self.brightness_fade.snap(level);
                    self.force_present = true;
                }
            }
            Command::SetEffect(id) => {
                #[cfg(feature = "esp32-log")]
                println!("[LightEngine.apply] effect -> {}", id.as_str());
                self.state.power = true;
                self.state.color = EFFECT_BASE_COLOR;
                self.state.effect = Some(id.to_slot());
                // The effect takes the buffer over from black, immediately
                self.pending_fill = None;
                self.color_fade.snap(BLACK);
                fill_solid(&mut self.frame, BLACK);
                self.force_present = true;
            }
            Command::SetEffectSpeed(raw) => {
                let speed = SpeedLevel::new(raw);
                #[cfg(feature = "esp32-log")]
                if speed.get() != raw {
                    println!(
                        "[LightEngine.apply] speed {} clamped to {}",
                        raw,
                        speed.get()
                    );
                }
                self.state.effect_speed = speed;
            }
        }
    }

    fn set_color(&mut self, color: Rgb) {
        self.state.power = true;
        self.state.color = color;
        self.state.effect = None;
        self.pending_fill = Some(color);
    }

    /// Start or continue the static-fill crossfade
    ///
    /// While an effect owns the buffer and the light is on, the requested
    /// fill stays pending; with an effect selected but the light off it
    /// snaps without a crossfade.
    fn service_fill(&mut self, now: Instant) {
        if let Some(target) = self.pending_fill {
            if self.state.effect.is_some() && self.state.power {
                // Effect owns the buffer; keep the fill pending
            } else if self.state.effect.is_some() {
                self.pending_fill = None;
                self.color_fade.snap(target);
                fill_solid(&mut self.frame, target);
                self.force_present = true;
            } else {
                self.pending_fill = None;
                self.color_fade.start(target, now);
            }
        }

        if let Some(color) = self.color_fade.tick(now) {
            fill_solid(&mut self.frame, color);
            self.force_present = true;
        }
    }

    fn service_effect(&mut self, now: Instant) {
        if !self.state.power {
            return;
        }
        let speed = self.state.effect_speed;
        let Some(slot) = self.state.effect.as_mut() else {
            return;
        };
        let threshold = update_interval(slot.id(), speed, MAX_LEDS);
        if self.update_gate.poll(now, threshold) {
            slot.advance(&mut self.fx, speed, now, &mut self.frame);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn output_brightness(&self) -> u8 {
        let current = self.brightness_fade.current();
        (u16::from(current) * u16::from(self.max_brightness) / u16::from(BRIGHTNESS_SPAN)) as u8
    }
}
