#![no_std]

#[macro_use]
mod log;

pub mod audio;
pub mod board;
pub mod color;
pub mod config;
pub mod control_loop;
pub mod debounce;
pub mod effect;
pub mod engine;
pub mod error;
pub mod random;
pub mod state;
pub mod strip;
pub mod tick;
pub mod watchdog;

pub use audio::{AudioChannel, AudioTracks, Cue, TrackId};
pub use board::{Board, RotaryEncoder};
pub use color::{Palette, PaletteConfig, Rgb};
pub use config::ControllerConfig;
pub use control_loop::ControlLoop;
pub use debounce::{Debouncer, Polarity, Press, RawInput};
pub use effect::{CyclotronEffect, Effect, PowerMeterEffect, RingConfig, StickConfig};
pub use engine::{Engine, LoopReport};
pub use error::ConfigError;
pub use random::RandomSource;
pub use state::{Action, DeviceMode, DeviceStateMachine, InputEvents};
pub use strip::PixelStrip;
pub use tick::{EmbassyTicks, Schedule, Tick, TickSource};
pub use watchdog::{LivenessFeeder, Watchdog};

/// Abstract LED driver trait
///
/// Implement this trait once per strip. Colors arrive already scaled by the
/// strip brightness.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
