//! Hardware the engine drives
//!
//! Implement [`Board`] once per target. Host tests implement it with
//! recording mocks.

use crate::OutputDriver;
use crate::audio::AudioChannel;
use crate::debounce::RawInput;
use crate::watchdog::Watchdog;

/// Quadrature encoder with an absolute, signed position
pub trait RotaryEncoder {
    /// Accumulated detents since power-up. May be negative.
    fn position(&mut self) -> i32;
}

/// Collaborators of one pack
pub trait Board {
    type Ring: OutputDriver;
    type Stick: OutputDriver;
    type Audio: AudioChannel;
    type Watchdog: Watchdog;
    type Encoder: RotaryEncoder;
    type ModeSwitch: RawInput;
    type Trigger: RawInput;

    /// Driver of the cyclotron ring
    fn ring(&mut self) -> &mut Self::Ring;
    /// Driver of the power meter stick
    fn stick(&mut self) -> &mut Self::Stick;
    fn audio(&mut self) -> &mut Self::Audio;
    fn watchdog(&mut self) -> &mut Self::Watchdog;
    fn encoder(&mut self) -> &mut Self::Encoder;
    fn mode_switch(&mut self) -> &mut Self::ModeSwitch;
    fn trigger(&mut self) -> &mut Self::Trigger;
}
