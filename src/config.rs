//! Start-up configuration, read once before the loop starts

use crate::audio::AudioTracks;
use crate::color::PaletteConfig;
use crate::debounce::Polarity;
use crate::effect::{RingConfig, StickConfig};
use crate::error::ConfigError;
use crate::watchdog::WATCHDOG_MIN_TIMEOUT;

/// Configuration for the whole controller
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub ring: RingConfig,
    pub stick: StickConfig,
    pub palette: PaletteConfig,
    /// Watchdog timeout in ticks
    pub watchdog_timeout: u32,
    /// Ticks a raw input must hold a level before it is accepted
    pub debounce_settle: u32,
    pub tracks: AudioTracks,
    pub mode_switch_polarity: Polarity,
    pub trigger_polarity: Polarity,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            ring: RingConfig::default(),
            stick: StickConfig::default(),
            palette: PaletteConfig::default(),
            watchdog_timeout: 7_000,
            debounce_settle: 10,
            tracks: AudioTracks::default(),
            mode_switch_polarity: Polarity::ActiveHigh,
            trigger_polarity: Polarity::ActiveLow,
        }
    }
}

impl ControllerConfig {
    /// Check everything that does not depend on the hardware.
    ///
    /// Strip capacities and track availability are checked by the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ring.len == 0 || self.stick.len == 0 {
            return Err(ConfigError::EmptyStrip);
        }
        if self.stick.len < 2 {
            return Err(ConfigError::StickTooShort {
                len: self.stick.len,
            });
        }
        if self.ring.band_width == 0 || self.ring.band_width >= self.ring.len {
            return Err(ConfigError::BandOutOfRange {
                band_width: self.ring.band_width,
                len: self.ring.len,
            });
        }
        if self.watchdog_timeout < WATCHDOG_MIN_TIMEOUT {
            return Err(ConfigError::WatchdogTimeoutTooShort {
                timeout: self.watchdog_timeout,
            });
        }
        if let Some(channel) = self
            .palette
            .channel_levels
            .iter()
            .position(|level| !(0.0..=1.0).contains(level))
        {
            return Err(ConfigError::BrightnessLevelOutOfRange { channel });
        }
        Ok(())
    }
}
