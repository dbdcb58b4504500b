use derive_more::derive::{Display, Error};

use crate::audio::TrackId;

/// Start-up configuration rejected before entering the control loop.
///
/// Nothing in the steady-state loop returns an error; every failure mode is
/// either caught here or recovered inside the state machine.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[display("LED strip must have at least one pixel")]
    EmptyStrip,

    #[display("LED strip of {len} pixels exceeds capacity of {max}")]
    StripTooLong { len: usize, max: usize },

    #[display("power meter needs at least 2 pixels, got {len}")]
    StickTooShort { len: usize },

    #[display("cyclotron band of {band_width} pixels does not fit a ring of {len}")]
    BandOutOfRange { band_width: usize, len: usize },

    #[display("watchdog timeout of {timeout} ticks is too short to feed in time")]
    WatchdogTimeoutTooShort { timeout: u32 },

    #[display("palette level for channel {channel} is outside 0.0..=1.0")]
    BrightnessLevelOutOfRange { channel: usize },

    #[display("audio track {track} is not available")]
    UnmappedTrack { track: TrackId },
}
