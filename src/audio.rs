//! Audio cues played by the device state machine

use derive_more::derive::Display;

/// Identifier of a track known to the audio collaborator.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display("#{_0}")]
pub struct TrackId(pub u8);

/// Fire-and-forget audio output. At most one track plays at a time.
pub trait AudioChannel {
    /// Start `track`, replacing whatever was playing
    fn play(&mut self, track: TrackId);

    /// Silence the output
    fn stop(&mut self);

    /// Whether a track is still playing
    fn is_playing(&mut self) -> bool;

    /// Whether `track` can be played at all
    fn has_track(&self, _track: TrackId) -> bool {
        true
    }
}

/// Sounds the state machine asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Pack powering up
    Startup,
    /// Trigger held
    Firing,
    /// Pack powering down
    Shutdown,
}

/// Mapping from cues to tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioTracks {
    /// Played when the mode switch arms the pack. Without it the pack goes
    /// straight to the idle loop.
    pub startup: Option<TrackId>,
    pub firing: TrackId,
    /// Played after the mode switch disarms the pack
    pub shutdown: Option<TrackId>,
}

impl Default for AudioTracks {
    fn default() -> Self {
        Self {
            startup: Some(TrackId(0)),
            firing: TrackId(2),
            shutdown: None,
        }
    }
}

impl AudioTracks {
    /// Track for `cue`, if one is configured
    pub const fn track(&self, cue: Cue) -> Option<TrackId> {
        match cue {
            Cue::Startup => self.startup,
            Cue::Firing => Some(self.firing),
            Cue::Shutdown => self.shutdown,
        }
    }

    /// Configured tracks, in cue order
    pub fn iter(&self) -> impl Iterator<Item = TrackId> {
        [self.startup, Some(self.firing), self.shutdown]
            .into_iter()
            .flatten()
    }
}
