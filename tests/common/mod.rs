#![allow(dead_code)]

use std::collections::VecDeque;

use protonpack_engine::{
    AudioChannel, Board, OutputDriver, RandomSource, RawInput, Rgb, RotaryEncoder, TrackId,
    Watchdog,
};

#[derive(Debug, Default)]
pub struct RecordingStrip {
    pub writes: usize,
    pub last: Vec<Rgb>,
}

impl OutputDriver for RecordingStrip {
    fn write(&mut self, colors: &[Rgb]) {
        self.writes += 1;
        self.last = colors.to_vec();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    Play(TrackId),
    Stop,
}

#[derive(Debug, Default)]
pub struct ScriptedAudio {
    pub playing: Option<TrackId>,
    pub events: Vec<AudioEvent>,
    pub missing: Vec<TrackId>,
}

impl ScriptedAudio {
    /// Let the current track run out
    pub fn finish(&mut self) {
        self.playing = None;
    }
}

impl AudioChannel for ScriptedAudio {
    fn play(&mut self, track: TrackId) {
        self.playing = Some(track);
        self.events.push(AudioEvent::Play(track));
    }

    fn stop(&mut self) {
        self.playing = None;
        self.events.push(AudioEvent::Stop);
    }

    fn is_playing(&mut self) -> bool {
        self.playing.is_some()
    }

    fn has_track(&self, track: TrackId) -> bool {
        !self.missing.contains(&track)
    }
}

#[derive(Debug, Default)]
pub struct CountingWatchdog {
    pub timeout: Option<u32>,
    pub feeds: usize,
}

impl Watchdog for CountingWatchdog {
    fn configure(&mut self, timeout: u32) {
        self.timeout = Some(timeout);
    }

    fn feed(&mut self) {
        self.feeds += 1;
    }
}

#[derive(Debug, Default)]
pub struct Pin {
    pub high: bool,
}

impl RawInput for Pin {
    fn is_high(&mut self) -> bool {
        self.high
    }
}

#[derive(Debug, Default)]
pub struct Encoder {
    pub position: i32,
}

impl RotaryEncoder for Encoder {
    fn position(&mut self) -> i32 {
        self.position
    }
}

#[derive(Debug, Default)]
pub struct MockBoard {
    pub ring: RecordingStrip,
    pub stick: RecordingStrip,
    pub audio: ScriptedAudio,
    pub watchdog: CountingWatchdog,
    pub encoder: Encoder,
    pub mode_switch: Pin,
    pub trigger: Pin,
}

impl MockBoard {
    /// Board at rest: trigger released (high), mode switch as given
    pub fn new(switch_high: bool) -> Self {
        Self {
            mode_switch: Pin { high: switch_high },
            trigger: Pin { high: true },
            ..Self::default()
        }
    }
}

impl Board for MockBoard {
    type Ring = RecordingStrip;
    type Stick = RecordingStrip;
    type Audio = ScriptedAudio;
    type Watchdog = CountingWatchdog;
    type Encoder = Encoder;
    type ModeSwitch = Pin;
    type Trigger = Pin;

    fn ring(&mut self) -> &mut RecordingStrip {
        &mut self.ring
    }

    fn stick(&mut self) -> &mut RecordingStrip {
        &mut self.stick
    }

    fn audio(&mut self) -> &mut ScriptedAudio {
        &mut self.audio
    }

    fn watchdog(&mut self) -> &mut CountingWatchdog {
        &mut self.watchdog
    }

    fn encoder(&mut self) -> &mut Encoder {
        &mut self.encoder
    }

    fn mode_switch(&mut self) -> &mut Pin {
        &mut self.mode_switch
    }

    fn trigger(&mut self) -> &mut Pin {
        &mut self.trigger
    }
}

/// Replays fixed draws, then repeats `fallback`. Every draw is reduced
/// modulo the requested bound.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    pub draws: VecDeque<u32>,
    pub fallback: u32,
    pub bounds: Vec<u32>,
}

impl ScriptedRng {
    pub fn new(draws: &[u32], fallback: u32) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            fallback,
            bounds: Vec::new(),
        }
    }
}

impl RandomSource for ScriptedRng {
    fn below(&mut self, bound: u32) -> u32 {
        self.bounds.push(bound);
        self.draws.pop_front().unwrap_or(self.fallback) % bound.max(1)
    }
}
