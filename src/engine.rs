//! The controller: one cooperative iteration over inputs, state, and effects

use crate::audio::{AudioChannel, AudioTracks};
use crate::board::{Board, RotaryEncoder};
use crate::color::{Palette, PaletteSelector};
use crate::config::ControllerConfig;
use crate::debounce::{Debouncer, Polarity, RawInput};
use crate::effect::{CyclotronEffect, Effect, EffectContext, PowerMeterEffect};
use crate::error::ConfigError;
use crate::random::RandomSource;
use crate::state::{Action, DeviceMode, DeviceStateMachine, InputEvents};
use crate::strip::PixelStrip;
use crate::tick::Tick;
use crate::watchdog::LivenessFeeder;

/// What one iteration did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopReport {
    /// Tick the iteration ran at
    pub now: Tick,
    /// Mode after the iteration
    pub mode: DeviceMode,
    /// The watchdog was fed
    pub fed: bool,
    /// The ring driver was written
    pub ring_flushed: bool,
    /// The stick driver was written
    pub stick_flushed: bool,
}

/// Owns every piece of controller state and the board it drives.
///
/// `RING_MAX` and `STICK_MAX` are the strip capacities; the configured
/// lengths may be shorter.
pub struct Engine<B: Board, G: RandomSource, const RING_MAX: usize, const STICK_MAX: usize> {
    board: B,
    rng: G,
    tracks: AudioTracks,
    feeder: LivenessFeeder,
    mode_switch: Debouncer,
    mode_switch_polarity: Polarity,
    trigger: Debouncer,
    trigger_polarity: Polarity,
    selector: PaletteSelector,
    machine: DeviceStateMachine,
    palette: Palette,
    ring: CyclotronEffect,
    stick: PowerMeterEffect,
    ring_strip: PixelStrip<RING_MAX>,
    stick_strip: PixelStrip<STICK_MAX>,
}

impl<B: Board, G: RandomSource, const RING_MAX: usize, const STICK_MAX: usize>
    Engine<B, G, RING_MAX, STICK_MAX>
{
    /// Validate `config` against `board`, arm the watchdog, and blank both
    /// strips.
    ///
    /// The initial mode follows the resting level of the mode switch.
    pub fn new(
        config: &ControllerConfig,
        mut board: B,
        rng: G,
        now: Tick,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut ring_strip = PixelStrip::new(config.ring.len, config.ring.brightness)?;
        let mut stick_strip = PixelStrip::new(config.stick.len, config.stick.brightness)?;

        let audio = board.audio();
        if let Some(track) = config.tracks.iter().find(|track| !audio.has_track(*track)) {
            return Err(ConfigError::UnmappedTrack { track });
        }

        let feeder = LivenessFeeder::start(board.watchdog(), config.watchdog_timeout, now);

        let switch_level = board.mode_switch().is_high();
        let trigger_level = board.trigger().is_high();
        let mode_switch = Debouncer::new(switch_level, config.debounce_settle, now);
        let trigger = Debouncer::new(trigger_level, config.debounce_settle, now);
        let initial = DeviceMode::initial(config.mode_switch_polarity.is_engaged(switch_level));

        ring_strip.blank();
        stick_strip.blank();
        ring_strip.flush(board.ring());
        stick_strip.flush(board.stick());

        log!(
            "pack ready: ring {} px, stick {} px, starting in {}",
            config.ring.len,
            config.stick.len,
            initial.as_str()
        );

        Ok(Self {
            board,
            rng,
            tracks: config.tracks,
            feeder,
            mode_switch,
            mode_switch_polarity: config.mode_switch_polarity,
            trigger,
            trigger_polarity: config.trigger_polarity,
            selector: PaletteSelector::new(),
            machine: DeviceStateMachine::new(
                initial,
                config.tracks.startup.is_some(),
                config.tracks.shutdown.is_some(),
            ),
            palette: Palette::new(&config.palette),
            ring: CyclotronEffect::new(&config.ring, now),
            stick: PowerMeterEffect::new(&config.stick, now),
            ring_strip,
            stick_strip,
        })
    }

    /// Run one iteration at `now`.
    ///
    /// Order within an iteration: watchdog, inputs, state machine, effects,
    /// output. The watchdog is polled first so no mode can starve it.
    pub fn tick(&mut self, now: Tick) -> LoopReport {
        let fed = self.feeder.poll(self.board.watchdog(), now);

        self.mode_switch.poll(self.board.mode_switch(), now);
        self.trigger.poll(self.board.trigger(), now);
        let position = self.board.encoder().position();
        self.selector.update(position);

        let events = InputEvents {
            mode_switch: self.mode_switch.press(self.mode_switch_polarity),
            trigger: self.trigger.press(self.trigger_polarity),
            audio_playing: self.board.audio().is_playing(),
        };
        for action in self.machine.step(&events) {
            self.apply(action, now);
        }

        let mode = self.machine.mode();
        let mut ctx = EffectContext {
            now,
            mode,
            palette: &self.palette,
            color_index: self.selector.index(),
            rng: &mut self.rng,
        };
        if self.ring.is_active(mode) {
            self.ring.update(&mut ctx, &mut self.ring_strip);
        }
        if self.stick.is_active(mode) && self.stick.update(&mut ctx, &mut self.stick_strip).spark {
            self.ring.spark(&self.palette, &mut self.ring_strip);
        }

        let ring_flushed = self.ring_strip.flush(self.board.ring());
        let stick_flushed = self.stick_strip.flush(self.board.stick());

        LoopReport {
            now,
            mode,
            fed,
            ring_flushed,
            stick_flushed,
        }
    }

    fn apply(&mut self, action: Action, now: Tick) {
        match action {
            Action::StopAudio => self.board.audio().stop(),
            Action::Play(cue) => {
                if let Some(track) = self.tracks.track(cue) {
                    self.board.audio().play(track);
                }
            }
            Action::BlankRing => self.ring_strip.blank(),
            Action::BlankStick => self.stick_strip.blank(),
            Action::ResetRamp => {
                self.ring.reset(now);
                self.stick.reset(now);
            }
        }
    }

    /// Restore the mode from a raw id, e.g. one kept across a soft reset.
    ///
    /// An unknown id lands in standby with audio stopped and both strips
    /// dark.
    pub fn restore_mode(&mut self, raw: u8) -> DeviceMode {
        let anomalies = self.machine.anomalies();
        let mode = self.machine.restore_raw(raw);
        if self.machine.anomalies() != anomalies {
            self.board.audio().stop();
            self.ring_strip.blank();
            self.stick_strip.blank();
        }
        mode
    }

    /// Current mode
    pub const fn mode(&self) -> DeviceMode {
        self.machine.mode()
    }

    pub const fn machine(&self) -> &DeviceStateMachine {
        &self.machine
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette slot selected by the encoder
    pub const fn color_index(&self) -> usize {
        self.selector.index()
    }

    pub const fn ring(&self) -> &CyclotronEffect {
        &self.ring
    }

    pub const fn stick(&self) -> &PowerMeterEffect {
        &self.stick
    }

    pub const fn ring_strip(&self) -> &PixelStrip<RING_MAX> {
        &self.ring_strip
    }

    pub const fn stick_strip(&self) -> &PixelStrip<STICK_MAX> {
        &self.stick_strip
    }

    pub const fn feeder(&self) -> &LivenessFeeder {
        &self.feeder
    }

    pub const fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }
}
