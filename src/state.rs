//! Device mode state machine
//!
//! The machine never touches hardware. Each call to [`DeviceStateMachine::step`]
//! consumes the debounced events of one loop iteration and returns the side
//! effects the engine has to carry out, in order.

use heapless::Vec;

use crate::audio::Cue;
use crate::debounce::Press;

const MODE_ID_STANDBY: u8 = 0;
const MODE_ID_STARTUP: u8 = 1;
const MODE_ID_LOOP_IDLE: u8 = 2;
const MODE_ID_POWER_ON: u8 = 3;

/// Operating mode of the pack
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DeviceMode {
    /// Disarmed: strips dark except for a slow blink on the meter
    Standby = MODE_ID_STANDBY,
    /// Start-up cue playing, ring spinning up
    Startup = MODE_ID_STARTUP,
    /// Armed and idle: ring chasing, meter charging
    LoopIdle = MODE_ID_LOOP_IDLE,
    /// Trigger held: ring flashing, meter draining
    PowerOn = MODE_ID_POWER_ON,
}

impl DeviceMode {
    /// Every mode, in id order
    pub const ALL: [Self; 4] = [Self::Standby, Self::Startup, Self::LoopIdle, Self::PowerOn];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_STANDBY => Self::Standby,
            MODE_ID_STARTUP => Self::Startup,
            MODE_ID_LOOP_IDLE => Self::LoopIdle,
            MODE_ID_POWER_ON => Self::PowerOn,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standby => "STANDBY",
            Self::Startup => "STARTUP",
            Self::LoopIdle => "LOOP_IDLE",
            Self::PowerOn => "POWER_ON",
        }
    }

    /// Mode entered at boot, from the resting level of the mode switch
    pub const fn initial(switch_armed: bool) -> Self {
        if switch_armed {
            Self::LoopIdle
        } else {
            Self::Standby
        }
    }
}

/// A set of modes, used to gate effects
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ModeSet(u8);

impl ModeSet {
    pub const EMPTY: Self = Self(0);

    /// Set containing exactly `modes`
    pub const fn of(modes: &[DeviceMode]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < modes.len() {
            bits |= 1 << modes[i] as u8;
            i += 1;
        }
        Self(bits)
    }

    pub const fn contains(self, mode: DeviceMode) -> bool {
        self.0 & (1 << mode as u8) != 0
    }
}

/// Debounced events of one loop iteration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputEvents {
    /// Mode switch edge, already translated through its polarity
    pub mode_switch: Option<Press>,
    /// Trigger edge, already translated through its polarity
    pub trigger: Option<Press>,
    /// Whether the audio channel is still playing
    pub audio_playing: bool,
}

/// Side effect requested by a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    StopAudio,
    Play(Cue),
    BlankRing,
    BlankStick,
    /// Restart the ring spin-up and the meter charge-up
    ResetRamp,
}

/// Most actions a single step can produce
pub const MAX_ACTIONS: usize = 8;

/// Ordered side effects of one step
pub type Actions = Vec<Action, MAX_ACTIONS>;

/// Owns the current mode and applies the transition table
#[derive(Debug, Clone)]
pub struct DeviceStateMachine {
    mode: DeviceMode,
    /// Whether arming plays a start-up cue before idling
    startup_cue: bool,
    /// Whether disarming plays a shutdown cue
    shutdown_cue: bool,
    anomalies: u32,
}

impl DeviceStateMachine {
    pub const fn new(initial: DeviceMode, startup_cue: bool, shutdown_cue: bool) -> Self {
        Self {
            mode: initial,
            startup_cue,
            shutdown_cue,
            anomalies: 0,
        }
    }

    /// Current mode
    pub const fn mode(&self) -> DeviceMode {
        self.mode
    }

    /// Number of times an unknown mode had to be recovered
    pub const fn anomalies(&self) -> u32 {
        self.anomalies
    }

    /// Restore the mode from its raw id.
    ///
    /// An id outside the closed set is a bug somewhere upstream. It is logged,
    /// counted, and recovered by forcing [`DeviceMode::Standby`]; the loop
    /// keeps running either way.
    pub fn restore_raw(&mut self, raw: u8) -> DeviceMode {
        self.mode = if let Some(mode) = DeviceMode::from_raw(raw) {
            mode
        } else {
            self.anomalies = self.anomalies.saturating_add(1);
            log!(
                "*** unknown mode id {} (anomaly {}), forcing {}",
                raw,
                self.anomalies,
                DeviceMode::Standby.as_str()
            );
            DeviceMode::Standby
        };
        self.mode
    }

    /// Apply the events of one iteration.
    ///
    /// The start-up cue finishing is checked first, against the audio state
    /// sampled before this iteration issued any command; then the mode switch;
    /// then the trigger.
    pub fn step(&mut self, events: &InputEvents) -> Actions {
        let mut actions = Actions::new();

        if self.mode == DeviceMode::Startup && !events.audio_playing {
            self.enter(DeviceMode::LoopIdle, "start-up cue finished");
        }

        match events.mode_switch {
            Some(Press::Released) => self.disarm(&mut actions),
            Some(Press::Engaged) => self.arm(&mut actions),
            None => {}
        }

        match (self.mode, events.trigger) {
            (DeviceMode::LoopIdle, Some(Press::Engaged)) => {
                push(&mut actions, Action::StopAudio);
                push(&mut actions, Action::Play(Cue::Firing));
                self.enter(DeviceMode::PowerOn, "trigger engaged");
            }
            (DeviceMode::PowerOn, Some(Press::Released)) => {
                push(&mut actions, Action::StopAudio);
                push(&mut actions, Action::BlankRing);
                self.enter(DeviceMode::LoopIdle, "trigger released");
            }
            _ => {}
        }

        actions
    }

    fn disarm(&mut self, actions: &mut Actions) {
        push(actions, Action::StopAudio);
        if self.shutdown_cue {
            push(actions, Action::Play(Cue::Shutdown));
        }
        push(actions, Action::BlankRing);
        push(actions, Action::BlankStick);
        self.enter(DeviceMode::Standby, "mode switch disarmed");
    }

    fn arm(&mut self, actions: &mut Actions) {
        if self.mode != DeviceMode::Standby {
            return;
        }
        push(actions, Action::ResetRamp);
        if self.startup_cue {
            push(actions, Action::StopAudio);
            push(actions, Action::Play(Cue::Startup));
            self.enter(DeviceMode::Startup, "mode switch armed");
        } else {
            self.enter(DeviceMode::LoopIdle, "mode switch armed");
        }
    }

    fn enter(&mut self, to: DeviceMode, cause: &str) {
        log!("{} -> {} ({})", self.mode.as_str(), to.as_str(), cause);
        self.mode = to;
    }
}

fn push(actions: &mut Actions, action: Action) {
    // A step produces at most five actions.
    let _ = actions.push(action);
}
