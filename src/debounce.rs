//! Debounced digital inputs with one-shot edge flags

use crate::tick::{Tick, ticks_diff};

/// A raw digital input sampled once per loop iteration.
pub trait RawInput {
    /// Current electrical level of the input
    fn is_high(&mut self) -> bool;
}

/// How a physical engagement shows up on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Engaged reads high (a switch closing against a pull-down, or a
    /// toggle whose "on" position releases the pull-up line)
    ActiveHigh,
    /// Engaged reads low (a button shorting a pulled-up line to ground)
    ActiveLow,
}

/// A debounced edge, expressed in terms of the physical control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    Engaged,
    Released,
}

impl Polarity {
    /// Whether a stable level means the control is engaged
    pub const fn is_engaged(self, level: bool) -> bool {
        match self {
            Self::ActiveHigh => level,
            Self::ActiveLow => !level,
        }
    }

    /// Translate the electrical edges of one poll into a physical event.
    ///
    /// For an active-low input a falling edge is the engagement and a rising
    /// edge the release.
    pub const fn press(self, rose: bool, fell: bool) -> Option<Press> {
        match (self, rose, fell) {
            (Self::ActiveHigh, true, _) | (Self::ActiveLow, _, true) => Some(Press::Engaged),
            (Self::ActiveHigh, _, true) | (Self::ActiveLow, true, _) => Some(Press::Released),
            _ => None,
        }
    }
}

/// Edge detector for one raw input.
///
/// A new level is accepted once the raw signal has held it for at least the
/// settle interval. `rose` and `fell` are recomputed by every [`update`] and
/// are only true for the single poll that accepted the transition.
///
/// [`update`]: Debouncer::update
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Accepted level
    value: bool,
    /// Last raw sample
    raw: bool,
    /// Tick at which `raw` last changed
    raw_since: Tick,
    settle: u32,
    rose: bool,
    fell: bool,
}

impl Debouncer {
    /// Create a detector whose accepted level starts at `initial`.
    pub const fn new(initial: bool, settle: u32, now: Tick) -> Self {
        Self {
            value: initial,
            raw: initial,
            raw_since: now,
            settle,
            rose: false,
            fell: false,
        }
    }

    /// Feed one raw sample taken at `now`.
    #[allow(clippy::cast_sign_loss)]
    pub fn update(&mut self, raw: bool, now: Tick) {
        self.rose = false;
        self.fell = false;

        if raw != self.raw {
            self.raw = raw;
            self.raw_since = now;
        }
        if raw == self.value {
            return;
        }

        let held = ticks_diff(now, self.raw_since).max(0) as u32;
        if held >= self.settle {
            self.value = raw;
            self.rose = raw;
            self.fell = !raw;
        }
    }

    /// Sample `input` and feed the reading.
    pub fn poll<I: RawInput>(&mut self, input: &mut I, now: Tick) {
        let raw = input.is_high();
        self.update(raw, now);
    }

    /// Accepted (debounced) level
    pub const fn value(&self) -> bool {
        self.value
    }

    /// The accepted level went low to high on the last update
    pub const fn rose(&self) -> bool {
        self.rose
    }

    /// The accepted level went high to low on the last update
    pub const fn fell(&self) -> bool {
        self.fell
    }

    /// The edge from the last update, seen through `polarity`
    pub const fn press(&self, polarity: Polarity) -> Option<Press> {
        polarity.press(self.rose, self.fell)
    }
}
