//! Millisecond ticks and wraparound-safe scheduling.
//!
//! Ticks live on a circle of [`TICK_MODULUS`] values. Two ticks are compared
//! by their signed distance on that circle, so a schedule armed just before
//! the wrap fires correctly just after it. Distances must stay below half the
//! modulus (about three days), which every period in this crate does by far.

use embassy_time::Instant;

/// A point on the millisecond clock, always in `[0, TICK_MODULUS)`.
pub type Tick = u32;

/// Number of bits the tick counter carries before wrapping.
pub const TICK_BITS: u32 = 29;

/// The clock wraps back to zero when it reaches this value.
pub const TICK_MODULUS: u32 = 1 << TICK_BITS;

/// Mask that folds any `u32` onto the tick circle.
pub const TICK_MASK: u32 = TICK_MODULUS - 1;

const TICK_HALF: u32 = TICK_MODULUS / 2;

/// Source of monotonic millisecond ticks.
pub trait TickSource {
    /// Current tick. Non-decreasing except for the wrap back to zero.
    fn now(&mut self) -> Tick;
}

/// Tick source backed by the `embassy-time` driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyTicks;

impl TickSource for EmbassyTicks {
    #[allow(clippy::cast_possible_truncation)]
    fn now(&mut self) -> Tick {
        (Instant::now().as_millis() as u32) & TICK_MASK
    }
}

/// `tick + delta` on the tick circle.
#[inline]
pub const fn ticks_add(tick: Tick, delta: u32) -> Tick {
    tick.wrapping_add(delta) & TICK_MASK
}

/// `tick - delta` on the tick circle.
#[inline]
pub const fn ticks_sub(tick: Tick, delta: u32) -> Tick {
    tick.wrapping_sub(delta) & TICK_MASK
}

/// Signed distance from `earlier` to `later`.
///
/// Positive when `later` is ahead of `earlier`, even across the wrap.
#[inline]
#[allow(clippy::cast_possible_wrap)]
pub const fn ticks_diff(later: Tick, earlier: Tick) -> i32 {
    let distance = later.wrapping_sub(earlier) & TICK_MASK;
    if distance >= TICK_HALF {
        distance as i32 - TICK_MODULUS as i32
    } else {
        distance as i32
    }
}

/// A periodic deadline: `(period, next_due)`.
///
/// The schedule fires when the current tick is strictly past `next_due`, and
/// then re-arms at `now + period`. A loop that stalls does not produce a burst
/// of catch-up firings; the next deadline is always measured from the tick
/// that observed the firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    period: u32,
    next_due: Tick,
}

impl Schedule {
    /// Create a schedule that fires on the first poll at or after `now`.
    pub const fn new(period: u32, now: Tick) -> Self {
        Self {
            period,
            next_due: ticks_sub(now, 1),
        }
    }

    /// Current period in ticks
    pub const fn period(&self) -> u32 {
        self.period
    }

    /// Tick after which the schedule fires next
    pub const fn next_due(&self) -> Tick {
        self.next_due
    }

    /// Change the period. Takes effect when the schedule next re-arms.
    pub fn set_period(&mut self, period: u32) {
        self.period = period;
    }

    /// Whether `now` is strictly past the deadline
    pub const fn is_due(&self, now: Tick) -> bool {
        ticks_diff(now, self.next_due) > 0
    }

    /// Fire if due, re-arming the deadline at `now + period`.
    pub fn poll(&mut self, now: Tick) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.next_due = ticks_add(now, self.period);
        true
    }

    /// Make the schedule fire on the next poll at or after `now`.
    pub fn restart(&mut self, now: Tick) {
        self.next_due = ticks_sub(now, 1);
    }
}
