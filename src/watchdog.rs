//! Liveness feeder for the hardware watchdog.

use crate::tick::{Schedule, Tick};

/// Largest timeout the supervising hardware accepts, in ticks.
pub const WATCHDOG_MAX_TIMEOUT: u32 = 8_000;

/// Smallest timeout for which a feed interval below `timeout / 2` exists.
pub const WATCHDOG_MIN_TIMEOUT: u32 = 3;

/// Hardware timer that resets the device unless fed in time.
pub trait Watchdog {
    /// Arm the watchdog with the given timeout in ticks
    fn configure(&mut self, timeout: u32);

    /// Acknowledge liveness
    fn feed(&mut self);
}

/// Schedules watchdog feeds like any other periodic effect.
///
/// The feed period is chosen so that, with the loop polling at least once per
/// tick, the gap between two feeds stays strictly below half the timeout.
#[derive(Debug, Clone)]
pub struct LivenessFeeder {
    timeout: u32,
    schedule: Schedule,
}

impl LivenessFeeder {
    /// Clamp `timeout` to the hardware maximum, arm `watchdog`, and feed it once.
    pub fn start<W: Watchdog>(watchdog: &mut W, timeout: u32, now: Tick) -> Self {
        let clamped = timeout.min(WATCHDOG_MAX_TIMEOUT);
        if clamped != timeout {
            log!("watchdog timeout {} clamped to {}", timeout, clamped);
        }
        let period = Self::feed_period(clamped);

        watchdog.configure(clamped);
        watchdog.feed();
        log!("watchdog armed: timeout {} ticks, feeding every {}", clamped, period + 1);

        let mut schedule = Schedule::new(period, now);
        // The feed above counts as the first one.
        schedule.poll(now);
        Self {
            timeout: clamped,
            schedule,
        }
    }

    /// Schedule period for a timeout.
    ///
    /// A schedule fires one tick after its period elapses, so the worst-case
    /// gap is `period + 1`, which must stay below `timeout / 2`.
    pub const fn feed_period(timeout: u32) -> u32 {
        (timeout.saturating_sub(1) / 2).saturating_sub(1)
    }

    /// Effective (clamped) timeout in ticks
    pub const fn timeout(&self) -> u32 {
        self.timeout
    }

    /// Feed `watchdog` if the feed is due. Returns whether it was fed.
    pub fn poll<W: Watchdog>(&mut self, watchdog: &mut W, now: Tick) -> bool {
        if !self.schedule.poll(now) {
            return false;
        }
        watchdog.feed();
        true
    }
}
