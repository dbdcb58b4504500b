//! Power meter: a bar on the stick that charges, drains, or idles
//!
//! One effect with three update rules selected by the device mode:
//! - armed: the bar grows one pixel per period up to a random ceiling, then
//!   marks that ceiling, draws a new one, and starts over. The ceiling is
//!   drawn below a limit that ratchets up by one on every reset, so right
//!   after arming the meter charges up gradually instead of jumping to full.
//! - firing: the bar drains one pixel per (slower) drain period.
//! - standby: pixel 0 blinks briefly once per blink cycle.

use super::{Effect, EffectContext, EffectOutcome};
use crate::color::{OFF, Palette};
use crate::random::RandomSource;
use crate::state::{DeviceMode, ModeSet};
use crate::strip::PixelStrip;
use crate::tick::{Schedule, Tick};

/// Stick settings
#[derive(Debug, Clone, Copy)]
pub struct StickConfig {
    /// Pixels on the stick
    pub len: usize,
    /// Growth (and standby blink) period, in ticks
    pub period: u32,
    /// Drain period while firing, in ticks
    pub drain_period: u32,
    /// Standby counter wraps at this value, lighting pixel 0 once per wrap
    pub blink_bound: u32,
    /// Global strip brightness (0-255)
    pub brightness: u8,
}

impl Default for StickConfig {
    fn default() -> Self {
        Self {
            len: 20,
            period: 20,
            drain_period: 1000,
            blink_bound: 50,
            brightness: 26,
        }
    }
}

/// Bar-fill meter over the stick
#[derive(Debug, Clone)]
pub struct PowerMeterEffect {
    len: usize,
    /// Next pixel to light (growing) or clear (draining)
    cursor: usize,
    /// Current ceiling
    max: usize,
    /// Previous ceiling, kept lit as a marker
    max_previous: usize,
    /// Ceilings are drawn from `0..limit`
    limit: usize,
    blink_counter: u32,
    blink_bound: u32,
    period: u32,
    drain_period: u32,
    schedule: Schedule,
}

impl PowerMeterEffect {
    /// Create an empty meter. `config.len` must be at least 2.
    pub const fn new(config: &StickConfig, now: Tick) -> Self {
        Self {
            len: config.len,
            cursor: 0,
            max: 0,
            max_previous: 0,
            limit: 0,
            blink_counter: 1,
            blink_bound: config.blink_bound,
            period: config.period,
            drain_period: config.drain_period,
            schedule: Schedule::new(config.period, now),
        }
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn max(&self) -> usize {
        self.max
    }

    pub const fn max_previous(&self) -> usize {
        self.max_previous
    }

    pub const fn limit(&self) -> usize {
        self.limit
    }

    pub const fn blink_counter(&self) -> u32 {
        self.blink_counter
    }

    /// Period of the update rule used in `mode`
    pub const fn period_for(&self, mode: DeviceMode) -> u32 {
        match mode {
            DeviceMode::PowerOn => self.drain_period,
            DeviceMode::Standby | DeviceMode::Startup | DeviceMode::LoopIdle => self.period,
        }
    }

    /// Empty the meter and start charging from the bottom again
    pub fn recharge(&mut self, now: Tick) {
        self.cursor = 0;
        self.max = 0;
        self.max_previous = 0;
        self.limit = 0;
        self.schedule.restart(now);
    }

    /// Growth rule. Returns whether the ring should spark.
    pub fn grow<G: RandomSource, const N: usize>(
        &mut self,
        ctx: &mut EffectContext<'_, G>,
        strip: &mut PixelStrip<N>,
    ) -> bool {
        let top = self.len - 1;
        if self.cursor > self.max {
            self.limit = (self.limit + 1).min(top);
            self.max_previous = self.max.min(top);
            #[allow(clippy::cast_possible_truncation)]
            {
                self.max = ctx.rng.below(self.limit as u32) as usize;
            }
            self.cursor = 0;
            strip.blank();
            return true;
        }

        strip.set(self.cursor, ctx.palette.meter());
        strip.set(self.max_previous, ctx.palette.marker());
        self.cursor = (self.cursor + 1).min(top);
        false
    }

    /// Drain rule
    pub fn drain<const N: usize>(&mut self, palette: &Palette, strip: &mut PixelStrip<N>) {
        if self.cursor == 0 {
            return;
        }
        strip.set(self.cursor, OFF);
        strip.set(self.max_previous, palette.marker());
        self.cursor -= 1;
    }

    /// Standby rule
    pub fn blink<const N: usize>(&mut self, palette: &Palette, strip: &mut PixelStrip<N>) {
        if self.blink_counter >= self.blink_bound {
            strip.set(0, palette.marker());
            self.blink_counter = 1;
        } else {
            strip.set(0, OFF);
            self.blink_counter += 1;
        }
    }
}

impl Effect for PowerMeterEffect {
    const ACTIVE_MODES: ModeSet = ModeSet::of(&DeviceMode::ALL);

    fn update<G: RandomSource, const N: usize>(
        &mut self,
        ctx: &mut EffectContext<'_, G>,
        strip: &mut PixelStrip<N>,
    ) -> EffectOutcome {
        self.schedule.set_period(self.period_for(ctx.mode));
        if !self.schedule.poll(ctx.now) {
            return EffectOutcome::default();
        }

        let spark = match ctx.mode {
            DeviceMode::Standby => {
                self.blink(ctx.palette, strip);
                false
            }
            DeviceMode::Startup | DeviceMode::LoopIdle => self.grow(ctx, strip),
            DeviceMode::PowerOn => {
                self.drain(ctx.palette, strip);
                false
            }
        };
        EffectOutcome {
            stepped: true,
            spark,
        }
    }

    fn reset(&mut self, now: Tick) {
        self.recharge(now);
    }
}
