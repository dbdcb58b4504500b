//! Cyclotron: a lit band chasing around the ring
//!
//! In the armed modes a band of `band_width` pixels runs around the ring, one
//! step per chase period. After arming, the chase period starts at a slow
//! extreme and ramps one tick per ramp period toward the cruise period,
//! sparking the trailing pixel at every speed change. While the trigger is
//! held the chase stops and the whole ring flickers instead.

use super::{Effect, EffectContext, EffectOutcome};
use crate::color::{OFF, Palette, Rgb};
use crate::random::RandomSource;
use crate::state::{DeviceMode, ModeSet};
use crate::strip::PixelStrip;
use crate::tick::{Schedule, Tick};

/// Flash draws come from `0..FLASH_RANGE`
pub const FLASH_RANGE: u32 = 20;

/// Draws below this fill the ring with the selected color
const FLASH_COLOR_BELOW: u32 = 3;
const FLASH_WHITE: u32 = 4;
const FLASH_RANDOM_COLOR: u32 = 5;

/// Ring settings
#[derive(Debug, Clone, Copy)]
pub struct RingConfig {
    /// Pixels on the ring
    pub len: usize,
    /// Width of the lit band
    pub band_width: usize,
    /// Steady-state chase period, in ticks
    pub cruise_period: u32,
    /// Chase period right after arming
    pub starting_period: u32,
    /// Ticks between two ramp steps
    pub ramp_period: u32,
    /// Global strip brightness (0-255)
    pub brightness: u8,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            len: 60,
            band_width: 3,
            cruise_period: 30,
            starting_period: 300,
            ramp_period: 30,
            brightness: 13,
        }
    }
}

/// What one flicker frame showed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashOutcome {
    /// Whole ring in the selected color
    Color,
    /// Whole ring white
    White,
    /// Whole ring in a random palette color
    RandomColor,
    /// Ring dark
    Blank,
}

impl FlashOutcome {
    /// Classify a draw from `0..FLASH_RANGE`
    pub const fn from_draw(draw: u32) -> Self {
        match draw {
            d if d < FLASH_COLOR_BELOW => Self::Color,
            FLASH_WHITE => Self::White,
            FLASH_RANDOM_COLOR => Self::RandomColor,
            _ => Self::Blank,
        }
    }
}

/// Chasing band over the ring
#[derive(Debug, Clone)]
pub struct CyclotronEffect {
    len: usize,
    band_width: usize,
    /// Next pixel to light
    cursor_on: usize,
    /// Next pixel to clear, always `band_width` behind `cursor_on`
    cursor_off: usize,
    /// Current chase period
    period: u32,
    cruise_period: u32,
    starting_period: u32,
    chase: Schedule,
    ramp: Schedule,
}

impl CyclotronEffect {
    /// Create the effect already at cruise speed.
    ///
    /// `config.band_width` must be in `1..config.len`.
    pub const fn new(config: &RingConfig, now: Tick) -> Self {
        Self {
            len: config.len,
            band_width: config.band_width,
            cursor_on: 0,
            cursor_off: config.len - config.band_width,
            period: config.cruise_period,
            cruise_period: config.cruise_period,
            starting_period: config.starting_period,
            chase: Schedule::new(config.cruise_period, now),
            ramp: Schedule::new(config.ramp_period, now),
        }
    }

    pub const fn cursor_on(&self) -> usize {
        self.cursor_on
    }

    pub const fn cursor_off(&self) -> usize {
        self.cursor_off
    }

    pub const fn band_width(&self) -> usize {
        self.band_width
    }

    /// Current chase period
    pub const fn period(&self) -> u32 {
        self.period
    }

    /// Whether the period has reached the cruise period
    pub const fn is_cruising(&self) -> bool {
        self.period == self.cruise_period
    }

    /// Drop back to the starting period and ramp up again
    pub fn spin_up(&mut self, now: Tick) {
        self.period = self.starting_period;
        self.chase.set_period(self.period);
        self.chase.restart(now);
        self.ramp.restart(now);
    }

    /// Light the leading pixel, clear the trailing one, advance both.
    pub fn chase_step<const N: usize>(&mut self, color: Rgb, strip: &mut PixelStrip<N>) {
        strip.set(self.cursor_on, color);
        strip.set(self.cursor_off, OFF);
        self.cursor_on = (self.cursor_on + 1) % self.len;
        self.cursor_off = (self.cursor_off + 1) % self.len;
    }

    /// Move the period one tick toward cruise. Returns whether it changed.
    pub fn ramp_step<const N: usize>(&mut self, palette: &Palette, strip: &mut PixelStrip<N>) -> bool {
        if self.period > self.cruise_period {
            self.period -= 1;
        } else if self.period < self.cruise_period {
            self.period += 1;
        } else {
            return false;
        }
        self.spark(palette, strip);
        true
    }

    /// Flash the trailing pixel with the brightest color
    pub fn spark<const N: usize>(&self, palette: &Palette, strip: &mut PixelStrip<N>) {
        strip.set(self.cursor_off, palette.spark());
    }

    /// Draw one flicker frame over the whole ring.
    pub fn flash<G: RandomSource, const N: usize>(
        &self,
        ctx: &mut EffectContext<'_, G>,
        strip: &mut PixelStrip<N>,
    ) -> FlashOutcome {
        let outcome = FlashOutcome::from_draw(ctx.rng.below(FLASH_RANGE));
        let color = match outcome {
            FlashOutcome::Color => ctx.color(),
            FlashOutcome::White => ctx.palette.white(),
            #[allow(clippy::cast_possible_truncation)]
            FlashOutcome::RandomColor => {
                let index = ctx.rng.below(ctx.palette.len() as u32);
                ctx.palette.color(index as usize)
            }
            FlashOutcome::Blank => OFF,
        };
        strip.fill(color);
        outcome
    }
}

impl Effect for CyclotronEffect {
    const ACTIVE_MODES: ModeSet = ModeSet::of(&[
        DeviceMode::Startup,
        DeviceMode::LoopIdle,
        DeviceMode::PowerOn,
    ]);

    fn update<G: RandomSource, const N: usize>(
        &mut self,
        ctx: &mut EffectContext<'_, G>,
        strip: &mut PixelStrip<N>,
    ) -> EffectOutcome {
        let mut outcome = EffectOutcome::default();
        match ctx.mode {
            DeviceMode::PowerOn => {
                self.flash(ctx, strip);
                outcome.stepped = true;
            }
            DeviceMode::Startup | DeviceMode::LoopIdle => {
                if self.ramp.poll(ctx.now) && self.ramp_step(ctx.palette, strip) {
                    outcome.stepped = true;
                }
                self.chase.set_period(self.period);
                if self.chase.poll(ctx.now) {
                    self.chase_step(ctx.color(), strip);
                    outcome.stepped = true;
                }
            }
            DeviceMode::Standby => {}
        }
        outcome
    }

    fn reset(&mut self, now: Tick) {
        self.spin_up(now);
    }
}
