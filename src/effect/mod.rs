//! Strip effects
//!
//! Each effect owns its own schedules and declares the modes it runs in. The
//! engine checks that gate once per iteration and only then calls
//! [`Effect::update`], so no effect has to know about the others.

mod cyclotron;
mod power_meter;

pub use cyclotron::{CyclotronEffect, FlashOutcome, RingConfig};
pub use power_meter::{PowerMeterEffect, StickConfig};

use crate::color::Palette;
use crate::random::RandomSource;
use crate::state::{DeviceMode, ModeSet};
use crate::strip::PixelStrip;
use crate::tick::Tick;

/// Everything an effect may read during one update
pub struct EffectContext<'a, G: RandomSource> {
    pub now: Tick,
    pub mode: DeviceMode,
    pub palette: &'a Palette,
    /// Palette slot selected by the encoder
    pub color_index: usize,
    pub rng: &'a mut G,
}

impl<G: RandomSource> EffectContext<'_, G> {
    /// Selected palette color
    pub const fn color(&self) -> crate::color::Rgb {
        self.palette.color(self.color_index)
    }
}

/// Result of one effect update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectOutcome {
    /// The effect's schedule fired and it touched its strip
    pub stepped: bool,
    /// The ring should flash a spark at its trailing cursor
    pub spark: bool,
}

pub trait Effect {
    /// Modes in which the effect runs
    const ACTIVE_MODES: ModeSet;

    /// Whether the effect runs in `mode`
    fn is_active(&self, mode: DeviceMode) -> bool {
        Self::ACTIVE_MODES.contains(mode)
    }

    /// Advance the effect for the current tick
    fn update<G: RandomSource, const N: usize>(
        &mut self,
        ctx: &mut EffectContext<'_, G>,
        strip: &mut PixelStrip<N>,
    ) -> EffectOutcome;

    /// Reset effect state
    fn reset(&mut self, _now: Tick) {}
}
