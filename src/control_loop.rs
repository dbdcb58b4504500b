//! Cooperative control loop
//!
//! Portable: no async, no platform timers. The loop reads the clock, runs
//! one engine iteration, and hands control back to the caller to pause.

use embassy_time::Duration;

use crate::board::Board;
use crate::engine::{Engine, LoopReport};
use crate::random::RandomSource;
use crate::tick::TickSource;

/// Pause between iterations. Every schedule in the engine assumes at least
/// one poll per tick.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Drives an [`Engine`] from a [`TickSource`].
///
/// # Usage
///
/// ```ignore
/// let mut control = ControlLoop::new(engine, EmbassyTicks);
/// control.run(|pause| block_for(pause));
/// ```
pub struct ControlLoop<
    B: Board,
    G: RandomSource,
    C: TickSource,
    const RING_MAX: usize,
    const STICK_MAX: usize,
> {
    engine: Engine<B, G, RING_MAX, STICK_MAX>,
    clock: C,
    poll_interval: Duration,
}

impl<B: Board, G: RandomSource, C: TickSource, const RING_MAX: usize, const STICK_MAX: usize>
    ControlLoop<B, G, C, RING_MAX, STICK_MAX>
{
    pub fn new(engine: Engine<B, G, RING_MAX, STICK_MAX>, clock: C) -> Self {
        Self::with_poll_interval(engine, clock, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_poll_interval(
        engine: Engine<B, G, RING_MAX, STICK_MAX>,
        clock: C,
        poll_interval: Duration,
    ) -> Self {
        Self {
            engine,
            clock,
            poll_interval,
        }
    }

    /// Read the clock and run one iteration
    pub fn step(&mut self) -> LoopReport {
        let now = self.clock.now();
        self.engine.tick(now)
    }

    /// Iterate forever, calling `pause` with the poll interval in between.
    pub fn run(&mut self, mut pause: impl FnMut(Duration)) -> ! {
        loop {
            self.step();
            pause(self.poll_interval);
        }
    }

    pub const fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub const fn engine(&self) -> &Engine<B, G, RING_MAX, STICK_MAX> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine<B, G, RING_MAX, STICK_MAX> {
        &mut self.engine
    }
}
