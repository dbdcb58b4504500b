//! Injected randomness for visual variation

/// Uniform random integers.
///
/// Effects only draw through this trait, so tests can substitute a scripted
/// or seeded source and assert exact sequences.
pub trait RandomSource {
    /// Uniform value in `0..bound`. `bound` is never zero.
    fn below(&mut self, bound: u32) -> u32;
}

impl RandomSource for fastrand::Rng {
    fn below(&mut self, bound: u32) -> u32 {
        self.u32(0..bound.max(1))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: u32) -> u32 {
        (**self).below(bound)
    }
}
