//! Time abstraction traits for platform-agnostic blocking delays.

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait for blocking delays.
///
/// Implement this for your timer (busy-wait loop, SysTick, HAL delay) to pace
/// the display patterns. Test suites substitute a virtual clock.
pub trait Delay<D: TimeDuration> {
    /// Blocks for the given duration.
    fn delay(&mut self, duration: D);
}

/// Millisecond duration used by the bundled backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl TimeDuration for Millis {
    const ZERO: Self = Millis(0);

    #[inline]
    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    #[inline]
    fn from_millis(millis: u64) -> Self {
        Millis(millis.min(u32::MAX as u64) as u32)
    }
}
