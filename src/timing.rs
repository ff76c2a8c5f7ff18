//! Pattern cadence configuration.

use crate::time::TimeDuration;

/// Cadence of the poll loop and every display pattern.
///
/// # Type Parameters
/// * `D` - The duration type (e.g., [`Millis`](crate::Millis))
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing<D: TimeDuration> {
    /// Delay after each poll iteration.
    pub poll_interval: D,
    /// On and off hold of the Pattern1 both-buttons blink.
    pub blink_hold: D,
    /// Time between counter writes in Pattern2 and Pattern3.
    pub count_step: D,
    /// On and off hold of each Pattern4 flash cycle.
    pub flash_hold: D,
    /// Time between shifts in Pattern5.
    pub shift_step: D,
}

impl<D: TimeDuration> Timing<D> {
    /// The lab board cadence: 100 ms poll, 1 s blink, 100 ms count, 1 s flash,
    /// 500 ms shift.
    pub fn standard() -> Self {
        Self {
            poll_interval: D::from_millis(100),
            blink_hold: D::from_millis(1000),
            count_step: D::from_millis(100),
            flash_hold: D::from_millis(1000),
            shift_step: D::from_millis(500),
        }
    }

    /// Creates a builder starting from [`Timing::standard`].
    pub fn builder() -> TimingBuilder<D> {
        TimingBuilder::new()
    }
}

impl<D: TimeDuration> Default for Timing<D> {
    fn default() -> Self {
        Self::standard()
    }
}

/// Names a [`Timing`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingField {
    PollInterval,
    BlinkHold,
    CountStep,
    FlashHold,
    ShiftStep,
}

/// Timing validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// A cadence was set to zero.
    ZeroDuration(TimingField),
}

impl core::fmt::Display for TimingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimingError::ZeroDuration(field) => {
                write!(f, "{:?} must be non-zero", field)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimingError {}

/// Builder for validated [`Timing`] values.
#[derive(Debug)]
pub struct TimingBuilder<D: TimeDuration> {
    timing: Timing<D>,
}

impl<D: TimeDuration> TimingBuilder<D> {
    /// Creates a builder with the standard cadence.
    pub fn new() -> Self {
        Self {
            timing: Timing::standard(),
        }
    }

    /// Sets the poll loop delay.
    pub fn poll_interval(mut self, duration: D) -> Self {
        self.timing.poll_interval = duration;
        self
    }

    /// Sets the Pattern1 blink hold.
    pub fn blink_hold(mut self, duration: D) -> Self {
        self.timing.blink_hold = duration;
        self
    }

    /// Sets the Pattern2/Pattern3 counter step.
    pub fn count_step(mut self, duration: D) -> Self {
        self.timing.count_step = duration;
        self
    }

    /// Sets the Pattern4 flash hold.
    pub fn flash_hold(mut self, duration: D) -> Self {
        self.timing.flash_hold = duration;
        self
    }

    /// Sets the Pattern5 shift step.
    pub fn shift_step(mut self, duration: D) -> Self {
        self.timing.shift_step = duration;
        self
    }

    /// Builds and validates the timing.
    ///
    /// # Errors
    /// * `ZeroDuration` - A field is zero
    pub fn build(self) -> Result<Timing<D>, TimingError> {
        let t = &self.timing;
        let fields = [
            (t.poll_interval, TimingField::PollInterval),
            (t.blink_hold, TimingField::BlinkHold),
            (t.count_step, TimingField::CountStep),
            (t.flash_hold, TimingField::FlashHold),
            (t.shift_step, TimingField::ShiftStep),
        ];

        for (duration, field) in fields {
            if duration == D::ZERO {
                return Err(TimingError::ZeroDuration(field));
            }
        }

        Ok(self.timing)
    }
}

impl<D: TimeDuration> Default for TimingBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}
