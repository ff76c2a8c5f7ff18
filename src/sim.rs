//! Simulated port backend and virtual clock.
//!
//! [`SimPorts`] records every output write with a timestamp from a shared
//! [`VirtualClock`], and answers input reads from a timed schedule. [`SimDelay`]
//! advances the same clock instead of blocking, so a full pattern run takes no
//! real time. Buffers are fixed-capacity `heapless` collections; the simulator
//! works in `no_std` host tools as well as in tests.

use crate::port::{PortAccess, PortConfig, PortId};
use crate::time::{Delay, Millis, TimeDuration};
use core::cell::Cell;
use heapless::Vec;

/// Maximum number of scheduled input changes per input port.
pub const SCHEDULE_CAPACITY: usize = 16;

/// Shared virtual time in milliseconds.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now_ms: Cell<u64>,
}

impl VirtualClock {
    /// Creates a clock at time zero.
    pub const fn new() -> Self {
        Self {
            now_ms: Cell::new(0),
        }
    }

    /// Returns the current virtual time.
    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    /// Moves time forward.
    pub fn advance(&self, millis: u64) {
        self.now_ms.set(self.now_ms.get() + millis);
    }
}

/// A recorded output write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortEvent {
    /// Virtual time of the write.
    pub at_ms: u64,
    /// Port written.
    pub port: PortId,
    /// Full register value after the write.
    pub value: u8,
}

/// Errors from scheduling simulated inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SimError {
    /// Only the button and switch ports accept input.
    NotAnInput(PortId),
    /// Schedule capacity exceeded.
    ScheduleFull,
    /// Changes must be scheduled in time order.
    OutOfOrder { at_ms: u64, last_ms: u64 },
}

impl core::fmt::Display for SimError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SimError::NotAnInput(port) => write!(f, "{:?} is not an input port", port),
            SimError::ScheduleFull => write!(f, "input schedule capacity exceeded"),
            SimError::OutOfOrder { at_ms, last_ms } => write!(
                f,
                "input change at {} ms scheduled before previous change at {} ms",
                at_ms, last_ms
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SimError {}

#[derive(Debug)]
struct InputSchedule {
    changes: Vec<(u64, u8), SCHEDULE_CAPACITY>,
}

impl InputSchedule {
    fn new(initial: u8) -> Self {
        let mut changes = Vec::new();
        let _ = changes.push((0, initial));
        Self { changes }
    }

    fn push(&mut self, at_ms: u64, value: u8) -> Result<(), SimError> {
        if let Some(&(last_ms, _)) = self.changes.last() {
            if at_ms < last_ms {
                return Err(SimError::OutOfOrder { at_ms, last_ms });
            }
            if at_ms == last_ms {
                self.changes.pop();
            }
        }
        self.changes
            .push((at_ms, value))
            .map_err(|_| SimError::ScheduleFull)
    }

    fn value_at(&self, now_ms: u64) -> u8 {
        self.changes
            .iter()
            .rev()
            .find(|(at, _)| *at <= now_ms)
            .map(|&(_, value)| value)
            .unwrap_or(0)
    }
}

/// Simulated lab board ports.
///
/// # Type Parameters
/// * `'c` - Lifetime of the clock reference
/// * `N` - Maximum number of recorded output writes
pub struct SimPorts<'c, const N: usize> {
    clock: &'c VirtualClock,
    outputs: [u8; 5],
    configured: [Option<PortConfig>; 5],
    buttons: InputSchedule,
    switches: InputSchedule,
    switch_reads: u32,
    events: Vec<PortEvent, N>,
    dropped: usize,
}

impl<'c, const N: usize> SimPorts<'c, N> {
    /// Creates a board with both buttons released and every switch off.
    pub fn new(clock: &'c VirtualClock) -> Self {
        Self {
            clock,
            outputs: [0; 5],
            configured: [None; 5],
            buttons: InputSchedule::new(0x12),
            switches: InputSchedule::new(0x00),
            switch_reads: 0,
            events: Vec::new(),
            dropped: 0,
        }
    }

    /// Sets the raw button port value from now on.
    pub fn set_buttons(&mut self, raw: u8) -> Result<(), SimError> {
        self.schedule(PortId::Buttons, self.clock.now_ms(), raw)
    }

    /// Sets the raw switch port value from now on.
    pub fn set_switches(&mut self, raw: u8) -> Result<(), SimError> {
        self.schedule(PortId::Switches, self.clock.now_ms(), raw)
    }

    /// Schedules an input port to read `raw` from virtual time `at_ms` on.
    pub fn schedule(&mut self, port: PortId, at_ms: u64, raw: u8) -> Result<(), SimError> {
        match port {
            PortId::Buttons => self.buttons.push(at_ms, raw),
            PortId::Switches => self.switches.push(at_ms, raw),
            other => Err(SimError::NotAnInput(other)),
        }
    }

    /// Returns every recorded write, oldest first.
    pub fn events(&self) -> &[PortEvent] {
        &self.events
    }

    /// Returns the recorded writes to one port.
    pub fn writes_to(&self, port: PortId) -> impl Iterator<Item = &PortEvent> + '_ {
        self.events.iter().filter(move |e| e.port == port)
    }

    /// Returns the values written to the Pmod 8LD, oldest first.
    pub fn bank_values(&self) -> impl Iterator<Item = u8> + '_ {
        self.writes_to(PortId::LedBank).map(|e| e.value)
    }

    /// Returns the current output register of a port.
    pub fn output(&self, port: PortId) -> u8 {
        self.outputs[slot(port)]
    }

    /// Returns the configuration last applied to a port.
    pub fn config(&self, port: PortId) -> Option<PortConfig> {
        self.configured[slot(port)]
    }

    /// Returns how many times the switches were read.
    pub fn switch_reads(&self) -> u32 {
        self.switch_reads
    }

    /// Returns how many writes did not fit in the event buffer.
    pub fn dropped_events(&self) -> usize {
        self.dropped
    }

    /// Forgets recorded writes and read counts; register values are kept.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.dropped = 0;
        self.switch_reads = 0;
    }
}

fn slot(port: PortId) -> usize {
    match port {
        PortId::RedLed => 0,
        PortId::RgbLed => 1,
        PortId::Buttons => 2,
        PortId::LedBank => 3,
        PortId::Switches => 4,
    }
}

impl<const N: usize> PortAccess for SimPorts<'_, N> {
    fn configure(&mut self, port: PortId, config: PortConfig) {
        self.configured[slot(port)] = Some(config);
    }

    fn read_input(&mut self, port: PortId) -> u8 {
        let now = self.clock.now_ms();
        match port {
            PortId::Buttons => self.buttons.value_at(now),
            PortId::Switches => {
                self.switch_reads += 1;
                self.switches.value_at(now)
            }
            other => self.outputs[slot(other)],
        }
    }

    fn read_output(&mut self, port: PortId) -> u8 {
        self.outputs[slot(port)]
    }

    fn write_output(&mut self, port: PortId, value: u8) {
        self.outputs[slot(port)] = value;
        let event = PortEvent {
            at_ms: self.clock.now_ms(),
            port,
            value,
        };
        if self.events.push(event).is_err() {
            self.dropped += 1;
        }
    }
}

/// Delay that advances a [`VirtualClock`] instead of blocking.
#[derive(Debug)]
pub struct SimDelay<'c> {
    clock: &'c VirtualClock,
    calls: u32,
}

impl<'c> SimDelay<'c> {
    /// Creates a delay driving `clock`.
    pub fn new(clock: &'c VirtualClock) -> Self {
        Self { clock, calls: 0 }
    }

    /// Returns how many delays were requested.
    pub fn calls(&self) -> u32 {
        self.calls
    }
}

impl Delay<Millis> for SimDelay<'_> {
    fn delay(&mut self, duration: Millis) {
        self.calls += 1;
        self.clock.advance(duration.as_millis());
    }
}
