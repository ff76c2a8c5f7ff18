//! Poll loop tying inputs, selection and display routines together.
//!
//! Provides [`LedController`], which owns the port backend and the delay,
//! samples the buttons and switches, and runs the selected pattern.

use crate::patterns::{PatternRun, PatternRunner};
use crate::port::{Board, PortAccess};
use crate::selector::Selection;
use crate::time::{Delay, TimeDuration};
use crate::timing::Timing;
use crate::types::{ButtonState, SwitchState};

/// Runs the lab board's input-driven LED patterns.
///
/// Each poll iteration samples the buttons and switches once, runs exactly one
/// pattern to completion (or cancellation), then waits the poll interval. No
/// state carries over between iterations beyond what the LEDs are showing.
///
/// # Type Parameters
/// * `P` - Port backend
/// * `DL` - Blocking delay
/// * `D` - Duration type
pub struct LedController<P: PortAccess, DL: Delay<D>, D: TimeDuration> {
    board: Board<P>,
    delay: DL,
    timing: Timing<D>,
}

impl<P: PortAccess, DL: Delay<D>, D: TimeDuration> LedController<P, DL, D> {
    /// Initializes the ports and creates a controller with the standard cadence.
    pub fn new(ports: P, delay: DL) -> Self {
        Self::with_timing(ports, delay, Timing::standard())
    }

    /// Initializes the ports and creates a controller with a custom cadence.
    pub fn with_timing(ports: P, delay: DL, timing: Timing<D>) -> Self {
        let mut board = Board::new(ports);
        board.init();

        #[cfg(feature = "defmt")]
        defmt::debug!("ports initialized");

        Self {
            board,
            delay,
            timing,
        }
    }

    /// Samples the inputs without running anything.
    pub fn sample(&mut self) -> Selection {
        let buttons = self.board.buttons();
        let switches = self.board.switches();
        Selection::new(buttons, switches)
    }

    /// Selects and runs a pattern for already-sampled inputs.
    ///
    /// Blocks until the pattern finishes or cancels itself. Does not apply the
    /// poll interval.
    pub fn handle(&mut self, buttons: ButtonState, switches: SwitchState) -> PatternRun {
        self.dispatch(Selection::new(buttons, switches))
    }

    /// Runs one poll iteration: sample, dispatch, then wait the poll interval.
    pub fn poll_once(&mut self) -> PatternRun {
        let selection = self.sample();
        let run = self.dispatch(selection);
        self.delay.delay(self.timing.poll_interval);
        run
    }

    /// Polls forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.poll_once();
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board<P> {
        &self.board
    }

    /// Returns the board mutably, for direct output control between polls.
    pub fn board_mut(&mut self) -> &mut Board<P> {
        &mut self.board
    }

    /// Returns the active cadence.
    pub fn timing(&self) -> &Timing<D> {
        &self.timing
    }

    /// Consumes the controller and returns the port backend and delay.
    pub fn release(self) -> (P, DL) {
        (self.board.release(), self.delay)
    }

    fn dispatch(&mut self, selection: Selection) -> PatternRun {
        #[cfg(feature = "defmt")]
        {
            if selection.is_fallback() {
                defmt::debug!(
                    "switch code {=u8:#x} falls back to pattern 1",
                    selection.switches.bits()
                );
            }
            defmt::debug!(
                "buttons {=u8:#x} switches {=u8:#x} -> pattern {=u8}",
                selection.buttons.bits(),
                selection.switches.bits(),
                selection.pattern.number()
            );
        }

        PatternRunner::new(&mut self.board, &mut self.delay, &self.timing)
            .run(selection.pattern, selection.buttons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{Completion, Pattern};
    use crate::port::{PortConfig, PortId};
    use crate::time::Millis;

    struct FakePorts<'a> {
        buttons: u8,
        switches: &'a [u8],
        switch_reads: usize,
        bank: u8,
        red: u8,
        rgb: u8,
        bank_writes: u32,
    }

    impl<'a> FakePorts<'a> {
        fn new(buttons: u8, switches: &'a [u8]) -> Self {
            Self {
                buttons,
                switches,
                switch_reads: 0,
                bank: 0,
                red: 0,
                rgb: 0,
                bank_writes: 0,
            }
        }
    }

    impl PortAccess for FakePorts<'_> {
        fn configure(&mut self, _port: PortId, _config: PortConfig) {}

        fn read_input(&mut self, port: PortId) -> u8 {
            match port {
                PortId::Buttons => self.buttons,
                PortId::Switches => {
                    let n = self.switch_reads.min(self.switches.len() - 1);
                    self.switch_reads += 1;
                    self.switches[n]
                }
                _ => 0,
            }
        }

        fn read_output(&mut self, port: PortId) -> u8 {
            match port {
                PortId::RedLed => self.red,
                PortId::RgbLed => self.rgb,
                PortId::LedBank => self.bank,
                _ => 0,
            }
        }

        fn write_output(&mut self, port: PortId, value: u8) {
            match port {
                PortId::RedLed => self.red = value,
                PortId::RgbLed => self.rgb = value,
                PortId::LedBank => {
                    self.bank = value;
                    self.bank_writes += 1;
                }
                _ => {}
            }
        }
    }

    #[derive(Default)]
    struct CountingDelay {
        total_ms: u64,
        calls: u32,
    }

    impl Delay<Millis> for CountingDelay {
        fn delay(&mut self, duration: Millis) {
            self.total_ms += duration.as_millis();
            self.calls += 1;
        }
    }

    #[test]
    fn poll_once_runs_pattern_then_waits_poll_interval() {
        let switches = [0x00];
        let ports = FakePorts::new(0x10, &switches);
        let mut controller = LedController::<_, _, Millis>::new(ports, CountingDelay::default());

        let run = controller.poll_once();
        assert_eq!(run.pattern, Pattern::Pattern1);
        assert_eq!(run.completion, Completion::Finished);

        let (ports, delay) = controller.release();
        assert_eq!(ports.bank, 0x55);
        assert_eq!(ports.red, 0x01);
        assert_eq!(delay.calls, 1);
        assert_eq!(delay.total_ms, 100);
    }

    #[test]
    fn poll_once_samples_switches_before_pattern_checks() {
        // Poll read selects Pattern5, the first in-pattern check cancels it.
        let switches = [0x08, 0x00];
        let ports = FakePorts::new(0x12, &switches);
        let mut controller = LedController::<_, _, Millis>::new(ports, CountingDelay::default());

        let run = controller.poll_once();
        assert_eq!(run.pattern, Pattern::Pattern5);
        assert_eq!(run.steps, 1);
        assert!(run.was_cancelled());

        let (ports, delay) = controller.release();
        assert_eq!(ports.bank, 0x01);
        assert_eq!(delay.total_ms, 500 + 100);
    }

    #[test]
    fn handle_skips_poll_interval() {
        let switches = [0x00];
        let ports = FakePorts::new(0x12, &switches);
        let mut controller = LedController::<_, _, Millis>::new(ports, CountingDelay::default());

        controller.handle(ButtonState::NONE_PRESSED, SwitchState::NONE);
        let (ports, delay) = controller.release();
        assert_eq!(ports.bank, 0xFF);
        assert_eq!(delay.calls, 0);
    }

    #[test]
    fn with_timing_applies_custom_cadence() {
        let switches = [0x01];
        let ports = FakePorts::new(0x12, &switches);
        let timing = Timing::builder()
            .count_step(Millis(10))
            .poll_interval(Millis(5))
            .build()
            .unwrap();
        let mut controller = LedController::with_timing(ports, CountingDelay::default(), timing);

        let run = controller.poll_once();
        assert_eq!(run.pattern, Pattern::Pattern2);
        assert_eq!(run.steps, 256);
        assert_eq!(run.completion, Completion::Finished);

        let (ports, delay) = controller.release();
        // init writes the bank once before the counter starts
        assert_eq!(ports.bank_writes, 1 + 256);
        assert_eq!(ports.bank, 0xFF);
        assert_eq!(delay.total_ms, 256 * 10 + 5);
    }
}
