//! The five display routines.
//!
//! Every routine drives the red LED, the tri-color LED and the Pmod 8LD through
//! a [`Board`] and paces itself with a blocking [`Delay`]. Loop patterns follow
//! the same step order: write the output, hold for the step delay, resample the
//! switches, and stop if the switch code no longer selects the pattern.

use crate::port::{Board, PortAccess};
use crate::time::{Delay, TimeDuration};
use crate::timing::Timing;
use crate::types::{ButtonCombo, ButtonState, InputError, SwitchState, TriColor, bank};

/// A display routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pattern {
    /// Static outputs chosen by the buttons.
    Pattern1,
    /// Binary up-counter on the 8LD, 100 ms per count.
    Pattern2,
    /// Binary down-counter on the 8LD, 100 ms per count.
    Pattern3,
    /// Everything flashes, 1 s on and 1 s off.
    Pattern4,
    /// Single LED walking left, 500 ms per position.
    Pattern5,
}

impl Pattern {
    /// All patterns in number order.
    pub const ALL: [Pattern; 5] = [
        Pattern::Pattern1,
        Pattern::Pattern2,
        Pattern::Pattern3,
        Pattern::Pattern4,
        Pattern::Pattern5,
    ];

    /// Returns the pattern number (1-5).
    pub const fn number(self) -> u8 {
        match self {
            Pattern::Pattern1 => 1,
            Pattern::Pattern2 => 2,
            Pattern::Pattern3 => 3,
            Pattern::Pattern4 => 4,
            Pattern::Pattern5 => 5,
        }
    }

    /// Returns the switch code a loop pattern keeps running under.
    ///
    /// `None` for Pattern1, which never loops.
    pub const fn expected_switches(self) -> Option<SwitchState> {
        match self {
            Pattern::Pattern1 => None,
            Pattern::Pattern2 => Some(SwitchState::SWITCH_1),
            Pattern::Pattern3 => Some(SwitchState::SWITCH_2),
            Pattern::Pattern4 => Some(SwitchState::SWITCH_3),
            Pattern::Pattern5 => Some(SwitchState::SWITCH_4),
        }
    }
}

impl TryFrom<u8> for Pattern {
    type Error = InputError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Pattern::Pattern1),
            2 => Ok(Pattern::Pattern2),
            3 => Ok(Pattern::Pattern3),
            4 => Ok(Pattern::Pattern4),
            5 => Ok(Pattern::Pattern5),
            n => Err(InputError::UnknownPattern(n)),
        }
    }
}

/// How a routine ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Completion {
    /// Ran every step.
    Finished,
    /// Stopped early because the switches changed.
    Cancelled,
    /// Produced no output (unrecognized button code).
    Ignored,
}

/// Report returned by every routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PatternRun {
    /// The routine that ran.
    pub pattern: Pattern,
    /// Output steps produced (counter writes, shifts, or flash cycles).
    pub steps: u32,
    /// How the routine ended.
    pub completion: Completion,
}

impl PatternRun {
    fn new(pattern: Pattern, steps: u32, completion: Completion) -> Self {
        Self {
            pattern,
            steps,
            completion,
        }
    }

    /// Returns true if the routine stopped because the switches changed.
    pub fn was_cancelled(&self) -> bool {
        self.completion == Completion::Cancelled
    }
}

/// Runs one routine against a board.
///
/// Holds the board, the delay and the cadence for the duration of a single
/// routine. Construct one per dispatch; nothing carries over between runs.
pub struct PatternRunner<'a, P: PortAccess, DL: Delay<D>, D: TimeDuration> {
    board: &'a mut Board<P>,
    delay: &'a mut DL,
    timing: &'a Timing<D>,
}

impl<'a, P: PortAccess, DL: Delay<D>, D: TimeDuration> PatternRunner<'a, P, DL, D> {
    /// Creates a runner over borrowed hardware.
    pub fn new(board: &'a mut Board<P>, delay: &'a mut DL, timing: &'a Timing<D>) -> Self {
        Self {
            board,
            delay,
            timing,
        }
    }

    /// Runs `pattern`; `buttons` is only consulted by Pattern1.
    pub fn run(&mut self, pattern: Pattern, buttons: ButtonState) -> PatternRun {
        match pattern {
            Pattern::Pattern1 => self.pattern1(buttons),
            Pattern::Pattern2 => self.pattern2(),
            Pattern::Pattern3 => self.pattern3(),
            Pattern::Pattern4 => self.pattern4(),
            Pattern::Pattern5 => self.pattern5(),
        }
    }

    /// Static outputs chosen by the buttons.
    ///
    /// | buttons         | red LED     | RGB          | 8LD        |
    /// |-----------------|-------------|--------------|------------|
    /// | both pressed    | blink 1 s   | blink green  | all off    |
    /// | only button 1   | on          | off          | 0, 2, 4, 6 |
    /// | only button 2   | off         | pink         | 1, 3, 5, 7 |
    /// | neither pressed | off         | off          | all on     |
    ///
    /// Any other code leaves the outputs untouched.
    pub fn pattern1(&mut self, buttons: ButtonState) -> PatternRun {
        let Some(combo) = buttons.combo() else {
            #[cfg(feature = "defmt")]
            defmt::warn!("ignoring unrecognized button code {=u8:#x}", buttons.bits());
            return PatternRun::new(Pattern::Pattern1, 0, Completion::Ignored);
        };

        match combo {
            ButtonCombo::BothPressed => {
                self.board.write_bank(bank::ALL_OFF);
                self.board.set_red_led(true);
                self.board.set_rgb(TriColor::Green);
                self.delay.delay(self.timing.blink_hold);
                self.board.set_red_led(false);
                self.board.set_rgb(TriColor::Off);
                self.delay.delay(self.timing.blink_hold);
            }
            ButtonCombo::OnlyButton1 => {
                self.board.set_red_led(true);
                self.board.set_rgb(TriColor::Off);
                self.board.write_bank(bank::EVEN);
            }
            ButtonCombo::OnlyButton2 => {
                self.board.set_red_led(false);
                self.board.set_rgb(TriColor::Pink);
                self.board.write_bank(bank::ODD);
            }
            ButtonCombo::NonePressed => {
                self.board.set_red_led(false);
                self.board.set_rgb(TriColor::Off);
                self.board.write_bank(bank::ALL_ON);
            }
        }

        PatternRun::new(Pattern::Pattern1, 1, Completion::Finished)
    }

    /// Binary up-counter 0..=255 with the red LED on and the RGB LED red.
    pub fn pattern2(&mut self) -> PatternRun {
        self.board.set_red_led(true);
        self.board.set_rgb(TriColor::Red);
        self.count(Pattern::Pattern2, 0..=u8::MAX)
    }

    /// Binary down-counter 255..=0 with the red LED off and the RGB LED blue.
    pub fn pattern3(&mut self) -> PatternRun {
        self.board.set_red_led(false);
        self.board.set_rgb(TriColor::Blue);
        self.count(Pattern::Pattern3, (0..=u8::MAX).rev())
    }

    /// Flashes every LED until the switches leave switch 3.
    ///
    /// The switches are checked once per full on/off cycle, so a change can
    /// take up to two holds to be noticed.
    pub fn pattern4(&mut self) -> PatternRun {
        let mut cycles = 0;
        loop {
            self.board.write_bank(bank::ALL_ON);
            self.board.set_red_led(true);
            self.board.set_rgb(TriColor::Blue);
            self.delay.delay(self.timing.flash_hold);
            self.board.write_bank(bank::ALL_OFF);
            self.board.set_red_led(false);
            self.board.set_rgb(TriColor::Off);
            self.delay.delay(self.timing.flash_hold);
            cycles += 1;

            if !self.still_selected(Pattern::Pattern4) {
                return PatternRun::new(Pattern::Pattern4, cycles, Completion::Cancelled);
            }
        }
    }

    /// Walks a single LED from position 0 to 7 with the on-board LEDs off.
    pub fn pattern5(&mut self) -> PatternRun {
        self.board.set_red_led(false);
        self.board.set_rgb(TriColor::Off);

        let mut steps = 0;
        for position in 0..8u8 {
            self.board.write_bank(1u8 << position);
            self.delay.delay(self.timing.shift_step);
            steps += 1;

            if !self.still_selected(Pattern::Pattern5) {
                return PatternRun::new(Pattern::Pattern5, steps, Completion::Cancelled);
            }
        }

        PatternRun::new(Pattern::Pattern5, steps, Completion::Finished)
    }

    fn count(&mut self, pattern: Pattern, values: impl Iterator<Item = u8>) -> PatternRun {
        let mut steps = 0;
        for value in values {
            self.board.write_bank(value);
            self.delay.delay(self.timing.count_step);
            steps += 1;

            if !self.still_selected(pattern) {
                return PatternRun::new(pattern, steps, Completion::Cancelled);
            }
        }

        PatternRun::new(pattern, steps, Completion::Finished)
    }

    // Loop-continuation predicate, evaluated after each step's output and delay.
    fn still_selected(&mut self, pattern: Pattern) -> bool {
        let switches = self.board.switches();
        let selected = pattern.expected_switches() == Some(switches);

        if !selected {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "pattern {=u8} cancelled, switches now {=u8:#x}",
                pattern.number(),
                switches.bits()
            );
        }

        selected
    }
}
