//! Digital I/O access for the on-board LEDs, buttons and Pmod modules.
//!
//! Provides the [`PortAccess`] trait for raw register-level access and
//! [`Board`], which applies the per-peripheral bit masks on top of it.

use crate::types::{
    BUTTON_MASK, ButtonState, RED_LED_MASK, RGB_LED_MASK, SWITCH_MASK, SwitchState, TriColor,
};

/// Peripheral role of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortId {
    /// On-board red LED (P1.0).
    RedLed,
    /// On-board tri-color LED (P2.0-P2.2).
    RgbLed,
    /// User buttons (P1.1, P1.4).
    Buttons,
    /// Pmod 8LD (P9).
    LedBank,
    /// Pmod SWT (P10.0-P10.3).
    Switches,
}

impl PortId {
    /// All roles, in initialization order.
    pub const ALL: [PortId; 5] = [
        PortId::RedLed,
        PortId::RgbLed,
        PortId::Buttons,
        PortId::LedBank,
        PortId::Switches,
    ];

    /// Bits of the port that belong to this role.
    pub const fn mask(self) -> u8 {
        match self {
            PortId::RedLed => RED_LED_MASK,
            PortId::RgbLed => RGB_LED_MASK,
            PortId::Buttons => BUTTON_MASK,
            PortId::LedBank => 0xFF,
            PortId::Switches => SWITCH_MASK,
        }
    }
}

/// Pin direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Input,
    Output,
}

/// GPIO configuration applied to the masked pins of a port.
///
/// Pins are always configured for plain GPIO (no alternate function).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortConfig {
    /// Pins affected.
    pub mask: u8,
    /// Pin direction.
    pub direction: Direction,
    /// Enable the pull-up resistor (inputs only).
    pub pull_up: bool,
    /// Enable high drive strength (outputs only).
    pub high_drive: bool,
    /// Level driven after configuration, if any.
    pub initial_output: Option<u8>,
}

impl PortConfig {
    /// Returns the lab board configuration for a port role.
    pub const fn for_port(port: PortId) -> Self {
        let mask = port.mask();
        match port {
            PortId::RedLed => PortConfig {
                mask,
                direction: Direction::Output,
                pull_up: false,
                high_drive: false,
                initial_output: None,
            },
            PortId::RgbLed | PortId::LedBank => PortConfig {
                mask,
                direction: Direction::Output,
                pull_up: false,
                high_drive: true,
                initial_output: Some(0x00),
            },
            PortId::Buttons => PortConfig {
                mask,
                direction: Direction::Input,
                pull_up: true,
                high_drive: false,
                initial_output: None,
            },
            PortId::Switches => PortConfig {
                mask,
                direction: Direction::Input,
                pull_up: false,
                high_drive: false,
                initial_output: None,
            },
        }
    }
}

/// Trait for abstracting raw port registers.
///
/// Implement this for memory-mapped GPIO registers, for a HAL pin set, or for a
/// simulated backend. Reads and writes cover the whole 8-bit port; masking is
/// done by [`Board`]. Handle any hardware errors internally - these methods
/// cannot fail.
pub trait PortAccess {
    /// Applies a pin configuration to a port.
    fn configure(&mut self, port: PortId, config: PortConfig);

    /// Reads the input register of a port.
    fn read_input(&mut self, port: PortId) -> u8;

    /// Reads back the output register of a port.
    fn read_output(&mut self, port: PortId) -> u8;

    /// Writes the output register of a port.
    fn write_output(&mut self, port: PortId, value: u8);
}

impl<T: PortAccess + ?Sized> PortAccess for &mut T {
    fn configure(&mut self, port: PortId, config: PortConfig) {
        T::configure(self, port, config)
    }

    fn read_input(&mut self, port: PortId) -> u8 {
        T::read_input(self, port)
    }

    fn read_output(&mut self, port: PortId) -> u8 {
        T::read_output(self, port)
    }

    fn write_output(&mut self, port: PortId, value: u8) {
        T::write_output(self, port, value)
    }
}

/// Typed, masked access to the lab board peripherals.
#[derive(Debug)]
pub struct Board<P: PortAccess> {
    ports: P,
}

impl<P: PortAccess> Board<P> {
    /// Wraps a port backend without touching the hardware.
    pub fn new(ports: P) -> Self {
        Self { ports }
    }

    /// Configures every port role for the lab board.
    pub fn init(&mut self) {
        for port in PortId::ALL {
            let config = PortConfig::for_port(port);
            self.ports.configure(port, config);
            if let Some(level) = config.initial_output {
                self.write_masked(port, level);
            }
        }
    }

    /// Turns the red LED on or off.
    pub fn set_red_led(&mut self, on: bool) {
        self.write_masked(PortId::RedLed, on as u8);
    }

    /// Returns true if the red LED is lit.
    pub fn red_led_status(&mut self) -> bool {
        self.ports.read_output(PortId::RedLed) & RED_LED_MASK != 0
    }

    /// Sets the tri-color LED.
    pub fn set_rgb(&mut self, color: TriColor) {
        self.write_masked(PortId::RgbLed, color.bits());
    }

    /// Flips the channels set in `color`.
    pub fn rgb_toggle(&mut self, color: TriColor) {
        let current = self.ports.read_output(PortId::RgbLed);
        self.ports.write_output(PortId::RgbLed, current ^ color.bits());
    }

    /// Returns the color the tri-color LED is showing.
    pub fn rgb_status(&mut self) -> TriColor {
        TriColor::from_bits(self.ports.read_output(PortId::RgbLed))
    }

    /// Writes the Pmod 8LD and returns the value the port latched.
    pub fn write_bank(&mut self, value: u8) -> u8 {
        self.ports.write_output(PortId::LedBank, value);
        self.ports.read_output(PortId::LedBank)
    }

    /// Samples the user buttons.
    pub fn buttons(&mut self) -> ButtonState {
        ButtonState::from_port(self.ports.read_input(PortId::Buttons))
    }

    /// Samples the Pmod SWT.
    pub fn switches(&mut self) -> SwitchState {
        SwitchState::from_port(self.ports.read_input(PortId::Switches))
    }

    /// Returns a reference to the port backend.
    pub fn ports(&self) -> &P {
        &self.ports
    }

    /// Returns a mutable reference to the port backend.
    pub fn ports_mut(&mut self) -> &mut P {
        &mut self.ports
    }

    /// Consumes the board and returns the port backend.
    pub fn release(self) -> P {
        self.ports
    }

    // Read-modify-write so pins of other roles sharing the register keep their level.
    fn write_masked(&mut self, port: PortId, value: u8) {
        let mask = port.mask();
        let current = self.ports.read_output(port);
        self.ports.write_output(port, (current & !mask) | (value & mask));
    }
}
