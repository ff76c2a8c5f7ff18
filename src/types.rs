//! Core input and output types.

/// Bits of port 1 wired to the two user buttons (P1.1 and P1.4).
pub const BUTTON_MASK: u8 = 0x12;

/// Bits of the switch port wired to the Pmod SWT.
pub const SWITCH_MASK: u8 = 0x0F;

/// Bit driving the on-board red LED.
pub const RED_LED_MASK: u8 = 0x01;

/// Bits driving the on-board tri-color LED.
pub const RGB_LED_MASK: u8 = 0x07;

/// Named Pmod 8LD output values.
pub mod bank {
    /// Every LED off.
    pub const ALL_OFF: u8 = 0x00;
    /// Every LED on.
    pub const ALL_ON: u8 = 0xFF;
    /// LEDs 0-3 on.
    pub const LOWER_HALF: u8 = 0x0F;
    /// LEDs 4-7 on.
    pub const UPPER_HALF: u8 = 0xF0;
    /// LEDs 0, 2, 4, 6 on.
    pub const EVEN: u8 = 0x55;
    /// LEDs 1, 3, 5, 7 on.
    pub const ODD: u8 = 0xAA;
}

/// Sampled state of the two active-low user buttons.
///
/// Port reads keep only bits 1 and 4; a cleared bit means the button is
/// pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState(u8);

impl ButtonState {
    /// Both buttons pressed.
    pub const BOTH_PRESSED: Self = ButtonState(0x00);
    /// Button 1 pressed, button 2 released.
    pub const ONLY_BUTTON_1: Self = ButtonState(0x10);
    /// Button 2 pressed, button 1 released.
    pub const ONLY_BUTTON_2: Self = ButtonState(0x02);
    /// Neither button pressed.
    pub const NONE_PRESSED: Self = ButtonState(0x12);

    /// Wraps a code as-is.
    #[inline]
    pub const fn new(code: u8) -> Self {
        ButtonState(code)
    }

    /// Creates a state from a raw port read, masking off unrelated pins.
    #[inline]
    pub const fn from_port(raw: u8) -> Self {
        ButtonState(raw & BUTTON_MASK)
    }

    /// Returns the raw code.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if button 1 (P1.1) is held down.
    #[inline]
    pub const fn button1_pressed(self) -> bool {
        self.0 & 0x02 == 0
    }

    /// Returns true if button 2 (P1.4) is held down.
    #[inline]
    pub const fn button2_pressed(self) -> bool {
        self.0 & 0x10 == 0
    }

    /// Decodes the state into a button combination.
    ///
    /// Always `Some` for states read through [`ButtonState::from_port`].
    #[inline]
    pub const fn combo(self) -> Option<ButtonCombo> {
        ButtonCombo::decode(self.0)
    }
}

/// The four combinations two buttons can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonCombo {
    /// Both buttons pressed.
    BothPressed,
    /// Only button 1 pressed.
    OnlyButton1,
    /// Only button 2 pressed.
    OnlyButton2,
    /// Neither button pressed.
    NonePressed,
}

impl ButtonCombo {
    /// Decodes a raw, unmasked button code.
    ///
    /// Returns `None` for any code other than the four the buttons report,
    /// including codes with bits outside [`BUTTON_MASK`] set.
    pub const fn decode(raw: u8) -> Option<Self> {
        match raw {
            0x00 => Some(ButtonCombo::BothPressed),
            0x10 => Some(ButtonCombo::OnlyButton1),
            0x02 => Some(ButtonCombo::OnlyButton2),
            0x12 => Some(ButtonCombo::NonePressed),
            _ => None,
        }
    }
}

/// Sampled position of the four Pmod SWT slide switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchState(u8);

impl SwitchState {
    /// All switches off.
    pub const NONE: Self = SwitchState(0x00);
    /// Only switch 1 on.
    pub const SWITCH_1: Self = SwitchState(0x01);
    /// Only switch 2 on.
    pub const SWITCH_2: Self = SwitchState(0x02);
    /// Only switch 3 on.
    pub const SWITCH_3: Self = SwitchState(0x04);
    /// Only switch 4 on.
    pub const SWITCH_4: Self = SwitchState(0x08);

    /// Wraps a code as-is.
    #[inline]
    pub const fn new(code: u8) -> Self {
        SwitchState(code)
    }

    /// Creates a state from a raw port read, masking off unrelated pins.
    #[inline]
    pub const fn from_port(raw: u8) -> Self {
        SwitchState(raw & SWITCH_MASK)
    }

    /// Returns the raw code.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if switch `n` (0-3) is on.
    #[inline]
    pub const fn is_on(self, n: u8) -> bool {
        n < 4 && self.0 & (1 << n) != 0
    }
}

/// Color codes of the on-board tri-color LED.
///
/// The discriminant is the 3-bit register value: bit 0 red, bit 1 green,
/// bit 2 blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TriColor {
    Off = 0x00,
    Red = 0x01,
    Green = 0x02,
    Yellow = 0x03,
    Blue = 0x04,
    Pink = 0x05,
    SkyBlue = 0x06,
    White = 0x07,
}

impl TriColor {
    /// Returns the register bits for this color.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decodes register bits, ignoring bits above bit 2.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & RGB_LED_MASK {
            0x00 => TriColor::Off,
            0x01 => TriColor::Red,
            0x02 => TriColor::Green,
            0x03 => TriColor::Yellow,
            0x04 => TriColor::Blue,
            0x05 => TriColor::Pink,
            0x06 => TriColor::SkyBlue,
            _ => TriColor::White,
        }
    }

    /// Builds a color from its three channels.
    #[inline]
    pub const fn from_channels(red: bool, green: bool, blue: bool) -> Self {
        Self::from_bits((red as u8) | ((green as u8) << 1) | ((blue as u8) << 2))
    }

    /// Returns `(red, green, blue)` channel states.
    #[inline]
    pub const fn channels(self) -> (bool, bool, bool) {
        let b = self.bits();
        (b & 0x01 != 0, b & 0x02 != 0, b & 0x04 != 0)
    }
}

/// Errors from converting raw numbers into crate types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// Pattern numbers run from 1 to 5.
    UnknownPattern(u8),
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::UnknownPattern(n) => {
                write!(f, "unknown pattern number {} (expected 1-5)", n)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}
