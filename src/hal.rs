//! `embedded-hal` 1.0 adapters.
//!
//! [`PinPorts`] assembles the five port roles from individual digital pins so
//! the patterns run on any HAL, and [`HalDelay`] turns a
//! [`DelayNs`](embedded_hal::delay::DelayNs) provider into a [`Delay`].
//!
//! Pins are expected to be configured by the HAL before they are handed over;
//! [`PortAccess::configure`] is a no-op here. Pin errors are swallowed: a
//! failed output write leaves its bit cleared in the latched value, and a
//! failed input read counts as inactive (button released, switch off).

use crate::port::{PortAccess, PortConfig, PortId};
use crate::time::{Delay, Millis, TimeDuration};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

/// Digital pins wired to the lab board peripherals.
///
/// Bit `n` of a port value maps to element `n` of the pin array. The buttons
/// map to bits 1 and 4, as on the LaunchPad.
pub struct PinPorts<LED, RGB, BTN, BANK, SW>
where
    LED: OutputPin,
    RGB: OutputPin,
    BTN: InputPin,
    BANK: OutputPin,
    SW: InputPin,
{
    red_led: LED,
    rgb_led: [RGB; 3],
    buttons: [BTN; 2],
    bank: [BANK; 8],
    switches: [SW; 4],
    latched: [u8; 5],
}

impl<LED, RGB, BTN, BANK, SW> PinPorts<LED, RGB, BTN, BANK, SW>
where
    LED: OutputPin,
    RGB: OutputPin,
    BTN: InputPin,
    BANK: OutputPin,
    SW: InputPin,
{
    /// Creates the port set.
    ///
    /// * `rgb_led` - red, green, blue channel pins
    /// * `buttons` - button 1, button 2 (active-low)
    /// * `bank` - Pmod 8LD pins LD0-LD7
    /// * `switches` - Pmod SWT pins SW1-SW4
    pub fn new(
        red_led: LED,
        rgb_led: [RGB; 3],
        buttons: [BTN; 2],
        bank: [BANK; 8],
        switches: [SW; 4],
    ) -> Self {
        Self {
            red_led,
            rgb_led,
            buttons,
            bank,
            switches,
            latched: [0; 5],
        }
    }

    /// Consumes the port set and returns the pins.
    #[allow(clippy::type_complexity)]
    pub fn release(self) -> (LED, [RGB; 3], [BTN; 2], [BANK; 8], [SW; 4]) {
        (
            self.red_led,
            self.rgb_led,
            self.buttons,
            self.bank,
            self.switches,
        )
    }

    fn latch(&mut self, port: PortId) -> &mut u8 {
        let slot = match port {
            PortId::RedLed => 0,
            PortId::RgbLed => 1,
            PortId::Buttons => 2,
            PortId::LedBank => 3,
            PortId::Switches => 4,
        };
        &mut self.latched[slot]
    }
}

fn drive<O: OutputPin>(pins: &mut [O], value: u8) -> u8 {
    let mut written = 0;
    for (bit, pin) in pins.iter_mut().enumerate() {
        let high = value & (1 << bit) != 0;
        let result = if high { pin.set_high() } else { pin.set_low() };
        if result.is_ok() && high {
            written |= 1 << bit;
        }
    }
    written
}

fn sample<I: InputPin>(pins: &mut [I], bits: &[u8], on_error: bool) -> u8 {
    let mut value = 0;
    for (pin, &bit) in pins.iter_mut().zip(bits) {
        if pin.is_high().unwrap_or(on_error) {
            value |= 1 << bit;
        }
    }
    value
}

impl<LED, RGB, BTN, BANK, SW> PortAccess for PinPorts<LED, RGB, BTN, BANK, SW>
where
    LED: OutputPin,
    RGB: OutputPin,
    BTN: InputPin,
    BANK: OutputPin,
    SW: InputPin,
{
    fn configure(&mut self, _port: PortId, _config: PortConfig) {}

    fn read_input(&mut self, port: PortId) -> u8 {
        match port {
            PortId::Buttons => sample(&mut self.buttons, &[1, 4], true),
            PortId::Switches => sample(&mut self.switches, &[0, 1, 2, 3], false),
            other => *self.latch(other),
        }
    }

    fn read_output(&mut self, port: PortId) -> u8 {
        *self.latch(port)
    }

    fn write_output(&mut self, port: PortId, value: u8) {
        let masked = value & port.mask();
        let written = match port {
            PortId::RedLed => drive(core::slice::from_mut(&mut self.red_led), masked),
            PortId::RgbLed => drive(&mut self.rgb_led, masked),
            PortId::LedBank => drive(&mut self.bank, masked),
            PortId::Buttons | PortId::Switches => return,
        };
        *self.latch(port) = written;
    }
}

/// Adapts an `embedded-hal` delay provider.
pub struct HalDelay<T: DelayNs> {
    inner: T,
}

impl<T: DelayNs> HalDelay<T> {
    /// Wraps a delay provider.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Returns the wrapped provider.
    pub fn release(self) -> T {
        self.inner
    }
}

impl<T: DelayNs> Delay<Millis> for HalDelay<T> {
    fn delay(&mut self, duration: Millis) {
        self.inner.delay_ms(duration.as_millis() as u32);
    }
}
