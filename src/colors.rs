//! Color conversion helpers for the tri-color LED.
//!
//! The on-board LED only switches each channel fully on or off, so every
//! [`TriColor`] maps to an `Srgb` with channels at 0.0 or 1.0. Going the other
//! way thresholds each channel, which lets host tooling that thinks in `Srgb`
//! (simulators, renderers) drive or display the indicator.

use crate::types::TriColor;
use palette::{FromColor, Hsv, Srgb};

/// Channel level at or above which a channel counts as lit.
pub const CHANNEL_THRESHOLD: f32 = 0.5;

/// Returns the `Srgb` value a tri-color code displays.
#[inline]
pub fn to_srgb(color: TriColor) -> Srgb {
    let (r, g, b) = color.channels();
    Srgb::new(level(r), level(g), level(b))
}

/// Returns the nearest tri-color code for an `Srgb` value.
#[inline]
pub fn from_srgb(color: Srgb) -> TriColor {
    TriColor::from_channels(
        color.red >= CHANNEL_THRESHOLD,
        color.green >= CHANNEL_THRESHOLD,
        color.blue >= CHANNEL_THRESHOLD,
    )
}

/// Returns the nearest tri-color code for an HSV color.
///
/// Useful for picking an indicator color by hue.
#[inline]
pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> TriColor {
    from_srgb(Srgb::from_color(Hsv::new(hue, saturation, value)))
}

#[inline]
fn level(on: bool) -> f32 {
    if on { 1.0 } else { 0.0 }
}

impl From<TriColor> for Srgb {
    fn from(color: TriColor) -> Self {
        to_srgb(color)
    }
}

impl From<Srgb> for TriColor {
    fn from(color: Srgb) -> Self {
        from_srgb(color)
    }
}
