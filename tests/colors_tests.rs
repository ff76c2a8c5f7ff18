//! Integration tests for colors module

use palette::Srgb;
use pmod_patterns::TriColor;
use pmod_patterns::colors;

fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.01;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}

const ALL: [TriColor; 8] = [
    TriColor::Off,
    TriColor::Red,
    TriColor::Green,
    TriColor::Yellow,
    TriColor::Blue,
    TriColor::Pink,
    TriColor::SkyBlue,
    TriColor::White,
];

#[test]
fn tri_colors_map_to_full_channels() {
    assert!(colors_equal(colors::to_srgb(TriColor::Off), Srgb::new(0.0, 0.0, 0.0)));
    assert!(colors_equal(colors::to_srgb(TriColor::Red), Srgb::new(1.0, 0.0, 0.0)));
    assert!(colors_equal(colors::to_srgb(TriColor::Pink), Srgb::new(1.0, 0.0, 1.0)));
    assert!(colors_equal(colors::to_srgb(TriColor::SkyBlue), Srgb::new(0.0, 1.0, 1.0)));
    assert!(colors_equal(colors::to_srgb(TriColor::White), Srgb::new(1.0, 1.0, 1.0)));
}

#[test]
fn every_code_survives_srgb_conversion() {
    for color in ALL {
        let rgb: Srgb = color.into();
        assert_eq!(TriColor::from(rgb), color);
        assert_eq!(TriColor::from_bits(color.bits()), color);
    }
}

#[test]
fn from_srgb_thresholds_each_channel() {
    assert_eq!(colors::from_srgb(Srgb::new(0.6, 0.4, 0.0)), TriColor::Red);
    assert_eq!(colors::from_srgb(Srgb::new(0.5, 0.5, 0.0)), TriColor::Yellow);
    assert_eq!(colors::from_srgb(Srgb::new(0.1, 0.2, 0.9)), TriColor::Blue);
    assert_eq!(colors::from_srgb(Srgb::new(0.49, 0.49, 0.49)), TriColor::Off);
}

#[test]
fn from_hsv_picks_nearest_code() {
    assert_eq!(colors::from_hsv(0.0, 1.0, 1.0), TriColor::Red);
    assert_eq!(colors::from_hsv(120.0, 1.0, 1.0), TriColor::Green);
    assert_eq!(colors::from_hsv(240.0, 1.0, 1.0), TriColor::Blue);
    assert_eq!(colors::from_hsv(300.0, 1.0, 1.0), TriColor::Pink);
    assert_eq!(colors::from_hsv(180.0, 1.0, 1.0), TriColor::SkyBlue);
    assert_eq!(colors::from_hsv(0.0, 0.0, 1.0), TriColor::White);
    assert_eq!(colors::from_hsv(0.0, 1.0, 0.0), TriColor::Off);
}
