#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`PortAccess`**: Trait to implement for your GPIO registers or pins
//! - **`Delay`**: Trait to implement for your blocking timer
//! - **`Board`**: Masked, typed access to the red LED, tri-color LED, buttons, Pmod 8LD and Pmod SWT
//! - **`ButtonState`** / **`SwitchState`**: Input codes sampled once per poll
//! - **`select`**: Maps a switch code to one of five `Pattern`s
//! - **`PatternRunner`**: Runs a single display routine and reports a `PatternRun`
//! - **`LedController`**: The poll loop: sample, select, run, wait
//! - **`Timing`**: Cadence of the poll loop and every pattern
//!
//! The `sim` module provides a virtual-clock backend for host-side testing, and
//! the `hal` module (feature `embedded-hal`) adapts `embedded-hal` 1.0 pins and
//! delays.

pub mod colors;
pub mod controller;
#[cfg(feature = "embedded-hal")]
pub mod hal;
pub mod patterns;
pub mod port;
pub mod selector;
pub mod sim;
pub mod time;
pub mod timing;
pub mod types;

pub use controller::LedController;
pub use patterns::{Completion, Pattern, PatternRun, PatternRunner};
pub use port::{Board, Direction, PortAccess, PortConfig, PortId};
pub use selector::{Selection, select};
pub use time::{Delay, Millis, TimeDuration};
pub use timing::{Timing, TimingBuilder, TimingError, TimingField};
pub use types::{ButtonCombo, ButtonState, InputError, SwitchState, TriColor, bank};
