//! Core logic for the "Today" weather and pool dashboard.
//!
//! Everything here is platform-agnostic and shared between the desktop
//! simulator and board firmware:
//!
//! - [`dashboard`]: Per-loop driver wiring touch, power and slideshow together
//! - [`slideshow`]: Slide table and the timed cycling state machine
//! - [`time`]: NTP-anchored wall clock and "time ago" formatting
//! - [`touch`]: Edge-triggered touch debouncing
//! - [`power`]: Backlight on/off control
//! - [`console`]: Line-oriented text output (forecast, errors)
//! - [`icons`]: Parameter icons and the splash screen
//! - [`thresholds`]: Value-to-background color tables
//! - [`data`]: Weather, forecast and pool records
//! - [`ntp`]: SNTP packet codec
//! - [`error`]: Fetch/decode/sync failure taxonomy
//! - [`colors`], [`styles`], [`config`]: Constants
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` without `alloc`. Platform services (clock, NTP
//! socket, touch controller, backlight, display) are reached through traits
//! so tests can substitute fakes.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod console;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod icons;
pub mod ntp;
pub mod power;
pub mod slideshow;
pub mod styles;
pub mod thresholds;
pub mod time;
pub mod touch;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use dashboard::{Dashboard, StepOutcome};
pub use data::{DailyForecastData, ForecastData, PoolTemperatureData, RealtimeWeatherData};
pub use error::FetchError;
pub use slideshow::{SlideshowConfig, StartMode};
pub use time::{MonotonicClock, TimeSource};
