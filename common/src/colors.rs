//! Color palette for the dashboard.
//!
//! The panel driver works in RGB565, so every color is stored as a packed
//! 16-bit value and split into its 5/6/5 channels at compile time.
//!
//! ## Rgb565 Color Format
//!
//! - Red: bits 15..11 (0-31)
//! - Green: bits 10..5 (0-63)
//! - Blue: bits 4..0 (0-31)

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Build an [`Rgb565`] from a packed 16-bit RGB565 value.
pub const fn from_raw(raw: u16) -> Rgb565 {
    Rgb565::new((raw >> 11) as u8, ((raw >> 5) & 0x3F) as u8, (raw & 0x1F) as u8)
}

// =============================================================================
// Basic Colors
// =============================================================================

/// Pure black. Console background and "display off" frame.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Slide text and most icon bodies.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Thermometer bulb, console errors, very high UV.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure blue. Humidity droplet.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Cyan. Pool waves and forecast header.
pub const CYAN: Rgb565 = Rgb565::CYAN;

/// Yellow. Sun bodies, moderate UV, forecast day labels.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Mid gray used for icon outlines.
pub const GRAY: Rgb565 = from_raw(0x4208);

/// Light gray cloud outline.
pub const LIGHT_GRAY: Rgb565 = from_raw(0x630C);

/// Droplet highlight.
pub const LIGHT_BLUE: Rgb565 = from_raw(0x841F);

/// UV rays and high UV background.
pub const ORANGE: Rgb565 = from_raw(0xFD20);

// =============================================================================
// Weather Backgrounds
// =============================================================================

/// Hot air temperature (>= 30C).
pub const RED_ORANGE: Rgb565 = from_raw(0xC800);

/// Warm air temperature (>= 20C).
pub const FOREST_GREEN: Rgb565 = from_raw(0x0600);

/// Cool air temperature (>= 15C). Also the default slide and splash background.
pub const DEEP_SKY_BLUE: Rgb565 = from_raw(0x3C9F);

/// Cold air temperature.
pub const DARK_BLUE: Rgb565 = from_raw(0x0010);

/// Humidity background, independent of value.
pub const NAVY_BLUE: Rgb565 = from_raw(0x0015);

/// Wind background, independent of value.
pub const STORM_GRAY: Rgb565 = from_raw(0x4208);

/// Cloud cover background, independent of value.
pub const CLOUD_GRAY: Rgb565 = from_raw(0x39E7);

/// Low UV background.
pub const DARK_SEA_GREEN: Rgb565 = from_raw(0x5D8A);

// =============================================================================
// Pool Backgrounds
// =============================================================================

/// Warm pool (>= 25C).
pub const TURQUOISE: Rgb565 = from_raw(0x4F9B);

/// Comfortable pool (>= 20C).
pub const TEAL: Rgb565 = from_raw(0x2B5A);

/// Cool pool (>= 15C).
pub const STEEL_BLUE: Rgb565 = from_raw(0x4C9F);

/// Cold pool.
pub const DARK_SLATE_BLUE: Rgb565 = from_raw(0x2B75);
