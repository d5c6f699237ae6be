//! Value-to-background color thresholds.
//!
//! Every parameter maps to a [`ColorScale`]: an ordered list of bands sorted
//! by descending lower bound, evaluated first-match-wins, plus a fallback
//! color for values below every band. Parameters with a constant background
//! simply have no bands.
//!
//! # Compile-Time Validation
//!
//! Each threshold group includes `const` assertions on its ordering, so a
//! misordered table fails to compile instead of silently skipping a band.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{
    CLOUD_GRAY,
    DARK_BLUE,
    DARK_SEA_GREEN,
    DARK_SLATE_BLUE,
    DEEP_SKY_BLUE,
    FOREST_GREEN,
    NAVY_BLUE,
    ORANGE,
    RED,
    RED_ORANGE,
    STEEL_BLUE,
    STORM_GRAY,
    TEAL,
    TURQUOISE,
    YELLOW,
};

// =============================================================================
// Air Temperature Thresholds (C)
// =============================================================================

/// Hot air (>= 30C = `RED_ORANGE`).
pub const TEMP_HOT: f32 = 30.0;

/// Warm air (>= 20C = `FOREST_GREEN`).
pub const TEMP_WARM: f32 = 20.0;

/// Cool air (>= 15C = `DEEP_SKY_BLUE`). Below this is cold (`DARK_BLUE`).
pub const TEMP_COOL: f32 = 15.0;

const _: () = assert!(TEMP_COOL < TEMP_WARM);
const _: () = assert!(TEMP_WARM < TEMP_HOT);

// =============================================================================
// Pool Temperature Thresholds (C)
// =============================================================================

/// Warm pool (>= 25C = `TURQUOISE`).
pub const POOL_WARM: f32 = 25.0;

/// Comfortable pool (>= 20C = `TEAL`).
pub const POOL_COMFORTABLE: f32 = 20.0;

/// Cool pool (>= 15C = `STEEL_BLUE`). Below this is cold (`DARK_SLATE_BLUE`).
pub const POOL_COOL: f32 = 15.0;

const _: () = assert!(POOL_COOL < POOL_COMFORTABLE);
const _: () = assert!(POOL_COMFORTABLE < POOL_WARM);

// =============================================================================
// UV Index Thresholds
// =============================================================================

/// Very high UV (>= 8 = `RED`).
pub const UV_VERY_HIGH: f32 = 8.0;

/// High UV (>= 6 = `ORANGE`).
pub const UV_HIGH: f32 = 6.0;

/// Moderate UV (>= 3 = `YELLOW`). Below this is low (`DARK_SEA_GREEN`).
pub const UV_MODERATE: f32 = 3.0;

const _: () = assert!(UV_MODERATE < UV_HIGH);
const _: () = assert!(UV_HIGH < UV_VERY_HIGH);

// =============================================================================
// Color Scales
// =============================================================================

/// One band of a color scale: values `>= min` take `color`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub min: f32,
    pub color: Rgb565,
}

/// Ordered threshold table for one parameter.
#[derive(Clone, Copy, Debug)]
pub struct ColorScale {
    /// Bands sorted by descending `min`.
    pub bands: &'static [Band],
    /// Color for values below every band (and for NaN).
    pub fallback: Rgb565,
}

impl ColorScale {
    /// A scale that ignores the value.
    pub const fn constant(color: Rgb565) -> Self {
        Self {
            bands: &[],
            fallback: color,
        }
    }

    /// Background color for `value`; the first band whose bound is met wins.
    pub fn color_for(
        &self,
        value: f32,
    ) -> Rgb565 {
        self.bands
            .iter()
            .find(|band| value >= band.min)
            .map_or(self.fallback, |band| band.color)
    }
}

/// Which color scale a slide uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorRule {
    Temperature,
    Pool,
    Uv,
    Humidity,
    Wind,
    Cloud,
    /// Slides without a parameter (the error slide).
    Default,
}

pub const TEMPERATURE_SCALE: ColorScale = ColorScale {
    bands: &[
        Band {
            min: TEMP_HOT,
            color: RED_ORANGE,
        },
        Band {
            min: TEMP_WARM,
            color: FOREST_GREEN,
        },
        Band {
            min: TEMP_COOL,
            color: DEEP_SKY_BLUE,
        },
    ],
    fallback: DARK_BLUE,
};

pub const POOL_SCALE: ColorScale = ColorScale {
    bands: &[
        Band {
            min: POOL_WARM,
            color: TURQUOISE,
        },
        Band {
            min: POOL_COMFORTABLE,
            color: TEAL,
        },
        Band {
            min: POOL_COOL,
            color: STEEL_BLUE,
        },
    ],
    fallback: DARK_SLATE_BLUE,
};

pub const UV_SCALE: ColorScale = ColorScale {
    bands: &[
        Band {
            min: UV_VERY_HIGH,
            color: RED,
        },
        Band {
            min: UV_HIGH,
            color: ORANGE,
        },
        Band {
            min: UV_MODERATE,
            color: YELLOW,
        },
    ],
    fallback: DARK_SEA_GREEN,
};

pub const HUMIDITY_SCALE: ColorScale = ColorScale::constant(NAVY_BLUE);
pub const WIND_SCALE: ColorScale = ColorScale::constant(STORM_GRAY);
pub const CLOUD_SCALE: ColorScale = ColorScale::constant(CLOUD_GRAY);
pub const DEFAULT_SCALE: ColorScale = ColorScale::constant(DEEP_SKY_BLUE);

impl ColorRule {
    /// The threshold table behind this rule.
    pub const fn scale(self) -> &'static ColorScale {
        match self {
            Self::Temperature => &TEMPERATURE_SCALE,
            Self::Pool => &POOL_SCALE,
            Self::Uv => &UV_SCALE,
            Self::Humidity => &HUMIDITY_SCALE,
            Self::Wind => &WIND_SCALE,
            Self::Cloud => &CLOUD_SCALE,
            Self::Default => &DEFAULT_SCALE,
        }
    }
}

/// Background color for a parameter value.
#[inline]
pub fn background_color(
    rule: ColorRule,
    value: f32,
) -> Rgb565 {
    rule.scale().color_for(value)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_descending(scale: &ColorScale) {
        for pair in scale.bands.windows(2) {
            assert!(pair[0].min > pair[1].min, "bands must be sorted by descending bound");
        }
    }

    #[test]
    fn test_scales_are_descending() {
        assert_descending(&TEMPERATURE_SCALE);
        assert_descending(&POOL_SCALE);
        assert_descending(&UV_SCALE);
    }

    #[test]
    fn test_temperature_boundaries_are_inclusive() {
        assert_eq!(background_color(ColorRule::Temperature, 30.0), RED_ORANGE);
        assert_eq!(background_color(ColorRule::Temperature, 29.9), FOREST_GREEN);
        assert_eq!(background_color(ColorRule::Temperature, 20.0), FOREST_GREEN);
        assert_eq!(background_color(ColorRule::Temperature, 15.0), DEEP_SKY_BLUE);
    }

    #[test]
    fn test_temperature_just_below_warm_is_cool() {
        // 19.9 misses the warm band and lands in the cool band (>= 15)
        assert_eq!(background_color(ColorRule::Temperature, 19.9), DEEP_SKY_BLUE);
        assert_eq!(background_color(ColorRule::Temperature, 14.9), DARK_BLUE);
        assert_eq!(background_color(ColorRule::Temperature, -5.0), DARK_BLUE);
    }

    #[test]
    fn test_pool_scale() {
        assert_eq!(background_color(ColorRule::Pool, 27.0), TURQUOISE);
        assert_eq!(background_color(ColorRule::Pool, 25.0), TURQUOISE);
        assert_eq!(background_color(ColorRule::Pool, 22.5), TEAL);
        assert_eq!(background_color(ColorRule::Pool, 19.31), STEEL_BLUE);
        assert_eq!(background_color(ColorRule::Pool, 0.0), DARK_SLATE_BLUE);
    }

    #[test]
    fn test_uv_scale() {
        assert_eq!(background_color(ColorRule::Uv, 11.0), RED);
        assert_eq!(background_color(ColorRule::Uv, 8.0), RED);
        assert_eq!(background_color(ColorRule::Uv, 7.0), ORANGE);
        assert_eq!(background_color(ColorRule::Uv, 3.0), YELLOW);
        assert_eq!(background_color(ColorRule::Uv, 2.0), DARK_SEA_GREEN);
    }

    #[test]
    fn test_constant_scales_ignore_value() {
        for value in [-100.0, 0.0, 50.0, 100.0] {
            assert_eq!(background_color(ColorRule::Humidity, value), NAVY_BLUE);
            assert_eq!(background_color(ColorRule::Wind, value), STORM_GRAY);
            assert_eq!(background_color(ColorRule::Cloud, value), CLOUD_GRAY);
            assert_eq!(background_color(ColorRule::Default, value), DEEP_SKY_BLUE);
        }
    }

    #[test]
    fn test_nan_falls_through_to_fallback() {
        assert_eq!(background_color(ColorRule::Temperature, f32::NAN), DARK_BLUE);
        assert_eq!(background_color(ColorRule::Uv, f32::NAN), DARK_SEA_GREEN);
    }
}
