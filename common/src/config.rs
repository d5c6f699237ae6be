//! Compile-time configuration for the dashboard core.
//!
//! Timing values are in milliseconds of the monotonic clock unless the name
//! says otherwise. Layout values are pixel offsets of the slide template; all
//! other positions are derived from the size reported by the draw target.

// =============================================================================
// Slideshow Timing
// =============================================================================

/// How long each slide stays on screen before the next one is shown.
pub const SLIDE_DURATION_MS: u64 = 7_000;

// =============================================================================
// Touch Configuration
// =============================================================================

/// Minimum gap between two accepted presses.
/// Only gates the idle -> pressed transition; a release is always accepted.
pub const TOUCH_DEBOUNCE_MS: u64 = 200;

/// Maximum number of simultaneous contacts read per poll.
pub const MAX_TOUCH_POINTS: usize = 5;

// =============================================================================
// Backlight
// =============================================================================

/// Backlight level when the display is on (percent).
pub const BACKLIGHT_ON_PERCENT: u8 = 100;

/// Backlight level when the display is off (percent).
pub const BACKLIGHT_OFF_PERCENT: u8 = 0;

// =============================================================================
// Time Synchronization
// =============================================================================

/// Upper bound on one NTP request/response exchange.
pub const NTP_TIMEOUT_MS: u64 = 5_000;

/// Re-sync once this much monotonic time has passed since the last sync.
pub const RESYNC_INTERVAL_MS: u64 = 24 * 60 * 60 * 1_000;

/// UDP port of the NTP service.
pub const NTP_PORT: u16 = 123;

/// Wall-clock guess used while no sync has succeeded (November 2023).
pub const FALLBACK_BASELINE_EPOCH_SECS: u64 = 1_700_000_000;

/// Timestamps above this value are taken to be in milliseconds.
///
/// A magnitude heuristic: values within a factor of 1000 of the boundary
/// are ambiguous, but real epoch seconds stay far below it until year 33658.
pub const MILLIS_TIMESTAMP_THRESHOLD: u64 = 1_000_000_000_000;

const _: () = assert!(FALLBACK_BASELINE_EPOCH_SECS < MILLIS_TIMESTAMP_THRESHOLD);

// =============================================================================
// Slide Template Layout
// =============================================================================

/// Left margin of the slide title and value.
pub const MARGIN_X: i32 = 30;

/// Top margin; the title baseline sits 20px below it and the value baseline
/// sits this far above the bottom edge.
pub const MARGIN_Y: i32 = 50;

/// Distance from the top margin to the title baseline.
pub const TITLE_BASELINE_OFFSET: i32 = 20;

// =============================================================================
// Text Console Layout
// =============================================================================

/// Left edge of console text.
pub const CONSOLE_X: i32 = 50;

/// First console line and wrap target.
pub const CONSOLE_TOP: i32 = MARGIN_Y;

/// Vertical advance per console line.
pub const CONSOLE_LINE_HEIGHT: i32 = 25;

// =============================================================================
// Forecast
// =============================================================================

/// Number of daily entries a forecast record can hold.
pub const FORECAST_MAX_DAYS: usize = 7;

/// Number of days printed by the one-shot forecast render.
pub const FORECAST_DAYS_SHOWN: usize = 3;

const _: () = assert!(FORECAST_DAYS_SHOWN <= FORECAST_MAX_DAYS);
