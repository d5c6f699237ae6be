//! Data records produced by the weather and pool clients.
//!
//! Records are plain values: a decode either fills every field from one
//! document and sets `is_valid`, or yields the `invalid()` sentinel with all
//! numeric fields at zero. Strings are fixed-capacity so the records can be
//! copied into the slideshow without an allocator.

use heapless::String;

use crate::config::FORECAST_MAX_DAYS;

/// Capacity of the pool sensor id.
pub const POOL_ID_LEN: usize = 32;

/// Capacity of a relative-time string such as `"23 hours 59 minutes ago"`.
pub const TIME_AGO_LEN: usize = 40;

/// Capacity of a forecast date string (ISO-8601 timestamp).
pub const DATE_LEN: usize = 32;

/// Relative-time text produced by [`crate::time`].
pub type TimeAgo = String<TIME_AGO_LEN>;

/// Current conditions at the configured location.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RealtimeWeatherData {
    pub temperature: f32,
    pub uv_index: f32,
    pub humidity: f32,
    pub wind_speed: f32,
    pub wind_direction: f32,
    pub cloud_cover: f32,
    pub is_valid: bool,
}

impl RealtimeWeatherData {
    /// The "no data" sentinel: every field zero, not valid.
    pub const fn invalid() -> Self {
        Self {
            temperature: 0.0,
            uv_index: 0.0,
            humidity: 0.0,
            wind_speed: 0.0,
            wind_direction: 0.0,
            cloud_cover: 0.0,
            is_valid: false,
        }
    }
}

/// Latest pool temperature reading.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PoolTemperatureData {
    pub id: String<POOL_ID_LEN>,
    pub temperature: f32,
    /// Reading time, epoch milliseconds as reported by the sensor service.
    pub timestamp: u64,
    /// Computed once when the record is fetched and not refreshed afterwards.
    pub time_ago: TimeAgo,
    pub is_valid: bool,
}

impl PoolTemperatureData {
    pub fn invalid() -> Self { Self::default() }
}

/// One day of the daily forecast timeline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DailyForecastData {
    pub date: String<DATE_LEN>,
    pub cloud_cover_avg: f32,
    pub temperature_apparent_avg: f32,
    pub temperature_avg: f32,
    pub uv_index_avg: f32,
    pub wind_speed_avg: f32,
    pub wind_direction_avg: f32,
    pub is_valid: bool,
}

/// Up to [`FORECAST_MAX_DAYS`] days of forecast.
///
/// `day_count` is the number of contiguous valid entries starting at index
/// 0. Entries at or beyond `day_count` are ignored whatever they contain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForecastData {
    pub daily: [DailyForecastData; FORECAST_MAX_DAYS],
    pub day_count: usize,
    pub is_valid: bool,
}

impl ForecastData {
    pub fn invalid() -> Self { Self::default() }

    /// Build a forecast from decoded days, keeping at most
    /// [`FORECAST_MAX_DAYS`] and counting the valid prefix.
    pub fn from_days<I>(days: I) -> Self
    where
        I: IntoIterator<Item = DailyForecastData>,
    {
        let mut forecast = Self::default();
        let mut prefix_open = true;
        for (slot, day) in forecast.daily.iter_mut().zip(days) {
            if prefix_open && day.is_valid {
                forecast.day_count += 1;
            } else {
                prefix_open = false;
            }
            *slot = day;
        }
        forecast.is_valid = forecast.day_count > 0;
        forecast
    }

    /// The days covered by `day_count`.
    pub fn days(&self) -> &[DailyForecastData] { &self.daily[..self.day_count.min(FORECAST_MAX_DAYS)] }
}
