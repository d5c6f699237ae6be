//! Tomorrow.io realtime and daily forecast clients.

use heapless::String as FixedString;
use serde::Deserialize;
use serde_json::Value;
use serde_json::error::Category;
use today_common::config::FORECAST_MAX_DAYS;
use today_common::{DailyForecastData, FetchError, ForecastData, RealtimeWeatherData};
use tracing::{debug, info, warn};

use crate::http::HttpTransport;

pub const WEATHER_HOST: &str = "api.tomorrow.io";
pub const REALTIME_PATH: &str = "/v4/weather/realtime";
pub const FORECAST_PATH: &str = "/v4/weather/forecast";

/// Syntax errors are malformed documents; type and missing-field errors
/// mean the document is well-formed but lacks what we need.
pub fn classify_json_error(err: &serde_json::Error) -> FetchError {
    match err.classify() {
        Category::Data => FetchError::DataInvalid,
        Category::Syntax | Category::Eof | Category::Io => FetchError::Decode,
    }
}

// ── JSON structures ─────────────────────────────────────────────────

#[derive(Deserialize)]
struct RealtimeRoot {
    data: RealtimeBody,
}

#[derive(Deserialize)]
struct RealtimeBody {
    values: RealtimeValues,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RealtimeValues {
    temperature: f32,
    uv_index: f32,
    humidity: f32,
    wind_speed: f32,
    wind_direction: f32,
    cloud_cover: f32,
}

#[derive(Deserialize)]
struct ForecastRoot {
    timelines: Timelines,
}

#[derive(Deserialize)]
struct Timelines {
    daily: Vec<Value>,
}

#[derive(Deserialize)]
struct DailyEntry {
    time: String,
    values: DailyValues,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailyValues {
    cloud_cover_avg: f32,
    temperature_apparent_avg: f32,
    temperature_avg: f32,
    uv_index_avg: f32,
    wind_speed_avg: f32,
    wind_direction_avg: f32,
}

// ── Decoding ────────────────────────────────────────────────────────

/// Decode a realtime response. Every value is required.
pub fn decode_realtime(body: &str) -> Result<RealtimeWeatherData, FetchError> {
    let root: RealtimeRoot = serde_json::from_str(body).map_err(|err| {
        warn!(%err, "Failed to parse weather data");
        classify_json_error(&err)
    })?;
    let v = root.data.values;

    Ok(RealtimeWeatherData {
        temperature: v.temperature,
        uv_index: v.uv_index,
        humidity: v.humidity,
        wind_speed: v.wind_speed,
        wind_direction: v.wind_direction,
        cloud_cover: v.cloud_cover,
        is_valid: true,
    })
}

/// One forecast day; anything missing or oversized makes it invalid.
fn decode_day(value: Value) -> DailyForecastData {
    let Ok(entry) = serde_json::from_value::<DailyEntry>(value) else {
        return DailyForecastData::default();
    };
    let mut date = FixedString::new();
    if date.push_str(&entry.time).is_err() {
        return DailyForecastData::default();
    }
    let v = entry.values;

    DailyForecastData {
        date,
        cloud_cover_avg: v.cloud_cover_avg,
        temperature_apparent_avg: v.temperature_apparent_avg,
        temperature_avg: v.temperature_avg,
        uv_index_avg: v.uv_index_avg,
        wind_speed_avg: v.wind_speed_avg,
        wind_direction_avg: v.wind_direction_avg,
        is_valid: true,
    }
}

/// Decode a daily forecast, keeping at most [`FORECAST_MAX_DAYS`] days.
///
/// Succeeds when at least the first day is valid.
pub fn decode_forecast(body: &str) -> Result<ForecastData, FetchError> {
    let root: ForecastRoot = serde_json::from_str(body).map_err(|err| {
        warn!(%err, "Failed to parse forecast data");
        classify_json_error(&err)
    })?;

    let received = root.timelines.daily.len();
    let forecast = ForecastData::from_days(
        root.timelines.daily.into_iter().take(FORECAST_MAX_DAYS).map(decode_day),
    );
    debug!(received, valid = forecast.day_count, "Decoded forecast");

    if !forecast.is_valid {
        warn!("No valid forecast days");
        return Err(FetchError::DataInvalid);
    }
    Ok(forecast)
}

// ── Client ──────────────────────────────────────────────────────────

pub struct WeatherClient<T: HttpTransport> {
    transport: T,
    api_key: String,
    location: String,
}

impl<T: HttpTransport> WeatherClient<T> {
    pub fn new(
        transport: T,
        api_key: String,
        location: String,
    ) -> Self {
        Self {
            transport,
            api_key,
            location,
        }
    }

    fn get(
        &self,
        path: &str,
        extra: &[(&str, &str)],
    ) -> Result<String, FetchError> {
        let mut query = vec![("location", self.location.as_str()), ("apikey", self.api_key.as_str())];
        query.extend_from_slice(extra);
        self.transport.get(WEATHER_HOST, path, &query)?.into_body()
    }

    pub fn try_fetch_realtime(&self) -> Result<RealtimeWeatherData, FetchError> {
        let body = self.get(REALTIME_PATH, &[])?;
        let data = decode_realtime(&body)?;
        info!(temperature = data.temperature, uv = data.uv_index, "Realtime weather updated");
        Ok(data)
    }

    /// Realtime conditions, or the invalid record on any failure.
    pub fn fetch_realtime(&self) -> RealtimeWeatherData {
        self.try_fetch_realtime().unwrap_or_else(|err| {
            warn!(%err, "Failed to fetch weather data");
            RealtimeWeatherData::invalid()
        })
    }

    pub fn try_fetch_forecast(&self) -> Result<ForecastData, FetchError> {
        let body = self.get(FORECAST_PATH, &[("timesteps", "1d")])?;
        decode_forecast(&body)
    }
}
