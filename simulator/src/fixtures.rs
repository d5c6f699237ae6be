//! Canned API responses for running without network access.
//!
//! Decoded through the same decoders as live responses, so offline mode
//! exercises the whole data path except the transport.

use today_common::{FetchError, ForecastData, PoolTemperatureData, RealtimeWeatherData};
use tracing::info;

use crate::pool::decode_pool;
use crate::weather::{decode_forecast, decode_realtime};

pub const REALTIME_JSON: &str = r#"{
  "data": {
    "time": "2024-11-10T08:00:00Z",
    "values": {
      "cloudCover": 45.5,
      "humidity": 68.0,
      "temperature": 22.6,
      "uvIndex": 4.0,
      "windDirection": 135.0,
      "windSpeed": 14.2
    }
  },
  "location": { "lat": -33.8688, "lon": 151.2093 }
}"#;

pub const FORECAST_JSON: &str = r#"{
  "timelines": {
    "daily": [
      {
        "time": "2024-11-10T11:00:00Z",
        "values": {
          "cloudCoverAvg": 40.1,
          "temperatureApparentAvg": 21.8,
          "temperatureAvg": 22.4,
          "uvIndexAvg": 3.5,
          "windDirectionAvg": 130.0,
          "windSpeedAvg": 12.6
        }
      },
      {
        "time": "2024-11-11T11:00:00Z",
        "values": {
          "cloudCoverAvg": 12.0,
          "temperatureApparentAvg": 26.3,
          "temperatureAvg": 25.9,
          "uvIndexAvg": 7.2,
          "windDirectionAvg": 45.0,
          "windSpeedAvg": 9.1
        }
      },
      {
        "time": "2024-11-12T11:00:00Z",
        "values": {
          "cloudCoverAvg": 88.0,
          "temperatureApparentAvg": 17.5,
          "temperatureAvg": 18.2,
          "uvIndexAvg": 1.4,
          "windDirectionAvg": 210.0,
          "windSpeedAvg": 22.8
        }
      }
    ]
  }
}"#;

pub const POOL_JSON: &str = r#"{
  "id": "current",
  "temperature": 19.31,
  "date": 1731227559883
}"#;

/// Age shown for the canned pool reading.
pub const POOL_TIME_AGO: &str = "2 hours 13 minutes ago";

pub fn offline_weather() -> Result<RealtimeWeatherData, FetchError> {
    info!("Using offline weather data");
    decode_realtime(REALTIME_JSON)
}

pub fn offline_forecast() -> Result<ForecastData, FetchError> { decode_forecast(FORECAST_JSON) }

/// The canned pool reading with a fixed age, since its timestamp is in the past.
pub fn offline_pool() -> Result<PoolTemperatureData, FetchError> {
    let mut data = decode_pool(POOL_JSON)?;
    data.time_ago.clear();
    data.time_ago.push_str(POOL_TIME_AGO).map_err(|_| FetchError::DataInvalid)?;
    Ok(data)
}
