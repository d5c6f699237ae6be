//! Pool temperature sensor client.

use heapless::String as FixedString;
use serde::Deserialize;
use today_common::time::MonotonicClock;
use today_common::{FetchError, PoolTemperatureData, TimeSource};
use tracing::{info, warn};

use crate::http::HttpTransport;
use crate::weather::classify_json_error;

pub const POOL_HOST: &str = "api.canwegointhepool.com";
pub const POOL_PATH: &str = "/app/read";

#[derive(Deserialize)]
struct PoolReading {
    id: String,
    temperature: f32,
    /// Epoch milliseconds.
    date: u64,
}

/// Decode a reading. `time_ago` is left empty for the caller to fill.
pub fn decode_pool(body: &str) -> Result<PoolTemperatureData, FetchError> {
    let reading: PoolReading = serde_json::from_str(body).map_err(|err| {
        warn!(%err, "Pool JSON parsing failed");
        classify_json_error(&err)
    })?;

    let mut id = FixedString::new();
    for c in reading.id.chars() {
        if id.push(c).is_err() {
            break;
        }
    }

    Ok(PoolTemperatureData {
        id,
        temperature: reading.temperature,
        timestamp: reading.date,
        time_ago: FixedString::new(),
        is_valid: true,
    })
}

pub struct PoolClient<T: HttpTransport> {
    transport: T,
}

impl<T: HttpTransport> PoolClient<T> {
    pub fn new(transport: T) -> Self { Self { transport } }

    /// Fetch the latest reading and stamp it with its age as of now.
    pub fn try_fetch<C: MonotonicClock>(
        &self,
        time: &TimeSource,
        clock: &C,
    ) -> Result<PoolTemperatureData, FetchError> {
        let body = self.transport.get(POOL_HOST, POOL_PATH, &[])?.into_body()?;
        let mut data = decode_pool(&body)?;
        data.time_ago = time.format_time_ago(data.timestamp, clock.now_ms());
        info!(temperature = data.temperature, time_ago = data.time_ago.as_str(), "Pool reading updated");
        Ok(data)
    }

    /// Latest reading, or the invalid record on any failure.
    pub fn fetch<C: MonotonicClock>(
        &self,
        time: &TimeSource,
        clock: &C,
    ) -> PoolTemperatureData {
        self.try_fetch(time, clock).unwrap_or_else(|err| {
            warn!(%err, "Failed to fetch pool data");
            PoolTemperatureData::invalid()
        })
    }
}
