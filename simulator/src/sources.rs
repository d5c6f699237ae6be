//! Where the dashboard's data comes from: live APIs or built-in fixtures.

use today_common::ntp::NtpTransport;
use today_common::power::Backlight;
use today_common::time::MonotonicClock;
use today_common::{Dashboard, FetchError, ForecastData, PoolTemperatureData, RealtimeWeatherData, TimeSource};
use tracing::{info, warn};

use crate::fixtures::{offline_forecast, offline_pool, offline_weather};
use crate::http::HttpTransport;
use crate::pool::PoolClient;
use crate::weather::WeatherClient;

pub enum DataSources<T: HttpTransport, N: NtpTransport> {
    Online {
        weather: WeatherClient<T>,
        pool: PoolClient<T>,
        ntp: N,
    },
    Offline,
}

impl<T: HttpTransport + Clone, N: NtpTransport> DataSources<T, N> {
    pub fn online(
        transport: T,
        ntp: N,
        api_key: String,
        location: String,
    ) -> Self {
        Self::Online {
            weather: WeatherClient::new(transport.clone(), api_key, location),
            pool: PoolClient::new(transport),
            ntp,
        }
    }
}

impl<T: HttpTransport, N: NtpTransport> DataSources<T, N> {
    /// One fetch cycle: resync time if stale, then weather and pool.
    ///
    /// Blocks for the duration of the requests. Failures become invalid
    /// records; none are returned.
    pub fn refresh<B, C>(
        &mut self,
        dashboard: &mut Dashboard<B>,
        time: &mut TimeSource,
        clock: &C,
    ) where
        B: Backlight,
        C: MonotonicClock,
    {
        let (weather, pool) = match self {
            Self::Online { weather, pool, ntp } => {
                if let Some(Err(err)) = time.resync_if_stale(ntp, clock) {
                    warn!(%err, "Continuing with approximate time");
                }
                (weather.fetch_realtime(), pool.fetch(time, clock))
            }
            Self::Offline => (
                offline_weather().unwrap_or_else(|_| RealtimeWeatherData::invalid()),
                offline_pool().unwrap_or_else(|_| PoolTemperatureData::invalid()),
            ),
        };

        // An invalid record puts the error slide up
        dashboard.show_weather(&weather, clock.now_ms());
        dashboard.update_pool(&pool);
    }

    /// Fetch the daily forecast once; nothing is kept.
    pub fn forecast(&self) -> Result<ForecastData, FetchError> {
        let result = match self {
            Self::Online { weather, .. } => weather.try_fetch_forecast(),
            Self::Offline => offline_forecast(),
        };
        if let Err(err) = &result {
            warn!(%err, "Forecast unavailable");
        }
        result
    }

    pub fn describe(&self) {
        match self {
            Self::Online { .. } => info!("Fetching live data"),
            Self::Offline => info!("Running offline with built-in data"),
        }
    }
}
