//! Runtime configuration from the environment.
//!
//! An optional `.env` file is loaded first, so keys can live next to the
//! binary during development. Every variable is prefixed with `TODAY_`.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use today_common::config::SLIDE_DURATION_MS;
use today_common::{SlideshowConfig, StartMode};

pub const DEFAULT_NTP_SERVER: &str = "au.pool.ntp.org";
pub const DEFAULT_FETCH_INTERVAL_SECS: u64 = 600;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Tomorrow.io API key. Without one the simulator runs offline.
    pub api_key: Option<String>,
    /// Tomorrow.io `location` query value (place name or `lat,lon`).
    pub location: String,
    pub ntp_server: String,
    pub fetch_interval: Duration,
    pub slideshow: SlideshowConfig,
    /// Use built-in fixtures instead of the network.
    pub offline: bool,
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("TODAY_API_KEY").filter(|key| !key.trim().is_empty());
        let offline = api_key.is_none() || lookup("TODAY_OFFLINE").is_some_and(|v| is_truthy(&v));
        let location = lookup("TODAY_LOCATION").unwrap_or_default();

        if !offline && location.trim().is_empty() {
            bail!("TODAY_LOCATION must be set when TODAY_API_KEY is");
        }

        let fetch_interval_secs = parse_or(&lookup, "TODAY_FETCH_INTERVAL_SECS", DEFAULT_FETCH_INTERVAL_SECS)?;
        let slide_duration_ms = parse_or(&lookup, "TODAY_SLIDE_DURATION_MS", SLIDE_DURATION_MS)?;
        if slide_duration_ms == 0 {
            bail!("TODAY_SLIDE_DURATION_MS must be positive");
        }

        let start = match lookup("TODAY_SLIDE_START").as_deref().map(str::trim) {
            None | Some("" | "deferred") => StartMode::Deferred,
            Some("immediate") => StartMode::Immediate,
            Some(other) => bail!("TODAY_SLIDE_START must be 'deferred' or 'immediate', got '{other}'"),
        };

        Ok(Self {
            api_key,
            location,
            ntp_server: lookup("TODAY_NTP_SERVER").unwrap_or_else(|| DEFAULT_NTP_SERVER.to_owned()),
            fetch_interval: Duration::from_secs(fetch_interval_secs),
            slideshow: SlideshowConfig {
                slide_duration_ms,
                start,
            },
            offline,
        })
    }
}

fn is_truthy(value: &str) -> bool { matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on") }

fn parse_or<F>(
    lookup: &F,
    key: &str,
    default: u64,
) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().with_context(|| format!("{key} is not a number: '{raw}'")),
        None => Ok(default),
    }
}
