//! Drift-corrected wall-clock estimate and relative-time formatting.
//!
//! The board has no RTC. One NTP exchange yields an absolute epoch second;
//! after that the current time is that value plus monotonic time elapsed
//! since the exchange. A fresh sync every [`RESYNC_INTERVAL_MS`] bounds the
//! drift of the monotonic oscillator.
//!
//! # Relative Durations
//!
//! Durations are bucketed by an ordered tier table rather than a chain of
//! conditionals. The first tier whose upper bound exceeds the duration
//! formats it as a major unit plus, when non-zero, one minor unit:
//!
//! | Duration | Output |
//! |----------|--------|
//! | < 1 min | `"N seconds ago"` (always plural) |
//! | < 1 hour | `"N minute(s) ago"` |
//! | < 1 day | `"N hour(s)[ M minute(s)] ago"` |
//! | < 1 week | `"N day(s)[ M hour(s)] ago"` |
//! | otherwise | `"N week(s) ago"` |

use core::fmt::Write;

use log::{debug, info, warn};

use crate::config::{FALLBACK_BASELINE_EPOCH_SECS, MILLIS_TIMESTAMP_THRESHOLD, NTP_TIMEOUT_MS, RESYNC_INTERVAL_MS};
use crate::data::TimeAgo;
use crate::error::FetchError;
use crate::ntp::{NtpTransport, parse_transmit_seconds, request_packet};

/// Monotonic milliseconds since boot.
pub trait MonotonicClock {
    fn now_ms(&self) -> u64;
}

/// Shown for timestamps that lie in the future.
pub const RECENTLY: &str = "recently";

/// Shown for a zero timestamp.
pub const UNKNOWN: &str = "unknown";

// =============================================================================
// Duration Tiers
// =============================================================================

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;

#[derive(Clone, Copy)]
struct Unit {
    secs: u64,
    singular: &'static str,
    plural: &'static str,
}

impl Unit {
    const fn label(
        &self,
        count: u64,
    ) -> &'static str {
        if count == 1 { self.singular } else { self.plural }
    }
}

const SECONDS: Unit = Unit {
    secs: 1,
    singular: "seconds",
    plural: "seconds",
};
const MINUTES: Unit = Unit {
    secs: MINUTE,
    singular: "minute",
    plural: "minutes",
};
const HOURS: Unit = Unit {
    secs: HOUR,
    singular: "hour",
    plural: "hours",
};
const DAYS: Unit = Unit {
    secs: DAY,
    singular: "day",
    plural: "days",
};
const WEEKS: Unit = Unit {
    secs: WEEK,
    singular: "week",
    plural: "weeks",
};

struct Tier {
    /// Exclusive upper bound in seconds.
    below: u64,
    major: Unit,
    minor: Option<Unit>,
}

const TIERS: [Tier; 5] = [
    Tier {
        below: MINUTE,
        major: SECONDS,
        minor: None,
    },
    Tier {
        below: HOUR,
        major: MINUTES,
        minor: None,
    },
    Tier {
        below: DAY,
        major: HOURS,
        minor: Some(MINUTES),
    },
    Tier {
        below: WEEK,
        major: DAYS,
        minor: Some(HOURS),
    },
    Tier {
        below: u64::MAX,
        major: WEEKS,
        minor: None,
    },
];

/// Format an elapsed duration in seconds as `"... ago"`.
pub fn format_duration(total_secs: u64) -> TimeAgo {
    let tier = TIERS
        .iter()
        .find(|tier| total_secs < tier.below)
        .unwrap_or(&TIERS[TIERS.len() - 1]);

    let major = total_secs / tier.major.secs;
    let mut out = TimeAgo::new();
    // Capacity covers the longest output ("N weeks ago" with a 20-digit N)
    write!(out, "{major} {}", tier.major.label(major)).ok();

    if let Some(minor_unit) = tier.minor {
        let minor = (total_secs % tier.major.secs) / minor_unit.secs;
        if minor > 0 {
            write!(out, " {minor} {}", minor_unit.label(minor)).ok();
        }
    }

    out.push_str(" ago").ok();
    out
}

/// Interpret a timestamp as seconds, dividing by 1000 when it is large
/// enough to be milliseconds.
#[inline]
pub const fn normalize_timestamp_secs(timestamp: u64) -> u64 {
    if timestamp > MILLIS_TIMESTAMP_THRESHOLD { timestamp / 1000 } else { timestamp }
}

fn text(s: &str) -> TimeAgo {
    let mut out = TimeAgo::new();
    out.push_str(s).ok();
    out
}

// =============================================================================
// Time Source
// =============================================================================

/// Wall-clock estimate anchored to the last successful NTP sync.
#[derive(Clone, Debug, Default)]
pub struct TimeSource {
    synced_epoch_secs: u64,
    sync_monotonic_ms: u64,
    is_synced: bool,
}

impl TimeSource {
    /// An unsynced source; [`TimeSource::now`] returns 0 until a sync lands.
    pub const fn new() -> Self {
        Self {
            synced_epoch_secs: 0,
            sync_monotonic_ms: 0,
            is_synced: false,
        }
    }

    /// Whether any sync has succeeded.
    #[inline]
    pub const fn is_synced(&self) -> bool { self.is_synced }

    /// Perform one NTP exchange and anchor the estimate to its answer.
    ///
    /// The monotonic anchor is read after the exchange returns, so the time
    /// spent waiting for the reply is not counted twice. On failure the
    /// previous anchor (if any) stays in effect.
    pub fn sync<T, C>(
        &mut self,
        transport: &mut T,
        clock: &C,
    ) -> Result<u64, FetchError>
    where
        T: NtpTransport,
        C: MonotonicClock,
    {
        info!("Syncing time with NTP server...");
        let reply = transport.exchange(&request_packet(), NTP_TIMEOUT_MS).map_err(|err| {
            warn!("NTP exchange failed: {err}");
            FetchError::Sync
        })?;
        let epoch_secs = parse_transmit_seconds(&reply)?;
        self.record_sync(epoch_secs, clock.now_ms());
        info!("NTP sync successful. Unix time: {epoch_secs}");
        Ok(epoch_secs)
    }

    /// Anchor the estimate to a known epoch second observed at `now_ms`.
    pub fn record_sync(
        &mut self,
        epoch_secs: u64,
        now_ms: u64,
    ) {
        self.synced_epoch_secs = epoch_secs;
        self.sync_monotonic_ms = now_ms;
        self.is_synced = true;
    }

    /// Current epoch seconds, or 0 if never synced.
    pub const fn now(
        &self,
        now_ms: u64,
    ) -> u64 {
        if !self.is_synced {
            return 0;
        }
        self.synced_epoch_secs + now_ms.saturating_sub(self.sync_monotonic_ms) / 1000
    }

    /// True once the resync interval has elapsed, or while never synced.
    pub const fn needs_resync(
        &self,
        now_ms: u64,
    ) -> bool {
        !self.is_synced || now_ms.saturating_sub(self.sync_monotonic_ms) > RESYNC_INTERVAL_MS
    }

    /// Re-sync when stale. A failure is logged and retried at the next check.
    ///
    /// Returns `None` when no sync was attempted.
    pub fn resync_if_stale<T, C>(
        &mut self,
        transport: &mut T,
        clock: &C,
    ) -> Option<Result<u64, FetchError>>
    where
        T: NtpTransport,
        C: MonotonicClock,
    {
        if !self.needs_resync(clock.now_ms()) {
            return None;
        }
        if self.is_synced {
            info!("Time sync is stale, re-syncing...");
        }
        let result = self.sync(transport, clock);
        if result.is_err() {
            debug!("Keeping previous time anchor (synced: {})", self.is_synced);
        }
        Some(result)
    }

    /// Describe how long ago `timestamp` (seconds or milliseconds) was.
    ///
    /// While unsynced the current time is estimated as a fixed baseline
    /// epoch plus uptime, which is only good for a rough answer.
    pub fn format_time_ago(
        &self,
        timestamp: u64,
        now_ms: u64,
    ) -> TimeAgo {
        if timestamp == 0 {
            return text(UNKNOWN);
        }

        let now = match self.now(now_ms) {
            0 => FALLBACK_BASELINE_EPOCH_SECS + now_ms / 1000,
            synced => synced,
        };
        let timestamp_secs = normalize_timestamp_secs(timestamp);

        match now.checked_sub(timestamp_secs) {
            Some(diff) => format_duration(diff),
            None => text(RECENTLY),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use proptest::prelude::*;

    use super::*;
    use crate::ntp::{NTP_PACKET_SIZE, NTP_UNIX_OFFSET_SECS};

    struct FakeClock(Cell<u64>);

    impl MonotonicClock for FakeClock {
        fn now_ms(&self) -> u64 { self.0.get() }
    }

    struct FakeNtp {
        reply: Result<u32, FetchError>,
        calls: u32,
    }

    impl NtpTransport for FakeNtp {
        fn exchange(
            &mut self,
            request: &[u8; NTP_PACKET_SIZE],
            timeout_ms: u64,
        ) -> Result<[u8; NTP_PACKET_SIZE], FetchError> {
            assert_eq!(request[0], 0xE3);
            assert_eq!(timeout_ms, NTP_TIMEOUT_MS);
            self.calls += 1;
            let secs = self.reply?;
            let mut reply = [0u8; NTP_PACKET_SIZE];
            reply[40..44].copy_from_slice(&secs.to_be_bytes());
            Ok(reply)
        }
    }

    fn ntp_answering(unix: u64) -> FakeNtp {
        FakeNtp {
            reply: Ok((unix + NTP_UNIX_OFFSET_SECS) as u32),
            calls: 0,
        }
    }

    #[test]
    fn test_format_duration_tiers() {
        assert_eq!(format_duration(0).as_str(), "0 seconds ago");
        assert_eq!(format_duration(1).as_str(), "1 seconds ago");
        assert_eq!(format_duration(59).as_str(), "59 seconds ago");
        assert_eq!(format_duration(60).as_str(), "1 minute ago");
        assert_eq!(format_duration(119).as_str(), "1 minute ago");
        assert_eq!(format_duration(120).as_str(), "2 minutes ago");
        assert_eq!(format_duration(3599).as_str(), "59 minutes ago");
        assert_eq!(format_duration(3600).as_str(), "1 hour ago");
        assert_eq!(format_duration(3661).as_str(), "1 hour 1 minute ago");
        assert_eq!(format_duration(7980).as_str(), "2 hours 13 minutes ago");
        assert_eq!(format_duration(86_399).as_str(), "23 hours 59 minutes ago");
        assert_eq!(format_duration(86_400).as_str(), "1 day ago");
        assert_eq!(format_duration(90_000).as_str(), "1 day 1 hour ago");
        assert_eq!(format_duration(2 * 86_400 + 5 * 3600).as_str(), "2 days 5 hours ago");
        assert_eq!(format_duration(604_799).as_str(), "6 days 23 hours ago");
        assert_eq!(format_duration(604_800).as_str(), "1 week ago");
        assert_eq!(format_duration(3 * 604_800 + 86_400).as_str(), "3 weeks ago");
    }

    #[test]
    fn test_format_duration_extreme_fits() {
        let out = format_duration(u64::MAX);
        assert!(out.ends_with("weeks ago"));
    }

    #[test]
    fn test_now_is_zero_until_synced() {
        let source = TimeSource::new();
        assert_eq!(source.now(123_456), 0);
        assert!(source.needs_resync(0));
    }

    #[test]
    fn test_now_adds_elapsed_monotonic_time() {
        let mut source = TimeSource::new();
        source.record_sync(1_700_000_000, 10_000);
        assert_eq!(source.now(10_000), 1_700_000_000);
        assert_eq!(source.now(10_999), 1_700_000_000);
        assert_eq!(source.now(15_500), 1_700_000_005);
    }

    #[test]
    fn test_sync_anchors_after_exchange() {
        let clock = FakeClock(Cell::new(42_000));
        let mut ntp = ntp_answering(1_731_227_559);
        let mut source = TimeSource::new();

        assert_eq!(source.sync(&mut ntp, &clock), Ok(1_731_227_559));
        assert!(source.is_synced());
        clock.0.set(102_000);
        assert_eq!(source.now(clock.now_ms()), 1_731_227_619);
    }

    #[test]
    fn test_failed_sync_keeps_previous_anchor() {
        let clock = FakeClock(Cell::new(0));
        let mut source = TimeSource::new();
        source.record_sync(1_000_000, 0);

        let mut ntp = FakeNtp {
            reply: Err(FetchError::Network),
            calls: 0,
        };
        assert_eq!(source.sync(&mut ntp, &clock), Err(FetchError::Sync));
        assert!(source.is_synced());
        assert_eq!(source.now(2_000), 1_000_002);
    }

    #[test]
    fn test_resync_only_when_stale() {
        let clock = FakeClock(Cell::new(1_000));
        let mut ntp = ntp_answering(1_700_000_000);
        let mut source = TimeSource::new();

        assert_eq!(source.resync_if_stale(&mut ntp, &clock), Some(Ok(1_700_000_000)));
        clock.0.set(1_000 + RESYNC_INTERVAL_MS);
        assert_eq!(source.resync_if_stale(&mut ntp, &clock), None);
        clock.0.set(1_001 + RESYNC_INTERVAL_MS);
        assert!(source.resync_if_stale(&mut ntp, &clock).is_some());
        assert_eq!(ntp.calls, 2);
    }

    #[test]
    fn test_resync_failure_is_retried_next_check() {
        let clock = FakeClock(Cell::new(0));
        let mut ntp = FakeNtp {
            reply: Err(FetchError::Network),
            calls: 0,
        };
        let mut source = TimeSource::new();

        assert_eq!(source.resync_if_stale(&mut ntp, &clock), Some(Err(FetchError::Sync)));
        assert_eq!(source.resync_if_stale(&mut ntp, &clock), Some(Err(FetchError::Sync)));
        assert_eq!(ntp.calls, 2);
    }

    #[test]
    fn test_format_time_ago_normalizes_milliseconds() {
        let mut source = TimeSource::new();
        source.record_sync(1_731_235_539, 0);
        // 1731227559883 ms is 7980 s before the anchor
        assert_eq!(source.format_time_ago(1_731_227_559_883, 0).as_str(), "2 hours 13 minutes ago");
        assert_eq!(source.format_time_ago(1_731_227_559, 0).as_str(), "2 hours 13 minutes ago");
    }

    #[test]
    fn test_format_time_ago_future_is_recently() {
        let mut source = TimeSource::new();
        source.record_sync(1_700_000_000, 0);
        assert_eq!(source.format_time_ago(1_700_000_100, 0).as_str(), RECENTLY);
    }

    #[test]
    fn test_format_time_ago_zero_is_unknown() {
        let source = TimeSource::new();
        assert_eq!(source.format_time_ago(0, 5_000).as_str(), UNKNOWN);
    }

    #[test]
    fn test_format_time_ago_unsynced_uses_baseline() {
        let source = TimeSource::new();
        // Baseline plus 90 s of uptime, measured against a reading at the baseline
        let out = source.format_time_ago(FALLBACK_BASELINE_EPOCH_SECS * 1000 + 1, 90_000);
        assert_eq!(out.as_str(), "1 minute ago");
    }

    #[test]
    fn test_normalize_threshold_is_exclusive() {
        assert_eq!(normalize_timestamp_secs(MILLIS_TIMESTAMP_THRESHOLD), MILLIS_TIMESTAMP_THRESHOLD);
        assert_eq!(normalize_timestamp_secs(MILLIS_TIMESTAMP_THRESHOLD + 1000), 1_000_000_001);
    }

    proptest! {
        #[test]
        fn prop_under_a_minute_is_seconds(d in 0u64..60) {
            prop_assert!(format_duration(d).ends_with("seconds ago"));
        }

        #[test]
        fn prop_under_an_hour_is_minutes(d in 60u64..3600) {
            let out = format_duration(d);
            if d < 120 {
                prop_assert_eq!(out.as_str(), "1 minute ago");
            } else {
                prop_assert!(out.ends_with("minutes ago"));
            }
        }

        #[test]
        fn prop_never_negative(sync in 1u64..2_000_000_000, ts in 1u64..4_000_000_000) {
            let mut source = TimeSource::new();
            source.record_sync(sync, 0);
            let out = source.format_time_ago(ts, 0);
            prop_assert!(out.as_str() == RECENTLY || out.ends_with(" ago"));
            prop_assert!(!out.contains('-'));
        }
    }
}
