//! Time service trait and its desktop implementation.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use folio_types::error::{FolioError, Result};

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

/// A local wall-clock timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime(NaiveDateTime);

impl LocalTime {
    /// Build from calendar fields; fails on impossible dates or times.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .map(Self)
            .ok_or_else(|| {
                FolioError::Platform(format!(
                    "invalid local time {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                ))
            })
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Long date, e.g. `Monday, 19 October 2026`.
    pub fn long_date(&self) -> String {
        self.0.format("%A, %-d %B %Y").to_string()
    }

    /// Twelve-hour clock with seconds, e.g. `02:05:09 pm`.
    pub fn clock_12h(&self) -> String {
        self.0.format("%I:%M:%S %P").to_string()
    }
}

impl std::fmt::Display for LocalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Abstraction over platform time services.
pub trait TimeService {
    /// Current local wall-clock time.
    fn now(&self) -> Result<LocalTime>;

    /// IANA name of the local timezone (e.g. `Asia/Kolkata`).
    fn timezone(&self) -> Result<String>;
}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Default platform implementation using the host clock.
#[derive(Debug, Default)]
pub struct DesktopPlatform;

impl DesktopPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl TimeService for DesktopPlatform {
    fn now(&self) -> Result<LocalTime> {
        Ok(LocalTime(chrono::Local::now().naive_local()))
    }

    fn timezone(&self) -> Result<String> {
        if let Ok(tz) = std::env::var("TZ") {
            let tz = tz.trim_start_matches(':').trim();
            if !tz.is_empty() {
                return Ok(tz.to_string());
            }
        }
        if let Ok(text) = std::fs::read_to_string("/etc/timezone") {
            let tz = text.trim();
            if !tz.is_empty() {
                return Ok(tz.to_string());
            }
        }
        if let Some(tz) = zone_from_localtime_link(Path::new("/etc/localtime")) {
            return Ok(tz);
        }
        log::debug!("No timezone source found, reporting UTC");
        Ok("UTC".to_string())
    }
}

/// Extract `Area/City` from a `/etc/localtime -> .../zoneinfo/Area/City` link.
fn zone_from_localtime_link(path: &Path) -> Option<String> {
    let target = std::fs::read_link(path).ok()?;
    let target = target.to_string_lossy();
    let (_, zone) = target.split_once("zoneinfo/")?;
    if zone.is_empty() {
        None
    } else {
        Some(zone.to_string())
    }
}

// ---------------------------------------------------------------------------
// Fixed clock
// ---------------------------------------------------------------------------

/// A clock pinned to one instant and zone. Used by tests and replays.
#[derive(Debug, Clone)]
pub struct FixedClock {
    pub time: LocalTime,
    pub zone: String,
}

impl FixedClock {
    pub fn new(time: LocalTime, zone: &str) -> Self {
        Self {
            time,
            zone: zone.to_string(),
        }
    }
}

impl TimeService for FixedClock {
    fn now(&self) -> Result<LocalTime> {
        Ok(self.time)
    }

    fn timezone(&self) -> Result<String> {
        Ok(self.zone.clone())
    }
}
