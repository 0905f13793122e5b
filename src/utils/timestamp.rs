//! Timestamp normalization
//!
//! Comment timestamps arrive as `2021-05-01T12:00:00.000000Z`. Missing or
//! malformed values never surface as errors: they normalize to the
//! platform launch date, 2005-02-14T00:00:00Z.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Unix time of the fallback timestamp (2005-02-14T00:00:00Z)
pub const FALLBACK_EPOCH: i64 = 1_108_339_200;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// The timestamp substituted for missing or unparseable input
pub fn fallback_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(FALLBACK_EPOCH, 0).unwrap_or_default()
}

/// Parse a UTC timestamp, degrading to [`fallback_timestamp`] on any failure
pub fn parse_timestamp(value: Option<&str>) -> DateTime<Utc> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return fallback_timestamp();
    };

    match NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT) {
        Ok(naive) => Utc.from_utc_datetime(&naive),
        Err(e) => {
            tracing::debug!("Unparseable timestamp {:?}: {}", value, e);
            fallback_timestamp()
        }
    }
}
