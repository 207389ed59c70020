use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use super::error::DomainError;

/// Format accepted for event schedules, e.g. `2025-03-01T09:30:00`.
pub const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses an ISO local date-time. Fractional seconds are accepted.
pub fn parse_naive(field: &str, value: &str) -> Result<NaiveDateTime, DomainError> {
    NaiveDateTime::parse_from_str(value, NAIVE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
        .map_err(|_| {
            DomainError::validation(format!(
                "{} must be an ISO date-time like 2025-03-01T09:30:00",
                field
            ))
        })
}

/// Current wall-clock time; schedules are stored as naive UTC.
pub fn now_naive() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// True when `at` falls within the last `window`.
pub fn within(at: DateTime<Utc>, window: Duration) -> bool {
    at > Utc::now() - window
}
