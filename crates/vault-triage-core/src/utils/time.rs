use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};

/// Current time as an ISO-8601 UTC string, e.g. `2024-05-01T12:00:00.000Z`
pub fn now_iso() -> String {
    to_iso(Utc::now())
}

/// File timestamps in the same format as [`now_iso`]
pub fn system_time_iso(time: SystemTime) -> String {
    to_iso(DateTime::<Utc>::from(time))
}

fn to_iso(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}
