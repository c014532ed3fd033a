//! Timestamp presentation.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

const ZERO_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1, 1, 1) {
    Some(date) => date,
    None => panic!("0001-01-01 is within chrono's date range"),
};

/// The zero instant, `0001-01-01T00:00:00Z`.
///
/// Stands in for unset finish times. API consumers already compare against
/// this exact value, so it cannot be replaced by an absent field.
pub fn zero_time() -> DateTime<Utc> {
    Utc.from_utc_datetime(&ZERO_DATE.and_time(NaiveTime::default()))
}

/// Unset timestamps resolve to [`zero_time`].
pub(crate) fn value_or_zero(ts: Option<DateTime<Utc>>) -> DateTime<Utc> {
    ts.unwrap_or_else(zero_time)
}
