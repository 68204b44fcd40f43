//! Civil time to Julian Day.

use crate::error::ChartError;
use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};

/// Julian Day of the Unix epoch, 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;
/// Julian Day of J2000.0.
pub const J2000_JD: f64 = 2_451_545.0;
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// How a naive local time mapped onto the zone's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Localization {
    Unique,
    /// Repeated wall-clock time (DST fall-back); the standard-time reading was taken.
    Ambiguous,
    /// Skipped wall-clock time (DST spring-forward); read with the pre-gap offset.
    Gap,
}

/// Parse an ISO-8601 local date-time without zone designator.
pub fn parse_local_datetime(input: &str) -> Result<NaiveDateTime, ChartError> {
    let trimmed = input.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| ChartError::InvalidDateTime {
            input: input.to_string(),
            message: "expected YYYY-MM-DDTHH:MM[:SS] or YYYY-MM-DD HH:MM:SS".to_string(),
        })
}

/// Look up an IANA zone by name.
pub fn parse_time_zone(name: &str) -> Result<Tz, ChartError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ChartError::TimeZone {
            zone: name.to_string(),
        })
}

/// Attach a zone to a wall-clock time and convert to UTC, honouring the zone's
/// historical offset rules for that date.
pub fn localize(local: NaiveDateTime, tz: Tz) -> (DateTime<Utc>, Localization) {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => (dt.with_timezone(&Utc), Localization::Unique),
        LocalResult::Ambiguous(a, b) => {
            let standard = if a.offset().dst_offset().is_zero() { a } else { b };
            (standard.with_timezone(&Utc), Localization::Ambiguous)
        }
        LocalResult::None => {
            // Read the skipped wall time with the offset in force just before the gap.
            let before = local - Duration::hours(3);
            let offset = match tz.from_local_datetime(&before) {
                LocalResult::Single(dt) => dt.offset().fix(),
                LocalResult::Ambiguous(dt, _) => dt.offset().fix(),
                LocalResult::None => tz.offset_from_utc_datetime(&local).fix(),
            };
            let utc = local - Duration::seconds(offset.local_minus_utc() as i64);
            (Utc.from_utc_datetime(&utc), Localization::Gap)
        }
    }
}

/// Continuous Julian Day (UTC scale) of an instant.
pub fn julian_day(dt: DateTime<Utc>) -> f64 {
    let seconds = dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 * 1e-9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

/// Julian centuries since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Localize a naive wall-clock time in the named zone and return its Julian Day.
pub fn to_julian_day(local: NaiveDateTime, tz_name: &str) -> Result<f64, ChartError> {
    let tz = parse_time_zone(tz_name)?;
    let (utc, _) = localize(local, tz);
    Ok(julian_day(utc))
}
