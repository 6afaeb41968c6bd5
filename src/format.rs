//! Display formatting for graph labels and headline figures.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::FormatError;
use crate::models::Interval;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse a label the stats API emits: RFC 3339, `YYYY-MM-DDTHH:MM:SS`,
/// `YYYY-MM-DD HH:MM:SS`, or a bare `YYYY-MM-DD`.
///
/// Offsets are kept as wall-clock time (no zone conversion), so hour labels
/// always show the clock time the API put in the label.
fn parse_label(label: &str) -> Result<NaiveDateTime, FormatError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(label) {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(label, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(label, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(label, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN));
    }
    Err(FormatError::BadLabel(label.to_string()))
}

/// Short display label for one graph bucket.
///
/// - `month`: month name only ("March")
/// - `date`: day-of-month plus month name, no leading zero ("5 March")
/// - `hour`: 12-hour clock with am/pm suffix, hour 0 shown as "12am"
pub fn date_label(interval: Interval, label: &str) -> Result<String, FormatError> {
    let dt = parse_label(label)?;
    let month = MONTHS[dt.month0() as usize];
    Ok(match interval {
        Interval::Month => month.to_string(),
        Interval::Date => format!("{} {}", dt.day(), month),
        Interval::Hour => {
            let hour = dt.hour();
            let suffix = if hour >= 12 { "pm" } else { "am" };
            let clock = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{}{}", clock, suffix)
        }
    })
}

/// Compact count display: `940`, `8.5k`, `1.2M`. A trailing `.0` is trimmed
/// so round thousands read as `8k`.
pub fn number_format(n: f64) -> String {
    let scaled = |v: f64, unit: &str| {
        let s = format!("{:.1}", v);
        format!("{}{}", s.trim_end_matches(".0"), unit)
    };
    if n >= 1_000_000.0 {
        scaled(n / 1_000_000.0, "M")
    } else if n >= 1_000.0 {
        scaled(n / 1_000.0, "k")
    } else {
        format!("{}", n)
    }
}

/// Whether a period-over-period change is good or bad news.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Improvement,
    Decline,
    Neutral,
}

/// Classify a change for the given stat. A rise is an improvement for every
/// stat except bounce rate, where more bounces is worse.
pub fn classify_change(stat_name: &str, change: f64) -> ChangeDirection {
    if change == 0.0 {
        return ChangeDirection::Neutral;
    }
    let rising = change > 0.0;
    let inverted = stat_name == "Bounce rate";
    if rising != inverted {
        ChangeDirection::Improvement
    } else {
        ChangeDirection::Decline
    }
}

/// Arrow-plus-magnitude change label for the top-stats row.
pub fn change_label(change: Option<f64>) -> String {
    match change {
        Some(c) if c > 0.0 => format!("\u{2191} {}%", number_format(c.abs())),
        Some(c) if c < 0.0 => format!("\u{2193} {}%", number_format(c.abs())),
        _ => "\u{3030} N/A".to_string(),
    }
}
