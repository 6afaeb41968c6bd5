use std::str::FromStr;

use dashstats::error::FormatError;
use dashstats::format::{ChangeDirection, change_label, classify_change, date_label, number_format};
use dashstats::models::Interval;

#[test]
fn month_labels_show_month_name_only() {
    assert_eq!(
        date_label(Interval::Month, "2021-03-15T00:00:00Z").unwrap(),
        "March"
    );
    assert_eq!(date_label(Interval::Month, "2021-12-01").unwrap(), "December");
}

#[test]
fn date_labels_show_day_and_month() {
    assert_eq!(
        date_label(Interval::Date, "2021-03-05T00:00:00Z").unwrap(),
        "5 March"
    );
    // No leading zero on the day.
    assert_eq!(date_label(Interval::Date, "2021-01-09").unwrap(), "9 January");
}

#[test]
fn hour_labels_use_twelve_hour_clock() {
    assert_eq!(date_label(Interval::Hour, "2021-03-15T00:00:00").unwrap(), "12am");
    assert_eq!(date_label(Interval::Hour, "2021-03-15T13:00:00").unwrap(), "1pm");
    assert_eq!(date_label(Interval::Hour, "2021-03-15T12:00:00").unwrap(), "12pm");
    assert_eq!(date_label(Interval::Hour, "2021-03-15 09:00:00").unwrap(), "9am");
    assert_eq!(date_label(Interval::Hour, "2021-03-15T23:00:00").unwrap(), "11pm");
}

#[test]
fn hour_labels_keep_the_wall_clock_time() {
    // Offsets are not converted; the label shows the clock time as written.
    assert_eq!(
        date_label(Interval::Hour, "2021-01-01T13:00:00+05:00").unwrap(),
        "1pm"
    );
}

#[test]
fn bad_labels_are_rejected() {
    let err = date_label(Interval::Month, "not-a-date").unwrap_err();
    assert_eq!(err, FormatError::BadLabel("not-a-date".to_string()));
}

#[test]
fn unknown_intervals_are_rejected() {
    let err = Interval::from_str("week").unwrap_err();
    assert_eq!(err, FormatError::UnsupportedInterval("week".to_string()));
    assert_eq!(Interval::from_str("hour").unwrap(), Interval::Hour);
}

#[test]
fn compact_number_format() {
    assert_eq!(number_format(0.0), "0");
    assert_eq!(number_format(940.0), "940");
    assert_eq!(number_format(1_000.0), "1k");
    assert_eq!(number_format(8_500.0), "8.5k");
    assert_eq!(number_format(1_200_000.0), "1.2M");
}

#[test]
fn change_classification_inverts_for_bounce_rate() {
    assert_eq!(
        classify_change("Unique visitors", 12.0),
        ChangeDirection::Improvement
    );
    assert_eq!(
        classify_change("Unique visitors", -3.0),
        ChangeDirection::Decline
    );
    assert_eq!(classify_change("Bounce rate", 12.0), ChangeDirection::Decline);
    assert_eq!(
        classify_change("Bounce rate", -3.0),
        ChangeDirection::Improvement
    );
    assert_eq!(classify_change("Pageviews", 0.0), ChangeDirection::Neutral);
}

#[test]
fn change_labels() {
    assert_eq!(change_label(Some(12.0)), "\u{2191} 12%");
    assert_eq!(change_label(Some(-3.0)), "\u{2193} 3%");
    assert_eq!(change_label(Some(0.0)), "\u{3030} N/A");
    assert_eq!(change_label(None), "\u{3030} N/A");
}
