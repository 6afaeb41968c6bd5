use thiserror::Error;

/// Errors from the plot segmenter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// The present index points past the end of the series. The split
    /// arithmetic would silently produce a malformed dataset otherwise,
    /// so this is rejected up front.
    #[error("present index {index} out of range for series of length {len}")]
    PresentIndexOutOfRange { index: usize, len: usize },
}

/// Errors from display-label formatting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Interval value outside the three recognized kinds. Surfaced as an
    /// error so callers can detect configuration drift instead of getting
    /// an empty label.
    #[error("unsupported interval: {0}")]
    UnsupportedInterval(String),

    /// A date label that is neither RFC 3339 nor one of the plain
    /// date/datetime forms the stats API emits.
    #[error("unparseable date label: {0}")]
    BadLabel(String),
}
