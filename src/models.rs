use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Bucket granularity of the visitor graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    /// One bucket per calendar month.
    Month,
    /// One bucket per day.
    Date,
    /// One bucket per hour.
    Hour,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Month => "month",
            Interval::Date => "date",
            Interval::Hour => "hour",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(Interval::Month),
            "date" => Ok(Interval::Date),
            "hour" => Ok(Interval::Hour),
            other => Err(FormatError::UnsupportedInterval(other.to_string())),
        }
    }
}

/// Main-graph response from the stats API.
///
/// `labels` and `plot` are index-aligned; `present_index` marks the first
/// bucket that is still accumulating (absent when every bucket is complete).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphData {
    pub labels: Vec<String>,
    pub plot: Vec<Option<f64>>,
    #[serde(default)]
    pub present_index: Option<usize>,
    #[serde(default)]
    pub compare_plot: Option<Vec<Option<f64>>>,
    pub interval: Interval,
    #[serde(default)]
    pub top_stats: Vec<TopStat>,
}

/// One headline figure above the graph ("Unique visitors", "Bounce rate", …).
///
/// Counter stats carry `count`; rate stats carry `percentage` instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopStat {
    pub name: String,
    /// Some API deployments encode counts as strings. Accept both and
    /// normalize to `f64`.
    #[serde(default, deserialize_with = "de_opt_f64_from_string_or_number")]
    pub count: Option<f64>,
    #[serde(default)]
    pub percentage: Option<f64>,
    /// Percent change versus the previous period.
    #[serde(default)]
    pub change: Option<f64>,
}

/// Serde helper: parse `Option<f64>` from a JSON number, a numeric string,
/// or null.
fn de_opt_f64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = Option<f64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "a number, a numeric string, or null")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: serde::Deserializer<'de>,
        {
            struct NumVisitor;

            impl<'de> Visitor<'de> for NumVisitor {
                type Value = f64;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    write!(f, "a number or a numeric string")
                }

                fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                    Ok(v as f64)
                }

                fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                    Ok(v as f64)
                }

                fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                    Ok(v)
                }

                fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
                    s.parse::<f64>().map_err(E::custom)
                }
            }

            deserializer.deserialize_any(NumVisitor).map(Some)
        }
    }

    deserializer.deserialize_option(CountVisitor)
}

/// One row of the countries breakdown; `name` is the ISO-3 country id the
/// mapping collaborator keys on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryCount {
    pub name: String,
    pub count: u64,
}

/// One row of the top-pages breakdown. `bounce_rate` is only present when
/// the query asked for it (and is omitted under goal filters).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageCount {
    pub name: String,
    pub count: u64,
    #[serde(default)]
    pub bounce_rate: Option<f64>,
}

/// Dashboard filter state, serialized into the stats API query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Query {
    pub period: Option<String>,
    pub date: Option<String>,
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
}

impl Query {
    pub fn new(period: Option<String>, date: Option<String>) -> Self {
        Self {
            period,
            date,
            filters: BTreeMap::new(),
        }
    }

    /// Key/value pairs in serialization order: period, date, then filters.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        if let Some(p) = &self.period {
            out.push(("period".to_string(), p.clone()));
        }
        if let Some(d) = &self.date {
            out.push(("date".to_string(), d.clone()));
        }
        for (k, v) in &self.filters {
            out.push((k.clone(), v.clone()));
        }
        out
    }

    /// Narrow the query to the period a clicked graph point represents.
    ///
    /// Month buckets drill into that month, day buckets into that day.
    /// Hour buckets are the finest granularity and do not drill down.
    pub fn drill_down(&self, interval: Interval, label: &str) -> Option<Query> {
        let period = match interval {
            Interval::Month => "month",
            Interval::Date => "day",
            Interval::Hour => return None,
        };
        let mut next = self.clone();
        next.period = Some(period.to_string());
        next.date = Some(label.to_string());
        Some(next)
    }
}
