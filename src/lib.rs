//! dashstats
//!
//! The data core of a web-analytics dashboard: fetches pre-aggregated stats
//! from a backend API, reshapes them into the structures charting and
//! mapping libraries consume, and renders the visitor graph. Pairs with the
//! `dashstats` CLI.
//!
//! ### Features
//! - Fetch the main graph, country breakdown, and top pages for a site
//! - Split a plot into solid (confirmed) and dashed (still accumulating)
//!   datasets at the present index
//! - Format bucket labels per interval and counts in compact form
//! - Shade countries for a choropleth map
//! - Render the graph to SVG/PNG and export it as CSV/JSON
//!
//! ### Example
//! ```no_run
//! use dashstats::{Client, Query, VisitorGraph};
//!
//! let client = Client::default();
//! let graph = client.main_graph("example.com", &Query::default())?;
//! let datasets = dashstats::segment::datasets(&graph)?;
//! VisitorGraph::from_graph(&graph, 1054, 342)?.render("visitors.svg")?;
//! dashstats::storage::save_csv(&graph, "visitors.csv")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod error;
pub mod format;
pub mod map;
pub mod models;
pub mod segment;
pub mod state;
pub mod storage;
pub mod style;
pub mod viz;

pub use api::Client;
pub use error::{FormatError, SegmentError};
pub use models::{GraphData, Interval, Query};
pub use segment::{Dataset, datasets};
pub use state::{FetchEvent, FetchState, reduce};
pub use style::SeriesStyle;
pub use viz::VisitorGraph;
