//! Plot segmentation: splitting a time series into the solid (confirmed)
//! and dashed (still accumulating) datasets the charting layer draws.
//!
//! Both output datasets keep the full series length, with `None` marking
//! positions outside their range so the chart renders a gap rather than a
//! zero. The two datasets share the value at `present_index - 1` so the
//! solid and dashed lines connect without a visual break.
//!
//! Boundary rule: the dashed portion starts at
//! `present_index.saturating_sub(1)`. A present index of 0 therefore yields
//! an all-`None` solid dataset and a dashed dataset covering the whole
//! series; a present index of N yields the whole series solid and a dashed
//! dataset holding only the final point.

use serde::Serialize;

use crate::error::SegmentError;
use crate::models::GraphData;
use crate::style::{LineDash, Rgb8, SeriesStyle};

/// One renderable dataset: an index-aligned series plus its styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub color: Rgb8,
    pub fill_opacity: f64,
    pub stroke_width: u32,
    pub dash: LineDash,
}

impl Dataset {
    fn styled(style: &SeriesStyle, dash: LineDash, data: Vec<Option<f64>>) -> Self {
        Self {
            label: style.label.clone(),
            data,
            color: style.color,
            fill_opacity: style.fill_opacity,
            stroke_width: style.stroke_width,
            dash,
        }
    }

    /// Number of non-absent positions.
    pub fn defined(&self) -> usize {
        self.data.iter().flatten().count()
    }
}

/// Split one series at the present index.
///
/// Without a present index the series is returned unchanged as a single
/// solid dataset. With one, the result is `[solid, dashed]` under the same
/// label/style, both of full length, overlapping only at the seam.
///
/// ### Errors
/// `present_index > series.len()` is rejected with
/// [`SegmentError::PresentIndexOutOfRange`].
pub fn segment(
    series: &[Option<f64>],
    present_index: Option<usize>,
    style: &SeriesStyle,
) -> Result<Vec<Dataset>, SegmentError> {
    let n = series.len();
    let Some(index) = present_index else {
        return Ok(vec![Dataset::styled(style, LineDash::Solid, series.to_vec())]);
    };
    if index > n {
        return Err(SegmentError::PresentIndexOutOfRange { index, len: n });
    }

    let mut solid = series.to_vec();
    for v in solid.iter_mut().skip(index) {
        *v = None;
    }

    // Start one position early so the dashed line picks up where the solid
    // line ends; clamped to 0 when nothing is confirmed yet.
    let seam = index.saturating_sub(1);
    let mut dashed = vec![None; n];
    dashed[seam..].copy_from_slice(&series[seam..]);

    Ok(vec![
        Dataset::styled(style, LineDash::Solid, solid),
        Dataset::styled(style, LineDash::Dashed, dashed),
    ])
}

/// Build the full dataset list for a main-graph response.
///
/// The primary plot is segmented with the Visitors style; a comparison plot,
/// when present, is segmented independently with the same present index and
/// the Conversions style and appended, so the order is always
/// `[primary-solid, primary-dashed, compare-solid, compare-dashed]`.
pub fn datasets(graph: &GraphData) -> Result<Vec<Dataset>, SegmentError> {
    let mut out = segment(&graph.plot, graph.present_index, &SeriesStyle::visitors())?;
    if let Some(compare) = &graph.compare_plot {
        out.extend(segment(
            compare,
            graph.present_index,
            &SeriesStyle::conversions(),
        )?);
    }
    Ok(out)
}
