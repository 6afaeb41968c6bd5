//! Visitor-graph rendering.
//!
//! [`VisitorGraph`] is an explicit handle over one chart: create it from the
//! dataset list, `resize` it, `render` it to SVG or PNG, `dispose` it when
//! the widget unmounts. Nothing is registered globally.
//!
//! Absent values split a dataset into separate runs so no line is drawn
//! across a gap; dashed datasets use the 5/10 dash pattern.

use std::path::Path;

use anyhow::{Result, anyhow};
use num_format::{Locale, ToFormattedString};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::format;
use crate::models::{GraphData, Interval};
use crate::segment::{self, Dataset};
use crate::style::LineDash;

/// Handle over one rendered chart.
#[derive(Debug, Clone)]
pub struct VisitorGraph {
    labels: Vec<String>,
    datasets: Vec<Dataset>,
    interval: Interval,
    width: u32,
    height: u32,
}

impl VisitorGraph {
    pub fn new(
        labels: Vec<String>,
        datasets: Vec<Dataset>,
        interval: Interval,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            labels,
            datasets,
            interval,
            width,
            height,
        }
    }

    /// Build the handle straight from a main-graph response, segmenting the
    /// plots on the way.
    pub fn from_graph(graph: &GraphData, width: u32, height: u32) -> Result<Self> {
        let datasets = segment::datasets(graph)?;
        Ok(Self::new(
            graph.labels.clone(),
            datasets,
            graph.interval,
            width,
            height,
        ))
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Draw to `out_path`; `.svg` selects the SVG backend, anything else the
    /// bitmap backend.
    pub fn render<P: AsRef<Path>>(&self, out_path: P) -> Result<()> {
        let out_path = out_path.as_ref();
        let path_string = out_path.to_string_lossy().into_owned();
        let size = (self.width, self.height);

        if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
            let root = SVGBackend::new(path_string.as_str(), size).into_drawing_area();
            self.draw(root)
        } else {
            let root = BitMapBackend::new(path_string.as_str(), size).into_drawing_area();
            self.draw(root)
        }
    }

    /// Release the handle. Consumes self so a disposed chart cannot be
    /// rendered again.
    pub fn dispose(self) {}

    fn draw<DB>(&self, root: DrawingArea<DB, Shift>) -> Result<()>
    where
        DB: DrawingBackend,
    {
        if self.labels.is_empty() {
            return Err(anyhow!("no data to plot"));
        }
        root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

        let n = self.labels.len();
        let x_max = (n - 1).max(1);
        let mut y_max = self
            .datasets
            .iter()
            .flat_map(|d| d.data.iter().flatten())
            .fold(0.0f64, |acc, v| acc.max(*v));
        if y_max <= 0.0 {
            y_max = 1.0;
        }

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .build_cartesian_2d(0..x_max, 0.0..y_max)
            .map_err(|e| anyhow!("{:?}", e))?;

        // Y uses thousands separators; X renders the date label for the
        // bucket, falling back to the raw label if it does not parse.
        let y_label_fmt = |v: &f64| {
            let rounded = v.round() as i64;
            rounded.to_formatted_string(&Locale::en)
        };
        let interval = self.interval;
        let labels = &self.labels;
        let x_label_fmt = move |i: &usize| {
            labels
                .get(*i)
                .map(|l| format::date_label(interval, l).unwrap_or_else(|_| l.clone()))
                .unwrap_or_default()
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n.min(8))
            .y_labels(8)
            .x_label_formatter(&x_label_fmt)
            .y_label_formatter(&y_label_fmt)
            .label_style(("sans-serif", 14))
            .draw()
            .map_err(|e| anyhow!("{:?}", e))?;

        for ds in &self.datasets {
            let color = RGBColor(ds.color.r, ds.color.g, ds.color.b).to_rgba();
            let stroke = ShapeStyle {
                color: color.clone(),
                filled: false,
                stroke_width: ds.stroke_width,
            };
            for run in contiguous_runs(&ds.data) {
                match ds.dash {
                    LineDash::Solid => {
                        chart
                            .draw_series(
                                AreaSeries::new(run, 0.0, color.mix(ds.fill_opacity))
                                    .border_style(stroke.clone()),
                            )
                            .map_err(|e| anyhow!("{:?}", e))?;
                    }
                    LineDash::Dashed => {
                        chart
                            .draw_series(DashedLineSeries::new(run, 5, 10, stroke.clone()))
                            .map_err(|e| anyhow!("{:?}", e))?;
                    }
                }
            }
        }

        root.present().map_err(|e| anyhow!("{:?}", e))?;
        Ok(())
    }
}

/// Split a gappy series into runs of consecutive defined points.
fn contiguous_runs(data: &[Option<f64>]) -> Vec<Vec<(usize, f64)>> {
    let mut out = Vec::new();
    let mut run = Vec::new();
    for (i, v) in data.iter().enumerate() {
        match v {
            Some(x) => run.push((i, *x)),
            None => {
                if !run.is_empty() {
                    out.push(std::mem::take(&mut run));
                }
            }
        }
    }
    if !run.is_empty() {
        out.push(run);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_split_on_gaps() {
        let data = vec![Some(1.0), Some(2.0), None, Some(4.0), None];
        let runs = contiguous_runs(&data);
        assert_eq!(runs, vec![vec![(0, 1.0), (1, 2.0)], vec![(3, 4.0)]]);
        assert!(contiguous_runs(&[]).is_empty());
    }
}
