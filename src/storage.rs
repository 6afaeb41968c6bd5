use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use csv::WriterBuilder;

use crate::models::GraphData;

/// Save the graph as CSV with header (the dashboard's visitors.csv export).
/// One row per bucket; absent values become empty cells.
pub fn save_csv<P: AsRef<Path>>(graph: &GraphData, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;

    let mut header = vec!["date".to_string(), "visitors".to_string()];
    if graph.compare_plot.is_some() {
        header.push("conversions".to_string());
    }
    wtr.write_record(&header)?;

    let fmt = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_default();
    for (i, label) in graph.labels.iter().enumerate() {
        let mut row = vec![label.clone(), fmt(graph.plot.get(i).copied().flatten())];
        if let Some(compare) = &graph.compare_plot {
            row.push(fmt(compare.get(i).copied().flatten()));
        }
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save the graph as pretty JSON.
pub fn save_json<P: AsRef<Path>>(graph: &GraphData, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(graph)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
