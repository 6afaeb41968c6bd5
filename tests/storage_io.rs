use dashstats::models::{GraphData, Interval};
use dashstats::storage::{save_csv, save_json};
use tempfile::tempdir;

fn sample_graph() -> GraphData {
    GraphData {
        labels: vec![
            "2021-03-01".into(),
            "2021-03-02".into(),
            "2021-03-03".into(),
        ],
        plot: vec![Some(120.0), None, Some(95.0)],
        present_index: Some(2),
        compare_plot: Some(vec![Some(60.0), Some(70.0), None]),
        interval: Interval::Date,
        top_stats: vec![],
    }
}

#[test]
fn csv_includes_compare_column_and_blank_gaps() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("visitors.csv");
    save_csv(&sample_graph(), &path).unwrap();

    let csv = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "date,visitors,conversions");
    assert_eq!(lines[1], "2021-03-01,120,60");
    // Absent values export as empty cells, not zeros.
    assert_eq!(lines[2], "2021-03-02,,70");
    assert_eq!(lines[3], "2021-03-03,95,");
}

#[test]
fn json_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("visitors.json");
    let graph = sample_graph();
    save_json(&graph, &path).unwrap();

    let loaded: GraphData =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, graph);
}
