use std::fs;
use std::path::PathBuf;

use dashstats::models::{GraphData, Interval};
use dashstats::viz::VisitorGraph;

fn sample_graph() -> GraphData {
    GraphData {
        labels: (1..=6).map(|d| format!("2021-03-{:02}", d)).collect(),
        plot: vec![
            Some(120.0),
            Some(80.0),
            None,
            Some(95.0),
            Some(140.0),
            Some(40.0),
        ],
        present_index: Some(5),
        compare_plot: Some(vec![
            Some(60.0),
            Some(70.0),
            Some(50.0),
            Some(65.0),
            Some(90.0),
            Some(30.0),
        ]),
        interval: Interval::Date,
        top_stats: vec![],
    }
}

fn write_and_check<F: Fn(&PathBuf)>(maker: F, name: &str) {
    let tmp = std::env::temp_dir();
    let path: PathBuf = tmp.join(format!("dashstats_viz_{}.svg", name));
    maker(&path);
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "svg has content");
    fs::remove_file(&path).ok();
}

#[test]
fn renders_segmented_graph_to_svg() {
    let graph = sample_graph();
    write_and_check(
        |p| {
            VisitorGraph::from_graph(&graph, 800, 300)
                .unwrap()
                .render(p)
                .unwrap();
        },
        "segmented",
    );
}

#[test]
fn renders_without_present_index() {
    let mut graph = sample_graph();
    graph.present_index = None;
    graph.compare_plot = None;
    write_and_check(
        |p| {
            VisitorGraph::from_graph(&graph, 640, 240)
                .unwrap()
                .render(p)
                .unwrap();
        },
        "plain",
    );
}

#[test]
fn resize_changes_output_dimensions() {
    let graph = sample_graph();
    let mut chart = VisitorGraph::from_graph(&graph, 800, 300).unwrap();
    chart.resize(400, 150);

    let tmp = std::env::temp_dir();
    let path = tmp.join("dashstats_viz_resized.svg");
    chart.render(&path).unwrap();
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("400"), "resized width in svg");
    fs::remove_file(&path).ok();

    chart.dispose();
}

#[test]
fn empty_graph_refuses_to_render() {
    let graph = GraphData {
        labels: vec![],
        plot: vec![],
        present_index: None,
        compare_plot: None,
        interval: Interval::Hour,
        top_stats: vec![],
    };
    let chart = VisitorGraph::from_graph(&graph, 800, 300).unwrap();
    let tmp = std::env::temp_dir();
    let path = tmp.join("dashstats_viz_empty.svg");
    assert!(chart.render(&path).is_err());
    fs::remove_file(&path).ok();
}
