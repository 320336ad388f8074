use std::fs;

use coefplot::config::PlotJob;
use coefplot::dotplot::{CoefPlot, Dataset, GroupedPlotRequest, SimplePlotRequest, offset_grid};
use coefplot::plotting::{Marker, PlotError};

fn estimates() -> Dataset {
    Dataset::new()
        .with_column("b", vec![0.5, -0.3, 0.1])
        .unwrap()
        .with_column("se", vec![0.1, 0.2, 0.05])
        .unwrap()
        .with_column("var", vec!["x", "y", "z"])
        .unwrap()
}

fn models() -> Dataset {
    Dataset::new()
        .with_column("b", vec![0.12, -0.40, 0.30, 0.08, -0.25, 0.41])
        .unwrap()
        .with_column("se", vec![0.05, 0.10, 0.07, 0.04, 0.09, 0.08])
        .unwrap()
        .with_column("var", vec!["age", "edu", "inc", "age", "edu", "inc"])
        .unwrap()
        .with_column("model", vec!["base", "base", "base", "full", "full", "full"])
        .unwrap()
}

fn tick_labels(svg: &str, class: &str) -> Vec<String> {
    let open = format!("<text class=\"{}\"", class);
    svg.match_indices(&open)
        .filter_map(|(start, _)| {
            let rest = &svg[start..];
            let body = &rest[rest.find('>')? + 1..];
            Some(body[..body.find("</text>")?].to_string())
        })
        .collect()
}

#[test]
fn simple_plot_svg_has_ticks_errorbars_and_zero_line() {
    let data = estimates();
    let request = SimplePlotRequest::new("b", "var")
        .err("se")
        .sort_by_coef(true)
        .zero_line(true);
    let mut fig = CoefPlot::new(&data).simple_dotplot(&request).unwrap();
    let svg = fig.render();

    assert!(svg.starts_with("<?xml") || svg.starts_with("<svg"));
    assert!(svg.contains("width=\"1000\"") || svg.contains("width=\"1000.00\""));
    assert_eq!(tick_labels(&svg, "ytick"), vec!["y", "z", "x"]);
    assert_eq!(svg.matches("class=\"errorbar\"").count(), 3);
    assert_eq!(svg.matches("class=\"vline\"").count(), 1);
    assert!(!svg.contains("class=\"legend\""));
}

#[test]
fn simple_plot_without_errors_draws_no_bars() {
    let data = estimates();
    let mut fig = CoefPlot::new(&data)
        .simple_dotplot(&SimplePlotRequest::new("b", "var").sort_by_var(true))
        .unwrap();
    let svg = fig.render();
    assert_eq!(tick_labels(&svg, "ytick"), vec!["z", "y", "x"]);
    assert!(!svg.contains("errorbar"));
    assert!(!svg.contains("class=\"vline\""));
}

#[test]
fn grouped_plot_svg_has_group_ticks_and_reversed_legend() {
    let data = models();
    let request = GroupedPlotRequest::new("b", "var", "model").err("se");
    let mut fig = CoefPlot::new(&data).grouped_dotplot(&request).unwrap();
    let svg = fig.render();

    assert_eq!(tick_labels(&svg, "ytick"), vec!["base", "full"]);
    assert_eq!(svg.matches("class=\"errorbar\"").count(), 6);

    let legend = &svg[svg.find("class=\"legend\"").unwrap()..];
    let (inc, edu, age) = (
        legend.find(">inc<").unwrap(),
        legend.find(">edu<").unwrap(),
        legend.find(">age<").unwrap(),
    );
    assert!(inc < edu && edu < age);
}

#[test]
fn grouped_layout_matches_offset_grid() {
    let data = models();
    let layout = CoefPlot::new(&data)
        .grouped_layout(&GroupedPlotRequest::new("b", "var", "model").sort_by_group(true))
        .unwrap();
    let offsets = offset_grid(3);

    assert_eq!(
        layout.y_ticks,
        vec![(0.0, "full".to_string()), (2.0, "base".to_string())]
    );
    for (ivar, series) in layout.series.iter().enumerate() {
        assert_eq!(series.y, vec![offsets[ivar], 2.0 + offsets[ivar]]);
    }
    let markers: Vec<Marker> = layout
        .series
        .iter()
        .map(|s| s.symbol.as_ref().unwrap().marker)
        .collect();
    assert_eq!(markers, vec![Marker::Square, Marker::Circle, Marker::Cross]);
}

#[test]
fn dataset_is_left_untouched() {
    let data = estimates();
    let before = data.clone();
    CoefPlot::new(&data)
        .simple_layout(&SimplePlotRequest::new("b", "var").sort_by_coef(true))
        .unwrap();
    CoefPlot::new(&data)
        .simple_layout(&SimplePlotRequest::new("b", "var").sort_by_var(true))
        .unwrap();
    assert_eq!(data, before);
}

#[test]
fn text_coefficients_are_rejected() {
    let data = estimates();
    let err = CoefPlot::new(&data)
        .simple_layout(&SimplePlotRequest::new("var", "var"))
        .unwrap_err();
    assert!(matches!(
        err,
        PlotError::ColumnType { ref column, expected: "numeric" } if column == "var"
    ));
    assert!(CoefPlot::new(&data)
        .simple_dotplot(&SimplePlotRequest::new("var", "var"))
        .is_err());
}

#[test]
fn job_file_renders_to_svg() {
    let dir = std::env::temp_dir().join(format!("coefplot-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let job_path = dir.join("job.json");
    let out_path = dir.join("plot.svg");
    fs::write(
        &job_path,
        r#"{
            "data": { "b": [0.5, -0.3, 0.1], "se": [0.1, 0.2, 0.05], "var": ["x", "y", "z"] },
            "plot": { "kind": "simple", "coef": "b", "varname": "var", "err": "se", "zero_line": true },
            "render": { "title": "Estimates & intervals" }
        }"#,
    )
    .unwrap();

    let job = PlotJob::load(job_path.to_str().unwrap()).unwrap();
    let mut fig = job.run().unwrap();
    fig.save(&out_path).unwrap();

    let svg = fs::read_to_string(&out_path).unwrap();
    assert!(svg.contains("Estimates &amp; intervals"));
    assert_eq!(tick_labels(&svg, "ytick"), vec!["x", "y", "z"]);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn malformed_job_file_is_invalid_data() {
    let dir = std::env::temp_dir().join(format!("coefplot-bad-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let job_path = dir.join("job.json");
    fs::write(&job_path, r#"{"data": {}, "plot": {"kind": "simple"}}"#).unwrap();

    let err = PlotJob::load(job_path.to_str().unwrap()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);

    fs::remove_dir_all(&dir).unwrap();
}
