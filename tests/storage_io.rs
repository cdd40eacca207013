use chartdef::{ChartDefinition, ChartError, Mode, demo, storage};
use std::fs;
use tempfile::tempdir;

#[test]
fn save_and_load_definitions() {
    let dir = tempdir().unwrap();
    for (name, chart) in [
        ("bubble", demo::bubble_chart().unwrap()),
        ("bar", demo::bar_chart().unwrap()),
    ] {
        let p = dir.path().join(format!("{name}.json"));
        storage::save_json(&chart, &p).unwrap();
        let txt = fs::read_to_string(&p).unwrap();
        assert!(txt.contains("\"series\""));
        assert_eq!(storage::load_json(&p).unwrap(), chart);
    }
}

#[test]
fn hand_written_json_is_validated() {
    let ok = r#"{"series": [{"x": ["Jan", "Feb"], "y": [20, 14], "mode": "bars"}]}"#;
    let chart = ChartDefinition::from_json(ok).unwrap();
    assert_eq!(chart.series()[0].mode(), Mode::Bar);
    assert!(chart.layout().show_legend);

    let short = r#"{"series": [{"x": ["Jan", "Feb"], "y": [20, 14], "mode": "bar", "colors": ["red"]}]}"#;
    assert!(matches!(
        ChartDefinition::from_json(short),
        Err(ChartError::LengthMismatch { field: "colors", .. })
    ));

    let none = r#"{"series": []}"#;
    assert!(matches!(
        ChartDefinition::from_json(none),
        Err(ChartError::NoSeries)
    ));

    let bad_mode = r#"{"series": [{"x": [1], "y": [1], "mode": "pie"}]}"#;
    assert!(matches!(
        ChartDefinition::from_json(bad_mode),
        Err(ChartError::InvalidMode(_))
    ));

    let bad_margin = r#"{"series": [{"x": [1], "y": [1], "mode": "line"}], "layout": {"margins": {"top": -5}}}"#;
    assert!(matches!(
        ChartDefinition::from_json(bad_margin),
        Err(ChartError::InvalidValue(_))
    ));
}

#[test]
fn plotly_json_file_is_written() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("plotly.json");
    storage::save_plotly_json(&demo::bar_chart().unwrap(), &p).unwrap();
    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&p).unwrap()).unwrap();
    assert_eq!(v["layout"]["title"], "Sample chart");
    assert_eq!(v["data"].as_array().unwrap().len(), 1);
}

#[test]
fn csv_file_becomes_series() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("months.csv");
    fs::write(&p, "x,y,color\nJanuary,20,gray2\nFebruary,14,red1\n").unwrap();
    let s = storage::load_series_csv(&p, Mode::Bar, Some("Months")).unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!(s.colors().unwrap(), &["gray2".to_string(), "red1".to_string()]);
    assert!(storage::load_series_csv(dir.path().join("missing.csv"), Mode::Bar, None).is_err());
}
