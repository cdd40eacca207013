use chartdef::{
    ChartConfigBuilder, ChartError, DisplayOptions, Layout, Margins, Mode, SeriesOptions, XValue,
};

fn numbers(n: usize, offset: f64) -> Vec<f64> {
    (0..n).map(|i| offset + i as f64).collect()
}

#[test]
fn any_valid_series_survives_build_unmodified() {
    for n in 1..=6 {
        for mode in ["markers", "bar", "line"] {
            let xs = numbers(n, 10.0);
            let ys = numbers(n, -2.5);
            let mut b = ChartConfigBuilder::new();
            b.add_series(xs.clone(), ys.clone(), mode, SeriesOptions::new())
                .unwrap();
            let chart = b.build().unwrap();

            assert_eq!(chart.series().len(), 1);
            let s = &chart.series()[0];
            let expected_x: Vec<XValue> = xs.into_iter().map(XValue::from).collect();
            assert_eq!(s.x(), expected_x.as_slice());
            assert_eq!(s.y(), ys.as_slice());
            assert_eq!(s.mode(), mode.parse::<Mode>().unwrap());
        }
    }
}

#[test]
fn any_sizes_length_mismatch_is_rejected() {
    for n in 1..=5 {
        for k in 0..=6 {
            if k == n {
                continue;
            }
            let mut b = ChartConfigBuilder::new();
            let err = b
                .add_series(
                    numbers(n, 0.0),
                    numbers(n, 1.0),
                    "markers",
                    SeriesOptions::new().sizes(numbers(k, 1.0)),
                )
                .unwrap_err();
            assert!(
                matches!(err, ChartError::LengthMismatch { field: "sizes", expected, found } if expected == n && found == k),
                "n={n} k={k}: {err}"
            );
        }
    }
}

#[test]
fn y_length_mismatch_is_rejected() {
    let mut b = ChartConfigBuilder::new();
    let err = b
        .add_series([1, 2, 3], [1, 2], "line", SeriesOptions::new())
        .unwrap_err();
    assert!(matches!(err, ChartError::LengthMismatch { field: "y", .. }));
    assert!(err.is_validation());
}

#[test]
fn text_length_mismatch_is_rejected() {
    let mut b = ChartConfigBuilder::new();
    let err = b
        .add_series(
            ["a", "b", "c"],
            [1, 2, 3],
            "line",
            SeriesOptions::new().text([Some("first".to_string()), None]),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ChartError::LengthMismatch {
            field: "text",
            expected: 3,
            found: 2
        }
    ));
    assert_eq!(b.series_count(), 0);
}

#[test]
fn widths_length_mismatch_is_rejected() {
    let mut b = ChartConfigBuilder::new();
    let err = b
        .add_series(
            ["a", "b"],
            [20, 14],
            "bar",
            SeriesOptions::new().widths([0.6, 0.6, 0.6]),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ChartError::LengthMismatch {
            field: "widths",
            expected: 2,
            found: 3
        }
    ));
    assert_eq!(b.series_count(), 0);
}

#[test]
fn mixed_labels_and_numbers_are_accepted() {
    let mut b = ChartConfigBuilder::new();
    b.add_series(
        vec![XValue::from("Q1"), XValue::from(2), XValue::from(3.5)],
        [1, 2, 3],
        "bar",
        SeriesOptions::new().name("mixed"),
    )
    .unwrap();
    let chart = b.build().unwrap();
    assert_eq!(chart.series()[0].name(), Some("mixed"));
    assert_eq!(chart.point_count(), 3);
}

#[test]
fn failed_build_can_be_retried() {
    let mut b = ChartConfigBuilder::new();
    assert!(matches!(b.build(), Err(ChartError::NoSeries)));
    b.add_series([1], [1], "line", SeriesOptions::new()).unwrap();
    let first = b.build().unwrap();
    let second = b.build().unwrap();
    assert_eq!(first, second);
}

#[test]
fn built_definition_is_independent_of_later_builder_changes() {
    let mut b = ChartConfigBuilder::new();
    b.add_series([1], [1], "line", SeriesOptions::new()).unwrap();
    let chart = b.build().unwrap();
    b.add_series([2], [2], "line", SeriesOptions::new()).unwrap();
    b.set_layout(Some("later"), None, None).unwrap();
    assert_eq!(chart.series().len(), 1);
    assert_eq!(chart.layout(), &Layout::default());
}

#[test]
fn defaults_match_documented_values() {
    let layout = Layout::default();
    assert!(layout.title.is_none());
    assert!(layout.show_legend);
    assert_eq!(layout.margins, Margins::default());
    let display = DisplayOptions::default();
    assert!(!display.responsive);
    assert!(display.show_mode_bar);
}

#[test]
fn per_point_widths_win_over_uniform_width() {
    let mut b = ChartConfigBuilder::new();
    b.add_series(
        ["a", "b"],
        [1, 2],
        "bar",
        SeriesOptions::new().width(0.9).widths([0.3, 0.4]),
    )
    .unwrap();
    let chart = b.build().unwrap();
    let s = &chart.series()[0];
    assert_eq!(s.width_at(0), Some(0.3));
    assert_eq!(s.width_at(1), Some(0.4));
}
