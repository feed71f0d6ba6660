// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use std::string::ToString;
use std::vec::Vec;

use kurbo::Rect;

use crate::{
    AxisConfig, AxisLocation, BarMark, Categorical, ChartBuilder, ChartSpec, ContinuousScale,
    LineMark, Mark, Orientation, PointMark, Quantitative, Symbol,
};

#[derive(Clone, Copy)]
struct Reading {
    hour: f64,
    value: f64,
}

fn readings() -> Vec<Reading> {
    std::vec![
        Reading {
            hour: 0.0,
            value: 1.0,
        },
        Reading {
            hour: 8.0,
            value: f64::NAN,
        },
        Reading {
            hour: 16.0,
            value: 3.0,
        },
        Reading {
            hour: 23.0,
            value: 4.0,
        },
    ]
}

struct Tally {
    label: &'static str,
    count: f64,
}

fn tallies() -> Vec<Tally> {
    std::vec![
        Tally {
            label: "a",
            count: 3.0,
        },
        Tally {
            label: "b",
            count: 5.0,
        },
        Tally {
            label: "c",
            count: 2.0,
        },
        Tally {
            label: "d",
            count: 7.0,
        },
    ]
}

#[test]
fn nice_domain_ticks_position_against_the_authored_domain() {
    let scale = ContinuousScale::new().with_domain((0.0, 23.0)).with_nice(true);
    let ticks = scale.ticks(0.0, 50.0);
    let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, std::vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0]);
    // Value 20 interpolates over the authored [0, 23] domain into the 50-wide range.
    assert!((ticks[4].range_location - 1000.0 / 23.0).abs() < 1e-3);
    assert_eq!(ticks[4].label, "20");
}

#[test]
fn ticks_without_nice_stay_inside_the_domain() {
    let scale = ContinuousScale::new().with_domain((0.0, 23.0));
    let ticks = scale.ticks(0.0, 50.0);
    for tick in &ticks {
        assert!(tick.value >= 0.0 && tick.value <= 23.0, "tick out of domain");
    }
    assert_eq!(ticks.last().unwrap().value, 20.0);
}

#[test]
fn ticks_from_values_drops_out_of_domain_values() {
    let scale = ContinuousScale::new().with_domain((0.0, 10.0));
    let ticks = scale.ticks_from_values(&[-5.0, 0.0, 7.5, 10.0, 12.0], 0.0, 100.0);
    let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, std::vec![0.0, 7.5, 10.0]);
    assert_eq!(ticks[1].range_location, 75.0);
}

#[test]
fn range_rebinding_is_idempotent_per_call() {
    let mut scale = ContinuousScale::new().with_domain((2.0, 8.0));
    for bounds in [(0.0, 10.0), (5.0, 500.0), (-1.0, 1.0)] {
        scale = scale.range(bounds.0, bounds.1);
    }
    let scale = scale.range(30.0, 70.0);
    assert_eq!(scale.scale(2.0), Some(30.0));
    assert_eq!(scale.scale(8.0), Some(70.0));
}

#[test]
fn band_ticks_sit_at_band_centers() {
    let scale = crate::BandScale::new().with_domain(["A", "B"]).range(0.0, 50.0);
    let ticks = scale.ticks(0.0, 50.0);
    assert_eq!(ticks.len(), 2);
    assert_eq!(ticks[0].range_location, 12.5);
    assert_eq!(ticks[1].range_location, 37.5);
    assert_eq!(ticks[0].label, "A");
}

#[test]
fn line_mark_skips_gaps_and_connects_across_them() {
    let mark = LineMark::new(
        readings(),
        Quantitative::field(|r: &Reading| r.hour),
        Quantitative::field(|r: &Reading| r.value),
    );
    let symbols = mark.symbols(Rect::new(0.0, 0.0, 100.0, 100.0));

    let points: Vec<kurbo::Point> = symbols
        .iter()
        .filter_map(|s| match s {
            Symbol::Point { center, .. } => Some(*center),
            _ => None,
        })
        .collect();
    let lines: Vec<(kurbo::Point, kurbo::Point)> = symbols
        .iter()
        .filter_map(|s| match s {
            Symbol::Line { start, end, .. } => Some((*start, *end)),
            _ => None,
        })
        .collect();

    // Record #2 resolves to NaN: three points remain and the line crosses the gap.
    assert_eq!(points.len(), 3);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].0, points[0]);
    assert_eq!(lines[0].1, points[1]);
    assert_eq!(lines[1].0, points[1]);
    assert_eq!(lines[1].1, points[2]);
}

#[test]
fn all_nan_channel_degrades_to_an_empty_mark() {
    // Every record resolves, but only to NaN: no domain can be inferred, so the mark must
    // yield zero symbols and tickless axes rather than aborting.
    let mark = PointMark::new(
        readings(),
        Quantitative::field(|r: &Reading| r.hour),
        Quantitative::field(|_: &Reading| f64::NAN),
    )
    .with_y_axis(AxisConfig::leading());
    let plot = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(mark.symbols(plot).is_empty());
    let axes = mark.axes(plot);
    assert_eq!(axes.len(), 1);
    assert!(axes[0].ticks.is_empty());
}

#[test]
fn empty_dataset_yields_no_symbols() {
    let mark = LineMark::new(
        Vec::new(),
        Quantitative::field(|r: &Reading| r.hour),
        Quantitative::field(|r: &Reading| r.value),
    );
    assert!(mark.symbols(Rect::new(0.0, 0.0, 50.0, 50.0)).is_empty());
}

#[test]
fn point_mark_drops_unresolvable_records() {
    let mark = PointMark::new(
        readings(),
        Quantitative::field(|r: &Reading| r.hour),
        Quantitative::field(|r: &Reading| r.value),
    );
    let symbols = mark.symbols(Rect::new(0.0, 0.0, 10.0, 10.0));
    assert_eq!(symbols.len(), 3);
}

#[test]
fn vertical_bars_partition_the_rect_width() {
    let mark = BarMark::new(
        tallies(),
        Categorical::field(|r: &Tally| r.label.to_string()),
        Quantitative::field(|r: &Tally| r.count),
    );
    let symbols = mark.symbols(Rect::new(0.0, 0.0, 100.0, 50.0));
    assert_eq!(symbols.len(), 4);

    let rects: Vec<Rect> = symbols
        .iter()
        .filter_map(|s| match s {
            Symbol::Rect { rect, .. } => Some(*rect),
            _ => None,
        })
        .collect();
    let mut total_width = 0.0;
    for pair in rects.windows(2) {
        assert!(pair[0].x0 < pair[1].x0, "bar positions must be monotonic");
    }
    for rect in &rects {
        total_width += rect.width();
    }
    assert!((total_width - 100.0).abs() < 1e-9);

    // Bands follow category insertion order.
    match &symbols[0] {
        Symbol::Rect { category, .. } => assert_eq!(category, "a"),
        other => panic!("expected a rect, got {other:?}"),
    }
}

#[test]
fn horizontal_bars_swap_the_axes_symmetrically() {
    let mark = BarMark::new(
        tallies(),
        Categorical::field(|r: &Tally| r.label.to_string()),
        Quantitative::field(|r: &Tally| r.count),
    )
    .with_orientation(Orientation::Horizontal);
    let symbols = mark.symbols(Rect::new(0.0, 0.0, 50.0, 100.0));

    let rects: Vec<Rect> = symbols
        .iter()
        .filter_map(|s| match s {
            Symbol::Rect { rect, .. } => Some(*rect),
            _ => None,
        })
        .collect();
    assert_eq!(rects.len(), 4);
    for rect in &rects {
        assert_eq!(rect.height(), 25.0);
        assert_eq!(rect.x0, 0.0);
    }
}

#[test]
#[should_panic(expected = "depth orientation is not implemented")]
fn depth_orientation_fails_fast() {
    let mark = BarMark::new(
        tallies(),
        Categorical::field(|r: &Tally| r.label.to_string()),
        Quantitative::field(|r: &Tally| r.count),
    )
    .with_orientation(Orientation::Depth);
    let _ = mark.symbols(Rect::new(0.0, 0.0, 10.0, 10.0));
}

#[test]
#[should_panic(expected = "top or bottom edge")]
fn x_axis_rejects_vertical_edges() {
    let _ = PointMark::new(
        readings(),
        Quantitative::field(|r: &Reading| r.hour),
        Quantitative::field(|r: &Reading| r.value),
    )
    .with_x_axis(AxisConfig::leading());
}

#[test]
fn chart_axes_merge_with_last_write_wins_per_edge() {
    let plot = Rect::new(0.0, 0.0, 100.0, 100.0);
    let first = PointMark::new(
        readings(),
        Quantitative::field(|r: &Reading| r.hour),
        Quantitative::field(|r: &Reading| r.value),
    )
    .with_x_axis(AxisConfig::bottom().with_label("first"));
    let second = LineMark::new(
        readings(),
        Quantitative::field(|r: &Reading| r.hour),
        Quantitative::field(|r: &Reading| r.value),
    )
    .with_x_axis(AxisConfig::bottom().with_label("second"))
    .with_y_axis(AxisConfig::leading());

    let spec = ChartBuilder::new().add(first).add(second).build();
    let axes = spec.axes(plot);
    assert_eq!(axes.len(), 2);
    assert_eq!(
        axes[&AxisLocation::Bottom].label.as_deref(),
        Some("second")
    );
    assert!(axes.contains_key(&AxisLocation::Leading));
}

#[test]
fn merging_concatenates_marks_in_order() {
    let a = ChartBuilder::new()
        .add(PointMark::new(
            readings(),
            Quantitative::field(|r: &Reading| r.hour),
            Quantitative::field(|r: &Reading| r.value),
        ))
        .build();
    let b = ChartBuilder::new()
        .add(BarMark::new(
            tallies(),
            Categorical::field(|r: &Tally| r.label.to_string()),
            Quantitative::field(|r: &Tally| r.count),
        ))
        .build();

    let merged = a.merging(b);
    assert_eq!(merged.marks.len(), 2);
    let symbols = merged.symbols(Rect::new(0.0, 0.0, 100.0, 50.0));
    let points = symbols
        .iter()
        .filter(|s| matches!(s, Symbol::Point { .. }))
        .count();
    let rects = symbols
        .iter()
        .filter(|s| matches!(s, Symbol::Rect { .. }))
        .count();
    assert_eq!(points, 3);
    assert_eq!(rects, 4);
}

#[test]
fn bar_axes_resolve_categories_and_values() {
    let mark = BarMark::new(
        tallies(),
        Categorical::field(|r: &Tally| r.label.to_string()),
        Quantitative::field(|r: &Tally| r.count),
    )
    .with_category_axis(AxisConfig::bottom())
    .with_value_axis(AxisConfig::leading());
    let axes = mark.axes(Rect::new(0.0, 0.0, 100.0, 50.0));
    assert_eq!(axes.len(), 2);
    assert_eq!(axes[0].ticks.len(), 4);
    assert_eq!(axes[0].ticks[0].label, "a");
    assert!(!axes[1].ticks.is_empty());
}

#[test]
fn symbol_generation_is_idempotent_across_layout_passes() {
    let spec: ChartSpec = ChartBuilder::new()
        .add(LineMark::new(
            readings(),
            Quantitative::field(|r: &Reading| r.hour),
            Quantitative::field(|r: &Reading| r.value),
        ))
        .build();
    let small = Rect::new(0.0, 0.0, 10.0, 10.0);
    let large = Rect::new(0.0, 0.0, 500.0, 300.0);
    let first = spec.symbols(small);
    let _resized = spec.symbols(large);
    let again = spec.symbols(small);
    assert_eq!(first, again);
}
