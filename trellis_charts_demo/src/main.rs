// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart demos for `trellis_charts`.
mod html;
mod svg;

use kurbo::{Point, Rect};
use trellis_charts::{
    AxisConfig, BandScale, BarMark, Categorical, ChartBuilder, ChartSpec, ContinuousScale,
    CornerRadii, Glyph, LineMark, Orientation, PointMark, Quantitative, Symbol,
};

#[derive(Clone, Copy, Debug)]
struct Reading {
    hour: f64,
    temperature: f64,
}

fn readings() -> Vec<Reading> {
    [
        (0.0, 11.2),
        (3.0, 9.8),
        (6.0, 10.4),
        (9.0, 14.9),
        (12.0, f64::NAN), // sensor dropout
        (15.0, 19.3),
        (18.0, 17.0),
        (21.0, 13.6),
        (23.0, 12.1),
    ]
    .into_iter()
    .map(|(hour, temperature)| Reading { hour, temperature })
    .collect()
}

#[derive(Clone, Debug)]
struct Tally {
    label: &'static str,
    count: f64,
}

fn tallies() -> Vec<Tally> {
    [("mon", 12.0), ("tue", 31.0), ("wed", 9.0), ("thu", 24.0), ("fri", 18.0)]
        .into_iter()
        .map(|(label, count)| Tally { label, count })
        .collect()
}

fn main() {
    let sections = vec![
        scatter_demo(),
        line_gap_demo(),
        bar_demo(),
        horizontal_bar_demo(),
        layered_demo(),
        log_scale_demo(),
    ];

    let html = html::render_report("Trellis charts demo", &sections);
    std::fs::write("trellis_charts_demo.html", html).expect("write trellis_charts_demo.html");
    println!("wrote trellis_charts_demo.html");
}

/// Renders one chart into an SVG string: axes first, then marks on top.
fn render_chart(spec: &ChartSpec, view: Rect, plot: Rect) -> String {
    let mut scene = svg::SvgScene::default();
    scene.set_view_box(view);
    for axis in spec.axes(plot).values() {
        scene.extend(axis.symbols(plot));
    }
    scene.extend(spec.symbols(plot));
    scene.to_svg_string()
}

fn demo_frame() -> (Rect, Rect) {
    let view = Rect::new(0.0, 0.0, 320.0, 200.0);
    let plot = Rect::new(50.0, 20.0, 300.0, 150.0);
    (view, plot)
}

fn scatter_demo() -> html::HtmlSection {
    let (view, plot) = demo_frame();
    let spec = ChartBuilder::new()
        .add(
            PointMark::new(
                readings(),
                Quantitative::field(|r: &Reading| r.hour),
                // Screen y grows downward, so the value channel maps onto a reversed range.
                Quantitative::field(|r: &Reading| r.temperature),
            )
            .with_glyph(Glyph::Circle)
            .with_size(7.0)
            .with_x_axis(AxisConfig::bottom().with_label("hour"))
            .with_y_axis(AxisConfig::leading().with_label("°C").with_grid(true)),
        )
        .build();

    html::HtmlSection {
        title: "Scatter",
        description: "A point mark over a 24h series; the record with a NaN temperature is dropped rather than drawn at a bogus position.",
        svg: render_chart(&spec, view, plot),
    }
}

fn line_gap_demo() -> html::HtmlSection {
    let (view, plot) = demo_frame();
    let spec = ChartBuilder::new()
        .add(
            LineMark::new(
                readings(),
                Quantitative::field(|r: &Reading| r.hour),
                Quantitative::field(|r: &Reading| r.temperature),
            )
            .with_size(2.0)
            .with_x_axis(AxisConfig::bottom().with_label("hour"))
            .with_y_axis(AxisConfig::leading().with_label("°C")),
        )
        .build();

    html::HtmlSection {
        title: "Line with a gap",
        description: "A line mark over the same series. The NaN record is skipped and the line connects its neighbors directly, so no segment is lost.",
        svg: render_chart(&spec, view, plot),
    }
}

fn bar_demo() -> html::HtmlSection {
    let (view, plot) = demo_frame();
    let spec = ChartBuilder::new()
        .add(
            BarMark::new(
                tallies(),
                Categorical::field(|r: &Tally| r.label.to_string())
                    .with_scale(BandScale::new().with_padding(0.15, 0.05)),
                Quantitative::field(|r: &Tally| r.count),
            )
            .with_corner_radii(CornerRadii::uniform(2.0))
            .with_category_axis(AxisConfig::bottom())
            .with_value_axis(AxisConfig::leading().with_label("count").with_grid(true)),
        )
        .build();

    html::HtmlSection {
        title: "Bars",
        description: "A vertical bar mark: the category channel partitions the width into bands, the value channel grows each bar from the rectangle's near edge.",
        svg: render_chart(&spec, view, plot),
    }
}

fn horizontal_bar_demo() -> html::HtmlSection {
    let (view, plot) = demo_frame();
    let spec = ChartBuilder::new()
        .add(
            BarMark::new(
                tallies(),
                Categorical::field(|r: &Tally| r.label.to_string())
                    .with_scale(BandScale::new().with_padding(0.15, 0.05)),
                Quantitative::field(|r: &Tally| r.count),
            )
            .with_orientation(Orientation::Horizontal)
            .with_category_axis(AxisConfig::leading())
            .with_value_axis(AxisConfig::bottom().with_label("count")),
        )
        .build();

    html::HtmlSection {
        title: "Horizontal bars",
        description: "The same tallies with the orientation flipped; category and value axes swap edges accordingly.",
        svg: render_chart(&spec, view, plot),
    }
}

fn layered_demo() -> html::HtmlSection {
    let (view, plot) = demo_frame();
    let line = ChartBuilder::new()
        .add(
            LineMark::new(
                readings(),
                Quantitative::field(|r: &Reading| r.hour),
                Quantitative::field(|r: &Reading| r.temperature),
            )
            .with_x_axis(AxisConfig::bottom()),
        )
        .build();
    let points = ChartBuilder::new()
        .add(
            PointMark::new(
                readings(),
                Quantitative::field(|r: &Reading| r.hour),
                Quantitative::field(|r: &Reading| r.temperature),
            )
            .with_glyph(Glyph::Square)
            .with_size(5.0)
            .with_x_axis(AxisConfig::bottom().with_label("hour"))
            .with_y_axis(AxisConfig::leading().with_label("°C")),
        )
        .build();

    // One axis per edge: the point layer's bottom axis replaces the line layer's.
    let spec = line.merging(points);

    let mut svg_scene = svg::SvgScene::default();
    svg_scene.set_view_box(view);
    for axis in spec.axes(plot).values() {
        svg_scene.extend(axis.symbols(plot));
    }
    svg_scene.extend(spec.symbols(plot));
    svg_scene.extend([Symbol::Image {
        position: Point::new(plot.x1 - 16.0, plot.y0),
        width: 16.0,
        height: 16.0,
        source: "trellis.png".to_string(),
    }]);

    html::HtmlSection {
        title: "Layered line + points",
        description: "Two charts merged into one: the line layer draws first, the point layer on top. Both request a bottom axis and the later layer's wins.",
        svg: svg_scene.to_svg_string(),
    }
}

fn log_scale_demo() -> html::HtmlSection {
    #[derive(Clone, Copy, Debug)]
    struct Sample {
        t: f64,
        value: f64,
    }

    let samples: Vec<Sample> = [
        (0.0, 1.0),
        (1.0, 3.0),
        (2.0, 10.0),
        (3.0, 32.0),
        (4.0, 100.0),
        (5.0, 310.0),
        (6.0, 1000.0),
    ]
    .into_iter()
    .map(|(t, value)| Sample { t, value })
    .collect();

    let (view, plot) = demo_frame();
    let spec = ChartBuilder::new()
        .add(
            LineMark::new(
                samples,
                Quantitative::field(|s: &Sample| s.t),
                Quantitative::field(|s: &Sample| s.value)
                    .with_scale(ContinuousScale::log(10.0).with_domain((1.0, 1000.0))),
            )
            .with_x_axis(AxisConfig::bottom().with_label("t"))
            .with_y_axis(AxisConfig::leading().with_label("log10(value)").with_grid(true)),
        )
        .build();

    html::HtmlSection {
        title: "Log scale",
        description: "A quantitative channel with an explicit base-10 log scale; axis ticks land on powers of ten.",
        svg: render_chart(&spec, view, plot),
    }
}
