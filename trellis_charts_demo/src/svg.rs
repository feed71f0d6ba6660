// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `trellis_charts_demo`.
//!
//! This is the "external renderer" side of the symbol contract: it owns the view box and
//! paints symbols, treating them as opaque immutable data.

use kurbo::Rect;
use peniko::Brush;
use trellis_charts::{Symbol, TextAnchor};

#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    symbols: Vec<Symbol>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    pub(crate) fn extend(&mut self, symbols: impl IntoIterator<Item = Symbol>) {
        self.symbols.extend(symbols);
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self.view_box.unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        for symbol in &self.symbols {
            self.push_symbol(&mut out, symbol);
        }

        out.push_str("</svg>\n");
        out
    }

    fn push_symbol(&self, out: &mut String, symbol: &Symbol) {
        match symbol {
            Symbol::Point {
                center,
                glyph,
                size,
            } => {
                let path = glyph.path(center.x, center.y, *size).to_svg();
                out.push_str(&format!(r##"<path d="{path}" fill="#4682b4"/>"##));
                out.push('\n');
            }
            Symbol::Line {
                start, end, size, ..
            } => {
                out.push_str(&format!(
                    r##"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#4682b4" stroke-width="{}"/>"##,
                    start.x, start.y, end.x, end.y, size
                ));
                out.push('\n');
            }
            Symbol::Rect {
                rect,
                category,
                corner_radii,
            } => {
                out.push_str(&format!(
                    r##"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="#6b8e23"><title>{}</title></rect>"##,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                    corner_radii.top_left,
                    escape(category),
                ));
                out.push('\n');
            }
            Symbol::Rule {
                start, end, style, ..
            } => {
                out.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
                    start.x,
                    start.y,
                    end.x,
                    end.y,
                    brush_hex(&style.brush),
                    brush_opacity(&style.brush),
                    style.stroke_width
                ));
                out.push('\n');
            }
            Symbol::Text {
                position,
                text,
                anchor,
                size,
            } => {
                let anchor = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                out.push_str(&format!(
                    r#"<text x="{}" y="{}" text-anchor="{anchor}" font-size="{size}" dominant-baseline="middle">{}</text>"#,
                    position.x,
                    position.y,
                    escape(text)
                ));
                out.push('\n');
            }
            Symbol::Image {
                position,
                width,
                height,
                source,
            } => {
                out.push_str(&format!(
                    r#"<image x="{}" y="{}" width="{width}" height="{height}" href="{}"/>"#,
                    position.x,
                    position.y,
                    escape(source)
                ));
                out.push('\n');
            }
        }
    }
}

fn brush_hex(brush: &Brush) -> String {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
        }
        _ => "#000000".to_string(),
    }
}

fn brush_opacity(brush: &Brush) -> f64 {
    match brush {
        Brush::Solid(color) => f64::from(color.to_rgba8().a) / 255.0,
        _ => 1.0,
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
