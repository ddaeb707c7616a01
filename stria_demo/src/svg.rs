// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of a [`SurfaceRecorder`].

use kurbo::Rect;
use peniko::Brush;
use stria_core::{Element, Shape, StrokeStyle, SurfaceRecorder};

const LABEL_FONT_SIZE: f64 = 11.0;

pub(crate) fn to_svg_string(surface: &SurfaceRecorder, plot: Rect) -> String {
    let view_box = plot.inflate(20.0, 20.0);
    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height()
    ));
    out.push('\n');
    out.push_str(&format!(
        r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#fafafa"/>"##,
        plot.x0,
        plot.y0,
        plot.width(),
        plot.height()
    ));
    out.push('\n');

    for element in surface.paint_order() {
        if element.style.visible {
            write_element(&mut out, element);
        }
    }

    out.push_str("</svg>\n");
    out
}

fn write_element(out: &mut String, element: &Element) {
    match element.current() {
        Shape::Line(l) => {
            out.push_str(&format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                l.p0.x, l.p0.y, l.p1.x, l.p1.y
            ));
        }
        Shape::Path(p) => {
            out.push_str(&format!(r#"<path d="{}""#, p.to_svg()));
        }
        Shape::Marker(c) => {
            out.push_str(&format!(
                r#"<circle cx="{}" cy="{}" r="{}""#,
                c.center.x, c.center.y, c.radius
            ));
        }
        Shape::Label(t) => {
            out.push_str(&format!(
                r#"<text x="{}" y="{}" font-size="{LABEL_FONT_SIZE}" text-anchor="middle""#,
                t.anchor.x,
                t.anchor.y - 4.0
            ));
            write_fill(out, element.style.fill.as_ref());
            out.push('>');
            out.push_str(&escape_xml(&t.text));
            out.push_str("</text>\n");
            return;
        }
    }
    write_fill(out, element.style.fill.as_ref());
    if let Some(stroke) = &element.style.stroke {
        write_stroke(out, stroke);
    }
    out.push_str("/>\n");
}

fn write_fill(out: &mut String, fill: Option<&Brush>) {
    match fill {
        Some(brush) => write_paint_attr(out, "fill", brush),
        None => out.push_str(r#" fill="none""#),
    }
}

fn write_stroke(out: &mut String, stroke: &StrokeStyle) {
    if stroke.stroke_width <= 0.0 {
        return;
    }
    write_paint_attr(out, "stroke", &stroke.brush);
    out.push_str(&format!(r#" stroke-width="{}""#, stroke.stroke_width));
    if let Some(dashes) = &stroke.dashes {
        let pattern: Vec<String> = dashes
            .iter()
            .map(|d| (d * stroke.stroke_width).to_string())
            .collect();
        out.push_str(&format!(r#" stroke-dasharray="{}""#, pattern.join(" ")));
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = (rgba.a != 255).then(|| f64::from(rgba.a) / 255.0);
            (fill, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
