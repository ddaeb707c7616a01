// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runs a few update cycles over OHLC and stacked-area charts and writes the final surfaces
//! as SVG.
//!
//! Set `RUST_LOG=debug` to see what each cycle creates, reuses and releases.

mod svg;

use kurbo::Rect;
use peniko::Color;
use peniko::color::palette::css;
use stria_core::{SeriesId, StrokeStyle, SurfaceRecorder};
use stria_series::{
    CartesianFrame, Chart, ChartError, OhlcPoint, OhlcSeries, PathStyle, Series, StackMode,
    StackedAreaSeries, XyPoint,
};
use tracing_subscriber::EnvFilter;

const PLOT: Rect = Rect::new(0.0, 0.0, 640.0, 320.0);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let ohlc = ohlc_demo()?;
    std::fs::write("stria_demo_ohlc.svg", ohlc)?;
    let stacked = stacked_demo()?;
    std::fs::write("stria_demo_stacked.svg", stacked)?;
    println!("wrote stria_demo_ohlc.svg and stria_demo_stacked.svg");
    Ok(())
}

/// A deterministic price walk, one bar per step, keyed from `first`.
fn bars(first: u64, count: u64) -> Vec<OhlcPoint> {
    (first..first + count)
        .map(|i| {
            let t = i as f64;
            let open = 100.0 + 8.0 * (t * 0.45).sin() + 0.6 * t;
            let close = open + 3.0 * (t * 1.3).cos();
            let high = open.max(close) + 1.5 + (t * 0.7).sin().abs();
            let low = open.min(close) - 1.5 - (t * 0.9).cos().abs();
            OhlcPoint::new(i, t, open, high, low, close)
        })
        .collect()
}

fn ohlc_demo() -> Result<String, ChartError> {
    let mut chart = Chart::new(CartesianFrame::new(PLOT, (0.0, 1.0), (0.0, 1.0)));
    let id = chart.push(OhlcSeries::new(SeriesId(1), bars(0, 24)))?;
    let mut surface = SurfaceRecorder::new();

    // Slide the window forward: old bars are released, new bars enter, the rest are reused.
    for step in 0..3 {
        if let Some(Series::Ohlc(s)) = chart.series_mut(id) {
            s.set_points(bars(step * 4, 24));
        }
        let report = chart.update(&mut surface);
        for (id, summary) in &report.updated {
            tracing::info!(step, series = id.0, ?summary, "cycle done");
        }
    }

    // Label only the last cycle.
    if let Some(Series::Ohlc(s)) = chart.series_mut(id) {
        s.style_mut().data_labels = true;
        s.set_points(bars(12, 12));
    }
    chart.update(&mut surface);
    Ok(svg::to_svg_string(&surface, PLOT))
}

fn stacked_demo() -> Result<String, ChartError> {
    let mut chart = Chart::new(CartesianFrame::new(PLOT, (0.0, 1.0), (0.0, 1.0)));
    let palette = [
        Color::from_rgb8(0x4c, 0x78, 0xa8),
        Color::from_rgb8(0xf5, 0x85, 0x18),
        Color::from_rgb8(0x54, 0xa2, 0x4b),
    ];
    let data: [&[f64]; 3] = [
        &[3.0, 4.0, 2.0, 5.0, 6.0, 4.0, 3.0, 5.0],
        &[2.0, 2.0, 3.0, f64::NAN, 2.0, 3.0, 4.0, 2.0],
        &[1.0, 3.0, 2.0, 2.0, 1.0, 2.0, 3.0, 4.0],
    ];
    for (i, (values, color)) in data.iter().zip(palette).enumerate() {
        let style = PathStyle::stacked_area()
            .with_fill(Some(color.with_alpha(0.7).into()))
            .with_stroke(Some(StrokeStyle::solid(css::WHITE, 1.0)));
        chart.push(
            StackedAreaSeries::new(SeriesId(i as u32 + 1), XyPoint::indexed(values))
                .with_style(style),
        )?;
    }
    let mut surface = SurfaceRecorder::new();
    chart.update(&mut surface);

    // Switch the group to percentages; every figure is reused and retargeted.
    if let Some(Series::StackedArea(s)) = chart.series_mut(SeriesId(1)) {
        s.set_stack_mode(StackMode::Percentage);
    }
    let report = chart.update(&mut surface);
    tracing::info!(
        updated = report.updated.len(),
        failed = report.failed.len(),
        elements = surface.len(),
        "stacked chart done"
    );
    Ok(svg::to_svg_string(&surface, PLOT))
}
