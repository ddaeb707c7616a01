// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line and area series.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use kurbo::Point;
use stria_core::ZOrderRule;

use super::SeriesCycle;
use super::path::{PathKind, PathSeries, PathStyle};
use crate::frame::AxisOrientation;
use crate::point::{Limits, XyPoint};

/// Places each point at its raw value; filled figures rest on the series minimum.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineKind;

/// A series drawn as a polyline through its points, optionally filled down to its minimum.
pub type LineSeries = PathSeries<LineKind>;

fn present(points: &[XyPoint]) -> impl Iterator<Item = (f64, f64)> + '_ {
    points.iter().filter_map(|p| p.value().map(|y| (p.x, y)))
}

impl PathKind for LineKind {
    const Z_ORDER: ZOrderRule = ZOrderRule::AddOrder;

    fn default_style() -> PathStyle {
        PathStyle::line()
    }

    fn default_label(point: &XyPoint) -> String {
        match point.y {
            Some(y) => format!("{y}"),
            None => String::new(),
        }
    }

    fn anchor(&self, points: &[XyPoint], cycle: &SeriesCycle<'_>, y_axis: usize) -> f64 {
        let (axis_min, _) = cycle.chart.axis_limits(AxisOrientation::Y, y_axis);
        Limits::scan(present(points)).map_or(axis_min, |l| l.y.0.max(axis_min))
    }

    fn vertex(
        &self,
        point: &XyPoint,
        cycle: &SeriesCycle<'_>,
        (xa, ya): (usize, usize),
    ) -> Option<(Point, Option<Point>)> {
        let chart = cycle.chart;
        point.value().map(|y| {
            let top = Point::new(
                chart.to_surface(point.x, AxisOrientation::X, xa),
                chart.to_surface(y, AxisOrientation::Y, ya),
            );
            (top, None)
        })
    }
}

impl PathSeries<LineKind> {
    /// Data extent over present values.
    pub fn limits(&self) -> Option<Limits> {
        Limits::scan(present(self.points()))
    }
}
