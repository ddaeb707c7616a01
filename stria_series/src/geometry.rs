// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry builders: path figures for line/area series and segments for OHLC bars.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Line, Point};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Horizontal padding, in surface units, kept between neighbouring OHLC bars.
pub const OHLC_PADDING: f64 = 1.2;

/// Vertices of one continuous figure, in surface coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathFigureState {
    /// One vertex per present point, in ascending X.
    pub vertices: Vec<Point>,
    /// Stack baselines aligned with `vertices`; empty for unstacked figures.
    pub baselines: Vec<Point>,
    /// Y coordinate the area rests on when there are no baselines.
    pub anchor_y: f64,
}

impl PathFigureState {
    /// Creates an empty unstacked figure resting on `anchor_y`.
    pub fn new(anchor_y: f64) -> Self {
        Self {
            vertices: Vec::new(),
            baselines: Vec::new(),
            anchor_y,
        }
    }

    /// Whether the figure has stack baselines.
    pub fn is_stacked(&self) -> bool {
        !self.baselines.is_empty()
    }

    /// Start point of the closed area.
    pub fn start_point(&self) -> Option<Point> {
        if let Some(b) = self.baselines.first() {
            return Some(*b);
        }
        self.vertices.first().map(|v| Point::new(v.x, self.anchor_y))
    }

    /// The closed area: from the start point up through every vertex, then back along the
    /// baselines (or straight down to the anchor).
    pub fn area_path(&self, smoothness: f64) -> BezPath {
        let mut p = BezPath::new();
        let (Some(start), Some(first), Some(last)) =
            (self.start_point(), self.vertices.first(), self.vertices.last())
        else {
            return p;
        };
        p.move_to(start);
        p.line_to(*first);
        push_curve(&mut p, &self.vertices, smoothness);
        if self.is_stacked() {
            let back: Vec<Point> = self.baselines.iter().rev().copied().collect();
            p.line_to(back[0]);
            push_curve(&mut p, &back, smoothness);
        } else {
            p.line_to((last.x, self.anchor_y));
        }
        p.close_path();
        p
    }

    /// The open outline along the vertices.
    pub fn stroke_path(&self, smoothness: f64) -> BezPath {
        let mut p = BezPath::new();
        let Some(first) = self.vertices.first() else {
            return p;
        };
        p.move_to(*first);
        push_curve(&mut p, &self.vertices, smoothness);
        p
    }
}

/// Appends segments through `points[1..]`, assuming the path is at `points[0]`.
///
/// `smoothness` of 0 draws straight segments; larger values (up to 1) bend each segment
/// towards a curve whose control points follow the neighbouring vertices.
pub fn push_curve(path: &mut BezPath, points: &[Point], smoothness: f64) {
    if points.len() < 2 {
        return;
    }
    if smoothness <= 0.0 {
        for &pt in &points[1..] {
            path.line_to(pt);
        }
        return;
    }
    let last = points.len() - 1;
    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];
        let (c1, c2) = control_points(p0, p1, p2, p3, smoothness);
        path.curve_to(c1, c2, p2);
    }
}

/// Control points of the cubic from `p1` to `p2`, given neighbours `p0` and `p3`.
///
/// Segment mid-points are blended by the relative lengths of the adjacent segments, then
/// shifted so they pass through the vertices and scaled by `smoothness`.
pub fn control_points(p0: Point, p1: Point, p2: Point, p3: Point, smoothness: f64) -> (Point, Point) {
    let c1 = p0.midpoint(p1);
    let c2 = p1.midpoint(p2);
    let c3 = p2.midpoint(p3);

    let len1 = distance(p0, p1);
    let len2 = distance(p1, p2);
    let len3 = distance(p2, p3);

    let k1 = ratio(len1, len1 + len2);
    let k2 = ratio(len2, len2 + len3);

    let m1 = c1.lerp(c2, k1);
    let m2 = c2.lerp(c3, k2);

    let ctrl1 = Point::new(
        m1.x + (c2.x - m1.x) * smoothness + p1.x - m1.x,
        m1.y + (c2.y - m1.y) * smoothness + p1.y - m1.y,
    );
    let ctrl2 = Point::new(
        m2.x + (c2.x - m2.x) * smoothness + p2.x - m2.x,
        m2.y + (c2.y - m2.y) * smoothness + p2.y - m2.y,
    );
    (ctrl1, ctrl2)
}

fn distance(a: Point, b: Point) -> f64 {
    let d = b - a;
    (d.x * d.x + d.y * d.y).sqrt()
}

fn ratio(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole } else { 0.0 }
}

/// The three segments of an OHLC bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OhlcGeometry {
    /// Vertical segment from high to low at the bar's X.
    pub high_low: Line,
    /// Left tick at the open value.
    pub open: Line,
    /// Right tick at the close value.
    pub close: Line,
}

impl OhlcGeometry {
    /// Builds a bar centered on `x`. All coordinates are in surface units.
    pub fn new(x: f64, high: f64, low: f64, open: f64, close: f64, tick: f64) -> Self {
        Self {
            high_low: Line::new((x, high), (x, low)),
            open: Line::new((x - tick, open), (x, open)),
            close: Line::new((x, close), (x + tick, close)),
        }
    }
}

/// Length of an OHLC tick for a given per-point width.
///
/// The bar is at most `max_column_width` wide, shrinks with the space available per point
/// (minus [`OHLC_PADDING`]), and each tick covers half of it.
pub fn ohlc_tick_length(unit_width: f64, max_column_width: f64) -> f64 {
    let available = (unit_width - OHLC_PADDING).max(0.0);
    available.min(max_column_width.max(0.0)) / 2.0
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::PathEl;

    use super::*;

    #[test]
    fn unstacked_area_rests_on_the_anchor() {
        let mut f = PathFigureState::new(100.0);
        f.vertices = alloc::vec![Point::new(0.0, 10.0), Point::new(10.0, 20.0)];
        let p = f.area_path(0.0);
        let els = p.elements();
        assert_eq!(els[0], PathEl::MoveTo(Point::new(0.0, 100.0)));
        assert_eq!(els[1], PathEl::LineTo(Point::new(0.0, 10.0)));
        assert_eq!(els[2], PathEl::LineTo(Point::new(10.0, 20.0)));
        assert_eq!(els[3], PathEl::LineTo(Point::new(10.0, 100.0)));
        assert_eq!(els[4], PathEl::ClosePath);
    }

    #[test]
    fn stacked_area_starts_at_the_baseline_and_returns_along_it() {
        let mut f = PathFigureState::new(100.0);
        f.vertices = alloc::vec![Point::new(0.0, 10.0), Point::new(10.0, 20.0)];
        f.baselines = alloc::vec![Point::new(0.0, 50.0), Point::new(10.0, 60.0)];
        assert_eq!(f.start_point(), Some(Point::new(0.0, 50.0)));
        let p = f.area_path(0.0);
        let els = p.elements();
        assert_eq!(els[0], PathEl::MoveTo(Point::new(0.0, 50.0)));
        assert_eq!(els[3], PathEl::LineTo(Point::new(10.0, 60.0)));
        assert_eq!(els[4], PathEl::LineTo(Point::new(0.0, 50.0)));
    }

    #[test]
    fn smoothing_emits_curves_through_every_vertex() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 0.0),
        ];
        let mut p = BezPath::new();
        p.move_to(pts[0]);
        push_curve(&mut p, &pts, 0.7);
        let ends: Vec<Point> = p
            .elements()
            .iter()
            .filter_map(|e| match e {
                PathEl::CurveTo(_, _, end) => Some(*end),
                _ => None,
            })
            .collect();
        assert_eq!(ends, pts[1..]);
    }

    #[test]
    fn collinear_points_keep_control_points_on_the_line() {
        let (c1, c2) = control_points(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, 0.0),
            0.7,
        );
        assert_eq!(c1.y, 0.0);
        assert_eq!(c2.y, 0.0);
        assert!(c1.x > 10.0 && c2.x < 20.0, "{c1:?} {c2:?}");
    }

    #[test]
    fn ohlc_ticks_are_capped_and_shrink_with_density() {
        assert_eq!(ohlc_tick_length(100.0, 35.0), 17.5);
        let dense = ohlc_tick_length(6.2, 35.0);
        assert!((dense - 2.5).abs() < 1e-9, "{dense}");
        assert!(dense <= 6.2 / 2.0);
        assert_eq!(ohlc_tick_length(1.0, 35.0), 0.0);
    }

    #[test]
    fn ohlc_geometry_places_open_left_and_close_right() {
        let g = OhlcGeometry::new(50.0, 10.0, 60.0, 20.0, 40.0, 5.0);
        assert_eq!(g.high_low, Line::new((50.0, 10.0), (50.0, 60.0)));
        assert_eq!(g.open, Line::new((45.0, 20.0), (50.0, 20.0)));
        assert_eq!(g.close, Line::new((50.0, 40.0), (55.0, 40.0)));
    }
}
