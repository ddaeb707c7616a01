// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked area series.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::Point;
use stria_core::{CycleError, InvalidPoint, ZOrderRule};

use super::SeriesCycle;
use super::path::{PathKind, PathSeries, PathStyle};
use crate::frame::AxisOrientation;
use crate::point::{Limits, XyPoint, validate_points};
use crate::stack::{StackContext, StackMode, StackedSeries};

/// Places each point on top of the series stacked before it.
///
/// The owning chart computes offsets for every stacked series sharing a Y axis and hands them
/// over through [`SeriesCycle::stack`]. Without them, the series stacks on its own.
#[derive(Clone, Debug, Default)]
pub struct StackedAreaKind {
    mode: StackMode,
    solo: Option<StackedSeries>,
}

/// An area series drawn on top of the series stacked before it.
pub type StackedAreaSeries = PathSeries<StackedAreaKind>;

fn stack_values(points: &[XyPoint]) -> Vec<(f64, f64)> {
    points
        .iter()
        .filter_map(|p| p.value().map(|v| (p.x, v)))
        .collect()
}

fn own_stack(mode: StackMode, points: &[XyPoint]) -> StackedSeries {
    let values = stack_values(points);
    StackContext::new(mode, [values.as_slice()]).push_series(&values)
}

impl PathKind for StackedAreaKind {
    const Z_ORDER: ZOrderRule = ZOrderRule::StackedReverse;

    fn default_style() -> PathStyle {
        PathStyle::stacked_area()
    }

    fn default_label(point: &XyPoint) -> String {
        format!("{}", point.x)
    }

    /// Besides the per-point checks, two present points may not share an X: each X holds one
    /// offset per series.
    fn validate(points: &[XyPoint]) -> Result<(), CycleError> {
        validate_points(points, |p| p.key, XyPoint::validate)?;
        let mut seen: HashSet<u64> = HashSet::with_capacity(points.len());
        for (index, p) in points.iter().enumerate() {
            if p.value().is_some() && !seen.insert((p.x + 0.0).to_bits()) {
                return Err(CycleError::InvalidDataPoint {
                    index,
                    reason: InvalidPoint::DuplicateX,
                });
            }
        }
        Ok(())
    }

    fn anchor(&self, _points: &[XyPoint], cycle: &SeriesCycle<'_>, y_axis: usize) -> f64 {
        cycle.chart.axis_limits(AxisOrientation::Y, y_axis).0
    }

    fn prepare(&mut self, points: &[XyPoint], cycle: &SeriesCycle<'_>) {
        self.solo = cycle.stack.is_none().then(|| own_stack(self.mode, points));
    }

    fn vertex(
        &self,
        point: &XyPoint,
        cycle: &SeriesCycle<'_>,
        (xa, ya): (usize, usize),
    ) -> Option<(Point, Option<Point>)> {
        let chart = cycle.chart;
        let stack = cycle.stack.or(self.solo.as_ref());
        point
            .value()
            .and(stack)
            .and_then(|s| s.offset_at(point.x))
            .map(|offset| {
                let x = chart.to_surface(point.x, AxisOrientation::X, xa);
                let top = Point::new(x, chart.to_surface(offset.top, AxisOrientation::Y, ya));
                let baseline =
                    Point::new(x, chart.to_surface(offset.baseline, AxisOrientation::Y, ya));
                (top, Some(baseline))
            })
    }

    fn finish(&mut self) {
        self.solo = None;
    }
}

impl PathSeries<StackedAreaKind> {
    /// Sets the stack mode. Within a group, the first series' mode applies.
    pub fn with_stack_mode(mut self, mode: StackMode) -> Self {
        self.kind.mode = mode;
        self
    }

    /// Changes the stack mode; takes effect on the next cycle.
    pub fn set_stack_mode(&mut self, mode: StackMode) {
        self.kind.mode = mode;
    }

    /// The stack mode.
    pub fn stack_mode(&self) -> StackMode {
        self.kind.mode
    }

    /// `(x, value)` pairs fed to the stack calculator; gaps are left out.
    pub fn stack_values(&self) -> Vec<(f64, f64)> {
        stack_values(self.points())
    }

    /// Data extent; Y spans the stacked offsets.
    pub fn limits(&self, stack: Option<&StackedSeries>) -> Option<Limits> {
        let own;
        let stack = match stack {
            Some(s) => s,
            None => {
                own = own_stack(self.kind.mode, self.points());
                &own
            }
        };
        let x = Limits::scan(self.points().iter().map(|p| (p.x, 0.0)))?.x;
        let y = stack.limits()?;
        Some(Limits { x, y })
    }
}
