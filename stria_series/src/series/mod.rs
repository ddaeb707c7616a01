// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of series kinds.
//!
//! Every kind follows the same cycle: `on_update_start`, one `get_or_create_point_view` per
//! data point, then `on_update_end` to release the views of points that disappeared. `update`
//! runs the whole cycle after validating the data, so an invalid point aborts the series
//! before any element is touched.

extern crate alloc;

use alloc::vec::Vec;

use stria_core::{
    AnimationPolicy, CycleError, DrawSurface, Element, ElementId, ElementStyle, SeriesId, Shape,
    ZOrderRule, assign_z_order,
};

use crate::frame::ChartContext;
use crate::point::Limits;
use crate::stack::{StackMode, StackedSeries};

mod line;
mod ohlc;
mod path;
mod stacked_area;

pub use line::{LineKind, LineSeries};
pub use ohlc::{OhlcSeries, OhlcStyle, OhlcView};
pub use path::{FigureView, PathKind, PathSeries, PathStyle, XyView};
pub use stacked_area::{StackedAreaKind, StackedAreaSeries};

/// Per-series inputs of one update cycle.
#[derive(Clone, Copy)]
pub struct SeriesCycle<'a> {
    /// The owning chart.
    pub chart: &'a dyn ChartContext,
    /// Position of the series among its siblings, in draw order.
    pub index: usize,
    /// Number of siblings, including the series itself.
    pub count: usize,
    /// Stack offsets for stacked series; computed by the owner for the whole group.
    pub stack: Option<&'a StackedSeries>,
}

impl core::fmt::Debug for SeriesCycle<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SeriesCycle")
            .field("index", &self.index)
            .field("count", &self.count)
            .field("stack", &self.stack)
            .finish_non_exhaustive()
    }
}

impl<'a> SeriesCycle<'a> {
    /// A cycle for the series at `index` among `count` siblings.
    pub fn new(chart: &'a dyn ChartContext, index: usize, count: usize) -> Self {
        Self {
            chart,
            index,
            count,
            stack: None,
        }
    }

    /// Attaches stack offsets.
    pub fn with_stack(mut self, stack: &'a StackedSeries) -> Self {
        self.stack = Some(stack);
        self
    }

    /// The z-index of the series under `rule`.
    pub fn z_index(&self, rule: ZOrderRule) -> i32 {
        assign_z_order(rule, self.index, self.count)
    }

    /// Global animation settings.
    pub fn animations(&self) -> AnimationPolicy {
        self.chart.animations()
    }
}

/// What one series' cycle did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleSummary {
    /// Point views created.
    pub created: usize,
    /// Point views reused.
    pub reused: usize,
    /// Point views released.
    pub released: usize,
    /// Path figures drawn.
    pub figures: usize,
}

/// A series of any kind.
#[derive(Debug)]
pub enum Series {
    /// Line or area series.
    Line(LineSeries),
    /// Stacked area series.
    StackedArea(StackedAreaSeries),
    /// Open/high/low/close series.
    Ohlc(OhlcSeries),
}

impl Series {
    /// The series id.
    pub fn id(&self) -> SeriesId {
        match self {
            Self::Line(s) => s.id(),
            Self::StackedArea(s) => s.id(),
            Self::Ohlc(s) => s.id(),
        }
    }

    /// `(x axis, y axis)` indices the series is plotted against.
    pub fn axes(&self) -> (usize, usize) {
        match self {
            Self::Line(s) => s.axes(),
            Self::StackedArea(s) => s.axes(),
            Self::Ohlc(s) => s.axes(),
        }
    }

    /// Stack mode, for series that stack.
    pub fn stack_mode(&self) -> Option<StackMode> {
        match self {
            Self::StackedArea(s) => Some(s.stack_mode()),
            Self::Line(_) | Self::Ohlc(_) => None,
        }
    }

    /// Checks the data without touching anything.
    pub fn validate(&self) -> Result<(), CycleError> {
        match self {
            Self::Line(s) => s.validate(),
            Self::StackedArea(s) => s.validate(),
            Self::Ohlc(s) => s.validate(),
        }
    }

    /// Data extent; stacked series report the extent of their stacked offsets.
    pub fn limits(&self, stack: Option<&StackedSeries>) -> Option<Limits> {
        match self {
            Self::Line(s) => s.limits(),
            Self::StackedArea(s) => s.limits(stack),
            Self::Ohlc(s) => s.limits(),
        }
    }

    /// Runs a full update cycle.
    pub fn update(
        &mut self,
        cycle: &SeriesCycle<'_>,
        surface: &mut dyn DrawSurface,
    ) -> Result<CycleSummary, CycleError> {
        match self {
            Self::Line(s) => s.update(cycle, surface),
            Self::StackedArea(s) => s.update(cycle, surface),
            Self::Ohlc(s) => s.update(cycle, surface),
        }
    }

    /// Detaches every element the series owns, e.g. when it leaves the chart.
    pub fn release_all(&mut self, surface: &mut dyn DrawSurface) {
        match self {
            Self::Line(s) => s.release_all(surface),
            Self::StackedArea(s) => s.release_all(surface),
            Self::Ohlc(s) => s.release_all(surface),
        }
    }
}

impl From<LineSeries> for Series {
    fn from(value: LineSeries) -> Self {
        Self::Line(value)
    }
}

impl From<StackedAreaSeries> for Series {
    fn from(value: StackedAreaSeries) -> Self {
        Self::StackedArea(value)
    }
}

impl From<OhlcSeries> for Series {
    fn from(value: OhlcSeries) -> Self {
        Self::Ohlc(value)
    }
}

/// Brings an optional element in line with what the cycle wants.
///
/// Creates and adds it, retargets and re-attaches it, or removes it.
pub(crate) fn sync_element(
    slot: &mut Option<Element>,
    id: ElementId,
    want: Option<(Shape, ElementStyle)>,
    policy: AnimationPolicy,
    surface: &mut dyn DrawSurface,
) {
    match (slot.as_mut(), want) {
        (Some(el), Some((shape, style))) => {
            el.retarget(shape, false, policy);
            el.style = style;
            surface.ensure_attached(el);
        }
        (None, Some((shape, style))) => {
            let el = Element::new(id, shape, style);
            surface.add(&el);
            *slot = Some(el);
        }
        (Some(el), None) => {
            surface.remove(el.id);
            *slot = None;
        }
        (None, None) => {}
    }
}

/// Detaches every element of a released view.
pub(crate) fn remove_all<'a>(
    elements: impl IntoIterator<Item = &'a Element>,
    surface: &mut dyn DrawSurface,
) {
    for el in elements {
        surface.remove(el.id);
    }
}

/// Order in which points are drawn: ascending X, ties in input order.
pub(crate) fn x_order(xs: impl ExactSizeIterator<Item = f64>) -> Vec<usize> {
    let xs: Vec<f64> = xs.collect();
    let mut order: Vec<usize> = (0..xs.len()).collect();
    order.sort_by(|&a, &b| xs[a].total_cmp(&xs[b]));
    order
}
