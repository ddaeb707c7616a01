// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! OHLC, line and stacked-area series built on `stria_core`.
//!
//! This crate turns data into elements, one update cycle at a time:
//! - **Mapping**: a [`ChartContext`] maps data values into surface coordinates;
//!   [`CartesianFrame`] is the default one, with linear axes.
//! - **Stacking**: [`compute_offsets`] accumulates sibling series into baselines and tops.
//! - **Geometry**: path figures for line and area series, three segments per OHLC bar.
//! - **Series**: [`LineSeries`], [`StackedAreaSeries`] and [`OhlcSeries`] recycle the views of
//!   their points and keep the draw surface in sync.
//! - **Chart**: [`Chart`] owns sibling series, fits axes, groups stacks and runs the cycle.
//!
//! Rasterization, text layout and hit testing are out of scope.

#![no_std]

extern crate alloc;

mod chart;
#[cfg(not(feature = "std"))]
mod float;
mod frame;
mod geometry;
mod point;
mod scale;
#[cfg(test)]
mod scenario_tests;
mod series;
mod stack;

pub use chart::{Chart, ChartError, UpdateReport};
pub use frame::{AxisOrientation, CartesianFrame, ChartContext};
pub use geometry::{
    OHLC_PADDING, OhlcGeometry, PathFigureState, control_points, ohlc_tick_length, push_curve,
};
pub use point::{Limits, OhlcPoint, XyPoint};
pub use scale::ScaleLinear;
pub use series::{
    CycleSummary, FigureView, LineKind, LineSeries, OhlcSeries, OhlcStyle, OhlcView, PathKind,
    PathSeries, PathStyle, Series, SeriesCycle, StackedAreaKind, StackedAreaSeries, XyView,
};
pub use stack::{StackContext, StackMode, StackOffset, StackedSeries, compute_offsets};
