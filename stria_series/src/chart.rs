// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owner of a set of sibling series.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use stria_core::{CycleError, DrawSurface, SeriesId};

use crate::frame::{AxisOrientation, CartesianFrame};
use crate::series::{CycleSummary, Series, SeriesCycle};
use crate::stack::{StackContext, StackMode, StackedSeries};

/// Errors returned when editing a [`Chart`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    /// A series with this id is already in the chart.
    #[error("duplicate series id {0:?}")]
    DuplicateSeries(SeriesId),
}

/// Outcome of one [`Chart::update`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateReport {
    /// Series that completed their cycle.
    pub updated: Vec<(SeriesId, CycleSummary)>,
    /// Series whose cycle was aborted; their elements were left untouched.
    pub failed: Vec<(SeriesId, CycleError)>,
}

impl UpdateReport {
    /// Whether every series completed.
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Series in draw order plus the frame they are plotted in.
#[derive(Debug)]
pub struct Chart {
    frame: CartesianFrame,
    series: Vec<Series>,
    auto_fit: bool,
}

impl Chart {
    /// Creates an empty chart that fits its axes to the data.
    pub fn new(frame: CartesianFrame) -> Self {
        Self {
            frame,
            series: Vec::new(),
            auto_fit: true,
        }
    }

    /// Turns axis fitting on or off; when off, axis domains are left as set on the frame.
    pub fn with_auto_fit(mut self, auto_fit: bool) -> Self {
        self.auto_fit = auto_fit;
        self
    }

    /// Adds a series above the existing ones.
    pub fn push(&mut self, series: impl Into<Series>) -> Result<SeriesId, ChartError> {
        let series = series.into();
        let id = series.id();
        if self.series.iter().any(|s| s.id() == id) {
            return Err(ChartError::DuplicateSeries(id));
        }
        self.series.push(series);
        Ok(id)
    }

    /// Removes a series and detaches its elements.
    pub fn remove(&mut self, id: SeriesId, surface: &mut dyn DrawSurface) -> Option<Series> {
        let position = self.series.iter().position(|s| s.id() == id)?;
        let mut series = self.series.remove(position);
        series.release_all(surface);
        Some(series)
    }

    /// Series in draw order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// The series with the given id.
    pub fn series_mut(&mut self, id: SeriesId) -> Option<&mut Series> {
        self.series.iter_mut().find(|s| s.id() == id)
    }

    /// The frame.
    pub fn frame(&self) -> &CartesianFrame {
        &self.frame
    }

    /// Mutable frame, e.g. to resize the plot area.
    pub fn frame_mut(&mut self) -> &mut CartesianFrame {
        &mut self.frame
    }

    /// Stack offsets for every series, by position; `None` for series that do not stack.
    ///
    /// Stacked series sharing a Y axis form one group, stacked in draw order. The first
    /// member's mode applies to the whole group.
    pub fn stack_groups(&self) -> Vec<Option<StackedSeries>> {
        self.stack_groups_of(&vec![true; self.series.len()])
    }

    /// Stack groups over the series whose `include` flag is set; others get `None`.
    fn stack_groups_of(&self, include: &[bool]) -> Vec<Option<StackedSeries>> {
        let mut groups: Vec<(usize, StackMode, Vec<usize>)> = Vec::new();
        for (i, s) in self.series.iter().enumerate() {
            let Some(mode) = s.stack_mode().filter(|_| include[i]) else {
                continue;
            };
            let axis = s.axes().1;
            match groups.iter_mut().find(|(a, _, _)| *a == axis) {
                Some((_, _, members)) => members.push(i),
                None => groups.push((axis, mode, vec![i])),
            }
        }

        let mut out: Vec<Option<StackedSeries>> = vec![None; self.series.len()];
        for (axis, mode, members) in groups {
            let values: Vec<Vec<(f64, f64)>> = members
                .iter()
                .map(|&i| match &self.series[i] {
                    Series::StackedArea(s) => s.stack_values(),
                    Series::Line(_) | Series::Ohlc(_) => Vec::new(),
                })
                .collect();
            let mut ctx = StackContext::new(mode, values.iter().map(Vec::as_slice));
            tracing::trace!(axis, ?mode, members = members.len(), "stack group");
            for (&i, v) in members.iter().zip(&values) {
                out[i] = Some(ctx.push_series(v));
            }
        }
        out
    }

    /// Fits every axis to the data plotted against it, stacked tops included.
    pub fn fit_axes(&mut self, stacks: &[Option<StackedSeries>]) {
        self.fit_axes_of(stacks, &vec![true; self.series.len()]);
    }

    fn fit_axes_of(&mut self, stacks: &[Option<StackedSeries>], include: &[bool]) {
        let x_count = self.frame.axis_count(AxisOrientation::X);
        let y_count = self.frame.axis_count(AxisOrientation::Y);
        let mut xs: Vec<Option<(f64, f64)>> = vec![None; x_count];
        let mut ys: Vec<Option<(f64, f64)>> = vec![None; y_count];
        for (i, s) in self.series.iter().enumerate() {
            if !include[i] {
                continue;
            }
            let Some(l) = s.limits(stacks.get(i).and_then(Option::as_ref)) else {
                continue;
            };
            let (xa, ya) = s.axes();
            merge(&mut xs[xa.min(x_count - 1)], l.x);
            merge(&mut ys[ya.min(y_count - 1)], l.y);
        }
        for (axis, d) in xs.into_iter().enumerate() {
            if let Some(d) = d {
                self.frame
                    .set_domain(AxisOrientation::X, axis, widen_degenerate(d));
            }
        }
        for (axis, d) in ys.into_iter().enumerate() {
            if let Some(d) = d {
                self.frame
                    .set_domain(AxisOrientation::Y, axis, widen_degenerate(d));
            }
        }
    }

    /// Runs one update cycle over every series, in draw order.
    ///
    /// Every series is validated first. A series with invalid data is skipped and reported; it
    /// takes no part in stacking or axis fitting this cycle, and its siblings still update.
    pub fn update(&mut self, surface: &mut dyn DrawSurface) -> UpdateReport {
        let mut report = UpdateReport::default();
        let valid: Vec<bool> = self
            .series
            .iter()
            .map(|series| match series.validate() {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(series = series.id().0, %err, "series update aborted");
                    report.failed.push((series.id(), err));
                    false
                }
            })
            .collect();

        let stacks = self.stack_groups_of(&valid);
        if self.auto_fit {
            self.fit_axes_of(&stacks, &valid);
        }
        let count = self.series.len();
        for (index, series) in self.series.iter_mut().enumerate() {
            if !valid[index] {
                continue;
            }
            let mut cycle = SeriesCycle::new(&self.frame, index, count);
            if let Some(stack) = &stacks[index] {
                cycle = cycle.with_stack(stack);
            }
            let id = series.id();
            match series.update(&cycle, surface) {
                Ok(summary) => report.updated.push((id, summary)),
                Err(err) => {
                    tracing::warn!(series = id.0, %err, "series update aborted");
                    report.failed.push((id, err));
                }
            }
        }
        tracing::debug!(
            updated = report.updated.len(),
            failed = report.failed.len(),
            "chart updated"
        );
        report
    }
}

fn merge(slot: &mut Option<(f64, f64)>, d: (f64, f64)) {
    *slot = Some(match *slot {
        Some((lo, hi)) => (lo.min(d.0), hi.max(d.1)),
        None => d,
    });
}

fn widen_degenerate((lo, hi): (f64, f64)) -> (f64, f64) {
    if lo == hi { (lo - 0.5, hi + 0.5) } else { (lo, hi) }
}
