// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discontinuity tracking for path figures.
//!
//! A series draws its points as one or more path figures. Whenever the data has a gap, the
//! current figure is sealed and the next present point opens a new one. Figures are reused by
//! position across cycles, so a series that keeps the same gaps keeps the same figure elements.
//!
//! Every figure opened in a cycle is stamped with the next value of a per-series collector.
//! The collector never overflows: once it reaches `limit - 1` the indices are compacted, which
//! keeps them unique among live figures and preserves creation order.

use alloc::vec::Vec;
use core::ops::Range;

/// Gap detection settings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SplitPolicy {
    /// Split when consecutive present points are further apart than this along X.
    ///
    /// Missing values and explicit break markers always split.
    pub max_x_gap: Option<f64>,
}

impl SplitPolicy {
    /// Whether a step from `prev_x` to `x` is a gap.
    pub fn is_gap(&self, prev_x: f64, x: f64) -> bool {
        self.max_x_gap.is_some_and(|gap| x - prev_x > gap)
    }
}

/// State of the figure being built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitState {
    /// A figure is open and receives points.
    Building,
    /// No figure is open; the next present point opens one.
    Split,
}

/// A figure opened by [`SplitterTracker::point`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FigureSlot {
    /// Position of the figure within the series; figure elements are keyed by it.
    pub position: usize,
    /// Collector index stamped on the figure.
    pub collector_index: u64,
    /// Whether no figure existed at this position in the previous cycle.
    pub is_new: bool,
}

/// Per-series splitter state.
#[derive(Clone, Debug)]
pub struct SplitterTracker {
    state: SplitState,
    active: usize,
    collector: u64,
    limit: u64,
    indices: Vec<u64>,
}

impl Default for SplitterTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitterTracker {
    /// Creates a tracker whose collector may grow up to `u64::MAX - 1`.
    pub fn new() -> Self {
        Self::with_limit(u64::MAX)
    }

    /// Creates a tracker that compacts its indices when the collector reaches `limit - 1`.
    ///
    /// `limit` is clamped to at least 2.
    pub fn with_limit(limit: u64) -> Self {
        Self {
            state: SplitState::Split,
            active: 0,
            collector: 0,
            limit: limit.max(2),
            indices: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> SplitState {
        self.state
    }

    /// Current collector value.
    pub fn collector(&self) -> u64 {
        self.collector
    }

    /// Number of figures opened in the current cycle.
    pub fn active_splitters(&self) -> usize {
        self.active
    }

    /// Collector indices of all known figures, by position.
    pub fn indices(&self) -> &[u64] {
        &self.indices
    }

    /// Starts a cycle: no figure is open and no figure has been used yet.
    pub fn begin_cycle(&mut self) {
        self.active = 0;
        self.state = SplitState::Split;
        if self.collector >= self.limit - 1 {
            self.compact();
        }
    }

    /// Records a present point, opening a figure if none is open.
    pub fn point(&mut self) -> Option<FigureSlot> {
        if self.state == SplitState::Building {
            return None;
        }
        if self.collector >= self.limit - 1 {
            self.compact();
        }
        self.collector += 1;
        let position = self.active;
        let is_new = position == self.indices.len();
        if is_new {
            self.indices.push(self.collector);
        } else {
            self.indices[position] = self.collector;
        }
        self.active += 1;
        self.state = SplitState::Building;
        Some(FigureSlot {
            position,
            collector_index: self.collector,
            is_new,
        })
    }

    /// Records a discontinuity; seals the open figure, if any.
    ///
    /// Returns whether a figure was sealed.
    pub fn split(&mut self) -> bool {
        let sealed = self.state == SplitState::Building;
        self.state = SplitState::Split;
        sealed
    }

    /// Seals the open figure at the end of the data sequence.
    pub fn finish(&mut self) -> bool {
        self.split()
    }

    /// Ends the cycle, returning positions of figures that were not used and forgetting them.
    pub fn end_cycle(&mut self) -> Range<usize> {
        self.finish();
        let stale = self.active..self.indices.len();
        self.indices.truncate(self.active);
        stale
    }

    /// Renumbers figures so the collector can keep growing.
    ///
    /// Figures not used in this cycle get index 0; figures used in this cycle get `1..=k` in
    /// creation order, and the collector restarts at `k`.
    fn compact(&mut self) {
        tracing::debug!(
            collector = self.collector,
            figures = self.indices.len(),
            "splitter collector reset"
        );
        let mut next = 0;
        for (position, index) in self.indices.iter_mut().enumerate() {
            if position < self.active {
                next += 1;
                *index = next;
            } else {
                *index = 0;
            }
        }
        self.collector = next;
    }
}
