// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack offsets for series sharing a stack group.
//!
//! Series are stacked in caller order (their visual stacking order). For every X position the
//! calculator keeps a running sum: the baseline of a series at X is the sum of all prior series
//! at X, and its top is the baseline plus its own value.
//!
//! A series that has no value at some X contributes 0 there, so the running sum is defined over
//! the union of all X positions in the group.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashMap;

/// How values are accumulated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StackMode {
    /// Raw values are summed.
    #[default]
    Values,
    /// Values are divided by the group total at each X, so a full stack reaches
    /// [`StackContext::PERCENTAGE_TOTAL`].
    Percentage,
}

/// Bottom and top of one series at one X position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackOffset {
    /// X position.
    pub x: f64,
    /// Sum of all prior series at `x`.
    pub baseline: f64,
    /// `baseline` plus this series' contribution.
    pub top: f64,
}

/// Offsets of one series over the group's X domain, sorted by X.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StackedSeries {
    offsets: Vec<StackOffset>,
}

impl StackedSeries {
    /// All offsets, sorted by X.
    pub fn offsets(&self) -> &[StackOffset] {
        &self.offsets
    }

    /// The offset at `x`, if `x` is part of the group's domain.
    pub fn offset_at(&self, x: f64) -> Option<StackOffset> {
        let x = x_key(x);
        self.offsets
            .binary_search_by(|o| o.x.total_cmp(&x))
            .ok()
            .map(|i| self.offsets[i])
    }

    /// `(min baseline, max top)` over the domain, or `None` when empty.
    pub fn limits(&self) -> Option<(f64, f64)> {
        let first = self.offsets.first()?;
        let init = (first.baseline.min(first.top), first.baseline.max(first.top));
        Some(self.offsets.iter().fold(init, |(lo, hi), o| {
            (lo.min(o.baseline).min(o.top), hi.max(o.baseline).max(o.top))
        }))
    }
}

/// Per-cycle accumulator for one stack group.
///
/// Built fresh every cycle from every series in the group, then fed each series in stacking
/// order with [`StackContext::push_series`].
#[derive(Clone, Debug)]
pub struct StackContext {
    mode: StackMode,
    domain: Vec<f64>,
    index: HashMap<u64, usize>,
    totals: Vec<f64>,
    running: Vec<f64>,
}

impl StackContext {
    /// Height of a full stack in [`StackMode::Percentage`].
    pub const PERCENTAGE_TOTAL: f64 = 1.0;

    /// Collects the X domain and per-X totals of a group.
    ///
    /// Each series is a list of `(x, value)` pairs. Pairs with a non-finite X or value are
    /// treated as absent.
    pub fn new<'a>(mode: StackMode, group: impl IntoIterator<Item = &'a [(f64, f64)]>) -> Self {
        let group: Vec<&[(f64, f64)]> = group.into_iter().collect();

        let mut domain: Vec<f64> = group
            .iter()
            .flat_map(|s| s.iter())
            .filter(|(x, v)| x.is_finite() && v.is_finite())
            .map(|&(x, _)| x_key(x))
            .collect();
        domain.sort_by(f64::total_cmp);
        domain.dedup();

        let index: HashMap<u64, usize> = domain
            .iter()
            .enumerate()
            .map(|(i, x)| (x.to_bits(), i))
            .collect();

        let mut ctx = Self {
            mode,
            totals: vec![0.0; domain.len()],
            running: vec![0.0; domain.len()],
            domain,
            index,
        };
        for s in group {
            let contributions = ctx.contributions(s);
            for (total, c) in ctx.totals.iter_mut().zip(contributions) {
                *total += c;
            }
        }
        ctx
    }

    /// The accumulation mode.
    pub fn mode(&self) -> StackMode {
        self.mode
    }

    /// The union of X positions, sorted.
    pub fn domain(&self) -> &[f64] {
        &self.domain
    }

    /// Stacks the next series on top of the ones pushed before it.
    pub fn push_series(&mut self, values: &[(f64, f64)]) -> StackedSeries {
        let contributions = self.contributions(values);
        let mut offsets = Vec::with_capacity(self.domain.len());
        for (i, raw) in contributions.into_iter().enumerate() {
            let value = match self.mode {
                StackMode::Values => raw,
                StackMode::Percentage => {
                    let total = self.totals[i];
                    if total == 0.0 {
                        0.0
                    } else {
                        raw / total * Self::PERCENTAGE_TOTAL
                    }
                }
            };
            let baseline = self.running[i];
            let top = baseline + value;
            self.running[i] = top;
            offsets.push(StackOffset {
                x: self.domain[i],
                baseline,
                top,
            });
        }
        StackedSeries { offsets }
    }

    /// Raw value of a series at every domain position; absent positions are 0.
    ///
    /// Pairs sharing an X are summed. Stacked series reject such data before it gets here.
    fn contributions(&self, values: &[(f64, f64)]) -> Vec<f64> {
        let mut out = vec![0.0; self.domain.len()];
        for &(x, v) in values {
            if !x.is_finite() || !v.is_finite() {
                continue;
            }
            if let Some(&i) = self.index.get(&x_key(x).to_bits()) {
                out[i] += v;
            }
        }
        out
    }
}

/// Computes the offsets of every series of a group, in order.
pub fn compute_offsets(group: &[&[(f64, f64)]], mode: StackMode) -> Vec<StackedSeries> {
    let mut ctx = StackContext::new(mode, group.iter().copied());
    group.iter().map(|s| ctx.push_series(s)).collect()
}

/// Normalizes `-0.0` so both zeros share a key.
fn x_key(x: f64) -> f64 {
    x + 0.0
}
