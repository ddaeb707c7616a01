// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw-order conventions for series elements.
//!
//! A series' elements all share the z-index derived from its position among its siblings.
//! Renderers should sort by `(z_index, ElementId)` for a deterministic tie-break.

/// Offset added to data labels so they draw above every series.
pub const DATA_LABELS: i32 = 1_000_000;

/// How a series derives its z-index from its sibling position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZOrderRule {
    /// Later-added series draw above earlier ones.
    AddOrder,
    /// The first-added series draws on top; used by stacked areas so fills overlap correctly.
    StackedReverse,
}

/// Computes the z-index of the series at `index` among `count` siblings.
pub fn assign_z_order(rule: ZOrderRule, index: usize, count: usize) -> i32 {
    let z = match rule {
        ZOrderRule::AddOrder => index,
        ZOrderRule::StackedReverse => count.saturating_sub(index),
    };
    i32::try_from(z).unwrap_or(i32::MAX)
}
