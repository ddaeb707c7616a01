// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised during an update cycle.

/// Why a data point could not be turned into a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPoint {
    /// The X value is NaN or infinite.
    #[error("x is not finite")]
    NonFiniteX,
    /// A required value (Y, open, high, low or close) is NaN or infinite.
    #[error("a value is not finite")]
    NonFiniteValue,
    /// Another point of the same series already uses this key.
    #[error("key {0} is used by more than one point")]
    DuplicateKey(u64),
    /// Another present point of the same stacked series sits at the same X.
    #[error("x is used by more than one stacked point")]
    DuplicateX,
    /// The low value lies above the high value.
    #[error("low lies above high")]
    InvertedRange,
}

/// Errors returned by update-cycle operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CycleError {
    /// The point at `index` could not be resolved; the series' cycle was aborted.
    #[error("invalid data point at index {index}: {reason}")]
    InvalidDataPoint {
        /// Position of the point in the series data.
        index: usize,
        /// What was wrong with it.
        reason: InvalidPoint,
    },
    /// A view was requested outside of an update cycle.
    #[error("no update cycle is active")]
    NoActiveCycle,
    /// A cycle was started while the previous one had not ended.
    #[error("an update cycle is already active")]
    CycleAlreadyActive,
}
