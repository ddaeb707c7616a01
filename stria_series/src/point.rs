// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data points and their validation.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashSet;
use stria_core::{CycleError, InvalidPoint, PointKey};

/// One `(x, y)` sample of a line or area series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct XyPoint {
    /// Identity used for view recycling.
    pub key: PointKey,
    /// X value.
    pub x: f64,
    /// Y value; `None` marks a missing value, which splits the path.
    pub y: Option<f64>,
    /// Explicit break marker: the path is split here even if `y` is present.
    pub brk: bool,
}

impl XyPoint {
    /// Creates a present point.
    pub fn new(key: u64, x: f64, y: f64) -> Self {
        Self {
            key: PointKey(key),
            x,
            y: Some(y),
            brk: false,
        }
    }

    /// Creates a point with a missing value.
    pub fn missing(key: u64, x: f64) -> Self {
        Self {
            key: PointKey(key),
            x,
            y: None,
            brk: false,
        }
    }

    /// Marks this point as a break.
    pub fn with_break(mut self) -> Self {
        self.brk = true;
        self
    }

    /// The value drawn for this point, or `None` if it is a discontinuity.
    pub fn value(&self) -> Option<f64> {
        if self.brk { None } else { self.y }
    }

    /// Builds points from a slice: key and x are the index, NaN values become missing.
    pub fn indexed(values: &[f64]) -> Vec<Self> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let key = i as u64;
                let x = i as f64;
                if v.is_nan() {
                    Self::missing(key, x)
                } else {
                    Self::new(key, x, v)
                }
            })
            .collect()
    }

    pub(crate) fn validate(&self) -> Result<(), InvalidPoint> {
        if !self.x.is_finite() {
            return Err(InvalidPoint::NonFiniteX);
        }
        if self.y.is_some_and(|y| !y.is_finite()) {
            return Err(InvalidPoint::NonFiniteValue);
        }
        Ok(())
    }
}

/// One open/high/low/close sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OhlcPoint {
    /// Identity used for view recycling.
    pub key: PointKey,
    /// X value.
    pub x: f64,
    /// Opening value.
    pub open: f64,
    /// Highest value.
    pub high: f64,
    /// Lowest value.
    pub low: f64,
    /// Closing value.
    pub close: f64,
}

impl OhlcPoint {
    /// Creates a point.
    pub fn new(key: u64, x: f64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            key: PointKey(key),
            x,
            open,
            high,
            low,
            close,
        }
    }

    /// Builds points from `(open, high, low, close)` tuples: key and x are the index.
    pub fn indexed(values: &[(f64, f64, f64, f64)]) -> Vec<Self> {
        values
            .iter()
            .enumerate()
            .map(|(i, &(o, h, l, c))| Self::new(i as u64, i as f64, o, h, l, c))
            .collect()
    }

    /// Whether the point closed above its open.
    pub fn is_increase(&self) -> bool {
        self.close > self.open
    }

    pub(crate) fn validate(&self) -> Result<(), InvalidPoint> {
        if !self.x.is_finite() {
            return Err(InvalidPoint::NonFiniteX);
        }
        if ![self.open, self.high, self.low, self.close]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(InvalidPoint::NonFiniteValue);
        }
        if self.low > self.high {
            return Err(InvalidPoint::InvertedRange);
        }
        Ok(())
    }
}

/// Checks every point and key uniqueness before a cycle mutates anything.
pub(crate) fn validate_points<P>(
    points: &[P],
    key: impl Fn(&P) -> PointKey,
    check: impl Fn(&P) -> Result<(), InvalidPoint>,
) -> Result<(), CycleError> {
    let mut seen: HashSet<PointKey> = HashSet::with_capacity(points.len());
    for (index, p) in points.iter().enumerate() {
        check(p).map_err(|reason| CycleError::InvalidDataPoint { index, reason })?;
        let k = key(p);
        if !seen.insert(k) {
            return Err(CycleError::InvalidDataPoint {
                index,
                reason: InvalidPoint::DuplicateKey(k.0),
            });
        }
    }
    Ok(())
}

/// Data extent of a series, used to fit axes and anchor area baselines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    /// `(min, max)` along X.
    pub x: (f64, f64),
    /// `(min, max)` along Y.
    pub y: (f64, f64),
}

impl Limits {
    /// Scans `(x, y)` pairs, ignoring non-finite values. Returns `None` if nothing is finite.
    pub fn scan(pairs: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut out: Option<Self> = None;
        for (x, y) in pairs {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            let l = Self {
                x: (x, x),
                y: (y, y),
            };
            out = Some(match out {
                None => l,
                Some(o) => o.union(l),
            });
        }
        out
    }

    /// Smallest limits containing both.
    pub fn union(self, other: Self) -> Self {
        Self {
            x: (self.x.0.min(other.x.0), self.x.1.max(other.x.1)),
            y: (self.y.0.min(other.y.0), self.y.1.max(other.y.1)),
        }
    }
}
