// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable identities for series, data points and the elements they own.

/// Identifies a series within a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeriesId(pub u32);

/// Identity of a data point.
///
/// Views are recycled by key: a point whose key is present in two consecutive cycles keeps its
/// view, even if its values changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointKey(pub u64);

/// The part an element plays inside its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementRole {
    /// Filled region of a path figure.
    Area,
    /// Stroked outline of a path figure.
    Stroke,
    /// Vertical high-to-low segment of an OHLC bar.
    HighLow,
    /// Left tick of an OHLC bar at the open value.
    OpenTick,
    /// Right tick of an OHLC bar at the close value.
    CloseTick,
    /// Point marker geometry.
    Marker,
    /// Data label.
    Label,
}

/// Stable identity of a drawable element.
///
/// Point-owned elements use the point key as `key`; figure-owned elements (areas, strokes) use
/// the figure position within the series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId {
    /// Owning series.
    pub series: SeriesId,
    /// Point key or figure position.
    pub key: u64,
    /// Role of the element within its owner.
    pub role: ElementRole,
}

impl ElementId {
    /// Id of an element owned by a data point.
    pub fn for_point(series: SeriesId, key: PointKey, role: ElementRole) -> Self {
        Self {
            series,
            key: key.0,
            role,
        }
    }

    /// Id of an element owned by the path figure at `position`.
    pub fn for_figure(series: SeriesId, position: usize, role: ElementRole) -> Self {
        Self {
            series,
            key: position as u64,
            role,
        }
    }
}
