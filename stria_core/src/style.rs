// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint and visibility attributes applied to elements each cycle.

use peniko::Brush;
use peniko::color::palette::css;
use smallvec::SmallVec;

/// A dash pattern, in multiples of the stroke width.
pub type Dashes = SmallVec<[f64; 4]>;

/// A paint + width pair for stroked elements, with an optional dash pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in surface coordinates.
    pub stroke_width: f64,
    /// Dash pattern; `None` draws a solid line.
    pub dashes: Option<Dashes>,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            dashes: None,
        }
    }

    /// Sets the dash pattern.
    pub fn with_dashes(mut self, dashes: Option<Dashes>) -> Self {
        self.dashes = dashes;
        self
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Everything about an element except its geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementStyle {
    /// Optional stroke.
    pub stroke: Option<StrokeStyle>,
    /// Optional fill paint.
    pub fill: Option<Brush>,
    /// Whether the element is shown.
    pub visible: bool,
    /// Draw order; higher draws above.
    pub z_index: i32,
}

impl ElementStyle {
    /// A visible, stroked element without fill.
    pub fn stroked(stroke: StrokeStyle, z_index: i32) -> Self {
        Self {
            stroke: Some(stroke),
            fill: None,
            visible: true,
            z_index,
        }
    }

    /// A visible, filled element without stroke.
    pub fn filled(fill: impl Into<Brush>, z_index: i32) -> Self {
        Self {
            stroke: None,
            fill: Some(fill.into()),
            visible: true,
            z_index,
        }
    }

    /// Sets visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            stroke: None,
            fill: None,
            visible: true,
            z_index: 0,
        }
    }
}
