// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable elements handed to a [`DrawSurface`](crate::DrawSurface).

use alloc::string::String;

use kurbo::{BezPath, Circle, Line, Point, Rect, Shape as _};

use crate::id::ElementId;
use crate::style::ElementStyle;
use crate::transition::{AnimationPolicy, Transition, plan_transition};

/// A data label: unshaped text at an anchor point.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Label text.
    pub text: String,
    /// Anchor in surface coordinates.
    pub anchor: Point,
}

/// Geometry of an element.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A straight segment (OHLC stems and ticks).
    Line(Line),
    /// A path figure (areas and strokes).
    Path(BezPath),
    /// A circular point marker.
    Marker(Circle),
    /// A data label.
    Label(Label),
}

impl Shape {
    /// Bounding box in surface coordinates. Labels report their anchor only.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Line(l) => l.bounding_box(),
            Self::Path(p) => p.bounding_box(),
            Self::Marker(c) => c.bounding_box(),
            Self::Label(l) => Rect::from_points(l.anchor, l.anchor),
        }
    }
}

/// A drawable element with its current geometry transition and style.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// Stable id.
    pub id: ElementId,
    /// Geometry change planned for the current cycle; `shape.to` is the current geometry.
    pub shape: Transition<Shape>,
    /// Style applied this cycle.
    pub style: ElementStyle,
}

impl Element {
    /// Creates an element that appears at `shape` without animating.
    pub fn new(id: ElementId, shape: Shape, style: ElementStyle) -> Self {
        Self {
            id,
            shape: Transition::snap(shape),
            style,
        }
    }

    /// Current geometry.
    pub fn current(&self) -> &Shape {
        &self.shape.to
    }

    /// Moves the element to `shape`, animating from the current geometry unless `is_new`.
    pub fn retarget(&mut self, shape: Shape, is_new: bool, policy: AnimationPolicy) {
        let old = (!is_new).then_some(&self.shape.to);
        self.shape = plan_transition(old, shape, policy);
    }
}
