// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate mapping consumed by series.
//!
//! Series never own axes. They ask a [`ChartContext`] to turn data values into surface
//! coordinates, for the axis they are attached to.

use kurbo::Rect;
use smallvec::{SmallVec, smallvec};
use stria_core::AnimationPolicy;

use crate::scale::ScaleLinear;

/// Axis direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrientation {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

/// What a series needs from the chart that owns it.
pub trait ChartContext {
    /// Maps `value` on the given axis into surface coordinates.
    fn to_surface(&self, value: f64, orientation: AxisOrientation, axis: usize) -> f64;

    /// Current `(min, max)` limits of the given axis, in data units.
    fn axis_limits(&self, orientation: AxisOrientation, axis: usize) -> (f64, f64);

    /// Global animation settings.
    fn animations(&self) -> AnimationPolicy;

    /// Whether animations are globally disabled.
    fn animations_disabled(&self) -> bool {
        !self.animations().enabled
    }

    /// Surface length of one data unit on the given axis.
    fn unit_width(&self, orientation: AxisOrientation, axis: usize) -> f64 {
        let (min, _) = self.axis_limits(orientation, axis);
        let d = self.to_surface(min + 1.0, orientation, axis) - self.to_surface(min, orientation, axis);
        if d < 0.0 { -d } else { d }
    }
}

/// A rectangular plot area with linear axes.
///
/// X axes map left to right; Y axes map bottom to top (larger values draw higher).
#[derive(Clone, Debug)]
pub struct CartesianFrame {
    plot: Rect,
    x_axes: SmallVec<[ScaleLinear; 2]>,
    y_axes: SmallVec<[ScaleLinear; 2]>,
    animations: AnimationPolicy,
}

impl CartesianFrame {
    /// Creates a frame with one X and one Y axis.
    pub fn new(plot: Rect, x_domain: (f64, f64), y_domain: (f64, f64)) -> Self {
        Self {
            plot,
            x_axes: smallvec![ScaleLinear::new(x_domain, (plot.x0, plot.x1))],
            y_axes: smallvec![ScaleLinear::new(y_domain, (plot.y1, plot.y0))],
            animations: AnimationPolicy::default(),
        }
    }

    /// Adds another X axis; series select it by index.
    pub fn with_x_axis(mut self, domain: (f64, f64)) -> Self {
        self.x_axes
            .push(ScaleLinear::new(domain, (self.plot.x0, self.plot.x1)));
        self
    }

    /// Adds another Y axis; series select it by index.
    pub fn with_y_axis(mut self, domain: (f64, f64)) -> Self {
        self.y_axes
            .push(ScaleLinear::new(domain, (self.plot.y1, self.plot.y0)));
        self
    }

    /// Sets the animation settings.
    pub fn with_animations(mut self, animations: AnimationPolicy) -> Self {
        self.animations = animations;
        self
    }

    /// The plot area.
    pub fn plot(&self) -> Rect {
        self.plot
    }

    /// Number of axes for an orientation.
    pub fn axis_count(&self, orientation: AxisOrientation) -> usize {
        match orientation {
            AxisOrientation::X => self.x_axes.len(),
            AxisOrientation::Y => self.y_axes.len(),
        }
    }

    /// Moves the plot area, keeping every axis domain.
    pub fn set_plot(&mut self, plot: Rect) {
        self.plot = plot;
        for s in &mut self.x_axes {
            *s = s.with_range((plot.x0, plot.x1));
        }
        for s in &mut self.y_axes {
            *s = s.with_range((plot.y1, plot.y0));
        }
    }

    /// Replaces the domain of an axis. Unknown axes are ignored.
    pub fn set_domain(&mut self, orientation: AxisOrientation, axis: usize, domain: (f64, f64)) {
        let axes = match orientation {
            AxisOrientation::X => &mut self.x_axes,
            AxisOrientation::Y => &mut self.y_axes,
        };
        if let Some(s) = axes.get_mut(axis) {
            *s = s.with_domain(domain);
        }
    }

    /// Sets the animation settings.
    pub fn set_animations(&mut self, animations: AnimationPolicy) {
        self.animations = animations;
    }

    fn scale(&self, orientation: AxisOrientation, axis: usize) -> ScaleLinear {
        let axes = match orientation {
            AxisOrientation::X => &self.x_axes,
            AxisOrientation::Y => &self.y_axes,
        };
        match axes.get(axis) {
            Some(s) => *s,
            None => {
                tracing::warn!(?orientation, axis, "unknown axis, using axis 0");
                axes[0]
            }
        }
    }
}

impl ChartContext for CartesianFrame {
    fn to_surface(&self, value: f64, orientation: AxisOrientation, axis: usize) -> f64 {
        self.scale(orientation, axis).map(value)
    }

    fn axis_limits(&self, orientation: AxisOrientation, axis: usize) -> (f64, f64) {
        self.scale(orientation, axis).domain()
    }

    fn animations(&self) -> AnimationPolicy {
        self.animations
    }
}
