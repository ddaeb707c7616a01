// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap-or-animate decisions for geometric changes.
//!
//! The core never interpolates. It only records the endpoints and duration of a change and
//! leaves the interpolation to the drawing layer.

use core::time::Duration;

/// Global animation settings of the owning chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationPolicy {
    /// Whether changes may be animated at all.
    pub enabled: bool,
    /// Duration of an animated change.
    pub speed: Duration,
}

impl AnimationPolicy {
    /// Default duration of an animated change.
    pub const DEFAULT_SPEED: Duration = Duration::from_millis(300);

    /// Animations enabled at [`Self::DEFAULT_SPEED`].
    pub const fn enabled() -> Self {
        Self {
            enabled: true,
            speed: Self::DEFAULT_SPEED,
        }
    }

    /// Animations disabled.
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            speed: Duration::ZERO,
        }
    }

    /// Sets the animation duration.
    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.speed = speed;
        self
    }
}

impl Default for AnimationPolicy {
    fn default() -> Self {
        Self::enabled()
    }
}

/// A geometric change from `from` to `to` over `duration`.
///
/// A zero duration means the caller applies `to` immediately.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<T> {
    /// Value at the start of the change.
    pub from: T,
    /// Value at the end of the change; the element's current geometry.
    pub to: T,
    /// Length of the change.
    pub duration: Duration,
}

impl<T: Clone> Transition<T> {
    /// A change that applies `value` immediately.
    pub fn snap(value: T) -> Self {
        Self {
            from: value.clone(),
            to: value,
            duration: Duration::ZERO,
        }
    }

    /// Whether the change is applied without interpolation.
    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }
}

/// Plans the change of a geometric value.
///
/// `old` is the previous value of a reused view, or `None` when the view was just created: a
/// first appearance never animates from an undefined prior state.
pub fn plan_transition<T: Clone>(old: Option<&T>, new: T, policy: AnimationPolicy) -> Transition<T> {
    match old {
        Some(old) if policy.enabled && !policy.speed.is_zero() => Transition {
            from: old.clone(),
            to: new,
            duration: policy.speed,
        },
        _ => Transition::snap(new),
    }
}
