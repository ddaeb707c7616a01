// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental runtime core for chart series.
//!
//! A series turns its data into a set of [`Element`]s every update cycle. This crate provides
//! the pieces that keep those elements stable across cycles:
//! - **Identity**: [`PointKey`] and [`ElementId`] name a data point and the drawables it owns.
//! - **Recycling**: [`Recycler`] reuses the view of a point while its key persists and hands
//!   back views whose key disappeared.
//! - **Splitters**: [`SplitterTracker`] cuts a path into figures at discontinuities and stamps
//!   each figure with a per-series collector index.
//! - **Transitions**: [`plan_transition`] decides whether a geometric change snaps or animates.
//! - **Draw order**: [`assign_z_order`] derives a series' z-index from its sibling position.
//!
//! Rasterization is out of scope; a [`DrawSurface`] only learns which elements exist and what
//! their current geometry and style are.

#![no_std]

extern crate alloc;

mod element;
mod error;
mod id;
mod recycler;
mod splitter;
mod style;
mod surface;
mod transition;
mod z_order;

pub use element::{Element, Label, Shape};
pub use error::{CycleError, InvalidPoint};
pub use id::{ElementId, ElementRole, PointKey, SeriesId};
pub use recycler::{Acquired, Recycler};
pub use splitter::{FigureSlot, SplitPolicy, SplitState, SplitterTracker};
pub use style::{Dashes, ElementStyle, StrokeStyle};
pub use surface::{DrawSurface, SurfaceOp, SurfaceRecorder};
pub use transition::{AnimationPolicy, Transition, plan_transition};
pub use z_order::*;
