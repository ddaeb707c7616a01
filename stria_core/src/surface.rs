// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between series and the external draw surface.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::element::Element;
use crate::id::ElementId;

/// The external drawable area elements are attached to.
///
/// Series only call these methods during an update cycle, in order:
/// - [`DrawSurface::add`] for elements created this cycle,
/// - [`DrawSurface::ensure_attached`] for reused elements (the surface may have been cleared
///   since the last cycle, and the element's geometry or style may have changed),
/// - [`DrawSurface::remove`] for elements released this cycle.
pub trait DrawSurface {
    /// Attaches a new element.
    fn add(&mut self, element: &Element);
    /// Detaches an element.
    fn remove(&mut self, id: ElementId);
    /// Makes sure a reused element is attached and shows its current state.
    fn ensure_attached(&mut self, element: &Element);
}

/// One call made against a [`SurfaceRecorder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceOp {
    /// [`DrawSurface::add`].
    Add(ElementId),
    /// [`DrawSurface::remove`].
    Remove(ElementId),
    /// [`DrawSurface::ensure_attached`] on an element that was still attached.
    Ensure(ElementId),
    /// [`DrawSurface::ensure_attached`] on an element that had to be re-attached.
    Reattach(ElementId),
}

/// An in-memory surface that keeps the attached elements and a log of calls.
///
/// Useful for tests and for renderers that consume the final element set after a cycle.
#[derive(Debug, Default)]
pub struct SurfaceRecorder {
    elements: HashMap<ElementId, Element>,
    log: Vec<SurfaceOp>,
}

impl SurfaceRecorder {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Detaches every element, as a host clearing its draw area would.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns the attached element with the given id.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Number of attached elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether no element is attached.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Attached elements in paint order: `(z_index, id)`.
    pub fn paint_order(&self) -> Vec<&Element> {
        let mut out: Vec<&Element> = self.elements.values().collect();
        out.sort_by_key(|e| (e.style.z_index, e.id));
        out
    }

    /// Calls recorded since the last [`Self::take_log`].
    pub fn log(&self) -> &[SurfaceOp] {
        &self.log
    }

    /// Returns and clears the call log.
    pub fn take_log(&mut self) -> Vec<SurfaceOp> {
        core::mem::take(&mut self.log)
    }
}

impl DrawSurface for SurfaceRecorder {
    fn add(&mut self, element: &Element) {
        self.log.push(SurfaceOp::Add(element.id));
        self.elements.insert(element.id, element.clone());
    }

    fn remove(&mut self, id: ElementId) {
        self.log.push(SurfaceOp::Remove(id));
        self.elements.remove(&id);
    }

    fn ensure_attached(&mut self, element: &Element) {
        let op = if self.elements.contains_key(&element.id) {
            SurfaceOp::Ensure(element.id)
        } else {
            SurfaceOp::Reattach(element.id)
        };
        self.log.push(op);
        self.elements.insert(element.id, element.clone());
    }
}
