// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-view recycling keyed by data identity.

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::error::CycleError;
use crate::id::PointKey;

/// A view handed out by [`Recycler::acquire`].
#[derive(Debug)]
pub struct Acquired<'a, V> {
    /// The view registered for the key.
    pub view: &'a mut V,
    /// Whether the view was created by this call.
    ///
    /// A reused view must be re-attached to the current surface by the caller.
    pub is_new: bool,
}

/// Keeps one view per data point key across update cycles.
///
/// Within a cycle, [`Recycler::acquire`] returns the view of a key that already has one and
/// creates a view otherwise. [`Recycler::end_cycle`] hands back every view whose key was not
/// acquired during the cycle, so the caller can detach its elements.
#[derive(Debug)]
pub struct Recycler<V> {
    views: HashMap<PointKey, V>,
    active: HashSet<PointKey>,
    in_cycle: bool,
    created: usize,
}

impl<V> Default for Recycler<V> {
    fn default() -> Self {
        Self {
            views: HashMap::new(),
            active: HashSet::new(),
            in_cycle: false,
            created: 0,
        }
    }
}

impl<V> Recycler<V> {
    /// Creates an empty recycler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an update cycle.
    pub fn begin_cycle(&mut self) -> Result<(), CycleError> {
        if self.in_cycle {
            return Err(CycleError::CycleAlreadyActive);
        }
        self.in_cycle = true;
        self.active.clear();
        self.created = 0;
        Ok(())
    }

    /// Whether a cycle is open.
    pub fn in_cycle(&self) -> bool {
        self.in_cycle
    }

    /// Returns the view registered for `key`, creating it with `create` if there is none.
    pub fn acquire(
        &mut self,
        key: PointKey,
        create: impl FnOnce() -> V,
    ) -> Result<Acquired<'_, V>, CycleError> {
        if !self.in_cycle {
            return Err(CycleError::NoActiveCycle);
        }
        self.active.insert(key);
        let is_new = !self.views.contains_key(&key);
        if is_new {
            self.created += 1;
            tracing::trace!(key = key.0, "creating point view");
        }
        let view = self.views.entry(key).or_insert_with(create);
        Ok(Acquired { view, is_new })
    }

    /// Removes and returns every view whose key is not in `active`, ordered by key.
    pub fn release_except(&mut self, active: &HashSet<PointKey>) -> Vec<(PointKey, V)> {
        let mut stale: Vec<PointKey> = self
            .views
            .keys()
            .filter(|k| !active.contains(*k))
            .copied()
            .collect();
        stale.sort_unstable();
        stale
            .into_iter()
            .filter_map(|k| self.views.remove(&k).map(|v| (k, v)))
            .collect()
    }

    /// Closes the cycle and returns the views that were not acquired during it.
    pub fn end_cycle(&mut self) -> Result<Vec<(PointKey, V)>, CycleError> {
        if !self.in_cycle {
            return Err(CycleError::NoActiveCycle);
        }
        let active = core::mem::take(&mut self.active);
        let released = self.release_except(&active);
        tracing::debug!(
            active = active.len(),
            created = self.created,
            reused = active.len().saturating_sub(self.created),
            released = released.len(),
            "point views recycled"
        );
        self.active = active;
        self.in_cycle = false;
        Ok(released)
    }

    /// Returns the view registered for `key`.
    pub fn get(&self, key: PointKey) -> Option<&V> {
        self.views.get(&key)
    }

    /// Number of registered views.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Whether no view is registered.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<PointKey> {
        let mut keys: Vec<PointKey> = self.views.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Iterates registered views in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (PointKey, &V)> {
        self.views.iter().map(|(k, v)| (*k, v))
    }

    /// Removes and returns every view, e.g. when the owning series is dropped from a chart.
    pub fn drain(&mut self) -> Vec<(PointKey, V)> {
        let mut out: Vec<(PointKey, V)> = self.views.drain().collect();
        out.sort_unstable_by_key(|(k, _)| *k);
        self.active.clear();
        out
    }
}
