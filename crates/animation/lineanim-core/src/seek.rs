//! Seek coalescing and per-entity path orchestration.
//!
//! High-frequency progress updates (one per scroll/animation frame) must not
//! queue up unboundedly: only the latest requested progress per entity
//! matters. [`SeekQueue`] keeps a single slot per key where a new submission
//! replaces any pending one, and [`LineAnimator`] drains the latest request
//! per entity into a truncated-path sample in one synchronous pass.

use core::hash::Hash;

use hashbrown::HashMap;

use crate::path::{Path, Vertex};

/// Identifier for an animated line entity.
pub type ObjectId = i64;

/// Single-slot, latest-wins request queue.
///
/// At most one pending progress per key; submitting replaces, draining takes
/// the latest and clears the slot.
#[derive(Clone, Debug, Default)]
pub struct SeekQueue<K: Eq + Hash> {
    pending: HashMap<K, f64>,
}

impl<K: Eq + Hash> SeekQueue<K> {
    pub fn new() -> Self {
        SeekQueue {
            pending: HashMap::new(),
        }
    }

    /// Queue a progress for `key`, returning the superseded value if one was
    /// still pending.
    pub fn submit(&mut self, key: K, progress: f64) -> Option<f64> {
        self.pending.insert(key, progress)
    }

    /// Take the pending progress for `key`, clearing its slot.
    pub fn take(&mut self, key: &K) -> Option<f64> {
        self.pending.remove(key)
    }

    pub fn pending(&self, key: &K) -> Option<f64> {
        self.pending.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drain every pending (key, progress) pair.
    pub fn drain(&mut self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.pending.drain()
    }
}

/// Orchestrates truncated-path sampling for a set of animated lines.
///
/// Owns one immutable [`Path`] per object id plus a [`SeekQueue`]. Callers
/// submit seeks as fast as they like; [`drain_samples`](Self::drain_samples)
/// computes each entity's latest requested truncation exactly once. Seeks for
/// ids whose geometry has not been registered yet stay pending until it
/// arrives.
#[derive(Clone, Debug, Default)]
pub struct LineAnimator {
    paths: HashMap<ObjectId, Path>,
    queue: SeekQueue<ObjectId>,
}

impl LineAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the geometry for an id. Changed source geometry
    /// means a fresh build; paths are never updated in place.
    pub fn insert_path(&mut self, id: ObjectId, path: Path) {
        log::debug!("registering path for object {id} ({} vertices)", path.len());
        self.paths.insert(id, path);
    }

    /// Build a path from raw vertices with the Euclidean distance and
    /// register it.
    pub fn set_path(&mut self, id: ObjectId, vertices: Vec<Vertex>) {
        self.insert_path(id, Path::from_vertices(vertices));
    }

    pub fn remove_path(&mut self, id: ObjectId) -> Option<Path> {
        self.queue.take(&id);
        self.paths.remove(&id)
    }

    pub fn path(&self, id: ObjectId) -> Option<&Path> {
        self.paths.get(&id)
    }

    /// Request a seek to `progress` for `id`, superseding any pending one.
    pub fn seek(&mut self, id: ObjectId, progress: f64) {
        if let Some(old) = self.queue.submit(id, progress) {
            log::trace!("object {id}: seek {old} superseded by {progress}");
        }
    }

    /// Progress still waiting to be drained for `id`, if any.
    pub fn pending_seek(&self, id: ObjectId) -> Option<f64> {
        self.queue.pending(&id)
    }

    /// Sample the latest pending seek for every id with a registered path.
    ///
    /// Requests for unknown ids are left in the queue. Returns one
    /// `(id, truncated vertices)` entry per drained request.
    pub fn drain_samples(&mut self) -> Vec<(ObjectId, Vec<Vertex>)> {
        let mut out = Vec::with_capacity(self.queue.len());
        self.queue.pending.retain(|id, progress| {
            match self.paths.get(id) {
                Some(path) => {
                    out.push((*id, path.sample_at(*progress)));
                    false
                }
                // Geometry not here yet; keep the slot.
                None => true,
            }
        });
        log::trace!(
            "drained {} seek(s), {} still pending",
            out.len(),
            self.queue.len()
        );
        out
    }
}
