#![deny(warnings)]

//! Caller-side memoization for the plant engine.
//!
//! The engine is pure, so an output can be reused whenever the exact same
//! input record comes back. [`MemoCache`] is keyed by the full input record
//! (content addressed: equal contents share one entry) and never needs
//! invalidation beyond the caller supplying different inputs.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use plant_core::{PlantInputs, PlantOutputs};
use tracing::{debug, trace};

/// Default number of distinct input records kept.
pub const DEFAULT_CAPACITY: usize = 256;

/// Hit/miss counters for a [`MemoCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries: usize,
}

/// Bounded memo table from input record to output record.
///
/// When full, the oldest inserted entry is evicted first. A capacity of zero
/// disables storage and every call evaluates the engine.
#[derive(Debug)]
pub struct MemoCache {
    capacity: usize,
    entries: HashMap<PlantInputs, Arc<PlantOutputs>>,
    order: VecDeque<PlantInputs>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl MemoCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Return the cached output for `inputs`, computing it on a miss.
    pub fn evaluate(&mut self, inputs: &PlantInputs) -> Arc<PlantOutputs> {
        if let Some(hit) = self.entries.get(inputs) {
            self.hits += 1;
            trace!(hits = self.hits, "memo hit");
            return Arc::clone(hit);
        }
        self.misses += 1;
        let outputs = Arc::new(plant_econ::compute(inputs));
        trace!(misses = self.misses, "memo miss");
        if self.capacity == 0 {
            return outputs;
        }
        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        self.entries.insert(inputs.clone(), Arc::clone(&outputs));
        self.order.push_back(inputs.clone());
        outputs
    }

    fn evict_oldest(&mut self) {
        if let Some(oldest) = self.order.pop_front() {
            self.entries.remove(&oldest);
            self.evictions += 1;
            debug!(evictions = self.evictions, "memo entry evicted");
        }
    }

    pub fn contains(&self, inputs: &PlantInputs) -> bool {
        self.entries.contains_key(inputs)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            entries: self.entries.len(),
        }
    }
}
