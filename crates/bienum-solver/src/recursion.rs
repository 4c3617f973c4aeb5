//! Recursion guards for type-level computations.
//!
//! [`DepthCounter`] bounds plain recursion depth (union-to-tuple conversion).
//! [`RecursionGuard`] adds cycle detection on top of it for relations that
//! may revisit the same pair of types.

use rustc_hash::FxHashSet;
use std::hash::Hash;

use bienum_common::limits::MAX_INSTANTIATION_DEPTH;

/// Outcome of [`RecursionGuard::enter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionResult {
    /// Proceed with the computation.
    Entered,
    /// This key is already being visited.
    Cycle,
    DepthExceeded,
}

impl RecursionResult {
    #[inline]
    pub fn is_entered(self) -> bool {
        matches!(self, RecursionResult::Entered)
    }
}

/// Depth limiting with cycle detection.
pub struct RecursionGuard<K: Hash + Eq + Copy> {
    visiting: FxHashSet<K>,
    depth: u32,
    max_depth: u32,
    exceeded: bool,
}

impl<K: Hash + Eq + Copy> RecursionGuard<K> {
    pub fn new(max_depth: u32) -> Self {
        RecursionGuard {
            visiting: FxHashSet::default(),
            depth: 0,
            max_depth,
            exceeded: false,
        }
    }

    pub fn enter(&mut self, key: K) -> RecursionResult {
        if self.depth >= self.max_depth {
            self.exceeded = true;
            return RecursionResult::DepthExceeded;
        }
        if !self.visiting.insert(key) {
            return RecursionResult::Cycle;
        }
        self.depth += 1;
        RecursionResult::Entered
    }

    pub fn leave(&mut self, key: K) {
        if self.visiting.remove(&key) {
            self.depth = self.depth.saturating_sub(1);
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn is_exceeded(&self) -> bool {
        self.exceeded
    }
}

impl<K: Hash + Eq + Copy> Default for RecursionGuard<K> {
    fn default() -> Self {
        Self::new(MAX_INSTANTIATION_DEPTH)
    }
}

/// Plain depth limiting.
#[derive(Debug)]
pub struct DepthCounter {
    depth: u32,
    max_depth: u32,
    exceeded: bool,
}

impl DepthCounter {
    pub fn new(max_depth: u32) -> Self {
        DepthCounter {
            depth: 0,
            max_depth,
            exceeded: false,
        }
    }

    /// Returns `false` (and marks the counter exceeded) at the limit.
    pub fn enter(&mut self) -> bool {
        if self.depth >= self.max_depth {
            self.exceeded = true;
            return false;
        }
        self.depth += 1;
        true
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn is_exceeded(&self) -> bool {
        self.exceeded
    }

    pub fn mark_exceeded(&mut self) {
        self.exceeded = true;
    }
}

impl Default for DepthCounter {
    fn default() -> Self {
        Self::new(MAX_INSTANTIATION_DEPTH)
    }
}

#[cfg(test)]
#[path = "../tests/recursion_tests.rs"]
mod tests;
