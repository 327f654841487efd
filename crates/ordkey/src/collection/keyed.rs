//! Strategy-bound key sequences.
//!
//! ## Purpose
//!
//! This module provides [`KeyedCollection`], a sequence of keys held under
//! exactly one ordering strategy. The strategy is chosen at construction
//! and its comparison function is bound once; insert, render, and sort all
//! run against that single binding with no further branching at call
//! sites.
//!
//! ## Design notes
//!
//! * **Bound dispatch**: The comparator is a plain function pointer
//!   resolved from the strategy in the constructor.
//! * **Unstable sort**: `sort` uses the standard unstable sort; no
//!   stability guarantee is offered beyond what the bound strategy
//!   provides (none, for the flawed strategy).
//! * **Checked sorting**: `sort_checked` (std only) wraps the sort in an
//!   unwind boundary so a comparator-induced panic surfaces as an error
//!   value instead of propagating.
//!
//! ## Invariants
//!
//! * A collection never mixes strategies within one instance; there is no
//!   way to rebind after construction.
//! * Inserted keys keep sequence order until a sort.
//! * After a panic trapped by `sort_checked`, the sequence is still a
//!   permutation of the inserted keys (standard sorts are panic-safe).
//!
//! ## Non-goals
//!
//! * This module does not validate component ranges on insert.
//! * This module does not repair the flawed strategy's contract
//!   violations; surviving them is the caller's concern.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::ordering::{KeyLessFn, OrderingStrategy};
use crate::primitives::errors::OrdkeyError;
use crate::primitives::key::OrderedKey;
use crate::primitives::keyspace::KeySpace;

// ============================================================================
// Collection Type
// ============================================================================

/// A key sequence bound to one ordering strategy for its lifetime.
#[derive(Clone, Debug)]
pub struct KeyedCollection<T> {
    // Strategy tag, fixed at construction.
    strategy: OrderingStrategy,

    // Comparison function bound once from the strategy.
    less: KeyLessFn<T>,

    // Key space used to mint inserted keys.
    space: KeySpace,

    // The active sequence.
    keys: Vec<OrderedKey<T>>,
}

impl<T: Float> KeyedCollection<T> {
    /// Create an empty collection bound to `strategy` over the default
    /// key space.
    pub fn new(strategy: OrderingStrategy) -> Self {
        Self::with_space(strategy, KeySpace::default())
    }

    /// Create an empty collection bound to `strategy` over `space`.
    pub fn with_space(strategy: OrderingStrategy, space: KeySpace) -> Self {
        Self {
            strategy,
            less: strategy.less_fn(),
            space,
            keys: Vec::new(),
        }
    }

    /// Create an empty collection with preallocated room for `capacity`
    /// keys.
    pub fn with_capacity(strategy: OrderingStrategy, space: KeySpace, capacity: usize) -> Self {
        let mut collection = Self::with_space(strategy, space);
        collection.keys.reserve(capacity);
        collection
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The strategy this collection was bound to.
    #[inline]
    pub fn strategy(&self) -> OrderingStrategy {
        self.strategy
    }

    /// The key space inserted keys are minted against.
    #[inline]
    pub fn space(&self) -> KeySpace {
        self.space
    }

    /// The active sequence, in current order.
    #[inline]
    pub fn keys(&self) -> &[OrderedKey<T>] {
        &self.keys
    }

    /// Number of keys held.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    // ========================================================================
    // Population
    // ========================================================================

    /// Append a key with the given components.
    ///
    /// The components are taken as-is; the key's scalar is derived by the
    /// collection's key space.
    pub fn insert(&mut self, a: i32, b: i32, c: i32) {
        let key = self.space.key(a, b, c);
        self.keys.push(key);
    }

    /// Append the deterministic index-key sequence for `1..=count`.
    pub fn populate(&mut self, count: i32) -> Result<(), OrdkeyError> {
        if count < 0 {
            return Err(OrdkeyError::InvalidCount(count));
        }

        self.keys.reserve(count as usize);
        for n in 1..=count {
            let key = self.space.index_key(n);
            self.keys.push(key);
        }

        Ok(())
    }

    // ========================================================================
    // Sorting
    // ========================================================================

    /// Sort the sequence under the bound strategy.
    ///
    /// Uses the standard unstable sort. With the flawed strategy bound,
    /// this call violates the sort's strict-weak-ordering precondition:
    /// the result order is unspecified and the sort may panic. Use
    /// [`sort_checked`](Self::sort_checked) to trap the panic path.
    pub fn sort(&mut self) {
        let less = self.less;
        self.keys.sort_unstable_by(|x, y| {
            if less(x, y) {
                Ordering::Less
            } else if less(y, x) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
    }

    /// Sort under the bound strategy, trapping a comparator-induced panic.
    ///
    /// A trapped panic is reported as
    /// [`OrdkeyError::OrderingFault`] naming the bound strategy. The
    /// sequence remains a permutation of the inserted keys either way.
    #[cfg(feature = "std")]
    pub fn sort_checked(&mut self) -> Result<(), OrdkeyError> {
        use std::panic::{AssertUnwindSafe, catch_unwind};

        catch_unwind(AssertUnwindSafe(|| self.sort())).map_err(|_| OrdkeyError::OrderingFault {
            strategy: self.strategy.name(),
        })
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl<T: Float + fmt::Display> KeyedCollection<T> {
    /// The numbered listing as owned lines, 1-based, in sequence order.
    pub fn lines(&self) -> Vec<String> {
        self.keys
            .iter()
            .enumerate()
            .map(|(n, key)| format!("{}: {}", n + 1, key))
            .collect()
    }
}

impl<T: Float + fmt::Display> fmt::Display for KeyedCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, key) in self.keys.iter().enumerate() {
            writeln!(f, "{}: {}", n + 1, key)?;
        }
        Ok(())
    }
}
