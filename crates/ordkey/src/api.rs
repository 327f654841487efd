//! High-level API for building keyed collections.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring a collection and binding it to an ordering
//! strategy.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for everything
//!   except the strategy, which must be chosen explicitly.
//! * **Validated**: Duplicate parameters and a missing strategy are
//!   reported when `build` is called.
//! * **Type-Safe**: `build` is generic over `Float` scalar types.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`CollectionBuilder`] via `Keyed::new()` (prelude alias).
//! 2. Chain configuration methods (`.strategy()`, `.key_space()`,
//!    `.capacity()`).
//! 3. Call `.build::<T>()` to validate and bind the comparator once.
//!
//! ```rust
//! use ordkey::prelude::*;
//!
//! let keys = Keyed::new()
//!     .strategy(Lexicographic) // Bound for the collection's lifetime
//!     .capacity(30)            // Preallocate for the demo sequence
//!     .build::<f64>()?;
//!
//! assert!(keys.is_empty());
//! # Result::<(), OrdkeyError>::Ok(())
//! ```

// External dependencies
use num_traits::Float;

// Publicly re-exported types
pub use crate::collection::keyed::KeyedCollection;
pub use crate::ordering::{KeyLessFn, OrderingStrategy};
pub use crate::primitives::errors::OrdkeyError;
pub use crate::primitives::key::OrderedKey;
pub use crate::primitives::keyspace::KeySpace;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`KeyedCollection`].
#[derive(Clone, Debug, Default)]
pub struct CollectionBuilder {
    /// Ordering strategy the collection will be bound to.
    pub strategy: Option<OrderingStrategy>,

    /// Key space inserted keys are minted against (default `(13, 5, 17)`).
    pub key_space: Option<KeySpace>,

    /// Preallocated key capacity.
    pub capacity: Option<usize>,

    /// First parameter observed twice, reported at build time.
    duplicate: Option<&'static str>,
}

impl CollectionBuilder {
    /// Create a builder with no parameters set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the ordering strategy.
    pub fn strategy(mut self, strategy: OrderingStrategy) -> Self {
        if self.strategy.is_some() && self.duplicate.is_none() {
            self.duplicate = Some("strategy");
        }
        self.strategy = Some(strategy);
        self
    }

    /// Select the key space.
    pub fn key_space(mut self, space: KeySpace) -> Self {
        if self.key_space.is_some() && self.duplicate.is_none() {
            self.duplicate = Some("key_space");
        }
        self.key_space = Some(space);
        self
    }

    /// Preallocate room for `capacity` keys.
    pub fn capacity(mut self, capacity: usize) -> Self {
        if self.capacity.is_some() && self.duplicate.is_none() {
            self.duplicate = Some("capacity");
        }
        self.capacity = Some(capacity);
        self
    }

    /// Validate the configuration and build the collection.
    ///
    /// Fails on a duplicated parameter or a missing strategy; otherwise
    /// the comparator is bound here, once, for the collection's lifetime.
    pub fn build<T: Float>(self) -> Result<KeyedCollection<T>, OrdkeyError> {
        if let Some(parameter) = self.duplicate {
            return Err(OrdkeyError::DuplicateParameter { parameter });
        }

        let strategy = self.strategy.ok_or(OrdkeyError::MissingStrategy)?;
        let space = self.key_space.unwrap_or_default();
        let capacity = self.capacity.unwrap_or(0);

        Ok(KeyedCollection::with_capacity(strategy, space, capacity))
    }
}
