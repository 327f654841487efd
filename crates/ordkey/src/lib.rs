//! # ordkey — ordered keys with selectable ordering strategies
//!
//! Three-component integer keys carrying a derived informational scalar,
//! collected under exactly one of two ordering strategies chosen at
//! construction time: a valid lexicographic strict weak ordering, or a
//! deliberately invalid single-pass comparator kept as a worked example of
//! what feeding a broken ordering to a standard sort does.
//!
//! ## Quick Start
//!
//! ```rust
//! use ordkey::prelude::*;
//!
//! // Build a collection bound to the valid ordering
//! let mut keys = Keyed::new().strategy(Lexicographic).build::<f64>()?;
//!
//! // Populate with the deterministic demonstration sequence
//! keys.populate(30)?;
//!
//! // Sort under the bound strategy and render the numbered listing
//! keys.sort();
//! print!("{}", keys);
//! # Result::<(), OrdkeyError>::Ok(())
//! ```
//!
//! ```text
//! 1: (0, 1, 9) 0.023529
//! 2: (0, 3, 13) 0.057919
//! 3: (1, 1, 1) 0.093213
//! ...
//! ```
//!
//! ## The invalid strategy
//!
//! `FlawedSinglePass` is not a strict weak ordering: it can report
//! `x < y` and `y < x` for the same pair and is not transitive. It exists
//! to be studied, not used. Sorting under it is outside the sort
//! algorithm's contract; the observable outcomes are a misordered result
//! or a panic raised by the sort's own order-consistency checks. The
//! `std`-only [`sort_checked`](prelude::KeyedCollection::sort_checked)
//! traps that panic and surfaces it as
//! [`OrdkeyError::OrderingFault`](prelude::OrdkeyError).
//!
//! ## Result and Error Handling
//!
//! Fallible operations return `Result<_, OrdkeyError>`; the `?` operator
//! is idiomatic:
//!
//! ```rust
//! use ordkey::prelude::*;
//!
//! let mut keys = Keyed::new()
//!     .strategy(FlawedSinglePass)
//!     .capacity(30)
//!     .build::<f64>()?;
//!
//! keys.populate(30)?;
//!
//! match keys.sort_checked() {
//!     Ok(()) => println!("sort completed (order unspecified)"),
//!     Err(e) => eprintln!("sort trapped: {}", e),
//! }
//! # Result::<(), OrdkeyError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to remove the standard library dependency;
//! the crate then uses `core` + `alloc`. `sort_checked` needs an unwind
//! boundary and is only available with the `std` feature.
//!
//! ```toml
//! [dependencies]
//! ordkey = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - keys, key spaces, and error types.
mod primitives;

// Layer 2: Ordering - the two comparison strategies.
mod ordering;

// Layer 3: Collection - strategy-bound key sequences.
mod collection;

// High-level fluent API for building collections.
mod api;

// Standard ordkey prelude.
pub mod prelude {
    pub use crate::api::{
        CollectionBuilder as Keyed,
        OrderingStrategy::{FlawedSinglePass, Lexicographic},
    };
    pub use crate::api::{KeyLessFn, KeySpace, KeyedCollection, OrderedKey, OrdkeyError};
    pub use crate::ordering::OrderingStrategy;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod ordering {
        pub use crate::ordering::*;
    }
    pub mod collection {
        pub use crate::collection::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
