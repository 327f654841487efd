//! Layer 2: Ordering
//!
//! # Purpose
//!
//! This layer provides the two comparison strategies a collection can be
//! bound to, and the function-pointer type the binding uses:
//!
//! - **Lexicographic**: a valid strict weak ordering over `(a, b, c)`.
//! - **FlawedSinglePass**: an intentionally invalid comparator, kept as
//!   the subject of the demonstration and never repaired.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Collection
//!   ↓
//! Layer 2: Ordering ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::key::OrderedKey;

/// The valid lexicographic comparison.
pub mod lexicographic;

/// The invalid single-pass comparison.
pub mod single_pass;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a bound "less than" comparison over keys.
///
/// Comparators read only the integer components, never the scalar, so the
/// scalar type is unconstrained here.
pub type KeyLessFn<T> = fn(&OrderedKey<T>, &OrderedKey<T>) -> bool;

// ============================================================================
// Strategy Selection
// ============================================================================

/// The ordering strategy a collection is bound to at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OrderingStrategy {
    /// Compare `a`; on a tie compare `b`; on a tie compare `c`. A valid
    /// strict weak ordering, safe for any standard sorting algorithm.
    Lexicographic,

    /// Return true on the first component where `x` is below `y`, in a
    /// single pass. NOT a strict weak ordering: it violates asymmetry and
    /// transitivity, and sorting under it is outside the sort's contract.
    FlawedSinglePass,
}

impl OrderingStrategy {
    /// Resolve the strategy to its comparison function.
    ///
    /// The returned pointer is what a collection binds at construction;
    /// call sites never branch on the strategy again.
    #[inline]
    pub fn less_fn<T>(self) -> KeyLessFn<T> {
        match self {
            Self::Lexicographic => lexicographic::less,
            Self::FlawedSinglePass => single_pass::less,
        }
    }

    /// Stable name used in diagnostics.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Self::Lexicographic => "lexicographic",
            Self::FlawedSinglePass => "flawed-single-pass",
        }
    }

    /// Whether the strategy satisfies the strict-weak-ordering contract
    /// generic sorts rely on.
    #[inline]
    pub fn is_strict_weak(self) -> bool {
        matches!(self, Self::Lexicographic)
    }
}

impl Display for OrderingStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}
