//! Key spaces: step counts, multipliers, and deterministic generation.
//!
//! ## Purpose
//!
//! This module defines [`KeySpace`], the configuration that mints
//! [`OrderedKey`] values: one step count (modulus) per component, the
//! per-position multipliers derived from them, and the deterministic
//! index-key sequence used by the demonstration programs.
//!
//! ## Design notes
//!
//! * **Validated**: Step counts below 1 are rejected at construction.
//! * **Derived weights**: The multipliers telescope — the first is the
//!   reciprocal of the first step count, each subsequent one divides the
//!   previous by the next step count.
//! * **Deterministic**: `index_key(n)` depends only on `n` and the step
//!   counts, so generated sequences are reproducible golden inputs.
//!
//! ## Key concepts
//!
//! * **Step counts**: With the default space `(13, 5, 17)`, index `n`
//!   yields components `(n mod 13, n mod 5, n mod 17)`.
//! * **Scalar projection**: `a/13 + b/65 + c/1105` for the default space.
//!
//! ## Invariants
//!
//! * All step counts are at least 1.
//! * `sequence(count)` returns exactly `count` keys, for indices
//!   `1..=count` in index order.
//!
//! ## Non-goals
//!
//! * This module does not compare or sort keys.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::OrdkeyError;
use crate::primitives::key::OrderedKey;

// ============================================================================
// Key Space
// ============================================================================

/// Step counts for the three key components.
///
/// A key space both bounds the components of generated keys (each is the
/// index reduced modulo its step count) and fixes the multipliers used for
/// the informational scalar carried by every minted key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeySpace {
    // Modulus for the first component.
    a_steps: i32,

    // Modulus for the second component.
    b_steps: i32,

    // Modulus for the third component.
    c_steps: i32,
}

impl Default for KeySpace {
    /// The demonstration space: `(13, 5, 17)`.
    fn default() -> Self {
        Self {
            a_steps: 13,
            b_steps: 5,
            c_steps: 17,
        }
    }
}

impl KeySpace {
    /// Create a key space with the given step counts.
    ///
    /// Each step count must be at least 1; validation fails fast on the
    /// first offending axis.
    pub fn new(a_steps: i32, b_steps: i32, c_steps: i32) -> Result<Self, OrdkeyError> {
        for (axis, got) in [("a", a_steps), ("b", b_steps), ("c", c_steps)] {
            if got < 1 {
                return Err(OrdkeyError::InvalidSteps { axis, got });
            }
        }

        Ok(Self {
            a_steps,
            b_steps,
            c_steps,
        })
    }

    /// Step count for the first component.
    #[inline]
    pub fn a_steps(&self) -> i32 {
        self.a_steps
    }

    /// Step count for the second component.
    #[inline]
    pub fn b_steps(&self) -> i32 {
        self.b_steps
    }

    /// Step count for the third component.
    #[inline]
    pub fn c_steps(&self) -> i32 {
        self.c_steps
    }

    // ========================================================================
    // Scalar Projection
    // ========================================================================

    /// The per-position multipliers for the scalar projection.
    ///
    /// The first multiplier is `1 / a_steps`, the second divides it by
    /// `b_steps`, the third divides that by `c_steps`.
    #[inline]
    pub fn multipliers<T: Float>(&self) -> (T, T, T) {
        let a_multiply = T::one() / T::from(self.a_steps).unwrap();
        let b_multiply = a_multiply / T::from(self.b_steps).unwrap();
        let c_multiply = b_multiply / T::from(self.c_steps).unwrap();
        (a_multiply, b_multiply, c_multiply)
    }

    // ========================================================================
    // Key Minting
    // ========================================================================

    /// Mint a key with the given components.
    ///
    /// The components are taken as-is (no range validation); the scalar is
    /// derived from them under this space's multipliers.
    pub fn key<T: Float>(&self, a: i32, b: i32, c: i32) -> OrderedKey<T> {
        let (a_multiply, b_multiply, c_multiply) = self.multipliers::<T>();
        let scalar = T::from(a).unwrap() * a_multiply
            + T::from(b).unwrap() * b_multiply
            + T::from(c).unwrap() * c_multiply;

        OrderedKey { a, b, c, scalar }
    }

    /// The deterministic key for index `n`.
    ///
    /// Each component is `n` reduced modulo the matching step count.
    #[inline]
    pub fn index_key<T: Float>(&self, n: i32) -> OrderedKey<T> {
        self.key(n % self.a_steps, n % self.b_steps, n % self.c_steps)
    }

    /// The deterministic key sequence for indices `1..=count`.
    pub fn sequence<T: Float>(&self, count: i32) -> Vec<OrderedKey<T>> {
        debug_assert!(count >= 0, "sequence: count must be non-negative");

        (1..=count).map(|n| self.index_key(n)).collect()
    }
}
