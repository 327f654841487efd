//! Error types for ordered-key operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building
//! key spaces and collections, populating them, and sorting under a bound
//! strategy.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values.
//! * **No-std**: All payloads are `Copy` or `'static`, so the type needs
//!   neither `std` nor `alloc`.
//! * **Trait Implementation**: Implements `Display` and
//!   `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Construction validation**: Step counts and populate counts.
//! 2. **Builder validation**: Duplicate or missing parameters.
//! 3. **Ordering faults**: A comparator panic trapped during a checked
//!    sort.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for ordered-key operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdkeyError {
    /// A key-space step count is below the minimum of 1.
    InvalidSteps {
        /// Component axis the step count belongs to (`"a"`, `"b"`, `"c"`).
        axis: &'static str,
        /// The step count provided.
        got: i32,
    },

    /// A negative key count was requested from `populate`.
    InvalidCount(i32),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// `build` was called without selecting an ordering strategy.
    MissingStrategy,

    /// A checked sort trapped a panic raised through the bound comparator.
    OrderingFault {
        /// Name of the strategy the collection was bound to.
        strategy: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for OrdkeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidSteps { axis, got } => {
                write!(f, "Invalid step count for {axis}: {got} (must be at least 1)")
            }
            Self::InvalidCount(count) => {
                write!(f, "Invalid key count: {count} (must be non-negative)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::MissingStrategy => {
                write!(f, "No ordering strategy selected (set one before building)")
            }
            Self::OrderingFault { strategy } => {
                write!(
                    f,
                    "Ordering contract violation: strategy '{strategy}' is not a strict weak ordering and the sort rejected it"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for OrdkeyError {}
