//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive value types used throughout the
//! crate: ordered keys, the key space that mints them, and the shared
//! error type. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Collection
//!   ↓
//! Layer 2: Ordering
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Ordered key value type.
pub mod key;

/// Key spaces: step counts, multipliers, and deterministic generation.
pub mod keyspace;

/// Shared error types.
pub mod errors;
