//! Layer 3: Collection
//!
//! # Purpose
//!
//! This layer provides the strategy-bound key sequence: a collection that
//! selects one ordering strategy at construction, binds its comparison
//! function once, and exposes insert, render, and sort operations over
//! the active sequence.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Collection ← You are here
//!   ↓
//! Layer 2: Ordering
//!   ↓
//! Layer 1: Primitives
//! ```

/// Strategy-bound key sequences.
pub mod keyed;
