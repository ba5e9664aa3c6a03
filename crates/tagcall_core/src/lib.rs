//! Provide the canonical tag vocabulary and pure naming helpers for `tagcall`.
//!
//! This crate is intentionally small and dependency-free. It holds the deterministic pieces that both the
//! dispatcher and tooling (CLI listings, generated reference tables) must agree on:
//! - the ordered tag vocabulary (document markup and vector graphics),
//! - the deprecated `_as_node` spelling and qualified-path splitting,
//! - the single host-routine collision and its call-shape classification.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, no engine types.

pub mod lang;
