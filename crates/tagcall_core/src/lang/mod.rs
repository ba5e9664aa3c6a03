//! Tag vocabulary registries.
//!
//! This module is the "front door" for the call-surface vocabulary: recognized tags, their
//! upper-cased constants, the deprecated `_as_node` spelling, and the host collision rule.
//!
//! Callers work with the registry tables instead of scattering string checks across the dispatcher.
//!
//! ## Examples
//! ```rust
//! use tagcall_core::lang::tags;
//!
//! assert!(tags::is_tag("div"));
//! assert_eq!(tags::constant("DIV"), Some("div"));
//! assert_eq!(tags::DIV, "div");
//! ```

pub mod collision;
pub mod naming;
pub mod registry;
pub mod tags;
