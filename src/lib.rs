#![forbid(unsafe_code)]
//! Tag and component call dispatch for rendering engines.
//!
//! `tagcall` lets a caller invoke a symbolic identifier (a markup tag such as `div`, or a component's simple
//! name such as `Foo`) and routes the invocation to a rendering engine's construction entry point, in attach
//! mode or detached mode. The rendering engine itself is an external collaborator
//! ([`engine::RenderingEngine`]); this crate owns only the resolution policy.
//!
//! ## Layout
//!
//! - [`engine`]: the collaborator interface (targets, invocations, blocks, host output).
//! - [`component`]: the render capability marker and component type descriptors.
//! - [`dispatch`]: scopes, the binding table, scope adoption, the unqualified-name resolver, and the
//!   [`Dispatcher`] call surface.
//! - [`config`]: dispatch configuration.
//! - [`cli`]: the `tagcall` command line.
//!
//! ## Panic Policy
//!
//! - **Production code**: lookups return `Result`/`Option`; `dispatch` and `cli` enforce
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use serde_json::json;
//! use tagcall::dispatch::{Registry, ScopePath};
//! use tagcall::engine::recording::{RecordingEngine, RecordingHost};
//! use tagcall::engine::RenderMode;
//!
//! let registry = Registry::new();
//! let mut engine = RecordingEngine::new();
//! let mut host = RecordingHost::new();
//!
//! registry
//!     .dispatcher(&mut engine, &mut host)
//!     .call(&ScopePath::root(), "div", vec![json!({"class": "box"})], None)
//!     .unwrap();
//!
//! assert_eq!(engine.calls()[0].mode, RenderMode::Attach);
//! assert_eq!(engine.calls()[0].target.name(), "div");
//! ```

pub mod cli;
pub mod component;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod errors;

pub use component::{Component, ComponentType};
pub use config::DispatchConfig;
pub use dispatch::{CallOutcome, Dispatcher, Registry, ScopePath};
pub use errors::DispatchError;
