//! Dispatch errors.
//!
//! Both kinds are fatal and reported synchronously from the call that triggered them. Nothing in this crate
//! retries a failed resolution.

use miette::Diagnostic;
use thiserror::Error;

use crate::dispatch::ScopePath;
use crate::engine::Params;

#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum DispatchError {
    /// A looked-up name resolved to a type without the render capability.
    #[error("{name} does not appear to be a react component.")]
    #[diagnostic(
        code(tagcall::not_a_component),
        help("implement `Component` for the type, or rename it so it does not shadow a call target")
    )]
    NotAComponent { name: String },

    /// No binding, no component lookup match.
    #[error("undefined call target `{name}` in scope {scope} ({} parameter(s))", .params.len())]
    #[diagnostic(
        code(tagcall::no_such_target),
        help("adopt the component, declare it in the calling scope, or call it with its qualified parent")
    )]
    NoSuchTarget {
        name: String,
        scope: ScopePath,
        params: Params,
    },
}

impl DispatchError {
    /// The name the failing call used.
    pub fn name(&self) -> &str {
        match self {
            DispatchError::NotAComponent { name } | DispatchError::NoSuchTarget { name, .. } => name,
        }
    }
}
