//! Scope adoption: make a component callable by its simple name inside its lexical parent.
//!
//! Adoption does not mutate anything by itself. [`registrations_for`] computes the descriptors and the owner of
//! the binding table applies them (see [`super::Registry::adopt`]).

use tagcall_core::lang::naming;

use super::bindings::Callable;
use super::scope::ScopePath;
use crate::component::ComponentType;
use crate::config::DispatchConfig;
use crate::engine::RenderMode;

/// One binding to install on a component's parent scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeRegistration {
    pub parent: ScopePath,
    pub name: String,
    pub callable: Callable,
}

/// Compute the parent-scope bindings for `component`.
///
/// ## Returns
/// - The attach-mode binding named after the simple name, followed by the `_as_node` detached-mode binding
///   (when legacy spellings are enabled).
/// - Nothing for an anonymous or top-level component, or for a type without the render capability (the
///   resolver reports those as [`crate::DispatchError::NotAComponent`] instead).
///
/// ## Examples
/// ```rust
/// use tagcall::dispatch::adoption::registrations_for;
/// use tagcall::{ComponentType, DispatchConfig};
///
/// let regs = registrations_for(&ComponentType::named("Bar::Foo"), &DispatchConfig::default());
/// let names: Vec<&str> = regs.iter().map(|r| r.name.as_str()).collect();
/// assert_eq!(names, vec!["Foo", "Foo_as_node"]);
/// assert_eq!(regs[0].parent.to_string(), "Bar");
///
/// assert!(registrations_for(&ComponentType::named("Top"), &DispatchConfig::default()).is_empty());
/// ```
pub fn registrations_for(component: &ComponentType, config: &DispatchConfig) -> Vec<ScopeRegistration> {
    if !component.exposes_render() {
        return Vec::new();
    }
    let Some((simple, parent)) = component.qualified_name().and_then(naming::simple_name_and_parent) else {
        return Vec::new();
    };
    let parent = ScopePath::from_segments(parent);

    let mut registrations = vec![ScopeRegistration {
        parent: parent.clone(),
        name: simple.to_owned(),
        callable: Callable::render(component.clone(), RenderMode::Attach),
    }];
    if config.legacy_as_node {
        registrations.push(ScopeRegistration {
            parent,
            name: naming::as_node_name(simple),
            callable: Callable::render(component.clone(), RenderMode::Detached),
        });
    }
    registrations
}
