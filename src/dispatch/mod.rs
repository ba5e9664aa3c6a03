//! Call dispatch.
//!
//! A [`Registry`] owns the scope tree and the binding table. It is built once during program initialization
//! (vocabulary installation happens in the constructor, then components are declared and adopted) and is
//! read-only afterwards. A [`Dispatcher`] borrows the registry together with an engine and a host output
//! routine and exposes the call surface.
//!
//! ## Resolution order for [`Dispatcher::call`]
//!
//! 1. vocabulary bindings (`div`, `DIV`, `div_as_node`, ...);
//! 2. scoped bindings on the caller scope, then on each enclosing scope (nearest first);
//! 3. the unqualified-name resolver, against the caller scope only.
//!
//! Steps 1 and 2 are the fast path; step 3 either dispatches or fails with [`DispatchError::NoSuchTarget`].

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod adoption;
pub mod bindings;
pub mod resolver;
pub mod scope;

pub use adoption::ScopeRegistration;
pub use bindings::{BindingTable, Callable};
pub use resolver::Resolved;
pub use scope::{Lookup, ScopePath, ScopeTree};

use tagcall_core::lang::collision::{CallShape, HostRoutineId, ParamShape};

use crate::component::{Component, ComponentType};
use crate::config::DispatchConfig;
use crate::engine::{Block, HostOutput, Invocation, Param, Params, RenderMode, RenderingEngine, Target};
use crate::errors::DispatchError;

/// Result of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome<N> {
    /// The engine produced a node.
    Node(N),
    /// An ambiguous spelling went to the host output routine; the parameters are handed back.
    HostOutput(Params),
}

impl<N> CallOutcome<N> {
    pub fn into_node(self) -> Option<N> {
        match self {
            CallOutcome::Node(node) => Some(node),
            CallOutcome::HostOutput(_) => None,
        }
    }
}

/// Scope tree plus binding table.
#[derive(Debug)]
pub struct Registry {
    config: DispatchConfig,
    tree: ScopeTree,
    bindings: BindingTable,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Registry with the default configuration and the vocabulary installed.
    pub fn new() -> Self {
        Self::with_config(DispatchConfig::default())
    }

    pub fn with_config(config: DispatchConfig) -> Self {
        let mut bindings = BindingTable::new();
        bindings.install_vocabulary(&config);
        Self {
            config,
            tree: ScopeTree::new(),
            bindings,
        }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn tree(&self) -> &ScopeTree {
        &self.tree
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    /// Declare a type in its lexical parent without adopting it.
    ///
    /// Declared types are visible to the unqualified-name resolver only.
    pub fn declare(&mut self, ty: ComponentType) -> Option<ScopePath> {
        self.tree.declare(ty)
    }

    /// Declare `component` and install its parent-scope bindings.
    ///
    /// ## Returns
    /// - The registrations that were applied. Empty for anonymous and top-level components, and for types
    ///   without the render capability, which are only declared so that calling them by name fails with
    ///   [`DispatchError::NotAComponent`].
    ///
    /// ## Notes
    /// - Adopting the same component again redefines the same bindings; the last registration wins.
    #[tracing::instrument(skip_all, fields(component = %component))]
    pub fn adopt(&mut self, component: ComponentType) -> Vec<ScopeRegistration> {
        let registrations = adoption::registrations_for(&component, &self.config);
        self.tree.declare(component);

        if registrations.is_empty() {
            tracing::debug!("not renderable or no lexical parent; nothing installed");
        }
        for registration in &registrations {
            self.apply(registration.clone());
        }
        registrations
    }

    /// Adopt a Rust type implementing [`Component`].
    pub fn adopt_component<C: Component>(&mut self) -> Vec<ScopeRegistration> {
        self.adopt(ComponentType::of::<C>())
    }

    /// Apply one registration descriptor to the binding table.
    ///
    /// ## Returns
    /// - The callable it replaced, if any.
    pub fn apply(&mut self, registration: ScopeRegistration) -> Option<Callable> {
        let ScopeRegistration { parent, name, callable } = registration;
        let scope = parent.clone();
        let previous = self.bindings.define(parent, name.as_str(), callable);
        if previous.is_some() {
            tracing::debug!(%scope, binding = %name, "redefined existing binding");
        }
        previous
    }

    pub fn dispatcher<'r, E, H>(&'r self, engine: &'r mut E, host: &'r mut H) -> Dispatcher<'r, E, H>
    where
        E: RenderingEngine,
        H: HostOutput,
    {
        Dispatcher {
            registry: self,
            engine,
            host,
        }
    }
}

/// The call surface.
pub struct Dispatcher<'r, E, H> {
    registry: &'r Registry,
    engine: &'r mut E,
    host: &'r mut H,
}

impl<'r, E, H> Dispatcher<'r, E, H>
where
    E: RenderingEngine,
    H: HostOutput,
{
    /// Invoke `name` from `caller_scope`.
    ///
    /// ## Errors
    /// - [`DispatchError::NotAComponent`] when the name resolves to a type without the render capability.
    /// - [`DispatchError::NoSuchTarget`] when nothing matches; carries the name and parameters.
    pub fn call(
        &mut self,
        caller_scope: &ScopePath,
        name: &str,
        params: Params,
        block: Option<Block<'_>>,
    ) -> Result<CallOutcome<E::Node>, DispatchError> {
        let registry = self.registry;

        if let Some(callable) = registry.bindings.vocabulary(name) {
            return self.invoke(name, callable, params, block);
        }
        if let Some((_, callable)) = registry.bindings.nearest(caller_scope, name) {
            return self.invoke(name, callable, params, block);
        }

        match resolver::resolve(&registry.tree, &registry.config, caller_scope, name)? {
            Some(Resolved { target, mode }) => Ok(CallOutcome::Node(
                self.engine.render(mode, Invocation::new(target, params, block)),
            )),
            None => Err(DispatchError::NoSuchTarget {
                name: name.to_owned(),
                scope: caller_scope.clone(),
                params,
            }),
        }
    }

    /// Invoke a binding installed on exactly `scope` (the `Bar::Foo(...)` form).
    ///
    /// ## Errors
    /// - [`DispatchError::NoSuchTarget`] when `scope` has no binding named `name`.
    /// - [`DispatchError::NotAComponent`] when the binding targets a type without the render capability.
    pub fn call_qualified(
        &mut self,
        scope: &ScopePath,
        name: &str,
        params: Params,
        block: Option<Block<'_>>,
    ) -> Result<CallOutcome<E::Node>, DispatchError> {
        let registry = self.registry;
        match registry.bindings.scoped(scope, name) {
            Some(callable) => self.invoke(name, callable, params, block),
            None => Err(DispatchError::NoSuchTarget {
                name: name.to_owned(),
                scope: scope.clone(),
                params,
            }),
        }
    }

    /// Render `target` in attach mode, without name resolution.
    pub fn present(&mut self, target: impl Into<Target>, params: Params, block: Option<Block<'_>>) -> E::Node {
        self.engine.attach(Invocation::new(target.into(), params, block))
    }

    /// Render `target` in detached mode, without name resolution.
    pub fn present_as_node(
        &mut self,
        target: impl Into<Target>,
        params: Params,
        block: Option<Block<'_>>,
    ) -> E::Node {
        self.engine.build_detached(Invocation::new(target.into(), params, block))
    }

    /// Tag spelling bound to an upper-cased constant (`DIV` is `"div"`).
    pub fn constant(&self, name: &str) -> Option<&'static str> {
        self.registry.bindings.constant(name)
    }

    fn invoke(
        &mut self,
        name: &str,
        callable: &Callable,
        params: Params,
        block: Option<Block<'_>>,
    ) -> Result<CallOutcome<E::Node>, DispatchError> {
        match callable {
            Callable::Render { target, mode } => {
                if let Some(component) = target.as_component().filter(|c| !c.exposes_render()) {
                    return Err(DispatchError::NotAComponent {
                        name: component.simple_name().unwrap_or(name).to_owned(),
                    });
                }
                Ok(CallOutcome::Node(
                    self.engine.render(*mode, Invocation::new(target.clone(), params, block)),
                ))
            }
            Callable::Ambiguous { tag, routine } => {
                let shape = CallShape::new(block.is_some(), params.iter().map(param_shape));
                if shape.renders_tag() {
                    return Ok(CallOutcome::Node(
                        self.engine.attach(Invocation::new(Target::tag(*tag), params, block)),
                    ));
                }
                match routine {
                    HostRoutineId::Inspect => self.host.inspect(&params),
                }
                Ok(CallOutcome::HostOutput(params))
            }
        }
    }
}

fn param_shape(param: &Param) -> ParamShape {
    if param.is_object() {
        ParamShape::Mapping
    } else {
        ParamShape::Other
    }
}
