//! Rendering engine interface.
//!
//! The engine owns tree building and diffing; this crate only decides *what* to hand it and in which mode.
//! Every dispatch ends in exactly one [`RenderingEngine::attach`] or [`RenderingEngine::build_detached`] call
//! (or, for the ambiguous `p` spelling, one [`HostOutput::inspect`] call).

pub mod recording;

use std::borrow::Cow;
use std::fmt;

use crate::component::ComponentType;

/// A positional call parameter. Mappings (`Value::Object`) are attribute bags.
pub type Param = serde_json::Value;

/// Positional call parameters, in call order.
pub type Params = Vec<Param>;

/// Which engine entry point a callable forwards to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Render and insert into the ambient construction context.
    Attach,
    /// Render without insertion; the caller places the node.
    Detached,
}

impl RenderMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Attach => "attach",
            RenderMode::Detached => "detached",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the engine is asked to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A tag spelling, passed through verbatim.
    Tag(Cow<'static, str>),
    /// A component type; the engine introspects it.
    Component(ComponentType),
}

impl Target {
    /// Tag target from a vocabulary spelling.
    pub const fn tag(spelling: &'static str) -> Self {
        Target::Tag(Cow::Borrowed(spelling))
    }

    /// Tag spelling or component qualified name, for diagnostics.
    pub fn name(&self) -> &str {
        match self {
            Target::Tag(tag) => tag,
            Target::Component(component) => component.display_name(),
        }
    }

    pub fn as_component(&self) -> Option<&ComponentType> {
        match self {
            Target::Component(component) => Some(component),
            Target::Tag(_) => None,
        }
    }
}

impl From<&'static str> for Target {
    fn from(spelling: &'static str) -> Self {
        Target::tag(spelling)
    }
}

impl From<String> for Target {
    fn from(spelling: String) -> Self {
        Target::Tag(Cow::Owned(spelling))
    }
}

impl From<ComponentType> for Target {
    fn from(component: ComponentType) -> Self {
        Target::Component(component)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Nested content supplied with a call.
///
/// The block is opaque to the dispatcher. Engines decide when (and whether) to run it, typically while their
/// ambient construction context points at the node being built.
pub struct Block<'a> {
    build: Box<dyn FnOnce() + 'a>,
}

impl<'a> Block<'a> {
    pub fn new(build: impl FnOnce() + 'a) -> Self {
        Self { build: Box::new(build) }
    }

    pub fn run(self) {
        (self.build)()
    }
}

impl fmt::Debug for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Block(..)")
    }
}

/// One call, as handed to the engine. Consumed by the engine call and never stored by this crate.
#[derive(Debug)]
pub struct Invocation<'a> {
    pub target: Target,
    pub params: Params,
    pub block: Option<Block<'a>>,
}

impl<'a> Invocation<'a> {
    pub fn new(target: Target, params: Params, block: Option<Block<'a>>) -> Self {
        Self { target, params, block }
    }
}

/// The rendering engine collaborator.
pub trait RenderingEngine {
    type Node;

    /// Render `invocation.target` and attach it into the ambient construction context.
    fn attach(&mut self, invocation: Invocation<'_>) -> Self::Node;

    /// Construct `invocation.target` without attaching it.
    fn build_detached(&mut self, invocation: Invocation<'_>) -> Self::Node;

    /// Forward to the entry point selected by `mode`.
    fn render(&mut self, mode: RenderMode, invocation: Invocation<'_>) -> Self::Node {
        match mode {
            RenderMode::Attach => self.attach(invocation),
            RenderMode::Detached => self.build_detached(invocation),
        }
    }
}

/// The host output routine that shares its name with the `p` tag.
pub trait HostOutput {
    /// Print a debug representation of each parameter.
    fn inspect(&mut self, params: &[Param]);
}

/// Writes each parameter on its own line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutHost;

impl HostOutput for StdoutHost {
    fn inspect(&mut self, params: &[Param]) {
        for param in params {
            println!("{param}");
        }
    }
}
