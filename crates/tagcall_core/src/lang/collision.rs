//! Host-routine collisions in the tag vocabulary.
//!
//! Exactly one tag, `p`, shares its name with a commonly available host output routine. A call spelled `p(...)`
//! is ambiguous, and the call shape decides which one is meant. The rule is load-bearing for existing call sites
//! and must not be simplified:
//!
//! - a nested-content block is supplied, **or**
//! - zero positional parameters are supplied, **or**
//! - exactly one positional parameter is supplied and it is a key/value mapping
//!
//! renders the `p` tag. Every other shape goes to the host output routine.
//!
//! ## Examples
//! ```rust
//! use tagcall_core::lang::collision::{CallShape, ParamShape};
//!
//! assert!(CallShape::new(false, []).renders_tag());
//! assert!(CallShape::new(false, [ParamShape::Mapping]).renders_tag());
//! assert!(!CallShape::new(false, [ParamShape::Other]).renders_tag());
//! assert!(CallShape::new(true, [ParamShape::Other, ParamShape::Other]).renders_tag());
//! ```

/// Host routine a tag collides with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostRoutineId {
    /// Print a debug representation of each argument to standard output.
    Inspect,
}

/// A tag whose name collides with a host routine.
#[derive(Debug, Clone, Copy)]
pub struct HostCollision {
    pub tag: &'static str,
    pub routine: HostRoutineId,
    pub description: &'static str,
}

/// Registry of all collisions.
pub const HOST_COLLISIONS: &[HostCollision] = &[HostCollision {
    tag: "p",
    routine: HostRoutineId::Inspect,
    description: "Renders the tag with a block, no parameters, or a single attribute mapping; otherwise prints.",
}];

/// Collision metadata for `tag`, if any.
pub fn collision_for(tag: &str) -> Option<&'static HostCollision> {
    HOST_COLLISIONS.iter().find(|c| c.tag == tag)
}

/// Classification of one positional parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamShape {
    /// A key/value mapping (attribute bag).
    Mapping,
    /// Anything else.
    Other,
}

/// The shape of a call, as far as the collision rule cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallShape {
    pub has_block: bool,
    pub param_count: usize,
    pub first: Option<ParamShape>,
}

impl CallShape {
    pub fn new(has_block: bool, params: impl IntoIterator<Item = ParamShape>) -> Self {
        let mut param_count = 0;
        let mut first = None;
        for shape in params {
            if param_count == 0 {
                first = Some(shape);
            }
            param_count += 1;
        }
        Self {
            has_block,
            param_count,
            first,
        }
    }

    /// Whether an ambiguous call of this shape renders the tag rather than calling the host routine.
    pub fn renders_tag(&self) -> bool {
        self.has_block
            || self.param_count == 0
            || (self.param_count == 1 && self.first == Some(ParamShape::Mapping))
    }
}
