//! Scopes and the lookup helper.
//!
//! A [`ScopeTree`] is the in-memory namespace the embedding program declares its types into. Scopes are
//! addressed by [`ScopePath`]; a type declared as `Bar::Foo` is a member named `Foo` of scope `Bar`, and its
//! own nested members live in scope `Bar::Foo`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tagcall_core::lang::naming::{self, SCOPE_SEPARATOR};

use crate::component::ComponentType;
use crate::engine::Target;
use crate::errors::DispatchError;

/// Address of a scope, root first. The empty path is the root scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopePath(Vec<String>);

impl ScopePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Parse a `::`-separated path. Empty input is the root scope.
    pub fn parse(path: &str) -> Self {
        Self(naming::split_path(path).into_iter().map(str::to_owned).collect())
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn parent(&self) -> Option<ScopePath> {
        let (_, init) = self.0.split_last()?;
        Some(Self(init.to_vec()))
    }

    pub fn child(&self, name: impl Into<String>) -> ScopePath {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }

    /// This scope, then each enclosing scope, ending with the root.
    pub fn ancestors(&self) -> impl Iterator<Item = ScopePath> + '_ {
        (0..=self.0.len()).rev().map(|len| Self(self.0[..len].to_vec()))
    }
}

impl fmt::Display for ScopePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0.join(SCOPE_SEPARATOR))
        }
    }
}

/// Result of the lookup helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Target),
    NotFound,
}

/// Types declared per scope.
#[derive(Debug, Default)]
pub struct ScopeTree {
    members: HashMap<ScopePath, BTreeMap<String, ComponentType>>,
}

impl ScopeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `ty` as a member of its lexical parent (the root scope for a top-level path).
    ///
    /// ## Returns
    /// - The scope the type was declared in, or `None` for an anonymous type (nothing is declared).
    ///
    /// ## Notes
    /// - Redeclaring a name replaces the previous member.
    pub fn declare(&mut self, ty: ComponentType) -> Option<ScopePath> {
        let mut segments = ty.qualified_path();
        let name = segments.pop()?.to_owned();
        let scope = ScopePath::from_segments(segments);
        self.members.entry(scope.clone()).or_default().insert(name, ty);
        Some(scope)
    }

    /// Member `name` of `scope`, without ascending to enclosing scopes.
    pub fn member(&self, scope: &ScopePath, name: &str) -> Option<&ComponentType> {
        self.members.get(scope)?.get(name)
    }

    /// Members of `scope`, ordered by name.
    pub fn members(&self, scope: &ScopePath) -> impl Iterator<Item = (&str, &ComponentType)> {
        self.members
            .get(scope)
            .into_iter()
            .flat_map(|m| m.iter().map(|(name, ty)| (name.as_str(), ty)))
    }

    /// Resolve `name` as a member of `scope` to a renderable target.
    ///
    /// ## Returns
    /// - `Ok(Lookup::Found(_))` when the member exists and exposes the render capability.
    /// - `Ok(Lookup::NotFound)` when `scope` has no member `name`.
    ///
    /// ## Errors
    /// - [`DispatchError::NotAComponent`] when the member exists but does not render.
    pub fn lookup(&self, scope: &ScopePath, name: &str) -> Result<Lookup, DispatchError> {
        match self.member(scope, name) {
            None => Ok(Lookup::NotFound),
            Some(ty) if ty.exposes_render() => Ok(Lookup::Found(Target::Component(ty.clone()))),
            Some(_) => Err(DispatchError::NotAComponent { name: name.to_owned() }),
        }
    }
}
