//! Unqualified-name resolver: the slow path for names with no installed binding.

use tagcall_core::lang::naming;

use super::scope::{Lookup, ScopePath, ScopeTree};
use crate::config::DispatchConfig;
use crate::engine::{RenderMode, Target};
use crate::errors::DispatchError;

/// A successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub target: Target,
    pub mode: RenderMode,
}

/// Resolve `name` against `caller_scope` without consulting the binding table.
///
/// A name ending in `_as_node` is stripped and the remainder resolves in detached mode. Anything else resolves
/// in attach mode. The lookup stays in `caller_scope` (plus the root scope when `root_fallback` is set); it
/// never walks the enclosing scopes.
///
/// ## Returns
/// - `Ok(Some(_))` on a match.
/// - `Ok(None)` when nothing matched; the caller turns this into [`DispatchError::NoSuchTarget`].
///
/// ## Errors
/// - [`DispatchError::NotAComponent`] when the name resolves to a type without the render capability.
pub fn resolve(
    tree: &ScopeTree,
    config: &DispatchConfig,
    caller_scope: &ScopePath,
    name: &str,
) -> Result<Option<Resolved>, DispatchError> {
    let (lookup_name, mode) = match naming::strip_as_node(name) {
        Some(base) if config.legacy_as_node => (base, RenderMode::Detached),
        _ => (name, RenderMode::Attach),
    };

    let found = match tree.lookup(caller_scope, lookup_name)? {
        Lookup::Found(target) => Some(target),
        Lookup::NotFound if config.root_fallback && !caller_scope.is_root() => {
            match tree.lookup(&ScopePath::root(), lookup_name)? {
                Lookup::Found(target) => Some(target),
                Lookup::NotFound => None,
            }
        }
        Lookup::NotFound => None,
    };

    if found.is_none() && config.trace_misses {
        tracing::debug!(%caller_scope, call = name, "no call target matched; falling back to the host default");
    }
    Ok(found.map(|target| Resolved { target, mode }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentType;

    fn tree() -> ScopeTree {
        let mut tree = ScopeTree::new();
        tree.declare(ComponentType::named("Page::Header"));
        tree.declare(ComponentType::plain("Page::Helper"));
        tree.declare(ComponentType::named("Layout"));
        tree
    }

    #[test]
    fn plain_name_resolves_attach() {
        let resolved = resolve(&tree(), &DispatchConfig::default(), &ScopePath::parse("Page"), "Header").unwrap();
        assert_eq!(
            resolved,
            Some(Resolved {
                target: Target::Component(ComponentType::named("Page::Header")),
                mode: RenderMode::Attach,
            })
        );
    }

    #[test]
    fn as_node_suffix_resolves_detached() {
        let resolved = resolve(
            &tree(),
            &DispatchConfig::default(),
            &ScopePath::parse("Page"),
            "Header_as_node",
        )
        .unwrap()
        .unwrap();
        assert_eq!(resolved.mode, RenderMode::Detached);
        assert_eq!(resolved.target.name(), "Page::Header");
    }

    #[test]
    fn as_node_suffix_is_literal_without_legacy() {
        let config = DispatchConfig::new().with_legacy_as_node(false);
        let resolved = resolve(&tree(), &config, &ScopePath::parse("Page"), "Header_as_node").unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn miss_is_not_an_error() {
        let resolved = resolve(&tree(), &DispatchConfig::default(), &ScopePath::parse("Page"), "Footer").unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn stripped_miss_does_not_retry_full_name() {
        let mut tree = tree();
        tree.declare(ComponentType::named("Page::Odd_as_node"));
        let resolved = resolve(&tree, &DispatchConfig::default(), &ScopePath::parse("Page"), "Odd_as_node").unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn non_rendering_member_is_rejected() {
        let err = resolve(&tree(), &DispatchConfig::default(), &ScopePath::parse("Page"), "Helper").unwrap_err();
        assert_eq!(err, DispatchError::NotAComponent { name: "Helper".into() });

        let err = resolve(
            &tree(),
            &DispatchConfig::default(),
            &ScopePath::parse("Page"),
            "Helper_as_node",
        )
        .unwrap_err();
        assert_eq!(err, DispatchError::NotAComponent { name: "Helper".into() });
    }

    #[test]
    fn no_ascent_without_root_fallback() {
        let scope = ScopePath::parse("Page");
        assert_eq!(resolve(&tree(), &DispatchConfig::default(), &scope, "Layout").unwrap(), None);

        let config = DispatchConfig::new().with_root_fallback(true);
        let resolved = resolve(&tree(), &config, &scope, "Layout").unwrap().unwrap();
        assert_eq!(resolved.target.name(), "Layout");

        // Intermediate scopes are still skipped.
        let deep = ScopePath::parse("Page::Inner");
        assert_eq!(resolve(&tree(), &config, &deep, "Header").unwrap(), None);
    }
}
