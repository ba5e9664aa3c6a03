//! The binding table: identifier to callable.
//!
//! Populated at two moments: vocabulary installation (when a [`super::Registry`] is created) and component
//! adoption. Entries are never removed. Re-adopting a component replaces its entries with equal ones.

use std::collections::HashMap;

use tagcall_core::lang::collision::{self, HostRoutineId};
use tagcall_core::lang::naming;
use tagcall_core::lang::tags;

use super::scope::ScopePath;
use crate::config::DispatchConfig;
use crate::engine::{RenderMode, Target};

/// A generated call target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callable {
    /// Forward to the engine entry point selected by `mode`, with a fixed target.
    Render { target: Target, mode: RenderMode },
    /// A tag spelling shared with a host routine; the call shape picks the branch.
    Ambiguous { tag: &'static str, routine: HostRoutineId },
}

impl Callable {
    pub fn render(target: impl Into<Target>, mode: RenderMode) -> Self {
        Callable::Render {
            target: target.into(),
            mode,
        }
    }

    /// The attach-mode callable for a vocabulary tag, honoring host collisions.
    pub fn for_tag(tag: &'static str) -> Self {
        match collision::collision_for(tag) {
            Some(c) => Callable::Ambiguous {
                tag: c.tag,
                routine: c.routine,
            },
            None => Callable::render(tag, RenderMode::Attach),
        }
    }
}

/// Identifier-to-callable mapping, split into the scope-independent vocabulary and per-scope entries.
#[derive(Debug, Default)]
pub struct BindingTable {
    vocabulary: HashMap<String, Callable>,
    constants: HashMap<&'static str, &'static str>,
    scoped: HashMap<ScopePath, HashMap<String, Callable>>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install every vocabulary tag.
    ///
    /// For each tag `t` this binds `t` and its upper-cased alias to the attach-mode callable (the ambiguous
    /// callable for `p`), `t_as_node` to the detached-mode callable when legacy spellings are enabled, and the
    /// upper-cased constant to the spelling `t`.
    ///
    /// ## Returns
    /// - The number of callable names bound.
    #[tracing::instrument(skip_all, fields(tag_count = tags::TAGS.len(), legacy_as_node = config.legacy_as_node))]
    pub fn install_vocabulary(&mut self, config: &DispatchConfig) -> usize {
        let before = self.vocabulary.len();

        for info in tags::TAGS {
            let callable = Callable::for_tag(info.canonical);
            self.vocabulary.insert(info.constant.to_owned(), callable.clone());
            self.vocabulary.insert(info.canonical.to_owned(), callable);
            self.constants.insert(info.constant, info.canonical);

            if config.legacy_as_node {
                self.vocabulary.insert(
                    naming::as_node_name(info.canonical),
                    Callable::render(info.canonical, RenderMode::Detached),
                );
            }
        }

        let installed = self.vocabulary.len() - before;
        tracing::debug!(installed, "vocabulary bindings installed");
        installed
    }

    /// Vocabulary callable bound to `name`.
    pub fn vocabulary(&self, name: &str) -> Option<&Callable> {
        self.vocabulary.get(name)
    }

    /// Tag spelling bound to the upper-cased constant `name`.
    pub fn constant(&self, name: &str) -> Option<&'static str> {
        self.constants.get(name).copied()
    }

    /// Bind `name` on `scope`.
    ///
    /// ## Returns
    /// - The callable previously bound to the same `(scope, name)`, if any. The new binding always wins.
    pub fn define(&mut self, scope: ScopePath, name: impl Into<String>, callable: Callable) -> Option<Callable> {
        self.scoped.entry(scope).or_default().insert(name.into(), callable)
    }

    /// Callable bound to exactly `(scope, name)`.
    pub fn scoped(&self, scope: &ScopePath, name: &str) -> Option<&Callable> {
        self.scoped.get(scope)?.get(name)
    }

    /// Callable bound to `name` on `scope` or the nearest enclosing scope that binds it.
    pub fn nearest(&self, scope: &ScopePath, name: &str) -> Option<(ScopePath, &Callable)> {
        scope
            .ancestors()
            .find_map(|candidate| self.scoped(&candidate, name).map(|callable| (candidate, callable)))
    }

    /// Number of bindings (vocabulary and scoped).
    pub fn len(&self) -> usize {
        self.vocabulary.len() + self.scoped.values().map(HashMap::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentType;

    #[test]
    fn vocabulary_binds_three_callables_per_tag() {
        let mut table = BindingTable::new();
        let installed = table.install_vocabulary(&DispatchConfig::default());
        assert_eq!(installed, tags::TAGS.len() * 3);

        assert_eq!(table.vocabulary("div"), Some(&Callable::render("div", RenderMode::Attach)));
        assert_eq!(table.vocabulary("DIV"), Some(&Callable::render("div", RenderMode::Attach)));
        assert_eq!(
            table.vocabulary("div_as_node"),
            Some(&Callable::render("div", RenderMode::Detached))
        );
        assert_eq!(table.constant("DIV"), Some("div"));
        assert_eq!(table.vocabulary("DIV_as_node"), None);
    }

    #[test]
    fn paragraph_and_its_alias_are_ambiguous() {
        let mut table = BindingTable::new();
        table.install_vocabulary(&DispatchConfig::default());

        let ambiguous = Callable::Ambiguous {
            tag: "p",
            routine: HostRoutineId::Inspect,
        };
        assert_eq!(table.vocabulary("p"), Some(&ambiguous));
        assert_eq!(table.vocabulary("P"), Some(&ambiguous));
        assert_eq!(table.vocabulary("p_as_node"), Some(&Callable::render("p", RenderMode::Detached)));
    }

    #[test]
    fn legacy_spellings_can_be_disabled() {
        let mut table = BindingTable::new();
        let installed = table.install_vocabulary(&DispatchConfig::new().with_legacy_as_node(false));
        assert_eq!(installed, tags::TAGS.len() * 2);
        assert_eq!(table.vocabulary("span_as_node"), None);
    }

    #[test]
    fn define_returns_previous_binding() {
        let mut table = BindingTable::new();
        let scope = ScopePath::parse("Bar");
        let foo = Callable::render(ComponentType::named("Bar::Foo"), RenderMode::Attach);

        assert_eq!(table.define(scope.clone(), "Foo", foo.clone()), None);
        assert_eq!(table.define(scope.clone(), "Foo", foo.clone()), Some(foo.clone()));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn nearest_walks_outward() {
        let mut table = BindingTable::new();
        let foo = Callable::render(ComponentType::named("Bar::Foo"), RenderMode::Attach);
        table.define(ScopePath::parse("Bar"), "Foo", foo.clone());

        let (scope, callable) = table.nearest(&ScopePath::parse("Bar::Baz::Deep"), "Foo").unwrap();
        assert_eq!(scope, ScopePath::parse("Bar"));
        assert_eq!(callable, &foo);
        assert!(table.nearest(&ScopePath::parse("Other"), "Foo").is_none());
    }
}
