//! Component types and the render capability.
//!
//! A component type is anything the engine can render by introspection. This crate never renders it; it only
//! needs two facts about a type: whether it exposes the render capability, and its qualified path (for the
//! simple name and lexical parent used by scope adoption).

use std::any::TypeId;
use std::fmt;

use tagcall_core::lang::naming;

/// Marker for types that know how to produce a node when rendered.
///
/// The default qualified name is the Rust type path (`my_app::widgets::Foo`), so a component adopted through
/// [`crate::Registry::adopt_component`] becomes callable as `Foo` inside `my_app::widgets`. Override
/// [`Component::qualified_name`] to place a component under a different path, or return `None` to keep it
/// anonymous.
pub trait Component: 'static {
    fn qualified_name() -> Option<&'static str> {
        Some(std::any::type_name::<Self>())
    }
}

/// Descriptor of a type that may be looked up, adopted, or rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentType {
    qualified_name: Option<String>,
    renders: bool,
    type_id: Option<TypeId>,
}

impl ComponentType {
    /// Descriptor for a Rust type implementing [`Component`].
    pub fn of<C: Component>() -> Self {
        Self {
            qualified_name: C::qualified_name().map(str::to_owned),
            renders: true,
            type_id: Some(TypeId::of::<C>()),
        }
    }

    /// A rendering component known only by its qualified path.
    pub fn named(path: impl Into<String>) -> Self {
        Self {
            qualified_name: Some(path.into()),
            renders: true,
            type_id: None,
        }
    }

    /// A type without the render capability (a helper, a constant holder, ...).
    pub fn plain(path: impl Into<String>) -> Self {
        Self {
            qualified_name: Some(path.into()),
            renders: false,
            type_id: None,
        }
    }

    /// A rendering component with no qualified path.
    pub fn anonymous() -> Self {
        Self {
            qualified_name: None,
            renders: true,
            type_id: None,
        }
    }

    pub fn exposes_render(&self) -> bool {
        self.renders
    }

    pub fn qualified_name(&self) -> Option<&str> {
        self.qualified_name.as_deref()
    }

    /// Path segments, root first. Empty for anonymous types.
    pub fn qualified_path(&self) -> Vec<&str> {
        self.qualified_name.as_deref().map(naming::split_path).unwrap_or_default()
    }

    /// Last path segment.
    pub fn simple_name(&self) -> Option<&str> {
        self.qualified_path().last().copied()
    }

    /// Whether this descriptor was built from `C`.
    pub fn is<C: Component>(&self) -> bool {
        self.type_id == Some(TypeId::of::<C>())
    }

    pub(crate) fn display_name(&self) -> &str {
        self.qualified_name.as_deref().unwrap_or("<anonymous>")
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Card;
    impl Component for Card {}

    struct Relocated;
    impl Component for Relocated {
        fn qualified_name() -> Option<&'static str> {
            Some("Shop::Checkout::Summary")
        }
    }

    #[test]
    fn rust_type_path_is_the_default_name() {
        let card = ComponentType::of::<Card>();
        assert!(card.exposes_render());
        assert!(card.is::<Card>());
        assert!(!card.is::<Relocated>());
        assert_eq!(card.simple_name(), Some("Card"));
        assert_eq!(card.qualified_path().first().copied(), Some("tagcall"));
    }

    #[test]
    fn overridden_name_and_path() {
        let summary = ComponentType::of::<Relocated>();
        assert_eq!(summary.qualified_path(), vec!["Shop", "Checkout", "Summary"]);
        assert_eq!(summary.simple_name(), Some("Summary"));
    }

    #[test]
    fn plain_types_do_not_render() {
        let helper = ComponentType::plain("Bar::Helper");
        assert!(!helper.exposes_render());
        assert_eq!(helper.to_string(), "Bar::Helper");
    }

    #[test]
    fn anonymous_has_no_path() {
        let anon = ComponentType::anonymous();
        assert!(anon.qualified_path().is_empty());
        assert_eq!(anon.simple_name(), None);
    }
}
