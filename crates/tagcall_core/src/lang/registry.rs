//! Shareable metadata for `tagcall_core::lang` registries.
//!
//! These types are lightweight and `Copy` so registries can live in `const` tables.

/// Describe the lifecycle status of a vocabulary spelling.
///
/// ## Notes
/// - Intended for docs/tooling (e.g. marking `_as_node` spellings as deprecated), not for gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Deprecated,
}

impl Stability {
    pub fn as_str(self) -> &'static str {
        match self {
            Stability::Stable => "stable",
            Stability::Deprecated => "deprecated",
        }
    }
}

/// Partition of the tag vocabulary.
///
/// ## Examples
/// ```rust
/// use tagcall_core::lang::registry::TagFamily;
///
/// assert_eq!(TagFamily::from_str("svg"), Some(TagFamily::Svg));
/// assert_eq!(TagFamily::Html.as_str(), "html");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagFamily {
    /// Document-markup identifiers.
    Html,
    /// Vector-graphics identifiers.
    Svg,
}

impl TagFamily {
    pub const ALL: [TagFamily; 2] = [TagFamily::Html, TagFamily::Svg];

    pub fn as_str(self) -> &'static str {
        match self {
            TagFamily::Html => "html",
            TagFamily::Svg => "svg",
        }
    }

    /// Lookup by lowercase family name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<TagFamily> {
        TagFamily::ALL.into_iter().find(|f| f.as_str() == s)
    }
}

/// Metadata for one vocabulary tag.
///
/// ## Notes
/// - `canonical` is the spelling handed verbatim to the rendering engine (case-sensitive, e.g. `clipPath`).
/// - `constant` is the upper-cased alias; it names both a callable and a `pub const` bound to `canonical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    pub canonical: &'static str,
    pub constant: &'static str,
    pub family: TagFamily,
}
