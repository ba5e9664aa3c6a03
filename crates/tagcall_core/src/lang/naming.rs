//! Naming conventions shared by the binding installer, the resolver, and scope adoption.
//!
//! ## Notes
//! - Any callable name may carry the deprecated [`AS_NODE_SUFFIX`], selecting detached mode.
//! - Qualified paths use the `::` separator. Separators nested inside generic arguments are not split points, so
//!   `app::List<app::Item>` has the simple name `List<app::Item>` and the parent `app`.

/// Deprecated suffix selecting detached (build-only) mode.
pub const AS_NODE_SUFFIX: &str = "_as_node";

/// Separator between qualified path segments.
pub const SCOPE_SEPARATOR: &str = "::";

/// Append the deprecated detached-mode suffix.
///
/// ## Examples
/// ```rust
/// use tagcall_core::lang::naming;
///
/// assert_eq!(naming::as_node_name("div"), "div_as_node");
/// ```
pub fn as_node_name(name: &str) -> String {
    format!("{name}{AS_NODE_SUFFIX}")
}

/// Strip the deprecated detached-mode suffix.
///
/// ## Returns
/// - `Some(base)` when `name` ends in `_as_node` (`base` may be empty).
/// - `None` otherwise.
pub fn strip_as_node(name: &str) -> Option<&str> {
    name.strip_suffix(AS_NODE_SUFFIX)
}

/// Split a qualified path into its segments.
///
/// Empty segments (a leading `::`, or `a::::b`) are dropped.
///
/// ## Examples
/// ```rust
/// use tagcall_core::lang::naming;
///
/// assert_eq!(naming::split_path("Bar::Foo"), vec!["Bar", "Foo"]);
/// assert_eq!(naming::split_path("app::List<app::Item>"), vec!["app", "List<app::Item>"]);
/// assert!(naming::split_path("").is_empty());
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                push_segment(&mut segments, &path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    push_segment(&mut segments, &path[start..]);
    segments
}

/// Split a qualified path into its simple name and the segments of its lexical parent.
///
/// ## Returns
/// - `Some((simple_name, parent_segments))` when the path has at least two segments.
/// - `None` for an empty or top-level path.
///
/// ## Examples
/// ```rust
/// use tagcall_core::lang::naming;
///
/// assert_eq!(naming::simple_name_and_parent("A::B::Foo"), Some(("Foo", vec!["A", "B"])));
/// assert_eq!(naming::simple_name_and_parent("Foo"), None);
/// ```
pub fn simple_name_and_parent(path: &str) -> Option<(&str, Vec<&str>)> {
    let mut segments = split_path(path);
    if segments.len() < 2 {
        return None;
    }
    let simple = segments.pop()?;
    Some((simple, segments))
}

fn push_segment<'a>(segments: &mut Vec<&'a str>, segment: &'a str) {
    if !segment.is_empty() {
        segments.push(segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_only_at_the_end() {
        assert_eq!(strip_as_node("Foo_as_node"), Some("Foo"));
        assert_eq!(strip_as_node("_as_node"), Some(""));
        assert_eq!(strip_as_node("Foo_as_node_x"), None);
        assert_eq!(strip_as_node("Foo"), None);
    }

    #[test]
    fn split_drops_empty_segments() {
        assert_eq!(split_path("::Bar::Foo"), vec!["Bar", "Foo"]);
        assert_eq!(split_path("Bar::::Foo"), vec!["Bar", "Foo"]);
        assert_eq!(split_path("Foo"), vec!["Foo"]);
    }

    #[test]
    fn split_keeps_nested_generics_whole() {
        assert_eq!(
            split_path("ui::Table<ui::Row<ui::Cell>>"),
            vec!["ui", "Table<ui::Row<ui::Cell>>"]
        );
    }

    #[test]
    fn single_colon_is_not_a_separator() {
        assert_eq!(split_path("a:b::c"), vec!["a:b", "c"]);
    }
}
