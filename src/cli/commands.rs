//! `tagcall` subcommands: vocabulary listings and the dry-run dispatch.
//!
//! The `*_report`/`*_table` helpers build the output as a `String` so tests can assert on it; the thin
//! wrappers print it and return an [`ExitCode`].

use tagcall_core::lang::collision;
use tagcall_core::lang::naming;
use tagcall_core::lang::registry::{Stability, TagFamily};
use tagcall_core::lang::tags;

use super::{CliError, CliResult, ExitCode};
use crate::component::ComponentType;
use crate::config::DispatchConfig;
use crate::dispatch::{CallOutcome, Registry, ScopePath};
use crate::engine::recording::{RecordingEngine, RecordingHost};
use crate::engine::{Block, Param, Params};
use crate::errors::DispatchError;

// ============================================================================
// Vocabulary listings
// ============================================================================

/// Tag spellings, one per line, in installation order.
pub fn tag_listing(family: Option<TagFamily>) -> String {
    let mut out = String::new();
    for info in tags::TAGS.iter().filter(|t| family.is_none_or(|f| t.family == f)) {
        out.push_str(info.canonical);
        out.push('\n');
    }
    out
}

pub fn list_tags(family: Option<TagFamily>) -> CliResult<ExitCode> {
    print!("{}", tag_listing(family));
    Ok(ExitCode::SUCCESS)
}

/// Markdown reference table of the vocabulary.
pub fn reference_table() -> String {
    let mut out = String::from("| Tag | Constant | Family | Detached alias | Notes |\n|---|---|---|---|---|\n");
    for info in tags::TAGS {
        let note = collision::collision_for(info.canonical)
            .map(|c| c.description)
            .unwrap_or("");
        out.push_str(&format!(
            "| `{}` | `{}` | {} | `{}` ({}) | {} |\n",
            info.canonical,
            info.constant,
            info.family.as_str(),
            naming::as_node_name(info.canonical),
            Stability::Deprecated.as_str(),
            note
        ));
    }
    out
}

pub fn print_reference() -> CliResult<ExitCode> {
    print!("{}", reference_table());
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Dry-run dispatch
// ============================================================================

/// Inputs for `tagcall resolve`.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub name: String,
    pub scope: String,
    pub components: Vec<String>,
    pub plain: Vec<String>,
    pub params: Vec<String>,
    pub block: bool,
    pub qualified: bool,
    pub legacy_as_node: bool,
    pub root_fallback: bool,
}

impl Default for ResolveOptions {
    /// Root scope, no components, and the dispatch toggles of [`DispatchConfig::default`].
    fn default() -> Self {
        let config = DispatchConfig::default();
        Self {
            name: String::new(),
            scope: String::new(),
            components: Vec::new(),
            plain: Vec::new(),
            params: Vec::new(),
            block: false,
            qualified: false,
            legacy_as_node: config.legacy_as_node,
            root_fallback: config.root_fallback,
        }
    }
}

/// Parse a `--param` value: JSON when it parses, otherwise a plain string.
pub fn parse_param(raw: &str) -> Param {
    serde_json::from_str(raw).unwrap_or_else(|_| Param::String(raw.to_owned()))
}

/// Build a registry from `opts`, perform one dispatch, and describe what happened.
///
/// ## Returns
/// - One line per engine call (the dispatched call first, then any calls made from its block), or a
///   `host output ...` line when an ambiguous spelling went to the host routine.
///
/// ## Errors
/// - The [`DispatchError`] raised by the dispatch.
pub fn resolve_report(opts: &ResolveOptions) -> Result<String, DispatchError> {
    let config = DispatchConfig::new()
        .with_legacy_as_node(opts.legacy_as_node)
        .with_root_fallback(opts.root_fallback);
    let mut registry = Registry::with_config(config);
    for path in &opts.plain {
        registry.declare(ComponentType::plain(path.as_str()));
    }
    for path in &opts.components {
        registry.adopt(ComponentType::named(path.as_str()));
    }

    let scope = ScopePath::parse(&opts.scope);
    let params: Params = opts.params.iter().map(|p| parse_param(p)).collect();
    let block = opts.block.then(|| Block::new(|| {}));

    let mut engine = RecordingEngine::new();
    let mut host = RecordingHost::new();
    let outcome = {
        let mut dispatcher = registry.dispatcher(&mut engine, &mut host);
        if opts.qualified {
            dispatcher.call_qualified(&scope, &opts.name, params, block)?
        } else {
            dispatcher.call(&scope, &opts.name, params, block)?
        }
    };

    let report: String = match outcome {
        CallOutcome::Node(_) => engine.calls().iter().map(|call| format!("{call}\n")).collect(),
        CallOutcome::HostOutput(params) => format!("host output {}\n", Param::Array(params)),
    };
    Ok(report)
}

pub fn resolve(opts: &ResolveOptions) -> CliResult<ExitCode> {
    match resolve_report(opts) {
        Ok(report) => {
            print!("{report}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Err(CliError::failure(format!("{:?}", miette::Report::new(err)))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn opts(name: &str) -> ResolveOptions {
        ResolveOptions {
            name: name.to_string(),
            ..ResolveOptions::default()
        }
    }

    #[test]
    fn default_options_follow_dispatch_defaults() {
        let opts = ResolveOptions::default();
        let config = DispatchConfig::default();
        assert_eq!(opts.legacy_as_node, config.legacy_as_node);
        assert_eq!(opts.root_fallback, config.root_fallback);
        assert!(opts.scope.is_empty());
    }

    #[test]
    fn default_options_accept_legacy_spelling() {
        let report = resolve_report(&ResolveOptions {
            name: "span_as_node".into(),
            ..ResolveOptions::default()
        })
        .unwrap();
        assert_eq!(report, "detached span []\n");
    }

    #[test]
    fn block_calls_are_reported_in_order() {
        let mut o = opts("ul");
        o.block = true;
        o.params = vec!["{}".into()];
        assert_eq!(resolve_report(&o).unwrap(), "attach ul [{}] {..}\n");
    }

    #[test]
    fn listing_filters_by_family() {
        let svg = tag_listing(Some(TagFamily::Svg));
        assert_eq!(svg.lines().count(), tags::SVG_TAGS.len());
        assert_eq!(svg.lines().next(), Some("circle"));
        assert_eq!(tag_listing(None).lines().count(), tags::TAGS.len());
    }

    #[test]
    fn reference_has_one_row_per_tag() {
        let table = reference_table();
        assert_eq!(table.lines().count(), tags::TAGS.len() + 2);
        assert!(table.contains("| `p` | `P` | html | `p_as_node` (deprecated) | Renders the tag"));
    }

    #[test]
    fn params_fall_back_to_strings() {
        assert_eq!(parse_param("1"), json!(1));
        assert_eq!(parse_param(r#"{"class":"x"}"#), json!({"class": "x"}));
        assert_eq!(parse_param("hello"), json!("hello"));
    }

    #[test]
    fn resolve_tag() {
        let report = resolve_report(&opts("div_as_node")).unwrap();
        assert_eq!(report, "detached div []\n");
    }

    #[test]
    fn resolve_paragraph_to_host() {
        let mut o = opts("p");
        o.params = vec!["hello".into()];
        assert_eq!(resolve_report(&o).unwrap(), "host output [\"hello\"]\n");
    }

    #[test]
    fn resolve_sibling_component() {
        let mut o = opts("Foo");
        o.scope = "Bar::Baz".into();
        o.components = vec!["Bar::Foo".into()];
        o.block = true;
        assert_eq!(resolve_report(&o).unwrap(), "attach Bar::Foo [] {..}\n");
    }

    #[test]
    fn resolve_plain_type_fails() {
        let mut o = opts("Helper");
        o.scope = "Bar".into();
        o.plain = vec!["Bar::Helper".into()];
        let err = resolve_report(&o).unwrap_err();
        assert!(matches!(err, DispatchError::NotAComponent { .. }));
        assert!(resolve(&o).is_err());
    }

    #[test]
    fn resolve_unknown_name_fails() {
        let err = resolve_report(&opts("Nowhere")).unwrap_err();
        assert_eq!(err.name(), "Nowhere");
    }
}
