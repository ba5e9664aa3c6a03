//! Snapshot tests for CLI output and dispatch traces
//!
//! Review changes: `cargo insta review`

use serde_json::json;
use tagcall::cli::commands::{self, ResolveOptions};
use tagcall::engine::recording::{RecordingEngine, RecordingHost};
use tagcall::engine::Block;
use tagcall::{ComponentType, Registry, ScopePath};

#[test]
fn reference_table_header() {
    let table = commands::reference_table();
    let head: Vec<&str> = table.lines().take(4).collect();
    insta::assert_snapshot!(head.join("\n"), @r"
    | Tag | Constant | Family | Detached alias | Notes |
    |---|---|---|---|---|
    | `a` | `A` | html | `a_as_node` (deprecated) |  |
    | `abbr` | `ABBR` | html | `abbr_as_node` (deprecated) |  |
    ");
}

#[test]
fn svg_listing() {
    let listing = commands::tag_listing(Some(tagcall_core::lang::registry::TagFamily::Svg));
    insta::assert_snapshot!(listing.lines().collect::<Vec<_>>().join(" "), @"circle clipPath defs ellipse g line linearGradient mask path pattern polygon polyline radialGradient rect stop svg text tspan");
}

#[test]
fn mixed_dispatch_trace() {
    let mut registry = Registry::new();
    registry.adopt(ComponentType::named("App::Card"));
    registry.adopt(ComponentType::named("App::Page"));

    let mut engine = RecordingEngine::new();
    let mut host = RecordingHost::new();
    let page = ScopePath::parse("App::Page");
    {
        let mut dispatcher = registry.dispatcher(&mut engine, &mut host);
        dispatcher
            .call(&page, "DIV", vec![json!({"class": "page"})], Some(Block::new(|| {})))
            .unwrap();
        dispatcher.call(&page, "Card", vec![json!("title")], None).unwrap();
        dispatcher.call(&page, "Card_as_node", vec![], None).unwrap();
        dispatcher.call(&page, "p", vec![], None).unwrap();
        dispatcher.call(&page, "p", vec![json!("debug")], None).unwrap();
        dispatcher.present("custom-element", vec![json!(1)], None);
    }

    let trace: Vec<String> = engine.calls().iter().map(ToString::to_string).collect();
    insta::assert_snapshot!(trace.join("\n"), @r#"
    attach div [{"class":"page"}] {..}
    attach App::Card ["title"]
    detached App::Card []
    attach p []
    attach custom-element [1]
    "#);
    assert_eq!(host.printed(), &[vec![json!("debug")]]);
}

#[test]
fn resolve_command_trace() {
    let report = commands::resolve_report(&ResolveOptions {
        name: "Foo_as_node".into(),
        scope: "Bar::Baz".into(),
        components: vec!["Bar::Foo".into()],
        params: vec![r#"{"id":7}"#.into()],
        ..ResolveOptions::default()
    })
    .unwrap();
    insta::assert_snapshot!(report.trim_end(), @r#"detached Bar::Foo [{"id":7}]"#);
}
