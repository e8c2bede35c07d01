use super::{Mapper, UrlSuffix};
use crate::{params, validators, ParamValue};

#[test]
fn test_normalize_strips_query_and_fragment() {
    let mapper = Mapper::new();
    assert_eq!(mapper.normalize("view/1?x=2").as_deref(), Some("/view/1"));
    assert_eq!(mapper.normalize("//view/1//#top").as_deref(), Some("/view/1"));
    assert_eq!(mapper.normalize("").as_deref(), Some("/"));
    assert_eq!(mapper.normalize("?a=b").as_deref(), Some("/"));
}

#[test]
fn test_normalize_strips_script_name() {
    let mut mapper = Mapper::new();
    mapper.set_script_name("index.php");
    assert_eq!(
        mapper.normalize("/index.php/view/product/1").as_deref(),
        Some("/view/product/1")
    );
    assert_eq!(mapper.normalize("/index.php").as_deref(), Some("/"));
    assert_eq!(
        mapper.normalize("/index.phpx/view").as_deref(),
        Some("/index.phpx/view")
    );
}

#[test]
fn test_normalize_requires_prefix() {
    let mut mapper = Mapper::new();
    mapper.set_prefix("en/");
    assert_eq!(mapper.prefix(), "/en");
    assert_eq!(mapper.normalize("/en/content").as_deref(), Some("/content"));
    assert_eq!(mapper.normalize("/en").as_deref(), Some("/"));
    assert_eq!(mapper.normalize("/fr/content"), None);
    assert_eq!(mapper.normalize("/english"), None);
}

#[test]
fn test_same_pattern_replaces_in_place() {
    let mut mapper = Mapper::new();
    mapper.connect("a/:x").unwrap();
    mapper.connect("b/:x").unwrap();
    mapper
        .register("/a/:x/", params! {}, validators! { "x" => r"\d+" }, Some("a2"))
        .unwrap();

    let patterns: Vec<&str> = mapper.routes().map(|r| r.pattern()).collect();
    assert_eq!(patterns, vec!["/a/:x", "/b/:x"]);
    assert_eq!(mapper.routes().next().unwrap().alias(), Some("a2"));
    assert_eq!(mapper.len(), 2);
}

#[test]
fn test_alias_lookup_returns_first_in_order() {
    let mut mapper = Mapper::new();
    mapper
        .register("one", params! {}, validators! {}, Some("dup"))
        .unwrap();
    mapper
        .register("two", params! {}, validators! {}, Some("dup"))
        .unwrap();
    assert_eq!(mapper.route_by_alias("dup").unwrap().pattern(), "/one");
    assert!(mapper.route_by_alias("missing").is_none());
}

#[test]
fn test_failed_registration_leaves_table_unchanged() {
    let mut mapper = Mapper::new();
    mapper.connect("ok").unwrap();
    assert!(mapper.connect("bad/:(name").is_err());
    assert_eq!(mapper.len(), 1);
}

#[test]
fn test_reset_keeps_identity_and_script_name() {
    let mut mapper = Mapper::with_id("en");
    mapper.set_prefix("/en");
    mapper.set_script_name("index.php");
    mapper.connect("x").unwrap();
    mapper.reset();
    assert!(mapper.is_empty());
    assert_eq!(mapper.prefix(), "");
    assert_eq!(mapper.script_name(), "index.php");
    assert_eq!(mapper.id(), "en");
}

#[test]
fn test_root_fast_path_ignores_table_order() {
    let mut mapper = Mapper::new();
    mapper.connect("hello/world").unwrap();
    mapper
        .register("/", params! { "controller" => "home" }, validators! {}, None)
        .unwrap();
    assert_eq!(mapper.generate(&params! {}).as_deref(), Some("/"));
}

#[test]
fn test_suffix_rendering() {
    let mut mapper = Mapper::new();
    mapper.connect("page/:id").unwrap();
    let suffix = UrlSuffix::new()
        .query("q", "a b")
        .query("n", "1")
        .fragment("top");
    assert_eq!(
        mapper
            .generate_with(&params! { "id" => 3 }, &suffix)
            .as_deref(),
        Some("/page/3?q=a+b&n=1#top")
    );
}

#[test]
fn test_dump_routes_lists_table() {
    let mut mapper = Mapper::new();
    mapper
        .register("hi/:name", params! {}, validators! {}, Some("greet"))
        .unwrap();
    let dump = mapper.dump_routes();
    assert!(dump.contains("count=1"));
    assert!(dump.contains("/hi/:name alias=greet"));
}

#[test]
fn test_recognize_discards_empty_captures() {
    let mut mapper = Mapper::new();
    mapper
        .register(
            "view/:home/:area",
            params! { "home" => ParamValue::Absent, "area" => ParamValue::Absent },
            validators! {},
            None,
        )
        .unwrap();
    let found = mapper.recognize("/view/chicago").unwrap().unwrap();
    assert_eq!(found.get_str("home").as_deref(), Some("chicago"));
    assert!(found.get("area").unwrap().is_absent());
}
