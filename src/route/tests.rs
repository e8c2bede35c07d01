use super::{parse_pattern, PathSegment, RouteSpec, Segment};
use crate::error::PatternError;
use crate::{params, validators, ParamValue};

fn param(name: &str) -> Segment {
    Segment::Param {
        name: name.to_string(),
        wildcard: false,
    }
}

fn lit(text: &str) -> Segment {
    Segment::Literal(text.to_string())
}

#[test]
fn test_root_pattern_has_no_segments() {
    assert!(parse_pattern("").unwrap().is_empty());
    assert!(parse_pattern("/").unwrap().is_empty());
}

#[test]
fn test_simple_and_grouped_params() {
    let segs = parse_pattern("hi/:fred").unwrap();
    assert_eq!(
        segs,
        vec![
            PathSegment { parts: vec![lit("hi")] },
            PathSegment { parts: vec![param("fred")] },
        ]
    );
    assert_eq!(parse_pattern("hi/:(fred)").unwrap(), segs);
}

#[test]
fn test_grouped_params_with_trailing_literal() {
    let segs = parse_pattern(":controller/:(action)-:(id).html").unwrap();
    assert_eq!(
        segs[1].parts,
        vec![param("action"), lit("-"), param("id"), lit(".html")]
    );
}

#[test]
fn test_simple_name_stops_at_non_word_text() {
    let segs = parse_pattern("xml/:action.rss").unwrap();
    assert_eq!(segs[1].parts, vec![param("action"), lit(".rss")]);
}

#[test]
fn test_wildcard_after_param_in_one_segment() {
    let segs = parse_pattern("/account/:action/:handle*(section)").unwrap();
    assert_eq!(
        segs[2].parts,
        vec![
            param("handle"),
            Segment::Param {
                name: "section".into(),
                wildcard: true
            }
        ]
    );
}

#[test]
fn test_unbalanced_group_is_rejected() {
    let err = parse_pattern("hi/:(name").unwrap_err();
    assert!(matches!(err, PatternError::UnbalancedGroup { .. }));
}

#[test]
fn test_empty_names_are_rejected() {
    assert!(matches!(
        parse_pattern("hi/:").unwrap_err(),
        PatternError::EmptyName { .. }
    ));
    assert!(matches!(
        parse_pattern("hi/*()").unwrap_err(),
        PatternError::EmptyName { .. }
    ));
    assert!(matches!(
        parse_pattern("hi/:-x").unwrap_err(),
        PatternError::EmptyName { .. }
    ));
}

#[test]
fn test_bad_grouped_name_is_rejected() {
    assert!(matches!(
        parse_pattern("hi/:(a b)").unwrap_err(),
        PatternError::InvalidName { .. }
    ));
    assert!(matches!(
        parse_pattern("hi/:9lives").unwrap_err(),
        PatternError::InvalidName { .. }
    ));
}

#[test]
fn test_duplicate_names_are_rejected() {
    let err = parse_pattern(":id/view/:id").unwrap_err();
    assert!(matches!(err, PatternError::DuplicateName { ref name, .. } if name == "id"));
}

#[test]
fn test_bad_validator_is_rejected() {
    let err = RouteSpec::new("hi/:name", params! {}, validators! { "name" => "[a-" }, None)
        .unwrap_err();
    assert!(matches!(err, PatternError::InvalidValidator { .. }));
}

#[test]
fn test_required_and_max_keys() {
    let route = RouteSpec::new(
        "archive/:year/:month/:day",
        params! {
            "controller" => "blog",
            "action" => "view",
            "month" => ParamValue::Absent,
            "day" => ParamValue::Absent,
        },
        validators! { "month" => r"\d{1,2}", "day" => r"\d{1,2}" },
        Some("archive".into()),
    )
    .unwrap();
    assert_eq!(route.pattern(), "/archive/:year/:month/:day");
    assert_eq!(route.required().iter().collect::<Vec<_>>(), vec!["year"]);
    assert_eq!(route.max_keys(), 5);
    assert_eq!(route.params(), ["year", "month", "day"]);
}

#[test]
fn test_probe_honors_optional_tail() {
    let route = RouteSpec::new(
        "view/:home/:area",
        params! { "home" => "austere", "area" => ParamValue::Absent },
        validators! {},
        None,
    )
    .unwrap();
    assert!(route.matches_shape("/view"));
    assert!(route.matches_shape("/view/sumatra"));
    assert!(route.matches_shape("/view/austere/chicago"));
    assert!(!route.matches_shape("/view/a/b/c"));
    assert!(!route.matches_shape("/other"));
}

#[test]
fn test_all_optional_pattern_matches_root() {
    let route = RouteSpec::new(
        ":controller/:action",
        params! { "controller" => "home", "action" => "index" },
        validators! {},
        None,
    )
    .unwrap();
    assert!(route.matches_shape("/"));
    let values = route.capture("/").unwrap();
    assert_eq!(values.get_str("controller").as_deref(), Some("home"));
    assert_eq!(values.get_str("action").as_deref(), Some("index"));
}

#[test]
fn test_required_segment_is_not_optional() {
    let route = RouteSpec::new("hi/:name", params! {}, validators! {}, None).unwrap();
    assert!(!route.matches_shape("/hi"));
    assert!(route.matches_shape("/hi/fox"));
    assert!(!route.matches_shape("/hi/fox/den"));
}

#[test]
fn test_wildcard_probe_spans_slashes() {
    let route = RouteSpec::new("*file/hi", params! {}, validators! {}, None).unwrap();
    assert!(route.matches_shape("/books/learning.pdf/hi"));
    let values = route.capture("/books/learning.pdf/hi").unwrap();
    assert_eq!(values.get_str("file").as_deref(), Some("books/learning.pdf"));
}

#[test]
fn test_strict_validator_constrains_captures() {
    let route = RouteSpec::new(
        "test/:year",
        params! { "year" => ParamValue::Absent },
        validators! { "year" => r"\d{4}" },
        None,
    )
    .unwrap();
    assert!(route.matches_shape("/test/abcd"));
    assert!(route.capture("/test/abcd").is_none());
    assert_eq!(
        route.capture("/test/2004").unwrap().get_str("year").as_deref(),
        Some("2004")
    );
    assert!(route.capture("/test").unwrap().get("year").unwrap().is_absent());
}

#[test]
fn test_accept_rejects_unknown_keys() {
    let route = RouteSpec::new(":controller/:action/:id", params! {}, validators! {}, None).unwrap();
    assert!(route
        .accept(&params! { "controller" => "blog", "action" => "view", "year" => 2004 })
        .is_none());
}

#[test]
fn test_accept_default_only_key_must_equal_default() {
    let route = RouteSpec::new("/", params! { "controller" => "test" }, validators! {}, None).unwrap();
    assert!(route.accept(&params! { "controller" => "test" }).is_some());
    assert!(route.accept(&params! { "controller" => "false" }).is_none());
}

#[test]
fn test_accept_requires_required_keys() {
    let route = RouteSpec::new("hi/:fred", params! {}, validators! {}, None).unwrap();
    assert!(route.accept(&params! {}).is_none());
    assert!(route.accept(&params! { "fred" => ParamValue::Absent }).is_some());
}

#[test]
fn test_accept_checks_slot_text() {
    let route = RouteSpec::new("hi/:controller", params! {}, validators! {}, None).unwrap();
    assert!(route.accept(&params! { "controller" => "admin/user" }).is_none());
    assert!(route.accept(&params! { "controller" => "content" }).is_some());
}

#[test]
fn test_render_elides_absent_tail() {
    let route = RouteSpec::new(
        ":controller/:action/:id",
        params! { "action" => ParamValue::Absent, "id" => ParamValue::Absent },
        validators! {},
        None,
    )
    .unwrap();
    assert_eq!(route.render(&params! { "controller" => "content" }), "/content");
    assert_eq!(
        route.render(&params! { "controller" => "content", "action" => "list" }),
        "/content/list"
    );
}

#[test]
fn test_render_root() {
    let route = RouteSpec::new("", params! { "controller" => "articles" }, validators! {}, None).unwrap();
    assert_eq!(route.pattern(), "/");
    assert_eq!(route.render(&params! {}), "/");
}
