#![allow(dead_code)]

use url_mapper::{params, validators, Mapper, ParamValue};

pub mod temp_files {
    use std::io::Write;

    use tempfile::NamedTempFile;

    /// Write `content` to a temporary file ending in `.{ext}`.
    ///
    /// The file is removed when the returned handle is dropped.
    pub fn create_temp_routes(content: &str, ext: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("url_mapper_test_")
            .suffix(&format!(".{ext}"))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    pub fn create_temp_yaml(content: &str) -> NamedTempFile {
        create_temp_routes(content, "yaml")
    }

    pub fn create_temp_toml(content: &str) -> NamedTempFile {
        create_temp_routes(content, "toml")
    }

    pub fn create_temp_json(content: &str) -> NamedTempFile {
        create_temp_routes(content, "json")
    }
}

/// A blog-shaped table: dated archive, single posts, then the catch-all
/// `:controller/:action/:id` route.
pub fn blog_mapper() -> Mapper {
    let mut m = Mapper::new();
    m.register(
        "archive/:year/:month/:day",
        params! {
            "controller" => "blog",
            "action" => "view",
            "month" => ParamValue::Absent,
            "day" => ParamValue::Absent,
        },
        validators! { "month" => r"\d{1,2}", "day" => r"\d{1,2}" },
        Some("archive"),
    )
    .unwrap();
    m.register(
        "viewpost/:id",
        params! { "controller" => "post", "action" => "view" },
        validators! {},
        Some("post"),
    )
    .unwrap();
    m.register(":controller/:action/:id", params! {}, validators! {}, Some("controller"))
        .unwrap();
    m
}

pub const BLOG_ROUTES_YAML: &str = r"
prefix: /en
routes:
  - pattern: 'archive/:year/:month/:day'
    alias: archive
    defaults: { controller: blog, action: view, month: null, day: null }
    validators: { month: '\d{1,2}', day: '\d{1,2}' }
  - pattern: 'viewpost/:id'
    alias: post
    defaults: { controller: post, action: view }
  - pattern: ':controller/:action/:id'
    alias: controller
";
