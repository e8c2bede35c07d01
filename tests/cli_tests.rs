mod common;

use std::process::{Command, Output};

use common::temp_files::create_temp_yaml;
use common::BLOG_ROUTES_YAML;

fn url_mapper(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_url-mapper"))
        .args(args)
        .env("URL_MAPPER_LOG_LEVEL", "error")
        .env_remove("RUST_LOG")
        .output()
        .expect("run url-mapper")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_cli_recognize_prints_json() {
    let file = create_temp_yaml(BLOG_ROUTES_YAML);
    let routes = file.path().to_str().unwrap();

    let output = url_mapper(&["recognize", "--routes", routes, "/en/archive/2004/11"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["year"], "2004");
    assert_eq!(json["month"], "11");
    assert!(json["day"].is_null());
    assert_eq!(json["controller"], "blog");
}

#[test]
fn test_cli_recognize_exit_codes() {
    let file = create_temp_yaml(
        "routes:\n  - pattern: 'hi/:name'\n    validators: { name: '[a-z]+' }\n",
    );
    let routes = file.path().to_str().unwrap();

    assert_eq!(url_mapper(&["recognize", "--routes", routes, "/bye"]).status.code(), Some(1));
    assert_eq!(url_mapper(&["recognize", "--routes", routes, "/hi/fox5"]).status.code(), Some(2));
}

#[test]
fn test_cli_generate() {
    let file = create_temp_yaml(BLOG_ROUTES_YAML);
    let routes = file.path().to_str().unwrap();

    let output = url_mapper(&[
        "generate", "--routes", routes, "controller=blog", "action=view", "year=2004", "month=",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "/en/archive/2004");

    let output = url_mapper(&[
        "generate", "--routes", routes, "--alias", "post", "id=3", "--query", "ref=home page",
        "--fragment", "top",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "/en/viewpost/3?ref=home+page#top");

    let output = url_mapper(&["generate", "--routes", routes, "--alias", "post", "year=2004"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_routes_dump() {
    let file = create_temp_yaml(BLOG_ROUTES_YAML);
    let routes = file.path().to_str().unwrap();

    let output = url_mapper(&["routes", "--routes", routes]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("count=3"));
    assert!(text.contains("/archive/:year/:month/:day alias=archive"));
}

#[test]
fn test_cli_load_failure() {
    let output = url_mapper(&["routes", "--routes", "/nonexistent/routes.yaml"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nonexistent"));
}
