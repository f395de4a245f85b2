#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use svcconf_table::config;

#[test]
fn load_from_file_ok() {
    let cfg = config::load_from_file("tests/vectors/full.json").expect("must load");
    assert_eq!(cfg.lb_policy_name(), Some("round_robin"));
}

#[test]
fn missing_file_is_io_error() {
    let err = config::load_from_file("tests/vectors/does_not_exist.json").expect_err("must fail");
    assert_eq!(err.kind().as_str(), "IO_ERROR");
}

#[test]
fn malformed_json_is_parse_error() {
    let err = config::load_from_str(r#"{"methodConfig": [}"#).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "PARSE_ERROR");
}

#[test]
fn load_method_params_in_one_step() {
    let (cfg, table) = config::load_method_params(
        r#"{"methodConfig":[{"name":[{"service":"Foo"}],"timeout":"0.5s"}]}"#,
    )
    .unwrap();
    assert_eq!(cfg.lb_policy_name(), None);
    assert_eq!(
        table.get("/Foo/AnyMethod").and_then(|p| p.timeout),
        Some(Duration::from_millis(500))
    );
}

#[test]
fn load_method_params_rejects_bad_table() {
    let err = config::load_method_params(r#"{"methodConfig":[{"name":[]}]}"#).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "EMPTY_NAMES");
}
