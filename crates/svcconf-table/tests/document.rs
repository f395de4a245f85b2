#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use svcconf_core::ErrorKind;
use svcconf_table::ServiceConfig;

fn load(name: &str) -> String {
    fs::read_to_string(format!("tests/vectors/{name}")).unwrap()
}

#[test]
fn lb_policy_name_present() {
    let cfg = ServiceConfig::parse(&load("round_robin_single.json")).unwrap();
    assert_eq!(cfg.lb_policy_name(), Some("round_robin"));
}

#[test]
fn lb_policy_name_absent() {
    let cfg = ServiceConfig::parse(r#"{"methodConfig":[]}"#).unwrap();
    assert_eq!(cfg.lb_policy_name(), None);
}

#[test]
fn lb_policy_name_irregular_is_none() {
    let cases = [
        r#"{"loadBalancingPolicy":"a","loadBalancingPolicy":"b"}"#,
        r#"{"loadBalancingPolicy":1}"#,
        r#"{"loadBalancingPolicy":null}"#,
        r#"["round_robin"]"#,
        r#""round_robin""#,
    ];
    for case in cases {
        let cfg = ServiceConfig::parse(case).unwrap();
        assert_eq!(cfg.lb_policy_name(), None, "input {case}");
    }
}

#[test]
fn root_array_fails_everywhere() {
    let cfg = ServiceConfig::parse(&load("root_array.json")).unwrap();
    assert_eq!(cfg.lb_policy_name(), None);
    let err = cfg.method_params_table().expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Schema);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = ServiceConfig::parse(r#"{"loadBalancingPolicy": }"#).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn document_owns_its_text() {
    let text = load("lb_only.json");
    let cfg = ServiceConfig::parse(&text).unwrap();
    drop(text);
    assert!(cfg.json().contains("pick_first"));
    assert_eq!(cfg.lb_policy_name(), Some("pick_first"));
}
