#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;
use std::time::Duration;

use svcconf_core::{ErrorKind, JsonNode};
use svcconf_table::params::parse_duration;
use svcconf_table::{MethodParams, ServiceConfig};

fn params(json: &str) -> svcconf_core::Result<MethodParams> {
    MethodParams::from_method_config(&JsonNode::parse(json).unwrap())
}

#[test]
fn full_vector() {
    let s = fs::read_to_string("tests/vectors/full.json").unwrap();
    let table = ServiceConfig::parse(&s).unwrap().method_params_table().unwrap();

    let unary = table.get("/pkg.Echo/Unary").unwrap();
    assert_eq!(
        unary,
        &MethodParams {
            wait_for_ready: Some(true),
            timeout: Some(Duration::from_millis(1500)),
            max_request_message_bytes: Some(1024),
            max_response_message_bytes: Some(2048),
        }
    );
    assert_eq!(table.get("/pkg.Echo/Stream"), Some(unary));

    let fallback = table.get("/pkg.Echo/Other").unwrap();
    assert_eq!(fallback.timeout, Some(Duration::from_secs(10)));
    assert_eq!(fallback.wait_for_ready, None);

    let health = table.get("/pkg.Health/Check").unwrap();
    assert_eq!(health.wait_for_ready, Some(false));
    assert_eq!(health.timeout, None);
}

#[test]
fn spec_example() {
    let s = fs::read_to_string("tests/vectors/round_robin_single.json").unwrap();
    let cfg = ServiceConfig::parse(&s).unwrap();
    assert_eq!(cfg.lb_policy_name(), Some("round_robin"));
    let table = cfg.method_params_table().unwrap();
    assert_eq!(table.get("/Foo/Bar").unwrap().timeout, Some(Duration::from_secs(1)));
    assert!(table.get("/Foo/Baz").is_none());
}

#[test]
fn empty_block_has_no_params() {
    assert_eq!(params("{}").unwrap(), MethodParams::default());
}

#[test]
fn invalid_fields_are_factory_errors() {
    let cases = [
        r#"{"waitForReady":"yes"}"#,
        r#"{"timeout":1}"#,
        r#"{"timeout":"1"}"#,
        r#"{"timeout":"-1s"}"#,
        r#"{"timeout":"1s","timeout":"2s"}"#,
        r#"{"maxRequestMessageBytes":"-5"}"#,
        r#"{"maxRequestMessageBytes":-5}"#,
        r#"{"maxRequestMessageBytes":"+5"}"#,
        r#"{"maxRequestMessageBytes":" 5"}"#,
        r#"{"maxRequestMessageBytes":""}"#,
        r#"{"maxResponseMessageBytes":1.5}"#,
        r#"{"maxResponseMessageBytes":true}"#,
        r#"{"maxResponseMessageBytes":"9223372036854775808"}"#,
        r#"[]"#,
    ];
    for case in cases {
        let err = params(case).expect_err(case);
        assert_eq!(err.kind(), ErrorKind::Factory, "input {case}");
    }
}

#[test]
fn unknown_fields_are_ignored() {
    let p = params(r#"{"retryPolicy":{"maxAttempts":2},"waitForReady":true}"#).unwrap();
    assert_eq!(p.wait_for_ready, Some(true));
}

#[test]
fn invalid_params_abort_table_build() {
    let cfg = ServiceConfig::parse(
        r#"{"methodConfig":[{"name":[{"service":"Foo"}],"timeout":"soon"}]}"#,
    )
    .unwrap();
    let err = cfg.method_params_table().expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Factory);
    assert!(err.to_string().contains("methodConfig[0]"));
}

#[test]
fn durations() {
    assert_eq!(parse_duration("0s"), Some(Duration::ZERO));
    assert_eq!(parse_duration("3s"), Some(Duration::from_secs(3)));
    assert_eq!(parse_duration("0.25s"), Some(Duration::from_millis(250)));
    assert_eq!(parse_duration("1.000000001s"), Some(Duration::new(1, 1)));
    assert_eq!(parse_duration("2.5s"), Some(Duration::from_millis(2500)));

    for bad in ["", "s", "1", ".5s", "1.s", "1.0000000001s", "+1s", "-1s", "1e3s", " 1s", "1.5ms"] {
        assert_eq!(parse_duration(bad), None, "input {bad:?}");
    }
}
