//! Standard per-method call parameters.
//!
//! ```json
//! {
//!   "name": [ ... ],
//!   "waitForReady": true,
//!   "timeout": "1.5s",
//!   "maxRequestMessageBytes": "4194304",
//!   "maxResponseMessageBytes": 4194304
//! }
//! ```
//!
//! All fields are optional. Fields this module does not know about are left
//! to other consumers of the same block.

mod duration;

use std::time::Duration;

use svcconf_core::error::{Result, SvcConfError};
use svcconf_core::JsonNode;

use crate::table::MethodConfigFactory;

pub use duration::parse_duration;

/// Call parameters configured for one or more methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodParams {
    pub wait_for_ready: Option<bool>,
    pub timeout: Option<Duration>,
    pub max_request_message_bytes: Option<u64>,
    pub max_response_message_bytes: Option<u64>,
}

impl MethodParams {
    /// Read the standard fields from a method-config block.
    pub fn from_method_config(node: &JsonNode) -> Result<Self> {
        let members = node.as_object().ok_or_else(|| {
            SvcConfError::Factory(format!("expected object, got {}", node.type_name()))
        })?;

        let mut out = MethodParams::default();
        for (key, value) in members {
            match key.as_str() {
                "waitForReady" => {
                    let v = value.as_bool().ok_or_else(|| wrong_type(key, "bool", value))?;
                    set_once(&mut out.wait_for_ready, key, v)?;
                }
                "timeout" => {
                    let s = value.as_str().ok_or_else(|| wrong_type(key, "string", value))?;
                    let d = parse_duration(s)
                        .ok_or_else(|| SvcConfError::Factory(format!("invalid {key}: {s:?}")))?;
                    set_once(&mut out.timeout, key, d)?;
                }
                "maxRequestMessageBytes" => {
                    set_once(&mut out.max_request_message_bytes, key, parse_size(key, value)?)?;
                }
                "maxResponseMessageBytes" => {
                    set_once(&mut out.max_response_message_bytes, key, parse_size(key, value)?)?;
                }
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Factory producing [`MethodParams`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodParamsFactory;

impl MethodConfigFactory for MethodParamsFactory {
    type Value = MethodParams;

    fn create(&self, method_config: &JsonNode) -> Result<MethodParams> {
        MethodParams::from_method_config(method_config)
    }
}

fn set_once<T>(slot: &mut Option<T>, key: &str, v: T) -> Result<()> {
    if slot.is_some() {
        return Err(SvcConfError::Factory(format!("duplicate `{key}`")));
    }
    *slot = Some(v);
    Ok(())
}

fn wrong_type(key: &str, expected: &str, got: &JsonNode) -> SvcConfError {
    SvcConfError::Factory(format!(
        "`{key}` must be a {expected}, got {}",
        got.type_name()
    ))
}

/// proto3 int64: decimal string or JSON integer. Negative sizes are rejected.
fn parse_size(key: &str, value: &JsonNode) -> Result<u64> {
    let parsed = match value {
        JsonNode::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse::<u64>().ok()
        }
        JsonNode::String(_) => None,
        JsonNode::Number(n) => n.as_u64(),
        other => return Err(wrong_type(key, "string or integer", other)),
    };
    match parsed {
        Some(v) if v <= i64::MAX as u64 => Ok(v),
        _ => Err(SvcConfError::Factory(format!(
            "`{key}` must be a non-negative int64"
        ))),
    }
}
