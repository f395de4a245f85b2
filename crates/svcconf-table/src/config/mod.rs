//! Service config loaders (strict parsing).

use std::fs;
use std::path::Path;

use svcconf_core::error::{Result, SvcConfError};

use crate::document::ServiceConfig;
use crate::params::MethodParams;
use crate::table::MethodConfigTable;

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ServiceConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        SvcConfError::Io(format!("read service config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    ServiceConfig::parse(s)
}

/// Parse `s` and build its [`MethodParams`] table in one step.
pub fn load_method_params(s: &str) -> Result<(ServiceConfig, MethodConfigTable<MethodParams>)> {
    let cfg = load_from_str(s)?;
    let table = cfg.method_params_table()?;
    Ok((cfg, table))
}
