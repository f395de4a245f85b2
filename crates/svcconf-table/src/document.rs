//! Parsed service config document.

use svcconf_core::error::{Result, SvcConfError};
use svcconf_core::{JsonNode, PathInterner};

use crate::params::{MethodParams, MethodParamsFactory};
use crate::table::{MethodConfigFactory, MethodConfigTable};

pub(crate) const LB_POLICY_KEY: &str = "loadBalancingPolicy";
pub(crate) const METHOD_CONFIG_KEY: &str = "methodConfig";

/// A service config: the raw JSON text and its parsed tree, owned together.
///
/// Immutable after construction, so one document can be shared across
/// threads and used to build any number of tables.
#[derive(Debug)]
pub struct ServiceConfig {
    json: String,
    tree: JsonNode,
    paths: PathInterner,
}

impl ServiceConfig {
    /// Parse `json` into a document. The text is copied.
    pub fn parse(json: &str) -> Result<Self> {
        let tree = JsonNode::parse(json).map_err(|e| {
            tracing::info!(error = %e, "failed to parse JSON for service config");
            e
        })?;
        Ok(Self {
            json: json.to_owned(),
            tree,
            paths: PathInterner::new(),
        })
    }

    /// The text this document was parsed from.
    pub fn json(&self) -> &str {
        &self.json
    }

    pub fn tree(&self) -> &JsonNode {
        &self.tree
    }

    /// Interner shared by every table built from this document.
    pub fn path_interner(&self) -> &PathInterner {
        &self.paths
    }

    /// Top-level `loadBalancingPolicy`, if present and well-formed.
    ///
    /// Any structural irregularity (non-object root, repeated key, non-string
    /// value) yields None rather than an error.
    pub fn lb_policy_name(&self) -> Option<&str> {
        match self.checked_lb_policy_name() {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!(error = %e, "ignoring loadBalancingPolicy");
                None
            }
        }
    }

    /// Strict form of [`Self::lb_policy_name`] used by the table builder.
    pub(crate) fn checked_lb_policy_name(&self) -> Result<Option<&str>> {
        let members = self.root_members()?;
        let mut name = None;
        for (key, value) in members {
            if key != LB_POLICY_KEY {
                continue;
            }
            if name.is_some() {
                return Err(SvcConfError::Schema(format!("duplicate `{LB_POLICY_KEY}`")));
            }
            let s = value.as_str().ok_or_else(|| {
                SvcConfError::Schema(format!(
                    "`{LB_POLICY_KEY}` must be a string, got {}",
                    value.type_name()
                ))
            })?;
            name = Some(s);
        }
        Ok(name)
    }

    pub(crate) fn root_members(&self) -> Result<&[(String, JsonNode)]> {
        self.tree.as_object().ok_or_else(|| {
            SvcConfError::Schema(format!(
                "top-level value must be an object, got {}",
                self.tree.type_name()
            ))
        })
    }

    /// Build a method-config table with values produced by `factory`.
    pub fn method_config_table<F>(&self, factory: &F) -> Result<MethodConfigTable<F::Value>>
    where
        F: MethodConfigFactory + ?Sized,
    {
        MethodConfigTable::build(self, factory)
    }

    /// Build the table of standard method parameters.
    pub fn method_params_table(&self) -> Result<MethodConfigTable<MethodParams>> {
        self.method_config_table(&MethodParamsFactory)
    }
}
