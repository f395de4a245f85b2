//! Table construction.
//!
//! Two passes over `methodConfig`: count the names to size the map, then
//! extract every block into a staging map. The staging map only becomes a
//! table once every block has succeeded, so a failed build leaves nothing
//! behind.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use svcconf_core::error::{Result, SvcConfError};
use svcconf_core::JsonNode;

use super::extract::{count_names, extract_method_config};
use super::factory::MethodConfigFactory;
use super::MethodConfigTable;
use crate::document::{ServiceConfig, METHOD_CONFIG_KEY};

impl<V: Clone> MethodConfigTable<V> {
    /// Build a table from `config`, producing one value per method-config
    /// block with `factory`.
    ///
    /// A document without `methodConfig` yields an empty table. Two blocks
    /// naming the same path is a schema error.
    pub fn build<F>(config: &ServiceConfig, factory: &F) -> Result<Self>
    where
        F: MethodConfigFactory<Value = V> + ?Sized,
    {
        let res = build_entries(config, factory);
        match &res {
            Ok((table, blocks)) => {
                tracing::debug!(
                    blocks = *blocks,
                    entries = table.len(),
                    "method config table built"
                );
            }
            Err(e) => {
                tracing::warn!(kind = e.kind().as_str(), error = %e, "method config table build aborted");
            }
        }
        res.map(|(table, _)| table)
    }
}

/// Returns the table and the number of method-config blocks it came from.
fn build_entries<F>(
    config: &ServiceConfig,
    factory: &F,
) -> Result<(MethodConfigTable<F::Value>, usize)>
where
    F: MethodConfigFactory + ?Sized,
{
    // Root shape and loadBalancingPolicy uniqueness.
    config.checked_lb_policy_name()?;
    let blocks = match method_config_blocks(config)? {
        Some(blocks) => blocks,
        None => return Ok((MethodConfigTable::default(), 0)),
    };

    let capacity: usize = blocks.iter().map(count_names).sum();
    let mut staged = HashMap::with_capacity(capacity);

    for (index, block) in blocks.iter().enumerate() {
        let extracted = extract_method_config(block, index, factory, config.path_interner())?;
        for path in extracted.paths {
            match staged.entry(path) {
                Entry::Vacant(slot) => {
                    slot.insert(extracted.value.clone());
                }
                Entry::Occupied(slot) => {
                    return Err(SvcConfError::Schema(format!(
                        "{METHOD_CONFIG_KEY}[{index}]: path {} already configured",
                        slot.key()
                    )));
                }
            }
        }
    }

    Ok((MethodConfigTable { entries: staged }, blocks.len()))
}

/// The `methodConfig` array, if present exactly once.
fn method_config_blocks(config: &ServiceConfig) -> Result<Option<&[JsonNode]>> {
    let mut blocks = None;
    for (key, value) in config.root_members()? {
        if key != METHOD_CONFIG_KEY {
            continue;
        }
        if blocks.is_some() {
            return Err(SvcConfError::Schema(format!("duplicate `{METHOD_CONFIG_KEY}`")));
        }
        blocks = Some(value.as_array().ok_or_else(|| {
            SvcConfError::Schema(format!(
                "`{METHOD_CONFIG_KEY}` must be an array, got {}",
                value.type_name()
            ))
        })?);
    }
    Ok(blocks)
}
