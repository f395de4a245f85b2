//! Method-config extraction: one block -> (paths, value).

use svcconf_core::error::{Result, SvcConfError};
use svcconf_core::{JsonNode, MethodName, MethodPath, PathInterner};

use super::factory::MethodConfigFactory;

pub(crate) const NAME_KEY: &str = "name";

/// Result of extracting one method-config block.
#[derive(Debug, Clone)]
pub struct ExtractedMethodConfig<V> {
    /// Paths named by the block, in document order, without repeats.
    pub paths: Vec<MethodPath>,
    pub value: V,
}

/// Build the value for the block at `methodConfig[index]` and collect the
/// paths it applies to.
///
/// The factory runs first. If the names turn out to be invalid, the built
/// value is dropped before the error is returned.
pub fn extract_method_config<F>(
    node: &JsonNode,
    index: usize,
    factory: &F,
    interner: &PathInterner,
) -> Result<ExtractedMethodConfig<F::Value>>
where
    F: MethodConfigFactory + ?Sized,
{
    let location = format!("{}[{index}]", crate::document::METHOD_CONFIG_KEY);
    let members = node.as_object().ok_or_else(|| {
        SvcConfError::Schema(format!("{location}: expected object, got {}", node.type_name()))
    })?;

    let value = factory.create(node).map_err(|e| match e {
        SvcConfError::Factory(_) => e.at(&location),
        other => SvcConfError::Factory(format!("{location}: {other}")),
    })?;

    let mut names: Option<&[JsonNode]> = None;
    for (key, child) in members {
        if key != NAME_KEY {
            continue;
        }
        if names.is_some() {
            return Err(SvcConfError::Schema(format!("{location}: duplicate `{NAME_KEY}`")));
        }
        names = Some(child.as_array().ok_or_else(|| {
            SvcConfError::Schema(format!(
                "{location}: `{NAME_KEY}` must be an array, got {}",
                child.type_name()
            ))
        })?);
    }

    let names = names.unwrap_or(&[]);
    let mut paths: Vec<MethodPath> = Vec::with_capacity(names.len());
    for (j, name) in names.iter().enumerate() {
        let path = MethodName::canonicalize(name)
            .map_err(|e| e.at(&format!("{location}.{NAME_KEY}[{j}]")))?;
        if paths.iter().any(|p| p.as_str() == path) {
            continue;
        }
        paths.push(interner.intern(&path));
    }

    if paths.is_empty() {
        return Err(SvcConfError::EmptyNames { index });
    }

    Ok(ExtractedMethodConfig { paths, value })
}

/// Number of entries in a block's `name` arrays, without validating them.
pub(crate) fn count_names(node: &JsonNode) -> usize {
    node.members(NAME_KEY)
        .filter_map(JsonNode::as_array)
        .map(<[JsonNode]>::len)
        .sum()
}
