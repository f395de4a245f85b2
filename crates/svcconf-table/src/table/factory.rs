use svcconf_core::error::Result;
use svcconf_core::JsonNode;

/// Builds one policy value per method-config block.
///
/// The factory sees the whole block, `name` included. The table stores one
/// clone of the value per path the block names; whatever the factory
/// returned is dropped once those clones exist. An error aborts the build
/// and is reported as `SvcConfError::Factory`.
pub trait MethodConfigFactory {
    type Value: Clone;

    fn create(&self, method_config: &JsonNode) -> Result<Self::Value>;
}

impl<F, V> MethodConfigFactory for F
where
    F: Fn(&JsonNode) -> Result<V>,
    V: Clone,
{
    type Value = V;

    fn create(&self, method_config: &JsonNode) -> Result<V> {
        self(method_config)
    }
}
