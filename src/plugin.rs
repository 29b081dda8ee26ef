//! Action plugin contract.
//!
//! An action plugin receives fired alerts from the plugin host and delivers
//! them somewhere. The host discovers plugins and feeds them properties; it
//! relies on each plugin declaring which property keys it needs and their
//! defaults.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::{AlertResult, ConfigError};
use crate::event::FiredAlert;

/// Property naming the downstream endpoint.
pub const ENDPOINT_ID: &str = "endpoint_id";
/// Property marking the plugin instance as managed by the host.
pub const MANAGED: &str = "_managed";

/// An action plugin driven by the plugin host.
pub trait ActionPlugin: Send + Sync {
    /// Registration name of the plugin.
    fn name(&self) -> &'static str;

    /// Handles one fired alert.
    ///
    /// # Errors
    ///
    /// Any failure is returned to the host; plugins do not retry.
    fn process(&self, fired: &FiredAlert) -> AlertResult<()>;

    /// Flushes any batched output. Must be safe to call at any time.
    fn flush(&self) {}

    /// Property keys this plugin requires from its host.
    fn properties(&self) -> BTreeSet<&'static str>;

    /// Default values for this plugin's properties.
    fn default_properties(&self) -> BTreeMap<String, String>;
}

/// Parsed plugin properties as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginProperties {
    pub endpoint_id: String,
    pub managed: bool,
}

impl Default for PluginProperties {
    fn default() -> Self {
        Self {
            endpoint_id: String::new(),
            managed: true,
        }
    }
}

impl PluginProperties {
    /// Reads known properties, falling back to defaults for absent keys.
    ///
    /// Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidProperty` if `_managed` is not `true` or `false`.
    pub fn from_map(properties: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut parsed = Self::default();
        if let Some(endpoint_id) = properties.get(ENDPOINT_ID) {
            parsed.endpoint_id.clone_from(endpoint_id);
        }
        if let Some(managed) = properties.get(MANAGED) {
            parsed.managed = match managed.trim() {
                "true" => true,
                "false" => false,
                other => {
                    return Err(ConfigError::InvalidProperty {
                        key: MANAGED.to_string(),
                        value: other.to_string(),
                    })
                }
            };
        }
        Ok(parsed)
    }
}
