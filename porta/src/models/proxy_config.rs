//! Versioned APIcast configurations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pagination::Paginated;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyConfigElement {
    pub proxy_config: ProxyConfig,
}

/// One configuration version of one environment. `content` is the full
/// gateway configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub id: i64,
    pub version: i64,
    pub environment: String,
    pub content: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyConfigList {
    #[serde(rename = "proxy_configs", default)]
    pub configs: Vec<ProxyConfigElement>,
}

impl Paginated for ProxyConfigList {
    type Item = ProxyConfigElement;

    fn into_items(self) -> Vec<ProxyConfigElement> {
        self.configs
    }

    fn from_items(configs: Vec<ProxyConfigElement>) -> Self {
        Self { configs }
    }
}
