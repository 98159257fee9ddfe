//! Metrics, methods, and mapping rules.
//!
//! The same shapes are served under both products and backend APIs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(rename = "metric")]
    pub element: MetricItem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricItem {
    pub id: i64,
    pub name: String,
    pub system_name: String,
    pub friendly_name: Option<String>,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricList {
    #[serde(rename = "metrics", default)]
    pub metrics: Vec<Metric>,
}

/// A method: a metric that is a child of the `hits` metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Method {
    #[serde(rename = "method")]
    pub element: MethodItem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodItem {
    pub id: i64,
    pub name: String,
    pub system_name: String,
    pub friendly_name: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodList {
    #[serde(rename = "methods", default)]
    pub methods: Vec<Method>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingRule {
    #[serde(rename = "mapping_rule")]
    pub element: MappingRuleItem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingRuleItem {
    pub id: i64,
    pub metric_id: i64,
    pub pattern: String,
    pub http_method: String,
    pub delta: i64,
    pub position: i64,
    pub last: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingRuleList {
    #[serde(rename = "mapping_rules", default)]
    pub mapping_rules: Vec<MappingRule>,
}
