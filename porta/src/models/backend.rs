//! Backend APIs and their attachment to products.

use serde::{Deserialize, Serialize};

use crate::pagination::Paginated;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendApi {
    #[serde(rename = "backend_api")]
    pub element: BackendApiItem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendApiItem {
    pub id: i64,
    pub name: String,
    pub system_name: String,
    pub description: Option<String>,
    pub private_endpoint: String,
    pub account_id: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A page of backend APIs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendApiList {
    #[serde(rename = "backend_apis", default)]
    pub backends: Vec<BackendApi>,
}

impl Paginated for BackendApiList {
    type Item = BackendApi;

    fn into_items(self) -> Vec<BackendApi> {
        self.backends
    }

    fn from_items(backends: Vec<BackendApi>) -> Self {
        Self { backends }
    }
}

/// A backend API mounted on a product under a path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendApiUsage {
    #[serde(rename = "backend_usage")]
    pub element: BackendApiUsageItem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendApiUsageItem {
    pub id: i64,
    pub path: String,
    pub service_id: i64,
    pub backend_id: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Backend usages of a product. Served as a bare JSON array.
pub type BackendApiUsageList = Vec<BackendApiUsage>;
