//! Applications, served by the legacy XML endpoints.

use serde::{Deserialize, Serialize};

/// An application as returned by `applications.xml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "application", default)]
pub struct Application {
    pub id: i64,
    pub state: String,
    pub user_account_id: i64,
    pub service_id: i64,
    pub user_key: Option<String>,
    pub application_id: Option<String>,
    pub provider_verification_key: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub plan: ApplicationPlanRef,
}

/// The plan an application is subscribed to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationPlanRef {
    #[serde(rename = "@custom")]
    pub custom: bool,
    #[serde(rename = "@default")]
    pub default: bool,
    pub id: i64,
    pub name: String,
    pub state: Option<String>,
    pub service_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "applications")]
pub struct ApplicationList {
    #[serde(rename = "application", default)]
    pub applications: Vec<Application>,
}
