//! Products (services) and their gateway configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pagination::Paginated;

/// A product, called a service by the admin API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "service")]
    pub element: ProductItem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductItem {
    pub id: i64,
    pub name: String,
    pub system_name: String,
    pub state: Option<String>,
    pub description: Option<String>,
    pub deployment_option: Option<String>,
    pub backend_version: Option<String>,
    pub support_email: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A page of products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductList {
    #[serde(rename = "services", default)]
    pub products: Vec<Product>,
}

impl Paginated for ProductList {
    type Item = Product;

    fn into_items(self) -> Vec<Product> {
        self.products
    }

    fn from_items(products: Vec<Product>) -> Self {
        Self { products }
    }
}

/// APIcast settings of a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Proxy {
    #[serde(rename = "proxy")]
    pub element: ProxyItem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyItem {
    pub service_id: i64,
    pub endpoint: String,
    pub sandbox_endpoint: String,
    pub api_backend: Option<String>,
    pub credentials_location: Option<String>,
    pub auth_app_key: Option<String>,
    pub auth_app_id: Option<String>,
    pub auth_user_key: Option<String>,
    pub error_auth_failed: Option<String>,
    pub error_auth_missing: Option<String>,
    pub error_status_auth_failed: Option<i64>,
    pub error_status_auth_missing: Option<i64>,
    pub error_status_no_match: Option<i64>,
    pub error_no_match: Option<String>,
    pub oidc_issuer_endpoint: Option<String>,
    pub oidc_issuer_type: Option<String>,
    pub jwt_claim_with_client_id: Option<String>,
    pub jwt_claim_with_client_id_type: Option<String>,
    pub secret_token: Option<String>,
    pub hostname_rewrite: Option<String>,
    pub deployment_option: Option<String>,
    pub policies_config: Option<Value>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// One policy in a product's APIcast policy chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub configuration: Value,
    #[serde(default)]
    pub enabled: bool,
}

/// A product's policy chain, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyChain {
    #[serde(rename = "policies_config", default)]
    pub policies: Vec<PolicyConfig>,
}

/// OpenID Connect flows enabled for a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OidcConfiguration {
    #[serde(rename = "oidc_configuration")]
    pub element: OidcConfigurationItem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OidcConfigurationItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub standard_flow_enabled: bool,
    pub implicit_flow_enabled: bool,
    pub service_accounts_enabled: bool,
    pub direct_access_grants_enabled: bool,
}
