//! Developer accounts, their users, and tenants.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::pagination::Paginated;

/// A developer (buyer) account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeveloperAccount {
    /// Account attributes.
    #[serde(rename = "account")]
    pub element: DeveloperAccountItem,
}

/// Developer account attributes.
///
/// Custom fields defined in the admin portal are kept in `extra_fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeveloperAccountItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finance_support_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_access_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_billing_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_charging_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_stored: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra_fields: Map<String, Value>,
}

/// A page of developer accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeveloperAccountList {
    #[serde(rename = "accounts", default)]
    pub items: Vec<DeveloperAccount>,
}

impl Paginated for DeveloperAccountList {
    type Item = DeveloperAccount;

    fn into_items(self) -> Vec<DeveloperAccount> {
        self.items
    }

    fn from_items(items: Vec<DeveloperAccount>) -> Self {
        Self { items }
    }
}

/// A user of a developer account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeveloperUser {
    /// User attributes.
    #[serde(rename = "user")]
    pub element: DeveloperUserItem,
}

/// Developer user attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeveloperUserItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra_fields: Map<String, Value>,
}

/// Users of one developer account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeveloperUserList {
    #[serde(rename = "users", default)]
    pub items: Vec<DeveloperUser>,
}

/// A freshly signed-up tenant, as returned by the master API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub signup: TenantSignup,
}

/// The tenant's provider account and its first admin access token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantSignup {
    pub account: DeveloperAccountItem,
    pub access_token: AccessToken,
}

/// A personal access token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessToken {
    pub id: i64,
    pub name: String,
    pub value: String,
    pub permission: String,
    pub scopes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_keeps_custom_fields() {
        let json = r#"{"account":{"id":7,"org_name":"acme","state":"approved","vat_code":"ES123"}}"#;
        let account: DeveloperAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.element.id, Some(7));
        assert_eq!(account.element.org_name.as_deref(), Some("acme"));
        assert_eq!(account.element.extra_fields["vat_code"], "ES123");

        let back = serde_json::to_value(&account).unwrap();
        assert_eq!(back["account"]["vat_code"], "ES123");
        assert!(back["account"].get("domain").is_none());
    }

    #[test]
    fn test_tenant_signup() {
        let json = r#"{"signup":{"account":{"id":3,"admin_domain":"t-admin.example.com"},"access_token":{"id":1,"value":"abc","scopes":["account_management"]}}}"#;
        let tenant: Tenant = serde_json::from_str(json).unwrap();
        assert_eq!(tenant.signup.account.id, Some(3));
        assert_eq!(tenant.signup.access_token.value, "abc");
        assert_eq!(tenant.signup.access_token.scopes, vec!["account_management"]);
    }
}
