//! Resource value objects.
//!
//! Each resource mirrors the admin API envelope convention: an outer struct
//! whose single field is named after the resource (`{"service": {...}}`)
//! and an `*Item` struct with the attributes. Lists follow the same shape
//! with a plural key.

mod account;
mod active_doc;
mod application;
mod backend;
mod metric;
mod plan;
mod policy_registry;
mod product;
mod proxy_config;

pub use account::{
    AccessToken, DeveloperAccount, DeveloperAccountItem, DeveloperAccountList, DeveloperUser,
    DeveloperUserItem, DeveloperUserList, Tenant, TenantSignup,
};
pub use active_doc::{ActiveDoc, ActiveDocItem, ActiveDocList};
pub use application::{Application, ApplicationList, ApplicationPlanRef};
pub use backend::{
    BackendApi, BackendApiItem, BackendApiList, BackendApiUsage, BackendApiUsageItem,
    BackendApiUsageList,
};
pub use metric::{
    MappingRule, MappingRuleItem, MappingRuleList, Method, MethodItem, MethodList, Metric,
    MetricItem, MetricList,
};
pub use plan::{
    ApplicationPlan, ApplicationPlanItem, ApplicationPlanList, Limit, LimitItem, LimitList,
    PricingRule, PricingRuleItem, PricingRuleList,
};
pub use policy_registry::{ApicastPolicy, ApicastPolicyItem, ApicastPolicyRegistry, ApicastPolicySchema};
pub use product::{
    OidcConfiguration, OidcConfigurationItem, PolicyConfig, PolicyChain, Product, ProductItem,
    ProductList, Proxy, ProxyItem,
};
pub use proxy_config::{ProxyConfig, ProxyConfigElement, ProxyConfigList};
