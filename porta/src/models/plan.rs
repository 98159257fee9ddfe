//! Application plans with their limits and pricing rules.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationPlan {
    #[serde(rename = "application_plan")]
    pub element: ApplicationPlanItem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationPlanItem {
    pub id: i64,
    pub name: String,
    pub system_name: String,
    pub state: Option<String>,
    pub setup_fee: Option<f64>,
    pub cost_per_month: Option<f64>,
    pub trial_period_days: Option<i64>,
    pub cancellation_period: Option<i64>,
    pub approval_required: bool,
    pub default: bool,
    pub custom: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationPlanList {
    #[serde(rename = "plans", default)]
    pub plans: Vec<ApplicationPlan>,
}

/// A usage limit of a plan on one metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    #[serde(rename = "limit")]
    pub element: LimitItem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitItem {
    pub id: i64,
    pub period: String,
    pub value: i64,
    pub metric_id: i64,
    pub plan_id: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LimitList {
    #[serde(rename = "limits", default)]
    pub limits: Vec<Limit>,
}

/// A per-unit price of a plan on one metric, for a usage range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingRule {
    #[serde(rename = "pricing_rule")]
    pub element: PricingRuleItem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRuleItem {
    pub id: i64,
    pub metric_id: i64,
    pub cost_per_unit: String,
    pub min: i64,
    pub max: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingRuleList {
    #[serde(rename = "pricing_rules", default)]
    pub rules: Vec<PricingRule>,
}
