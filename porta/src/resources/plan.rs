use crate::client::ThreeScaleClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::{
    ApplicationPlan, ApplicationPlanList, Limit, LimitList, PricingRule, PricingRuleList,
};
use crate::params::Params;
use crate::response::JsonFormat;
use crate::transport::Transport;

const PLAN_LIST: &str = "/admin/api/services/{id}/application_plans.json";
const PLAN: &str = "/admin/api/services/{id}/application_plans/{plan_id}.json";
const PLAN_LIMIT_LIST: &str = "/admin/api/application_plans/{plan_id}/limits.json";
const PLAN_METRIC_LIMIT_LIST: &str =
    "/admin/api/application_plans/{plan_id}/metrics/{metric_id}/limits.json";
const PLAN_METRIC_LIMIT: &str =
    "/admin/api/application_plans/{plan_id}/metrics/{metric_id}/limits/{limit_id}.json";
const PLAN_PRICING_RULE_LIST: &str = "/admin/api/application_plans/{plan_id}/pricing_rules.json";
const PLAN_METRIC_PRICING_RULE_LIST: &str =
    "/admin/api/application_plans/{plan_id}/metrics/{metric_id}/pricing_rules.json";
const PLAN_METRIC_PRICING_RULE: &str =
    "/admin/api/application_plans/{plan_id}/metrics/{metric_id}/pricing_rules/{rule_id}.json";

impl<T: Transport> ThreeScaleClient<T> {
    /// Lists the application plans of a product.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_application_plans(
        &self,
        product_id: i64,
    ) -> Result<ApplicationPlanList, ApiError> {
        let endpoint: Endpoint<JsonFormat<ApplicationPlanList>> =
            Endpoint::get(PLAN_LIST).path_param("id", product_id);
        self.execute(&endpoint).await
    }

    /// Creates an application plan.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn create_application_plan(
        &self,
        product_id: i64,
        params: &Params,
    ) -> Result<ApplicationPlan, ApiError> {
        let endpoint: Endpoint<JsonFormat<ApplicationPlan>> = Endpoint::post(PLAN_LIST)
            .path_param("id", product_id)
            .form(params)
            .created();
        self.execute(&endpoint).await
    }

    /// Reads an application plan.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_application_plan(
        &self,
        product_id: i64,
        plan_id: i64,
    ) -> Result<ApplicationPlan, ApiError> {
        let endpoint: Endpoint<JsonFormat<ApplicationPlan>> = Endpoint::get(PLAN)
            .path_param("id", product_id)
            .path_param("plan_id", plan_id);
        self.execute(&endpoint).await
    }

    /// Updates an application plan.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_application_plan(
        &self,
        product_id: i64,
        plan_id: i64,
        params: &Params,
    ) -> Result<ApplicationPlan, ApiError> {
        let endpoint: Endpoint<JsonFormat<ApplicationPlan>> = Endpoint::put(PLAN)
            .path_param("id", product_id)
            .path_param("plan_id", plan_id)
            .form(params);
        self.execute(&endpoint).await
    }

    /// Deletes an application plan.
    ///
    /// ## Errors
    ///
    /// See [`execute_empty`](Self::execute_empty).
    pub async fn delete_application_plan(
        &self,
        product_id: i64,
        plan_id: i64,
    ) -> Result<(), ApiError> {
        let endpoint: Endpoint<JsonFormat<()>> = Endpoint::delete(PLAN)
            .path_param("id", product_id)
            .path_param("plan_id", plan_id);
        self.execute_empty(&endpoint).await
    }

    /// Lists the limits of a plan across all metrics.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_application_plan_limits(&self, plan_id: i64) -> Result<LimitList, ApiError> {
        let endpoint: Endpoint<JsonFormat<LimitList>> =
            Endpoint::get(PLAN_LIMIT_LIST).path_param("plan_id", plan_id);
        self.execute(&endpoint).await
    }

    /// Lists the limits of a plan for one metric.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_application_plan_limits_per_metric(
        &self,
        plan_id: i64,
        metric_id: i64,
    ) -> Result<LimitList, ApiError> {
        let endpoint: Endpoint<JsonFormat<LimitList>> = Endpoint::get(PLAN_METRIC_LIMIT_LIST)
            .path_param("plan_id", plan_id)
            .path_param("metric_id", metric_id);
        self.execute(&endpoint).await
    }

    /// Creates a limit. `params` needs `period` and `value`.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn create_application_plan_limit(
        &self,
        plan_id: i64,
        metric_id: i64,
        params: &Params,
    ) -> Result<Limit, ApiError> {
        let endpoint: Endpoint<JsonFormat<Limit>> = Endpoint::post(PLAN_METRIC_LIMIT_LIST)
            .path_param("plan_id", plan_id)
            .path_param("metric_id", metric_id)
            .form(params)
            .created();
        self.execute(&endpoint).await
    }

    /// Reads a limit.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_application_plan_limit(
        &self,
        plan_id: i64,
        metric_id: i64,
        limit_id: i64,
    ) -> Result<Limit, ApiError> {
        let endpoint: Endpoint<JsonFormat<Limit>> = Endpoint::get(PLAN_METRIC_LIMIT)
            .path_param("plan_id", plan_id)
            .path_param("metric_id", metric_id)
            .path_param("limit_id", limit_id);
        self.execute(&endpoint).await
    }

    /// Updates a limit.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_application_plan_limit(
        &self,
        plan_id: i64,
        metric_id: i64,
        limit_id: i64,
        params: &Params,
    ) -> Result<Limit, ApiError> {
        let endpoint: Endpoint<JsonFormat<Limit>> = Endpoint::put(PLAN_METRIC_LIMIT)
            .path_param("plan_id", plan_id)
            .path_param("metric_id", metric_id)
            .path_param("limit_id", limit_id)
            .form(params);
        self.execute(&endpoint).await
    }

    /// Deletes a limit.
    ///
    /// ## Errors
    ///
    /// See [`execute_empty`](Self::execute_empty).
    pub async fn delete_application_plan_limit(
        &self,
        plan_id: i64,
        metric_id: i64,
        limit_id: i64,
    ) -> Result<(), ApiError> {
        let endpoint: Endpoint<JsonFormat<()>> = Endpoint::delete(PLAN_METRIC_LIMIT)
            .path_param("plan_id", plan_id)
            .path_param("metric_id", metric_id)
            .path_param("limit_id", limit_id);
        self.execute_empty(&endpoint).await
    }

    /// Lists the pricing rules of a plan across all metrics.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_application_plan_pricing_rules(
        &self,
        plan_id: i64,
    ) -> Result<PricingRuleList, ApiError> {
        let endpoint: Endpoint<JsonFormat<PricingRuleList>> =
            Endpoint::get(PLAN_PRICING_RULE_LIST).path_param("plan_id", plan_id);
        self.execute(&endpoint).await
    }

    /// Lists the pricing rules of a plan for one metric.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_application_plan_pricing_rules_per_metric(
        &self,
        plan_id: i64,
        metric_id: i64,
    ) -> Result<PricingRuleList, ApiError> {
        let endpoint: Endpoint<JsonFormat<PricingRuleList>> =
            Endpoint::get(PLAN_METRIC_PRICING_RULE_LIST)
                .path_param("plan_id", plan_id)
                .path_param("metric_id", metric_id);
        self.execute(&endpoint).await
    }

    /// Creates a pricing rule. `params` needs `cost_per_unit`, `min` and
    /// `max`.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn create_application_plan_pricing_rule(
        &self,
        plan_id: i64,
        metric_id: i64,
        params: &Params,
    ) -> Result<PricingRule, ApiError> {
        let endpoint: Endpoint<JsonFormat<PricingRule>> =
            Endpoint::post(PLAN_METRIC_PRICING_RULE_LIST)
                .path_param("plan_id", plan_id)
                .path_param("metric_id", metric_id)
                .form(params)
                .created();
        self.execute(&endpoint).await
    }

    /// Deletes a pricing rule.
    ///
    /// ## Errors
    ///
    /// See [`execute_empty`](Self::execute_empty).
    pub async fn delete_application_plan_pricing_rule(
        &self,
        plan_id: i64,
        metric_id: i64,
        rule_id: i64,
    ) -> Result<(), ApiError> {
        let endpoint: Endpoint<JsonFormat<()>> = Endpoint::delete(PLAN_METRIC_PRICING_RULE)
            .path_param("plan_id", plan_id)
            .path_param("metric_id", metric_id)
            .path_param("rule_id", rule_id);
        self.execute_empty(&endpoint).await
    }
}
