use crate::client::ThreeScaleClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::{
    BackendApi, BackendApiList, BackendApiUsage, BackendApiUsageList, MappingRule,
    MappingRuleList, Method, MethodList, Metric, MetricList,
};
use crate::pagination::{self, Pagination, BACKENDS_PER_PAGE};
use crate::params::Params;
use crate::response::JsonFormat;
use crate::transport::Transport;

const BACKEND_LIST: &str = "/admin/api/backend_apis.json";
const BACKEND: &str = "/admin/api/backend_apis/{id}.json";
const BACKEND_METHOD_LIST: &str = "/admin/api/backend_apis/{id}/metrics/{metric_id}/methods.json";
const BACKEND_METHOD: &str =
    "/admin/api/backend_apis/{id}/metrics/{metric_id}/methods/{method_id}.json";
const BACKEND_METRIC_LIST: &str = "/admin/api/backend_apis/{id}/metrics.json";
const BACKEND_METRIC: &str = "/admin/api/backend_apis/{id}/metrics/{metric_id}.json";
const BACKEND_MAPPING_RULE_LIST: &str = "/admin/api/backend_apis/{id}/mapping_rules.json";
const BACKEND_MAPPING_RULE: &str = "/admin/api/backend_apis/{id}/mapping_rules/{rule_id}.json";
const BACKEND_USAGE_LIST: &str = "/admin/api/services/{id}/backend_usages.json";
const BACKEND_USAGE: &str = "/admin/api/services/{id}/backend_usages/{usage_id}.json";

impl<T: Transport> ThreeScaleClient<T> {
    /// Lists every backend API, walking all pages.
    ///
    /// ## Errors
    ///
    /// The first failing page aborts the walk; see [`execute`](Self::execute).
    pub async fn list_backend_apis(&self) -> Result<BackendApiList, ApiError> {
        pagination::walk(BACKENDS_PER_PAGE, move |page: Pagination| {
            self.list_backend_apis_per_page(page.page, page.per_page)
        })
        .await
    }

    /// Lists one page of backend APIs.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_backend_apis_per_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<BackendApiList, ApiError> {
        let endpoint: Endpoint<JsonFormat<BackendApiList>> =
            Endpoint::get(BACKEND_LIST).query(&Pagination::new(page, per_page).params());
        self.execute(&endpoint).await
    }

    /// Creates a backend API. `params` needs `name` and `private_endpoint`.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn create_backend_api(&self, params: &Params) -> Result<BackendApi, ApiError> {
        let endpoint: Endpoint<JsonFormat<BackendApi>> =
            Endpoint::post(BACKEND_LIST).form(params).created();
        self.execute(&endpoint).await
    }

    /// Reads a backend API.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_backend_api(&self, id: i64) -> Result<BackendApi, ApiError> {
        let endpoint: Endpoint<JsonFormat<BackendApi>> = Endpoint::get(BACKEND).path_param("id", id);
        self.execute(&endpoint).await
    }

    /// Updates a backend API.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_backend_api(&self, id: i64, params: &Params) -> Result<BackendApi, ApiError> {
        let endpoint: Endpoint<JsonFormat<BackendApi>> =
            Endpoint::put(BACKEND).path_param("id", id).form(params);
        self.execute(&endpoint).await
    }

    /// Deletes a backend API.
    ///
    /// ## Errors
    ///
    /// See [`execute_empty`](Self::execute_empty).
    pub async fn delete_backend_api(&self, id: i64) -> Result<(), ApiError> {
        let endpoint: Endpoint<JsonFormat<()>> = Endpoint::delete(BACKEND).path_param("id", id);
        self.execute_empty(&endpoint).await
    }

    /// Lists the methods under a backend API metric.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_backend_api_methods(
        &self,
        backend_id: i64,
        hits_id: i64,
    ) -> Result<MethodList, ApiError> {
        let endpoint: Endpoint<JsonFormat<MethodList>> = Endpoint::get(BACKEND_METHOD_LIST)
            .path_param("id", backend_id)
            .path_param("metric_id", hits_id);
        self.execute(&endpoint).await
    }

    /// Creates a backend API method.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn create_backend_api_method(
        &self,
        backend_id: i64,
        hits_id: i64,
        params: &Params,
    ) -> Result<Method, ApiError> {
        let endpoint: Endpoint<JsonFormat<Method>> = Endpoint::post(BACKEND_METHOD_LIST)
            .path_param("id", backend_id)
            .path_param("metric_id", hits_id)
            .form(params)
            .created();
        self.execute(&endpoint).await
    }

    /// Reads a backend API method.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_backend_api_method(
        &self,
        backend_id: i64,
        hits_id: i64,
        method_id: i64,
    ) -> Result<Method, ApiError> {
        let endpoint: Endpoint<JsonFormat<Method>> = Endpoint::get(BACKEND_METHOD)
            .path_param("id", backend_id)
            .path_param("metric_id", hits_id)
            .path_param("method_id", method_id);
        self.execute(&endpoint).await
    }

    /// Updates a backend API method.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_backend_api_method(
        &self,
        backend_id: i64,
        hits_id: i64,
        method_id: i64,
        params: &Params,
    ) -> Result<Method, ApiError> {
        let endpoint: Endpoint<JsonFormat<Method>> = Endpoint::put(BACKEND_METHOD)
            .path_param("id", backend_id)
            .path_param("metric_id", hits_id)
            .path_param("method_id", method_id)
            .form(params);
        self.execute(&endpoint).await
    }

    /// Deletes a backend API method.
    ///
    /// ## Errors
    ///
    /// See [`execute_empty`](Self::execute_empty).
    pub async fn delete_backend_api_method(
        &self,
        backend_id: i64,
        hits_id: i64,
        method_id: i64,
    ) -> Result<(), ApiError> {
        let endpoint: Endpoint<JsonFormat<()>> = Endpoint::delete(BACKEND_METHOD)
            .path_param("id", backend_id)
            .path_param("metric_id", hits_id)
            .path_param("method_id", method_id);
        self.execute_empty(&endpoint).await
    }

    /// Lists the metrics of a backend API.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_backend_api_metrics(&self, backend_id: i64) -> Result<MetricList, ApiError> {
        let endpoint: Endpoint<JsonFormat<MetricList>> =
            Endpoint::get(BACKEND_METRIC_LIST).path_param("id", backend_id);
        self.execute(&endpoint).await
    }

    /// Creates a backend API metric.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn create_backend_api_metric(
        &self,
        backend_id: i64,
        params: &Params,
    ) -> Result<Metric, ApiError> {
        let endpoint: Endpoint<JsonFormat<Metric>> = Endpoint::post(BACKEND_METRIC_LIST)
            .path_param("id", backend_id)
            .form(params)
            .created();
        self.execute(&endpoint).await
    }

    /// Reads a backend API metric.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_backend_api_metric(
        &self,
        backend_id: i64,
        metric_id: i64,
    ) -> Result<Metric, ApiError> {
        let endpoint: Endpoint<JsonFormat<Metric>> = Endpoint::get(BACKEND_METRIC)
            .path_param("id", backend_id)
            .path_param("metric_id", metric_id);
        self.execute(&endpoint).await
    }

    /// Updates a backend API metric.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_backend_api_metric(
        &self,
        backend_id: i64,
        metric_id: i64,
        params: &Params,
    ) -> Result<Metric, ApiError> {
        let endpoint: Endpoint<JsonFormat<Metric>> = Endpoint::put(BACKEND_METRIC)
            .path_param("id", backend_id)
            .path_param("metric_id", metric_id)
            .form(params);
        self.execute(&endpoint).await
    }

    /// Deletes a backend API metric.
    ///
    /// ## Errors
    ///
    /// See [`execute_empty`](Self::execute_empty).
    pub async fn delete_backend_api_metric(
        &self,
        backend_id: i64,
        metric_id: i64,
    ) -> Result<(), ApiError> {
        let endpoint: Endpoint<JsonFormat<()>> = Endpoint::delete(BACKEND_METRIC)
            .path_param("id", backend_id)
            .path_param("metric_id", metric_id);
        self.execute_empty(&endpoint).await
    }

    /// Lists the mapping rules of a backend API.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_backend_api_mapping_rules(
        &self,
        backend_id: i64,
    ) -> Result<MappingRuleList, ApiError> {
        let endpoint: Endpoint<JsonFormat<MappingRuleList>> =
            Endpoint::get(BACKEND_MAPPING_RULE_LIST).path_param("id", backend_id);
        self.execute(&endpoint).await
    }

    /// Creates a backend API mapping rule.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn create_backend_api_mapping_rule(
        &self,
        backend_id: i64,
        params: &Params,
    ) -> Result<MappingRule, ApiError> {
        let endpoint: Endpoint<JsonFormat<MappingRule>> = Endpoint::post(BACKEND_MAPPING_RULE_LIST)
            .path_param("id", backend_id)
            .form(params)
            .created();
        self.execute(&endpoint).await
    }

    /// Reads a backend API mapping rule.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_backend_api_mapping_rule(
        &self,
        backend_id: i64,
        rule_id: i64,
    ) -> Result<MappingRule, ApiError> {
        let endpoint: Endpoint<JsonFormat<MappingRule>> = Endpoint::get(BACKEND_MAPPING_RULE)
            .path_param("id", backend_id)
            .path_param("rule_id", rule_id);
        self.execute(&endpoint).await
    }

    /// Updates a backend API mapping rule.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_backend_api_mapping_rule(
        &self,
        backend_id: i64,
        rule_id: i64,
        params: &Params,
    ) -> Result<MappingRule, ApiError> {
        let endpoint: Endpoint<JsonFormat<MappingRule>> = Endpoint::put(BACKEND_MAPPING_RULE)
            .path_param("id", backend_id)
            .path_param("rule_id", rule_id)
            .form(params);
        self.execute(&endpoint).await
    }

    /// Deletes a backend API mapping rule.
    ///
    /// ## Errors
    ///
    /// See [`execute_empty`](Self::execute_empty).
    pub async fn delete_backend_api_mapping_rule(
        &self,
        backend_id: i64,
        rule_id: i64,
    ) -> Result<(), ApiError> {
        let endpoint: Endpoint<JsonFormat<()>> = Endpoint::delete(BACKEND_MAPPING_RULE)
            .path_param("id", backend_id)
            .path_param("rule_id", rule_id);
        self.execute_empty(&endpoint).await
    }

    /// Lists the backend APIs mounted on a product.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_backend_api_usages(
        &self,
        product_id: i64,
    ) -> Result<BackendApiUsageList, ApiError> {
        let endpoint: Endpoint<JsonFormat<BackendApiUsageList>> =
            Endpoint::get(BACKEND_USAGE_LIST).path_param("id", product_id);
        self.execute(&endpoint).await
    }

    /// Mounts a backend API on a product. `params` needs `backend_api_id`
    /// and `path`.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn create_backend_api_usage(
        &self,
        product_id: i64,
        params: &Params,
    ) -> Result<BackendApiUsage, ApiError> {
        let endpoint: Endpoint<JsonFormat<BackendApiUsage>> = Endpoint::post(BACKEND_USAGE_LIST)
            .path_param("id", product_id)
            .form(params)
            .created();
        self.execute(&endpoint).await
    }

    /// Reads one backend API mounted on a product.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_backend_api_usage(
        &self,
        product_id: i64,
        usage_id: i64,
    ) -> Result<BackendApiUsage, ApiError> {
        let endpoint: Endpoint<JsonFormat<BackendApiUsage>> = Endpoint::get(BACKEND_USAGE)
            .path_param("id", product_id)
            .path_param("usage_id", usage_id);
        self.execute(&endpoint).await
    }

    /// Updates the mount point of a backend API on a product.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_backend_api_usage(
        &self,
        product_id: i64,
        usage_id: i64,
        params: &Params,
    ) -> Result<BackendApiUsage, ApiError> {
        let endpoint: Endpoint<JsonFormat<BackendApiUsage>> = Endpoint::put(BACKEND_USAGE)
            .path_param("id", product_id)
            .path_param("usage_id", usage_id)
            .form(params);
        self.execute(&endpoint).await
    }

    /// Unmounts a backend API from a product.
    ///
    /// ## Errors
    ///
    /// See [`execute_empty`](Self::execute_empty).
    pub async fn delete_backend_api_usage(
        &self,
        product_id: i64,
        usage_id: i64,
    ) -> Result<(), ApiError> {
        let endpoint: Endpoint<JsonFormat<()>> = Endpoint::delete(BACKEND_USAGE)
            .path_param("id", product_id)
            .path_param("usage_id", usage_id);
        self.execute_empty(&endpoint).await
    }
}
