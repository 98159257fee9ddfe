use crate::client::ThreeScaleClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::{
    MappingRule, MappingRuleList, Method, MethodList, Metric, MetricList, Product, ProductList,
};
use crate::pagination::{self, Pagination, PRODUCTS_PER_PAGE};
use crate::params::Params;
use crate::response::JsonFormat;
use crate::transport::Transport;

const PRODUCT_LIST: &str = "/admin/api/services.json";
const PRODUCT: &str = "/admin/api/services/{id}.json";
const PRODUCT_METHOD_LIST: &str = "/admin/api/services/{id}/metrics/{metric_id}/methods.json";
const PRODUCT_METHOD: &str =
    "/admin/api/services/{id}/metrics/{metric_id}/methods/{method_id}.json";
const PRODUCT_METRIC_LIST: &str = "/admin/api/services/{id}/metrics.json";
const PRODUCT_METRIC: &str = "/admin/api/services/{id}/metrics/{metric_id}.json";
const PRODUCT_MAPPING_RULE_LIST: &str = "/admin/api/services/{id}/proxy/mapping_rules.json";
const PRODUCT_MAPPING_RULE: &str = "/admin/api/services/{id}/proxy/mapping_rules/{rule_id}.json";

impl<T: Transport> ThreeScaleClient<T> {
    /// Lists every product, walking all pages.
    ///
    /// ## Errors
    ///
    /// The first failing page aborts the walk and its error is returned.
    pub async fn list_products(&self) -> Result<ProductList, ApiError> {
        pagination::walk(PRODUCTS_PER_PAGE, move |page: Pagination| {
            self.list_products_per_page(page.page, page.per_page)
        })
        .await
    }

    /// Lists one page of products.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_products_per_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<ProductList, ApiError> {
        let endpoint: Endpoint<JsonFormat<ProductList>> =
            Endpoint::get(PRODUCT_LIST).query(&Pagination::new(page, per_page).params());
        self.execute(&endpoint).await
    }

    /// Creates a product. `name` is mandatory; `params` may set
    /// `system_name`, `description`, `deployment_option`, etc.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn create_product(&self, name: &str, params: &Params) -> Result<Product, ApiError> {
        let endpoint: Endpoint<JsonFormat<Product>> = Endpoint::post(PRODUCT_LIST)
            .form(params)
            .form_param("name", name)
            .created();
        self.execute(&endpoint).await
    }

    /// Reads a product.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_product(&self, id: i64) -> Result<Product, ApiError> {
        let endpoint: Endpoint<JsonFormat<Product>> = Endpoint::get(PRODUCT).path_param("id", id);
        self.execute(&endpoint).await
    }

    /// Updates a product.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_product(&self, id: i64, params: &Params) -> Result<Product, ApiError> {
        let endpoint: Endpoint<JsonFormat<Product>> =
            Endpoint::put(PRODUCT).path_param("id", id).form(params);
        self.execute(&endpoint).await
    }

    /// Deletes a product.
    ///
    /// ## Errors
    ///
    /// See [`execute_empty`](Self::execute_empty).
    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        let endpoint: Endpoint<JsonFormat<()>> = Endpoint::delete(PRODUCT).path_param("id", id);
        self.execute_empty(&endpoint).await
    }

    /// Lists the methods of a product. `hits_id` is the id of the product's
    /// `hits` metric.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_product_methods(
        &self,
        product_id: i64,
        hits_id: i64,
    ) -> Result<MethodList, ApiError> {
        let endpoint: Endpoint<JsonFormat<MethodList>> = Endpoint::get(PRODUCT_METHOD_LIST)
            .path_param("id", product_id)
            .path_param("metric_id", hits_id);
        self.execute(&endpoint).await
    }

    /// Creates a product method.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn create_product_method(
        &self,
        product_id: i64,
        hits_id: i64,
        params: &Params,
    ) -> Result<Method, ApiError> {
        let endpoint: Endpoint<JsonFormat<Method>> = Endpoint::post(PRODUCT_METHOD_LIST)
            .path_param("id", product_id)
            .path_param("metric_id", hits_id)
            .form(params)
            .created();
        self.execute(&endpoint).await
    }

    /// Reads a product method.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_product_method(
        &self,
        product_id: i64,
        hits_id: i64,
        method_id: i64,
    ) -> Result<Method, ApiError> {
        let endpoint: Endpoint<JsonFormat<Method>> = Endpoint::get(PRODUCT_METHOD)
            .path_param("id", product_id)
            .path_param("metric_id", hits_id)
            .path_param("method_id", method_id);
        self.execute(&endpoint).await
    }

    /// Updates a product method.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_product_method(
        &self,
        product_id: i64,
        hits_id: i64,
        method_id: i64,
        params: &Params,
    ) -> Result<Method, ApiError> {
        let endpoint: Endpoint<JsonFormat<Method>> = Endpoint::put(PRODUCT_METHOD)
            .path_param("id", product_id)
            .path_param("metric_id", hits_id)
            .path_param("method_id", method_id)
            .form(params);
        self.execute(&endpoint).await
    }

    /// Deletes a product method.
    ///
    /// ## Errors
    ///
    /// See [`execute_empty`](Self::execute_empty).
    pub async fn delete_product_method(
        &self,
        product_id: i64,
        hits_id: i64,
        method_id: i64,
    ) -> Result<(), ApiError> {
        let endpoint: Endpoint<JsonFormat<()>> = Endpoint::delete(PRODUCT_METHOD)
            .path_param("id", product_id)
            .path_param("metric_id", hits_id)
            .path_param("method_id", method_id);
        self.execute_empty(&endpoint).await
    }

    /// Lists the metrics of a product.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_product_metrics(&self, product_id: i64) -> Result<MetricList, ApiError> {
        let endpoint: Endpoint<JsonFormat<MetricList>> =
            Endpoint::get(PRODUCT_METRIC_LIST).path_param("id", product_id);
        self.execute(&endpoint).await
    }

    /// Creates a product metric.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn create_product_metric(
        &self,
        product_id: i64,
        params: &Params,
    ) -> Result<Metric, ApiError> {
        let endpoint: Endpoint<JsonFormat<Metric>> = Endpoint::post(PRODUCT_METRIC_LIST)
            .path_param("id", product_id)
            .form(params)
            .created();
        self.execute(&endpoint).await
    }

    /// Reads a product metric.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_product_metric(
        &self,
        product_id: i64,
        metric_id: i64,
    ) -> Result<Metric, ApiError> {
        let endpoint: Endpoint<JsonFormat<Metric>> = Endpoint::get(PRODUCT_METRIC)
            .path_param("id", product_id)
            .path_param("metric_id", metric_id);
        self.execute(&endpoint).await
    }

    /// Updates a product metric.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_product_metric(
        &self,
        product_id: i64,
        metric_id: i64,
        params: &Params,
    ) -> Result<Metric, ApiError> {
        let endpoint: Endpoint<JsonFormat<Metric>> = Endpoint::put(PRODUCT_METRIC)
            .path_param("id", product_id)
            .path_param("metric_id", metric_id)
            .form(params);
        self.execute(&endpoint).await
    }

    /// Deletes a product metric.
    ///
    /// ## Errors
    ///
    /// See [`execute_empty`](Self::execute_empty).
    pub async fn delete_product_metric(
        &self,
        product_id: i64,
        metric_id: i64,
    ) -> Result<(), ApiError> {
        let endpoint: Endpoint<JsonFormat<()>> = Endpoint::delete(PRODUCT_METRIC)
            .path_param("id", product_id)
            .path_param("metric_id", metric_id);
        self.execute_empty(&endpoint).await
    }

    /// Lists the mapping rules of a product.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_product_mapping_rules(
        &self,
        product_id: i64,
    ) -> Result<MappingRuleList, ApiError> {
        let endpoint: Endpoint<JsonFormat<MappingRuleList>> =
            Endpoint::get(PRODUCT_MAPPING_RULE_LIST).path_param("id", product_id);
        self.execute(&endpoint).await
    }

    /// Creates a mapping rule. `params` needs `http_method`, `pattern`,
    /// `metric_id` and `delta`.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn create_product_mapping_rule(
        &self,
        product_id: i64,
        params: &Params,
    ) -> Result<MappingRule, ApiError> {
        let endpoint: Endpoint<JsonFormat<MappingRule>> = Endpoint::post(PRODUCT_MAPPING_RULE_LIST)
            .path_param("id", product_id)
            .form(params)
            .created();
        self.execute(&endpoint).await
    }

    /// Reads a product mapping rule.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_product_mapping_rule(
        &self,
        product_id: i64,
        rule_id: i64,
    ) -> Result<MappingRule, ApiError> {
        let endpoint: Endpoint<JsonFormat<MappingRule>> = Endpoint::get(PRODUCT_MAPPING_RULE)
            .path_param("id", product_id)
            .path_param("rule_id", rule_id);
        self.execute(&endpoint).await
    }

    /// Updates a product mapping rule.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_product_mapping_rule(
        &self,
        product_id: i64,
        rule_id: i64,
        params: &Params,
    ) -> Result<MappingRule, ApiError> {
        let endpoint: Endpoint<JsonFormat<MappingRule>> = Endpoint::put(PRODUCT_MAPPING_RULE)
            .path_param("id", product_id)
            .path_param("rule_id", rule_id)
            .form(params);
        self.execute(&endpoint).await
    }

    /// Deletes a product mapping rule.
    ///
    /// ## Errors
    ///
    /// See [`execute_empty`](Self::execute_empty).
    pub async fn delete_product_mapping_rule(
        &self,
        product_id: i64,
        rule_id: i64,
    ) -> Result<(), ApiError> {
        let endpoint: Endpoint<JsonFormat<()>> = Endpoint::delete(PRODUCT_MAPPING_RULE)
            .path_param("id", product_id)
            .path_param("rule_id", rule_id);
        self.execute_empty(&endpoint).await
    }
}
