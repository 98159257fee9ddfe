use crate::client::ThreeScaleClient;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, ClientError};
use crate::models::{
    OidcConfiguration, OidcConfigurationItem, PolicyChain, Proxy, ProxyConfigElement,
    ProxyConfigList,
};
use crate::pagination::{self, Pagination, PROXY_CONFIGS_PER_PAGE};
use crate::params::Params;
use crate::response::JsonFormat;
use crate::transport::Transport;

const PROXY: &str = "/admin/api/services/{id}/proxy.json";
const PROXY_DEPLOY: &str = "/admin/api/services/{id}/proxy/deploy.json";
const PROXY_POLICIES: &str = "/admin/api/services/{id}/proxy/policies.json";
const OIDC_CONFIGURATION: &str = "/admin/api/services/{id}/proxy/oidc_configuration.json";
const PROXY_CONFIG_LIST: &str = "/admin/api/services/{id}/proxy/configs/{env}.json";
const PROXY_CONFIG: &str = "/admin/api/services/{id}/proxy/configs/{env}/{version}.json";
const PROXY_CONFIG_LATEST: &str = "/admin/api/services/{id}/proxy/configs/{env}/latest.json";
const PROXY_CONFIG_PROMOTE: &str =
    "/admin/api/services/{id}/proxy/configs/{env}/{version}/promote.json";
const ACCOUNT_PROXY_CONFIG_LIST: &str = "/admin/api/account/proxy_configs/{env}.json";

impl<T: Transport> ThreeScaleClient<T> {
    /// Reads the gateway settings of a product.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_product_proxy(&self, product_id: i64) -> Result<Proxy, ApiError> {
        let endpoint: Endpoint<JsonFormat<Proxy>> =
            Endpoint::get(PROXY).path_param("id", product_id);
        self.execute(&endpoint).await
    }

    /// Updates the gateway settings. This creates a new staging
    /// configuration version.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_product_proxy(
        &self,
        product_id: i64,
        params: &Params,
    ) -> Result<Proxy, ApiError> {
        let endpoint: Endpoint<JsonFormat<Proxy>> = Endpoint::put(PROXY)
            .path_param("id", product_id)
            .form(params);
        self.execute(&endpoint).await
    }

    /// Promotes the current gateway settings to a new staging
    /// configuration version.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn deploy_product_proxy(&self, product_id: i64) -> Result<Proxy, ApiError> {
        let endpoint: Endpoint<JsonFormat<Proxy>> = Endpoint::post(PROXY_DEPLOY)
            .path_param("id", product_id)
            .created();
        self.execute(&endpoint).await
    }

    /// Reads the policy chain of a product.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_product_policies(&self, product_id: i64) -> Result<PolicyChain, ApiError> {
        let endpoint: Endpoint<JsonFormat<PolicyChain>> =
            Endpoint::get(PROXY_POLICIES).path_param("id", product_id);
        self.execute(&endpoint).await
    }

    /// Replaces the policy chain. The chain travels as a JSON array in the
    /// `policies_config` form field.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_product_policies(
        &self,
        product_id: i64,
        chain: &PolicyChain,
    ) -> Result<PolicyChain, ApiError> {
        let encoded = serde_json::to_string(&chain.policies).map_err(ClientError::Encode)?;
        let endpoint: Endpoint<JsonFormat<PolicyChain>> = Endpoint::put(PROXY_POLICIES)
            .path_param("id", product_id)
            .form_param("policies_config", encoded);
        self.execute(&endpoint).await
    }

    /// Reads the OpenID Connect flows enabled for a product.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_oidc_configuration(
        &self,
        product_id: i64,
    ) -> Result<OidcConfiguration, ApiError> {
        let endpoint: Endpoint<JsonFormat<OidcConfiguration>> =
            Endpoint::get(OIDC_CONFIGURATION).path_param("id", product_id);
        self.execute(&endpoint).await
    }

    /// Enables or disables OpenID Connect flows. Sent as a JSON `PATCH`.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_oidc_configuration(
        &self,
        product_id: i64,
        config: &OidcConfigurationItem,
    ) -> Result<OidcConfiguration, ApiError> {
        let endpoint: Endpoint<JsonFormat<OidcConfiguration>> = Endpoint::patch(OIDC_CONFIGURATION)
            .path_param("id", product_id)
            .json(config)?;
        self.execute(&endpoint).await
    }

    /// Lists the configuration versions of one environment (`sandbox` or
    /// `production`) of a product.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_product_proxy_configs(
        &self,
        product_id: i64,
        env: &str,
    ) -> Result<ProxyConfigList, ApiError> {
        let endpoint: Endpoint<JsonFormat<ProxyConfigList>> = Endpoint::get(PROXY_CONFIG_LIST)
            .path_param("id", product_id)
            .path_param("env", env);
        self.execute(&endpoint).await
    }

    /// Reads one configuration version of an environment.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_product_proxy_config(
        &self,
        product_id: i64,
        env: &str,
        version: i64,
    ) -> Result<ProxyConfigElement, ApiError> {
        let endpoint: Endpoint<JsonFormat<ProxyConfigElement>> = Endpoint::get(PROXY_CONFIG)
            .path_param("id", product_id)
            .path_param("env", env)
            .path_param("version", version);
        self.execute(&endpoint).await
    }

    /// Reads the newest configuration version of an environment.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_latest_product_proxy_config(
        &self,
        product_id: i64,
        env: &str,
    ) -> Result<ProxyConfigElement, ApiError> {
        let endpoint: Endpoint<JsonFormat<ProxyConfigElement>> =
            Endpoint::get(PROXY_CONFIG_LATEST)
                .path_param("id", product_id)
                .path_param("env", env);
        self.execute(&endpoint).await
    }

    /// Copies configuration `version` of `env` to `to_env`.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn promote_product_proxy_config(
        &self,
        product_id: i64,
        env: &str,
        version: i64,
        to_env: &str,
    ) -> Result<ProxyConfigElement, ApiError> {
        let endpoint: Endpoint<JsonFormat<ProxyConfigElement>> =
            Endpoint::post(PROXY_CONFIG_PROMOTE)
                .path_param("id", product_id)
                .path_param("env", env)
                .path_param("version", version)
                .form_param("to", to_env)
                .created();
        self.execute(&endpoint).await
    }

    /// Lists the configurations of every product in `env`, walking all
    /// pages. `version` (e.g. `latest`) and `host` narrow the result.
    ///
    /// ## Errors
    ///
    /// The first failing page aborts the walk; see [`execute`](Self::execute).
    pub async fn list_account_proxy_configs(
        &self,
        env: &str,
        version: Option<&str>,
        host: Option<&str>,
    ) -> Result<ProxyConfigList, ApiError> {
        pagination::walk(PROXY_CONFIGS_PER_PAGE, move |page: Pagination| {
            self.list_account_proxy_configs_per_page(env, version, host, page.page, page.per_page)
        })
        .await
    }

    /// Lists one page of account-wide configurations.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_account_proxy_configs_per_page(
        &self,
        env: &str,
        version: Option<&str>,
        host: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> Result<ProxyConfigList, ApiError> {
        let mut query = Pagination::new(page, per_page).params();
        if let Some(version) = version {
            query.insert("version", version);
        }
        if let Some(host) = host {
            query.insert("host", host);
        }

        let endpoint: Endpoint<JsonFormat<ProxyConfigList>> =
            Endpoint::get(ACCOUNT_PROXY_CONFIG_LIST)
                .path_param("env", env)
                .query(&query);
        self.execute(&endpoint).await
    }
}
