//! Tenant management through the master API. The client must be configured
//! with the master portal and a master access token.

use crate::client::ThreeScaleClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::Tenant;
use crate::params::Params;
use crate::response::JsonFormat;
use crate::transport::Transport;

const TENANT_CREATE: &str = "/master/api/providers.json";
const TENANT: &str = "/master/api/providers/{id}.json";

impl<T: Transport> ThreeScaleClient<T> {
    /// Signs up a new tenant with its first admin user.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn create_tenant(
        &self,
        org_name: &str,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Tenant, ApiError> {
        let form = Params::from([
            ("org_name", org_name),
            ("username", username),
            ("email", email),
            ("password", password),
        ]);
        let endpoint: Endpoint<JsonFormat<Tenant>> =
            Endpoint::post(TENANT_CREATE).form(&form).created();
        self.execute(&endpoint).await
    }

    /// Returns a tenant, wrapped in the same signup envelope as
    /// [`create_tenant`](Self::create_tenant).
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn show_tenant(&self, id: i64) -> Result<Tenant, ApiError> {
        let endpoint: Endpoint<JsonFormat<Tenant>> =
            Endpoint::get(TENANT).path_param("id", id);
        self.execute(&endpoint).await
    }

    /// Updates the provider account of a tenant.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_tenant(&self, id: i64, params: &Params) -> Result<Tenant, ApiError> {
        let endpoint: Endpoint<JsonFormat<Tenant>> =
            Endpoint::put(TENANT).path_param("id", id).form(params);
        self.execute(&endpoint).await
    }

    /// Schedules a tenant for deletion.
    ///
    /// ## Errors
    ///
    /// See [`execute_empty`](Self::execute_empty).
    pub async fn delete_tenant(&self, id: i64) -> Result<(), ApiError> {
        let endpoint: Endpoint<JsonFormat<()>> = Endpoint::delete(TENANT).path_param("id", id);
        self.execute_empty(&endpoint).await
    }
}
