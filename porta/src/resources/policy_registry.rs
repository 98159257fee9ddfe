use crate::client::ThreeScaleClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::{ApicastPolicy, ApicastPolicyItem, ApicastPolicyRegistry};
use crate::response::JsonFormat;
use crate::transport::Transport;

const POLICY_REGISTRY: &str = "/admin/api/registry/policies.json";
const POLICY: &str = "/admin/api/registry/policies/{id}.json";

impl<T: Transport> ThreeScaleClient<T> {
    /// Lists the custom policies in the APIcast registry.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_apicast_policies(&self) -> Result<ApicastPolicyRegistry, ApiError> {
        let endpoint: Endpoint<JsonFormat<ApicastPolicyRegistry>> = Endpoint::get(POLICY_REGISTRY);
        self.execute(&endpoint).await
    }

    /// Registers a custom policy. `policy` needs `name`, `version` and
    /// `schema`.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn create_apicast_policy(
        &self,
        policy: &ApicastPolicyItem,
    ) -> Result<ApicastPolicy, ApiError> {
        let endpoint: Endpoint<JsonFormat<ApicastPolicy>> =
            Endpoint::post(POLICY_REGISTRY).json(policy)?.created();
        self.execute(&endpoint).await
    }

    /// Reads a custom policy from the APIcast registry.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_apicast_policy(&self, id: i64) -> Result<ApicastPolicy, ApiError> {
        let endpoint: Endpoint<JsonFormat<ApicastPolicy>> =
            Endpoint::get(POLICY).path_param("id", id);
        self.execute(&endpoint).await
    }

    /// Updates a custom policy in the APIcast registry.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_apicast_policy(
        &self,
        id: i64,
        policy: &ApicastPolicyItem,
    ) -> Result<ApicastPolicy, ApiError> {
        let endpoint: Endpoint<JsonFormat<ApicastPolicy>> =
            Endpoint::put(POLICY).path_param("id", id).json(policy)?;
        self.execute(&endpoint).await
    }

    /// Removes a custom policy from the APIcast registry.
    ///
    /// ## Errors
    ///
    /// See [`execute_empty`](Self::execute_empty).
    pub async fn delete_apicast_policy(&self, id: i64) -> Result<(), ApiError> {
        let endpoint: Endpoint<JsonFormat<()>> = Endpoint::delete(POLICY).path_param("id", id);
        self.execute_empty(&endpoint).await
    }
}
