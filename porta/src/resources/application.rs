//! Applications, on the legacy XML endpoints. These take the credential
//! as an `access_token` parameter instead of HTTP Basic.

use crate::auth::AuthMethod;
use crate::client::ThreeScaleClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::{Application, ApplicationList};
use crate::params::Params;
use crate::response::XmlFormat;
use crate::transport::Transport;

const APPLICATION_LIST: &str = "/admin/api/accounts/{account_id}/applications.xml";

impl<T: Transport> ThreeScaleClient<T> {
    /// Subscribes a developer account to an application plan.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn create_application(
        &self,
        account_id: i64,
        plan_id: i64,
        name: &str,
        description: &str,
    ) -> Result<Application, ApiError> {
        let form = Params::from([
            ("account_id", account_id.to_string()),
            ("plan_id", plan_id.to_string()),
            ("name", name.to_string()),
            ("description", description.to_string()),
        ]);
        let endpoint: Endpoint<XmlFormat<Application>> = Endpoint::post(APPLICATION_LIST)
            .path_param("account_id", account_id)
            .form(&form)
            .auth(AuthMethod::ACCESS_TOKEN)
            .created();
        self.execute(&endpoint).await
    }

    /// Lists the applications of a developer account.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_applications(&self, account_id: i64) -> Result<ApplicationList, ApiError> {
        let endpoint: Endpoint<XmlFormat<ApplicationList>> = Endpoint::get(APPLICATION_LIST)
            .path_param("account_id", account_id)
            .auth(AuthMethod::ACCESS_TOKEN);
        self.execute(&endpoint).await
    }
}
