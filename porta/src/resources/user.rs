use crate::client::ThreeScaleClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::{DeveloperUser, DeveloperUserList};
use crate::params::Params;
use crate::response::JsonFormat;
use crate::transport::Transport;

const DEVELOPER_USER_LIST: &str = "/admin/api/accounts/{account_id}/users.json";
const DEVELOPER_USER: &str = "/admin/api/accounts/{account_id}/users/{user_id}.json";
const DEVELOPER_USER_ACTIVATE: &str =
    "/admin/api/accounts/{account_id}/users/{user_id}/activate.json";
const DEVELOPER_USER_ADMIN: &str = "/admin/api/accounts/{account_id}/users/{user_id}/admin.json";
const DEVELOPER_USER_MEMBER: &str = "/admin/api/accounts/{account_id}/users/{user_id}/member.json";
const DEVELOPER_USER_SUSPEND: &str =
    "/admin/api/accounts/{account_id}/users/{user_id}/suspend.json";
const DEVELOPER_USER_UNSUSPEND: &str =
    "/admin/api/accounts/{account_id}/users/{user_id}/unsuspend.json";

impl<T: Transport> ThreeScaleClient<T> {
    /// Lists the users of a developer account.
    ///
    /// `filter` is sent as query parameters, e.g. `state=pending` or
    /// `role=admin`.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_developer_users(
        &self,
        account_id: i64,
        filter: &Params,
    ) -> Result<DeveloperUserList, ApiError> {
        let endpoint: Endpoint<JsonFormat<DeveloperUserList>> = Endpoint::get(DEVELOPER_USER_LIST)
            .path_param("account_id", account_id)
            .query(filter);
        self.execute(&endpoint).await
    }

    /// Adds a user to a developer account.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn create_developer_user(
        &self,
        account_id: i64,
        params: &Params,
    ) -> Result<DeveloperUser, ApiError> {
        let endpoint: Endpoint<JsonFormat<DeveloperUser>> = Endpoint::post(DEVELOPER_USER_LIST)
            .path_param("account_id", account_id)
            .form(params)
            .created();
        self.execute(&endpoint).await
    }

    /// Reads a developer user.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_developer_user(
        &self,
        account_id: i64,
        user_id: i64,
    ) -> Result<DeveloperUser, ApiError> {
        let endpoint: Endpoint<JsonFormat<DeveloperUser>> = Endpoint::get(DEVELOPER_USER)
            .path_param("account_id", account_id)
            .path_param("user_id", user_id);
        self.execute(&endpoint).await
    }

    /// Updates a developer user.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_developer_user(
        &self,
        account_id: i64,
        user_id: i64,
        params: &Params,
    ) -> Result<DeveloperUser, ApiError> {
        let endpoint: Endpoint<JsonFormat<DeveloperUser>> = Endpoint::put(DEVELOPER_USER)
            .path_param("account_id", account_id)
            .path_param("user_id", user_id)
            .form(params);
        self.execute(&endpoint).await
    }

    /// Removes a user from a developer account.
    ///
    /// ## Errors
    ///
    /// See [`execute_empty`](Self::execute_empty).
    pub async fn delete_developer_user(&self, account_id: i64, user_id: i64) -> Result<(), ApiError> {
        let endpoint: Endpoint<JsonFormat<()>> = Endpoint::delete(DEVELOPER_USER)
            .path_param("account_id", account_id)
            .path_param("user_id", user_id);
        self.execute_empty(&endpoint).await
    }

    /// Moves a user from `pending` to `active`.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn activate_developer_user(
        &self,
        account_id: i64,
        user_id: i64,
    ) -> Result<DeveloperUser, ApiError> {
        self.user_action(DEVELOPER_USER_ACTIVATE, account_id, user_id)
            .await
    }

    /// Grants a user the `admin` role.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn change_role_to_admin_developer_user(
        &self,
        account_id: i64,
        user_id: i64,
    ) -> Result<DeveloperUser, ApiError> {
        self.user_action(DEVELOPER_USER_ADMIN, account_id, user_id)
            .await
    }

    /// Gives a user the `member` role.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn change_role_to_member_developer_user(
        &self,
        account_id: i64,
        user_id: i64,
    ) -> Result<DeveloperUser, ApiError> {
        self.user_action(DEVELOPER_USER_MEMBER, account_id, user_id)
            .await
    }

    /// Suspends a user.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn suspend_developer_user(
        &self,
        account_id: i64,
        user_id: i64,
    ) -> Result<DeveloperUser, ApiError> {
        self.user_action(DEVELOPER_USER_SUSPEND, account_id, user_id)
            .await
    }

    /// Reactivates a suspended user.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn unsuspend_developer_user(
        &self,
        account_id: i64,
        user_id: i64,
    ) -> Result<DeveloperUser, ApiError> {
        self.user_action(DEVELOPER_USER_UNSUSPEND, account_id, user_id)
            .await
    }

    async fn user_action(
        &self,
        template: &str,
        account_id: i64,
        user_id: i64,
    ) -> Result<DeveloperUser, ApiError> {
        let endpoint: Endpoint<JsonFormat<DeveloperUser>> = Endpoint::put(template)
            .path_param("account_id", account_id)
            .path_param("user_id", user_id);
        self.execute(&endpoint).await
    }
}
