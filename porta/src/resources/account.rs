use crate::client::ThreeScaleClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::{DeveloperAccount, DeveloperAccountItem, DeveloperAccountList};
use crate::pagination::{self, Pagination, DEVELOPER_ACCOUNTS_PER_PAGE};
use crate::params::Params;
use crate::response::JsonFormat;
use crate::transport::Transport;

const DEVELOPER_ACCOUNT_LIST: &str = "/admin/api/accounts.json";
const DEVELOPER_ACCOUNT: &str = "/admin/api/accounts/{id}.json";
const DEVELOPER_ACCOUNT_FIND: &str = "/admin/api/accounts/find.json";
const SIGNUP: &str = "/admin/api/signup.json";

impl<T: Transport> ThreeScaleClient<T> {
    /// Lists every developer account, walking all pages.
    ///
    /// ## Errors
    ///
    /// The first failing page aborts the walk; see [`execute`](Self::execute).
    pub async fn list_developer_accounts(&self) -> Result<DeveloperAccountList, ApiError> {
        pagination::walk(DEVELOPER_ACCOUNTS_PER_PAGE, move |page: Pagination| {
            self.list_developer_accounts_per_page(page.page, page.per_page)
        })
        .await
    }

    /// Lists one page of developer accounts.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_developer_accounts_per_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<DeveloperAccountList, ApiError> {
        let endpoint: Endpoint<JsonFormat<DeveloperAccountList>> =
            Endpoint::get(DEVELOPER_ACCOUNT_LIST).query(&Pagination::new(page, per_page).params());
        self.execute(&endpoint).await
    }

    /// Reads a developer account.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_developer_account(&self, id: i64) -> Result<DeveloperAccount, ApiError> {
        let endpoint: Endpoint<JsonFormat<DeveloperAccount>> =
            Endpoint::get(DEVELOPER_ACCOUNT).path_param("id", id);
        self.execute(&endpoint).await
    }

    /// Looks up a developer account by the username of one of its users.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn find_developer_account(
        &self,
        username: &str,
    ) -> Result<DeveloperAccount, ApiError> {
        let endpoint: Endpoint<JsonFormat<DeveloperAccount>> =
            Endpoint::get(DEVELOPER_ACCOUNT_FIND).query_param("username", username);
        self.execute(&endpoint).await
    }

    /// Creates a developer account with its admin user.
    ///
    /// `params` carries `org_name`, `username`, `email`, `password` and any
    /// custom account or user fields.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn signup_developer_account(
        &self,
        params: &Params,
    ) -> Result<DeveloperAccount, ApiError> {
        let endpoint: Endpoint<JsonFormat<DeveloperAccount>> =
            Endpoint::post(SIGNUP).form(params).created();
        self.execute(&endpoint).await
    }

    /// Updates a developer account. Unset fields of `account` are left
    /// untouched.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_developer_account(
        &self,
        id: i64,
        account: &DeveloperAccountItem,
    ) -> Result<DeveloperAccount, ApiError> {
        let endpoint: Endpoint<JsonFormat<DeveloperAccount>> = Endpoint::put(DEVELOPER_ACCOUNT)
            .path_param("id", id)
            .json(account)?;
        self.execute(&endpoint).await
    }

    /// Deletes a developer account.
    ///
    /// ## Errors
    ///
    /// See [`execute_empty`](Self::execute_empty).
    pub async fn delete_developer_account(&self, id: i64) -> Result<(), ApiError> {
        let endpoint: Endpoint<JsonFormat<()>> =
            Endpoint::delete(DEVELOPER_ACCOUNT).path_param("id", id);
        self.execute_empty(&endpoint).await
    }
}
