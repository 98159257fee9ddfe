use crate::client::ThreeScaleClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::{ActiveDoc, ActiveDocItem, ActiveDocList};
use crate::response::JsonFormat;
use crate::transport::Transport;

const ACTIVE_DOC_LIST: &str = "/admin/api/active_docs.json";
const ACTIVE_DOC: &str = "/admin/api/active_docs/{id}.json";

impl<T: Transport> ThreeScaleClient<T> {
    /// Lists every ActiveDoc.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn list_active_docs(&self) -> Result<ActiveDocList, ApiError> {
        let endpoint: Endpoint<JsonFormat<ActiveDocList>> = Endpoint::get(ACTIVE_DOC_LIST);
        self.execute(&endpoint).await
    }

    /// Creates an ActiveDoc. `doc` needs at least `name` and `body`.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn create_active_doc(&self, doc: &ActiveDocItem) -> Result<ActiveDoc, ApiError> {
        let endpoint: Endpoint<JsonFormat<ActiveDoc>> =
            Endpoint::post(ACTIVE_DOC_LIST).json(doc)?.created();
        self.execute(&endpoint).await
    }

    /// Reads an ActiveDoc.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn read_active_doc(&self, id: i64) -> Result<ActiveDoc, ApiError> {
        let endpoint: Endpoint<JsonFormat<ActiveDoc>> =
            Endpoint::get(ACTIVE_DOC).path_param("id", id);
        self.execute(&endpoint).await
    }

    /// Updates an ActiveDoc. Unset fields of `doc` are left untouched.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn update_active_doc(
        &self,
        id: i64,
        doc: &ActiveDocItem,
    ) -> Result<ActiveDoc, ApiError> {
        let endpoint: Endpoint<JsonFormat<ActiveDoc>> =
            Endpoint::put(ACTIVE_DOC).path_param("id", id).json(doc)?;
        self.execute(&endpoint).await
    }

    /// Deletes an ActiveDoc.
    ///
    /// ## Errors
    ///
    /// See [`execute_empty`](Self::execute_empty).
    pub async fn delete_active_doc(&self, id: i64) -> Result<(), ApiError> {
        let endpoint: Endpoint<JsonFormat<()>> = Endpoint::delete(ACTIVE_DOC).path_param("id", id);
        self.execute_empty(&endpoint).await
    }

    /// Detaches an ActiveDoc from its product.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn unbind_active_doc_from_product(&self, id: i64) -> Result<ActiveDoc, ApiError> {
        let endpoint: Endpoint<JsonFormat<ActiveDoc>> = Endpoint::put(ACTIVE_DOC)
            .path_param("id", id)
            .form_param("service_id", "");
        self.execute(&endpoint).await
    }
}
