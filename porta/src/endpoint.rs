//! Per-call request descriptions.
//!
//! An [`Endpoint`] captures everything the client needs to issue one call:
//! verb, instantiated path, query and body parameters, the credential
//! convention, the expected success status, and (as a type parameter) the
//! wire format used to decode the response.

use std::fmt;
use std::marker::PhantomData;

use bytes::Bytes;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::auth::AuthMethod;
use crate::error::ClientError;
use crate::method::RestMethod;
use crate::params::Params;

/// Everything but the RFC 3986 unreserved characters.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Request body of a write call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// `application/x-www-form-urlencoded` parameters.
    Form(Params),
    /// A pre-encoded `application/json` document.
    Json(Bytes),
}

/// A single admin API call.
///
/// ## Type Parameters
///
/// - `F`: The [`ResponseFormat`](crate::response::ResponseFormat) used to decode the response.
///
/// ## Examples
///
/// ```rust
/// use porta::{Endpoint, Params};
/// use porta::response::JsonFormat;
///
/// #[derive(serde::Deserialize)]
/// struct Widget { id: u64 }
///
/// let endpoint: Endpoint<JsonFormat<Widget>> =
///     Endpoint::post("/admin/api/services/{id}/widgets.json")
///         .path_param("id", 7)
///         .form(&Params::from([("name", "foo")]))
///         .created();
///
/// assert_eq!(endpoint.path(), "/admin/api/services/7/widgets.json");
/// assert_eq!(endpoint.expected_status(), 201);
/// ```
pub struct Endpoint<F> {
    method: RestMethod,
    path: String,
    query: Params,
    payload: Option<Payload>,
    auth: AuthMethod,
    expected_status: u16,
    _format: PhantomData<fn() -> F>,
}

impl<F> Endpoint<F> {
    /// Creates an endpoint for `method` on a path template.
    ///
    /// Defaults: HTTP Basic credentials and an expected status of `200`.
    pub fn new(method: RestMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Params::new(),
            payload: None,
            auth: AuthMethod::Basic,
            expected_status: 200,
            _format: PhantomData,
        }
    }

    /// Shorthand for a GET endpoint.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(RestMethod::Get, path)
    }

    /// Shorthand for a POST endpoint.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(RestMethod::Post, path)
    }

    /// Shorthand for a PUT endpoint.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(RestMethod::Put, path)
    }

    /// Shorthand for a PATCH endpoint.
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(RestMethod::Patch, path)
    }

    /// Shorthand for a DELETE endpoint.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(RestMethod::Delete, path)
    }

    /// Substitutes a `{name}` placeholder in the path template.
    ///
    /// The value is percent-encoded as a single path segment, so `/`, `?`
    /// and `#` cannot change the shape of the URL.
    pub fn path_param(mut self, name: &str, value: impl fmt::Display) -> Self {
        let value = value.to_string();
        let encoded = utf8_percent_encode(&value, PATH_SEGMENT_ENCODE_SET).to_string();
        self.path = self.path.replace(&format!("{{{name}}}"), &encoded);
        self
    }

    /// Merges parameters into the query string.
    pub fn query(mut self, params: &Params) -> Self {
        self.query.extend_from(params);
        self
    }

    /// Adds one query parameter.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key, value);
        self
    }

    /// Merges parameters into the form body.
    pub fn form(mut self, params: &Params) -> Self {
        match &mut self.payload {
            Some(Payload::Form(form)) => form.extend_from(params),
            _ => self.payload = Some(Payload::Form(params.clone())),
        }
        self
    }

    /// Adds one form parameter.
    pub fn form_param(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut single = Params::new();
        single.insert(key, value);
        self.form(&single)
    }

    /// Sends `value` as a JSON document, replacing any form body.
    ///
    /// ## Errors
    ///
    /// Returns [`ClientError::Encode`] if `value` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, ClientError> {
        let body = serde_json::to_vec(value).map_err(ClientError::Encode)?;
        self.payload = Some(Payload::Json(Bytes::from(body)));
        Ok(self)
    }

    /// Selects how the credential is transmitted.
    pub fn auth(mut self, auth: AuthMethod) -> Self {
        self.auth = auth;
        self
    }

    /// Sets the status code that counts as success.
    pub fn expect_status(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    /// Expects `201 Created`.
    pub fn created(self) -> Self {
        self.expect_status(201)
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Returns the path with placeholders substituted so far.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query parameters.
    pub fn query_params(&self) -> &Params {
        &self.query
    }

    /// Returns the request body, if any.
    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// Returns the credential convention.
    pub fn auth_method(&self) -> AuthMethod {
        self.auth
    }

    /// Returns the status code that counts as success.
    pub fn expected_status(&self) -> u16 {
        self.expected_status
    }
}

// Manual impls: F is only a marker and need not be Clone or Debug.
impl<F> Clone for Endpoint<F> {
    fn clone(&self) -> Self {
        Self {
            method: self.method,
            path: self.path.clone(),
            query: self.query.clone(),
            payload: self.payload.clone(),
            auth: self.auth,
            expected_status: self.expected_status,
            _format: PhantomData,
        }
    }
}

impl<F> fmt::Debug for Endpoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("payload", &self.payload)
            .field("auth", &self.auth)
            .field("expected_status", &self.expected_status)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::JsonFormat;

    type Any = JsonFormat<serde_json::Value>;

    #[test]
    fn test_defaults() {
        let endpoint: Endpoint<Any> = Endpoint::get("/admin/api/services.json");
        assert_eq!(endpoint.method(), RestMethod::Get);
        assert_eq!(endpoint.auth_method(), AuthMethod::Basic);
        assert_eq!(endpoint.expected_status(), 200);
        assert!(endpoint.payload().is_none());
        assert!(endpoint.query_params().is_empty());
    }

    #[test]
    fn test_path_params() {
        let endpoint: Endpoint<Any> =
            Endpoint::put("/admin/api/accounts/{account_id}/users/{user_id}/activate.json")
                .path_param("account_id", 12)
                .path_param("user_id", 34);
        assert_eq!(endpoint.path(), "/admin/api/accounts/12/users/34/activate.json");
    }

    #[test]
    fn test_path_params_are_escaped() {
        let endpoint: Endpoint<Any> =
            Endpoint::get("/admin/api/services/{id}/proxy/configs/{env}/{version}.json")
                .path_param("id", 1)
                .path_param("env", "sand?box#a/b")
                .path_param("version", 3);
        assert_eq!(
            endpoint.path(),
            "/admin/api/services/1/proxy/configs/sand%3Fbox%23a%2Fb/3.json"
        );
    }

    #[test]
    fn test_path_params_keep_unreserved() {
        let endpoint: Endpoint<Any> =
            Endpoint::get("/admin/api/accounts/{id}.json").path_param("id", "a-b_c.d~e");
        assert_eq!(endpoint.path(), "/admin/api/accounts/a-b_c.d~e.json");
    }

    #[test]
    fn test_form_merges() {
        let endpoint: Endpoint<Any> = Endpoint::post("/admin/api/services.json")
            .form(&Params::from([("description", "d"), ("name", "ignored")]))
            .form_param("name", "foo");
        let Some(Payload::Form(form)) = endpoint.payload() else {
            panic!("expected a form payload");
        };
        assert_eq!(form.get("name"), Some("foo"));
        assert_eq!(form.get("description"), Some("d"));
    }

    #[test]
    fn test_json_replaces_form() {
        let endpoint: Endpoint<Any> = Endpoint::patch("/oidc.json")
            .form_param("a", "b")
            .json(&serde_json::json!({"enabled": true}))
            .unwrap();
        assert_eq!(
            endpoint.payload(),
            Some(&Payload::Json(Bytes::from_static(b"{\"enabled\":true}")))
        );
    }

    #[test]
    fn test_created_and_auth() {
        let endpoint: Endpoint<Any> = Endpoint::post("/x.xml")
            .auth(AuthMethod::ACCESS_TOKEN)
            .created();
        assert_eq!(endpoint.expected_status(), 201);
        assert_eq!(endpoint.auth_method(), AuthMethod::Param("access_token"));
    }

    #[test]
    fn test_clone() {
        let endpoint: Endpoint<Any> = Endpoint::delete("/admin/api/services/{id}.json")
            .path_param("id", 1);
        let cloned = endpoint.clone();
        assert_eq!(cloned.path(), endpoint.path());
        assert_eq!(cloned.method(), RestMethod::Delete);
    }
}
