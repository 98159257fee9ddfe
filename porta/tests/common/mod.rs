//! Shared fakes for the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use porta::transport::{FnTransport, HttpRequest, HttpResponse, Transport};
use porta::{AdminPortal, ThreeScaleClient};

/// Token configured on every fake client.
pub const TOKEN: &str = "someAccessToken";

/// `Authorization` header expected for [`TOKEN`].
pub const BASIC: &str = "Basic OnNvbWVBY2Nlc3NUb2tlbg==";

pub type Requests = Arc<Mutex<Vec<HttpRequest>>>;

/// Builds a client whose transport answers with `handler` and records every
/// request it sees.
pub fn client_with<H>(handler: H) -> (ThreeScaleClient<impl Transport>, Requests)
where
    H: Fn(&HttpRequest) -> HttpResponse + Send + Sync + 'static,
{
    let requests: Requests = Arc::default();
    let seen = Arc::clone(&requests);
    let transport = FnTransport::new(move |request: HttpRequest| {
        let response = handler(&request);
        seen.lock().unwrap().push(request);
        Ok(response)
    });
    let portal = AdminPortal::parse("https://www.test.com:443").unwrap();
    let client = ThreeScaleClient::with_transport(portal, TOKEN.into(), transport);
    (client, requests)
}

/// Builds a client that answers every request with the same response.
pub fn client(status: u16, body: &'static str) -> (ThreeScaleClient<impl Transport>, Requests) {
    client_with(move |_| HttpResponse::new(status, body))
}

/// Returns the single recorded request, failing if there were more or none.
pub fn only_request(requests: &Requests) -> HttpRequest {
    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0].clone()
}

/// Asserts verb, path and Basic auth of a JSON-family request.
pub fn assert_json_call(request: &HttpRequest, method: &str, path: &str) {
    assert_eq!(request.method.to_string(), method);
    assert_eq!(request.url.path(), path);
    assert_eq!(request.header("Authorization"), Some(BASIC));
    assert_eq!(request.header("Accept"), Some("application/json"));
}
