mod common;

use common::{assert_json_call, client, client_with, only_request};
use porta::transport::HttpResponse;
use porta::Params;
use serde_json::json;

#[tokio::test]
async fn test_list_backend_apis_stops_on_short_page() {
    let (client, requests) = client_with(|_| {
        HttpResponse::json(
            200,
            &json!({"backend_apis": [
                {"backend_api": {"id": 1, "name": "a", "system_name": "a", "private_endpoint": "https://a.internal:443"}},
                {"backend_api": {"id": 2, "name": "b", "system_name": "b", "private_endpoint": "https://b.internal:443"}}
            ]}),
        )
    });

    let backends = client.list_backend_apis().await.unwrap();
    assert_eq!(backends.backends.len(), 2);
    assert_eq!(backends.backends[1].element.private_endpoint, "https://b.internal:443");

    let request = only_request(&requests);
    assert_json_call(&request, "GET", "/admin/api/backend_apis.json");
    assert_eq!(request.url.query(), Some("page=1&per_page=500"));
}

#[tokio::test]
async fn test_create_backend_api() {
    let (client, requests) = client(
        201,
        r#"{"backend_api":{"id":9,"name":"echo","system_name":"echo","private_endpoint":"https://echo-api.3scale.net:443"}}"#,
    );

    let params = Params::from([
        ("name", "echo"),
        ("private_endpoint", "https://echo-api.3scale.net:443"),
    ]);
    let backend = client.create_backend_api(&params).await.unwrap();
    assert_eq!(backend.element.id, 9);

    let request = only_request(&requests);
    assert_json_call(&request, "POST", "/admin/api/backend_apis.json");
    assert_eq!(request.form(), params);
}

#[tokio::test]
async fn test_delete_backend_api() {
    let (client, requests) = client(200, "");
    client.delete_backend_api(9).await.unwrap();
    assert_json_call(&only_request(&requests), "DELETE", "/admin/api/backend_apis/9.json");
}

#[tokio::test]
async fn test_backend_api_metric_update() {
    let (client, requests) = client(
        200,
        r#"{"metric":{"id":4,"name":"hits","system_name":"hits","friendly_name":"Hits"}}"#,
    );

    let params = Params::from([("friendly_name", "Hits")]);
    let metric = client.update_backend_api_metric(9, 4, &params).await.unwrap();
    assert_eq!(metric.element.friendly_name.as_deref(), Some("Hits"));

    let request = only_request(&requests);
    assert_json_call(&request, "PUT", "/admin/api/backend_apis/9/metrics/4.json");
    assert_eq!(request.form(), params);
}

#[tokio::test]
async fn test_backend_api_method_read() {
    let (client, requests) = client(
        200,
        r#"{"method":{"id":6,"name":"ping","system_name":"ping"}}"#,
    );

    let method = client.read_backend_api_method(9, 4, 6).await.unwrap();
    assert_eq!(method.element.system_name, "ping");
    assert_json_call(
        &only_request(&requests),
        "GET",
        "/admin/api/backend_apis/9/metrics/4/methods/6.json",
    );
}

#[tokio::test]
async fn test_backend_api_mapping_rules_list() {
    let (client, requests) = client(
        200,
        r#"{"mapping_rules":[{"mapping_rule":{"id":1,"metric_id":4,"pattern":"/","http_method":"GET","delta":1,"position":1,"last":false}}]}"#,
    );

    let rules = client.list_backend_api_mapping_rules(9).await.unwrap();
    assert_eq!(rules.mapping_rules.len(), 1);
    assert_json_call(
        &only_request(&requests),
        "GET",
        "/admin/api/backend_apis/9/mapping_rules.json",
    );
}

#[tokio::test]
async fn test_backend_api_usages() {
    let (client, requests) = client(
        200,
        r#"[{"backend_usage":{"id":3,"path":"/v1","service_id":7,"backend_id":9}}]"#,
    );

    let usages = client.list_backend_api_usages(7).await.unwrap();
    assert_eq!(usages.len(), 1);
    assert_eq!(usages[0].element.path, "/v1");
    assert_json_call(
        &only_request(&requests),
        "GET",
        "/admin/api/services/7/backend_usages.json",
    );
}

#[tokio::test]
async fn test_create_backend_api_usage() {
    let (client, requests) = client(
        201,
        r#"{"backend_usage":{"id":3,"path":"/v1","service_id":7,"backend_id":9}}"#,
    );

    let params = Params::from([("backend_api_id", "9"), ("path", "/v1")]);
    let usage = client.create_backend_api_usage(7, &params).await.unwrap();
    assert_eq!(usage.element.backend_id, 9);

    let request = only_request(&requests);
    assert_json_call(&request, "POST", "/admin/api/services/7/backend_usages.json");
    assert_eq!(request.form(), params);
}
