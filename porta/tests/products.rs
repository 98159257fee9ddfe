mod common;

use common::{assert_json_call, client, client_with, only_request};
use porta::transport::HttpResponse;
use porta::{ApiError, Params};
use serde_json::json;

fn products_page(count: usize, offset: usize) -> serde_json::Value {
    let services: Vec<_> = (0..count)
        .map(|i| json!({"service": {"id": offset + i, "name": format!("p{}", offset + i), "system_name": format!("p{}", offset + i)}}))
        .collect();
    json!({ "services": services })
}

#[tokio::test]
async fn test_list_products_walks_all_pages() {
    let (client, requests) = client_with(|request| {
        let page: usize = request.query().get("page").unwrap().parse().unwrap();
        let count = if page < 3 { 500 } else { 51 };
        HttpResponse::json(200, &products_page(count, (page - 1) * 500))
    });

    let products = client.list_products().await.unwrap();
    assert_eq!(products.products.len(), 1051);
    assert_eq!(products.products[1050].element.id, 1050);

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 3);
    for (i, request) in requests.iter().enumerate() {
        assert_json_call(request, "GET", "/admin/api/services.json");
        let query = request.query();
        assert_eq!(query.get("page"), Some((i + 1).to_string().as_str()));
        assert_eq!(query.get("per_page"), Some("500"));
    }
}

#[tokio::test]
async fn test_list_products_per_page_sends_one_request() {
    let (client, requests) = client_with(|_| HttpResponse::json(200, &products_page(3, 0)));

    let products = client.list_products_per_page(2, 3).await.unwrap();
    assert_eq!(products.products.len(), 3);

    let request = only_request(&requests);
    assert_eq!(request.url.query(), Some("page=2&per_page=3"));
}

#[tokio::test]
async fn test_list_products_aborts_on_failing_page() {
    let (client, requests) = client_with(|request| match request.query().get("page") {
        Some("1") => HttpResponse::json(200, &products_page(500, 0)),
        _ => HttpResponse::json(500, &json!({"error": "boom"})),
    });

    let err = client.list_products().await.unwrap_err();
    assert_eq!(err.code(), Some(500));
    assert_eq!(requests.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_product() {
    let (client, requests) = client(
        201,
        r#"{"service":{"id":7,"name":"billing","system_name":"billing_api"}}"#,
    );

    let params = Params::from([("system_name", "billing_api")]);
    let product = client.create_product("billing", &params).await.unwrap();
    assert_eq!(product.element.id, 7);
    assert_eq!(product.element.system_name, "billing_api");

    let request = only_request(&requests);
    assert_json_call(&request, "POST", "/admin/api/services.json");
    assert_eq!(
        request.header("Content-Type"),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(
        request.form(),
        Params::from([("name", "billing"), ("system_name", "billing_api")])
    );
}

#[tokio::test]
async fn test_create_product_conflict() {
    let (client, _) = client(
        422,
        r#"{"errors":{"system_name":["has already been taken"]}}"#,
    );

    let err = client
        .create_product("billing", &Params::new())
        .await
        .unwrap_err();
    let response = err.as_response().unwrap();
    assert_eq!(response.code(), 422);
    assert_eq!(
        response.reason(),
        "error - system_name: has already been taken"
    );
}

#[tokio::test]
async fn test_read_product_not_found() {
    let (client, requests) = client(404, r#"{"status":"Not found"}"#);

    let err = client.read_product(99).await.unwrap_err();
    assert!(matches!(err, ApiError::Response(ref r) if r.code() == 404));
    assert_eq!(
        err.to_string(),
        "error calling 3scale system - reason: error - status: Not found - code: 404"
    );
    assert_json_call(&only_request(&requests), "GET", "/admin/api/services/99.json");
}

#[tokio::test]
async fn test_update_product() {
    let (client, requests) = client(
        200,
        r#"{"service":{"id":7,"name":"billing","system_name":"billing","description":"new"}}"#,
    );

    let params = Params::from([("description", "new")]);
    let product = client.update_product(7, &params).await.unwrap();
    assert_eq!(product.element.description.as_deref(), Some("new"));

    let request = only_request(&requests);
    assert_json_call(&request, "PUT", "/admin/api/services/7.json");
    assert_eq!(request.form(), params);
}

#[tokio::test]
async fn test_delete_product() {
    let (client, requests) = client(200, "");

    client.delete_product(7).await.unwrap();

    let request = only_request(&requests);
    assert_json_call(&request, "DELETE", "/admin/api/services/7.json");
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_product_methods() {
    let (client, requests) = client(
        201,
        r#"{"method":{"id":3,"name":"get_invoice","system_name":"get_invoice"}}"#,
    );

    let params = Params::from([("friendly_name", "get_invoice")]);
    let method = client.create_product_method(7, 11, &params).await.unwrap();
    assert_eq!(method.element.id, 3);
    assert_json_call(
        &only_request(&requests),
        "POST",
        "/admin/api/services/7/metrics/11/methods.json",
    );
}

#[tokio::test]
async fn test_product_metrics() {
    let (client, requests) = client(
        200,
        r#"{"metrics":[{"metric":{"id":11,"name":"hits","system_name":"hits","unit":"hit"}}]}"#,
    );

    let metrics = client.list_product_metrics(7).await.unwrap();
    assert_eq!(metrics.metrics.len(), 1);
    assert_eq!(metrics.metrics[0].element.unit.as_deref(), Some("hit"));
    assert_json_call(&only_request(&requests), "GET", "/admin/api/services/7/metrics.json");
}

#[tokio::test]
async fn test_product_mapping_rules() {
    let (client, requests) = client(
        200,
        r#"{"mapping_rule":{"id":5,"metric_id":11,"pattern":"/v1","http_method":"GET","delta":1,"position":1,"last":false}}"#,
    );

    let rule = client.read_product_mapping_rule(7, 5).await.unwrap();
    assert_eq!(rule.element.pattern, "/v1");
    assert_json_call(
        &only_request(&requests),
        "GET",
        "/admin/api/services/7/proxy/mapping_rules/5.json",
    );
}
