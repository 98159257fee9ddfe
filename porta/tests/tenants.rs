mod common;

use common::{assert_json_call, client, only_request};
use porta::Params;

const SIGNUP: &str = r#"{
  "signup": {
    "account": {"id": 2445582535750, "org_name": "Acme", "admin_domain": "acme-admin.3scale.net", "state": "approved"},
    "access_token": {"id": 1, "name": "Provider Token", "value": "abc123", "permission": "rw", "scopes": ["account_management"]}
  }
}"#;

#[tokio::test]
async fn test_create_tenant() {
    let (client, requests) = client(201, SIGNUP);

    let tenant = client
        .create_tenant("Acme", "admin", "admin@acme.com", "s3cret")
        .await
        .unwrap();
    assert_eq!(tenant.signup.account.id, Some(2445582535750));
    assert_eq!(tenant.signup.access_token.value, "abc123");
    assert_eq!(tenant.signup.access_token.scopes, ["account_management"]);

    let request = only_request(&requests);
    assert_json_call(&request, "POST", "/master/api/providers.json");
    assert_eq!(
        request.form(),
        Params::from([
            ("email", "admin@acme.com"),
            ("org_name", "Acme"),
            ("password", "s3cret"),
            ("username", "admin"),
        ])
    );
}

#[tokio::test]
async fn test_create_tenant_validation_error() {
    let (client, _) = client(422, r#"{"errors":{"org_name":["can't be blank"]}}"#);

    let err = client.create_tenant("", "admin", "a@b.c", "x").await.unwrap_err();
    assert_eq!(err.code(), Some(422));
    assert_eq!(
        err.as_response().unwrap().reason(),
        "error - org_name: can't be blank"
    );
}

#[tokio::test]
async fn test_show_tenant() {
    let (client, requests) = client(
        200,
        r#"{"signup":{"account":{"id":5,"org_name":"Acme","admin_base_url":"https://acme-admin.3scale.net"}}}"#,
    );

    let tenant = client.show_tenant(5).await.unwrap();
    let account = &tenant.signup.account;
    assert_eq!(account.id, Some(5));
    assert_eq!(account.org_name.as_deref(), Some("Acme"));
    assert_eq!(
        account.admin_base_url.as_deref(),
        Some("https://acme-admin.3scale.net")
    );
    assert_json_call(&only_request(&requests), "GET", "/master/api/providers/5.json");
}

#[tokio::test]
async fn test_update_tenant() {
    let (client, requests) = client(
        200,
        r#"{"signup":{"account":{"id":5,"from_email":"noreply@acme.com"}}}"#,
    );

    let params = Params::from([("from_email", "noreply@acme.com")]);
    let tenant = client.update_tenant(5, &params).await.unwrap();
    assert_eq!(
        tenant.signup.account.from_email.as_deref(),
        Some("noreply@acme.com")
    );

    let request = only_request(&requests);
    assert_json_call(&request, "PUT", "/master/api/providers/5.json");
    assert_eq!(request.form(), params);
}

#[tokio::test]
async fn test_show_tenant_rejects_bare_account() {
    let (client, _) = client(200, r#"{"account":{"id":5}}"#);

    let err = client.show_tenant(5).await.unwrap_err();
    let response = err.as_response().unwrap();
    assert_eq!(response.code(), 200);
    assert!(response.is_decoding_error());
}

#[tokio::test]
async fn test_delete_tenant() {
    let (client, requests) = client(200, "");
    client.delete_tenant(5).await.unwrap();
    assert_json_call(&only_request(&requests), "DELETE", "/master/api/providers/5.json");
}
