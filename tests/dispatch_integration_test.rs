use httpmock::prelude::*;
use nursery_client::{ApiClient, ApiError, RequestOptions, Resource, StaticConfig};

fn proxied_client(server: &MockServer) -> ApiClient {
    let provider = StaticConfig::new("shop.example.com").with_origin(server.base_url());
    ApiClient::from_provider(&provider)
}

#[tokio::test]
async fn test_leading_slash_is_optional() {
    let server = MockServer::start();
    let orders_mock = server.mock(|when, then| {
        when.method(GET).path("/api/orders");
        then.status(200).json_body(serde_json::json!([]));
    });

    let client = proxied_client(&server);
    assert_eq!(client.config().base_url(), "/api");

    client.call("/orders", &RequestOptions::get()).await.unwrap();
    client.call("orders", &RequestOptions::get()).await.unwrap();

    orders_mock.assert_hits(2);
}

#[tokio::test]
async fn test_absolute_endpoint_bypasses_base_url() {
    let proxy = MockServer::start();
    let other = MockServer::start();

    let proxy_mock = proxy.mock(|when, then| {
        when.path_contains("/");
        then.status(200);
    });
    let other_mock = other.mock(|when, then| {
        when.method(GET).path("/x");
        then.status(200).body("ok");
    });

    let client = proxied_client(&proxy);
    let response = client
        .call(&other.url("/x"), &RequestOptions::get())
        .await
        .unwrap();

    other_mock.assert_hits(1);
    proxy_mock.assert_hits(0);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_override_base_url_is_used_verbatim() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/suppliers");
        then.status(200).json_body(serde_json::json!([{"id": 3}]));
    });

    let provider = StaticConfig::new("shop.example.com").with_api_url(server.url("/v2/"));
    let client = ApiClient::from_provider(&provider);

    let suppliers: serde_json::Value = client
        .fetch_json(&Resource::Suppliers.path(), &RequestOptions::get())
        .await
        .unwrap();

    mock.assert();
    assert_eq!(suppliers[0]["id"], 3);
}

#[tokio::test]
async fn test_default_content_type_and_bearer_token() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/notifications")
            .header("content-type", "application/json")
            .header("authorization", "Bearer customer-token");
        then.status(200).json_body(serde_json::json!([]));
    });

    let client = proxied_client(&server);
    client
        .call(
            &Resource::Notifications.path(),
            &RequestOptions::get().bearer("customer-token"),
        )
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_caller_content_type_overrides_default() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/messages")
            .header("content-type", "text/plain")
            .body("hello from the greenhouse");
        then.status(201);
    });

    let client = proxied_client(&server);
    let options = RequestOptions::post()
        .with_header("Content-Type", "text/plain")
        .with_body("hello from the greenhouse");
    let response = client.call("/messages", &options).await.unwrap();

    mock.assert();
    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn test_client_error_status_is_returned_with_text() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/employees/8");
        then.status(403);
    });

    let client = proxied_client(&server);
    let err = client
        .call(&Resource::Employees.item_path("8"), &RequestOptions::delete())
        .await
        .unwrap_err();

    mock.assert_hits(1);
    match err {
        ApiError::Http {
            status,
            status_text,
            ..
        } => {
            assert_eq!(status, 403);
            assert_eq!(status_text, "Forbidden");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // 取得一個目前沒有人監聽的埠
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let provider = StaticConfig::new("shop.example.com")
        .with_api_url(format!("http://127.0.0.1:{}/api", port));
    let client = ApiClient::from_provider(&provider);

    let err = client
        .call("/orders", &RequestOptions::get())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.exit_code(), 3);
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let server = MockServer::start();
    let plants_mock = server.mock(|when, then| {
        when.method(GET).path("/api/plants");
        then.status(200).json_body(serde_json::json!([{"id": 1}]));
    });
    let inventory_mock = server.mock(|when, then| {
        when.method(GET).path("/api/inventory");
        then.status(500);
    });

    let client = proxied_client(&server);
    let mut handles = Vec::new();
    for i in 0..6 {
        let client = client.clone();
        let endpoint = if i % 2 == 0 { "/plants" } else { "/inventory" };
        handles.push(tokio::spawn(async move {
            client
                .call(endpoint, &RequestOptions::get())
                .await
                .map(|r| r.status().as_u16())
                .map_err(|e| e.status())
        }));
    }

    let mut ok = 0;
    let mut failed = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(200) => ok += 1,
            Err(Some(500)) => failed += 1,
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    assert_eq!(ok, 3);
    assert_eq!(failed, 3);
    plants_mock.assert_hits(3);
    inventory_mock.assert_hits(3);
}
