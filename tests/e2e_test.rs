//! End-to-end test: bind the real server on a free port and talk to it over
//! HTTP, with orders kept in memory.
//!
//!   cargo test --test e2e_test

use std::time::Duration;

use reqwest::{Client, StatusCode};
use sales_order_service::infrastructure::in_memory::InMemorySalesOrderRepository;
use sales_order_service::{build_server, SalesOrderService};
use serde_json::{json, Value};

fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .expect("bind failed")
        .local_addr()
        .expect("addr failed")
        .port()
}

/// Wait until `url` answers at all, retrying every `interval` for up to
/// `timeout`. Panics if the service never comes up.
async fn wait_for_http(url: &str, timeout: Duration, interval: Duration) {
    let client = Client::builder()
        .timeout(Duration::from_secs(3))
        .build()
        .unwrap();
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if tokio::time::Instant::now() > deadline {
            panic!("server did not become ready within {:?}", timeout);
        }
        // Any HTTP response (even 4xx) means the server is up.
        if client.get(url).send().await.is_ok() {
            return;
        }
        tokio::time::sleep(interval).await;
    }
}

async fn start_server() -> String {
    let port = free_port();
    let service = SalesOrderService::new(InMemorySalesOrderRepository::new());
    let server =
        build_server(service, "127.0.0.1", port).expect("Failed to bind the sales order service");
    tokio::spawn(server);

    let app_url = format!("http://127.0.0.1:{}", port);
    wait_for_http(
        &format!("{}/api-docs/openapi.json", app_url),
        Duration::from_secs(10),
        Duration::from_millis(100),
    )
    .await;
    app_url
}

fn order_body() -> Value {
    json!({
        "salesDate": "2023-08-01T09:30:00.000Z",
        "invoiceDate": "2023-08-02",
        "userId": 5,
        "userName": "any_user",
        "userEmail": "any_email",
        "userGetFirstPriceRange": true,
        "managerName": "any_manager",
        "managerEmail": "any_manager_email",
        "customerId": 9,
        "customerName": "any_customer",
        "customerCity": "any_city",
        "customerState": "any_state",
        "customerPaymentTerm": "any_term",
        "shipBase": "any_base",
        "shipmentType": "any_type",
        "addressHasUnpavedRoad": false,
        "status": "pending"
    })
}

#[tokio::test]
async fn create_sales_order_over_http() {
    let app_url = start_server().await;
    let http = Client::new();

    let resp = http
        .post(format!("{}/sales-orders", app_url))
        .json(&order_body())
        .send()
        .await
        .expect("Failed to POST /sales-orders");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("JSON body");
    assert_eq!(body["id"], json!(1));
    assert_eq!(body["salesDate"], json!("2023-08-01"));
    assert_eq!(body["user"]["getFirstPriceRange"], json!(true));
    assert_eq!(body["customer"]["address"]["unpavedRoadSize"], json!(null));

    let resp = http
        .post(format!("{}/sales-orders", app_url))
        .json(&order_body())
        .send()
        .await
        .expect("Failed to POST /sales-orders");
    let body: Value = resp.json().await.expect("JSON body");
    assert_eq!(body["id"], json!(2));
}

#[tokio::test]
async fn rejection_is_stable_across_requests() {
    let app_url = start_server().await;
    let http = Client::new();
    let mut bad = order_body();
    bad["userGetFirstPriceRange"] = Value::Null;

    for _ in 0..2 {
        let resp = http
            .post(format!("{}/sales-orders", app_url))
            .json(&bad)
            .send()
            .await
            .expect("Failed to POST /sales-orders");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let msg: String = resp.json().await.expect("JSON string body");
        assert_eq!(
            msg,
            "O campo Usuário recebe primeira faixa de preço não pode ser nulo."
        );
    }
}

#[tokio::test]
async fn openapi_document_lists_the_route() {
    let app_url = start_server().await;

    let doc: Value = reqwest::get(format!("{}/api-docs/openapi.json", app_url))
        .await
        .expect("GET openapi")
        .json()
        .await
        .expect("JSON document");

    assert!(doc["paths"]["/sales-orders"]["post"].is_object());
}
