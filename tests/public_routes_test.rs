mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;

use common::TestApp;

#[actix_rt::test]
async fn test_health_check() {
    let app = test::init_service(TestApp::goa().create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    assert_eq!(body, "OK");
}

#[actix_rt::test]
async fn test_unknown_route_is_not_found() {
    let app = test::init_service(TestApp::goa().create_app()).await;

    let req = test::TestRequest::get().uri("/api/chat").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_malformed_budget_body_is_a_client_error() {
    let app = test::init_service(TestApp::goa().create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/budget-travel")
        .set_json(&json!({ "budget": "lots", "num_persons": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}
