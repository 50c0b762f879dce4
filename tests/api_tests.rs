mod common;

use axum::http::StatusCode;
use std::sync::Arc;

use common::*;
use toto_lookup::utils::errors::ZoneLoadError;

#[tokio::test]
async fn test_health_check() {
    let app = test_app(Arc::new(FakeTotoApi::default()));
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "toto-lookup");
    assert_eq!(body["cache"]["entries"], 0);
}

#[tokio::test]
async fn test_zone_directory() {
    let app = test_app(Arc::new(FakeTotoApi::default()));
    let body = body_json(get(&app, "/api/zones").await).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(7));
    assert_eq!(body["data"][2]["color"], "saffron");
}

#[tokio::test]
async fn test_zone_endpoint() {
    let api = FakeTotoApi::default().with_zone(zone(2, "green", &["Panki", "Jajmau"]));
    let app = test_app(Arc::new(api));
    let response = get(&app, "/api/route/2").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Green Zone");
    assert_eq!(body["data"]["thanas"][1], "Jajmau");
    assert_eq!(body["data"]["theme"]["primary"], "rgb(22, 163, 74)");
}

#[tokio::test]
async fn test_zone_endpoint_errors() {
    let api = FakeTotoApi::default().with_zone_error(3, ZoneLoadError::Transport("reset".to_string()));
    let app = test_app(Arc::new(api));

    let response = get(&app, "/api/route/3").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["code"], "EXTERNAL_API_ERROR");

    let response = get(&app, "/api/route/9").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Not found");

    let response = get(&app, "/api/route/0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_endpoint() {
    let api = FakeTotoApi::default()
        .with_zone(zone(1, "red", &["Barra"]))
        .with_vehicle("UP78AB1234", vehicle("UP78AB1234", "red"));
    let app = test_app(Arc::new(api));

    let response = get(&app, "/api/search?query=UP78AB1234&zone_id=1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["vehicle"]["registration_no"], "UP78AB1234");
    assert_eq!(body["data"]["credentials"][0]["kind"], "insurance");
    assert_eq!(body["data"]["credentials"][0]["status"], "expired");
    assert_eq!(body["data"]["credentials"][2]["status"], "unknown");

    let reference = body["data"]["reference"].as_str().unwrap_or_default().to_string();
    let response = get(&app, &format!("/vehicle?ref={}", reference)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_search_endpoint_status_codes() {
    let api = FakeTotoApi::default()
        .with_zone(zone(1, "red", &["Barra"]))
        .with_vehicle("UP78KL1234", vehicle("UP78KL1234", "blue"));
    let api = Arc::new(api);
    let app = test_app(api.clone());

    let response = get(&app, "/api/search?query=UP78KL1234&zone_id=1").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["message"], "This vehicle does not belong to this route");

    // Sin zona no hay comprobación de color
    let response = get(&app, "/api/search?query=UP78KL1234").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, "/api/search?query=MISSING").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "No record found");

    let searches = api.search_count();
    let response = get(&app, "/api/search?query=").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(api.search_count(), searches);
}

#[tokio::test]
async fn test_search_endpoint_rejects_zero_zone() {
    let api = Arc::new(FakeTotoApi::default().with_vehicle("UP78AB1234", vehicle("UP78AB1234", "red")));
    let app = test_app(api.clone());

    let response = get(&app, "/api/search?query=UP78AB1234&zone_id=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Zone id must be a positive number");
    assert_eq!(api.zone_fetch_count(), 0);
    assert_eq!(api.search_count(), 0);
}
