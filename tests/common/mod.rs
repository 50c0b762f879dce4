#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

use toto_lookup::client::TotoApi;
use toto_lookup::config::EnvironmentConfig;
use toto_lookup::models::{Thana, Vehicle, Zone};
use toto_lookup::utils::errors::{SearchError, ZoneLoadError};
use toto_lookup::{create_router, AppState};

/// Backend falso con respuestas fijas por zona y por búsqueda
#[derive(Default)]
pub struct FakeTotoApi {
    pub zones: HashMap<u32, Result<Zone, ZoneLoadError>>,
    pub vehicles: HashMap<String, Result<Vehicle, SearchError>>,
    pub searches: AtomicUsize,
    pub zone_fetches: AtomicUsize,
}

impl FakeTotoApi {
    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zones.insert(zone.id, Ok(zone));
        self
    }

    pub fn with_zone_error(mut self, zone_id: u32, err: ZoneLoadError) -> Self {
        self.zones.insert(zone_id, Err(err));
        self
    }

    pub fn with_vehicle(mut self, query: &str, vehicle: Vehicle) -> Self {
        self.vehicles.insert(query.to_string(), Ok(vehicle));
        self
    }

    pub fn with_search_error(mut self, query: &str, err: SearchError) -> Self {
        self.vehicles.insert(query.to_string(), Err(err));
        self
    }

    pub fn search_count(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }

    pub fn zone_fetch_count(&self) -> usize {
        self.zone_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TotoApi for FakeTotoApi {
    async fn fetch_zone(&self, zone_id: u32) -> Result<Zone, ZoneLoadError> {
        self.zone_fetches.fetch_add(1, Ordering::SeqCst);
        self.zones
            .get(&zone_id)
            .cloned()
            .unwrap_or(Err(ZoneLoadError::Backend("Not found".to_string())))
    }

    async fn search_vehicle(&self, query: &str) -> Result<Vehicle, SearchError> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        self.vehicles
            .get(query.trim())
            .cloned()
            .unwrap_or(Err(SearchError::NoRecord))
    }
}

pub fn zone(id: u32, color: &str, thanas: &[&str]) -> Zone {
    Zone {
        id,
        color_name: color.to_string(),
        thanas: thanas
            .iter()
            .enumerate()
            .map(|(i, name)| Thana {
                id: Some(i as i64 + 1),
                name: name.to_string(),
                zone_id: Some(id as i64),
                created_at: None,
                updated_at: None,
            })
            .collect(),
    }
}

pub fn vehicle(registration: &str, color: &str) -> Vehicle {
    Vehicle {
        id: "66b1f0c2a9".to_string(),
        zone_id: Some(1),
        thana_id: Some(1),
        zone_name: "Red Zone".to_string(),
        thana_name: "Barra".to_string(),
        route_color: color.to_string(),
        registration_no: registration.to_string(),
        chasis_no: "CH12345678901234".to_string(),
        serial_number: "SN001234".to_string(),
        owner_name: "Rajesh Kumar".to_string(),
        owner_phone: "+91 98765-43210".to_string(),
        owner_aadhar: "1234-5678-9012".to_string(),
        insurance_upto: "2020-06-15".to_string(),
        fitness_upto: "2999-12-31".to_string(),
        tax_upto: String::new(),
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
        updated_at: "2024-01-01T00:00:00.000Z".to_string(),
    }
}

pub fn test_state(api: Arc<FakeTotoApi>) -> AppState {
    AppState::with_api(EnvironmentConfig::default(), api)
}

pub fn test_app(api: Arc<FakeTotoApi>) -> Router {
    create_router(test_state(api))
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
