//! API JSON
//!
//! Las mismas consultas que las páginas, en JSON, con errores tipados.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use validator::Validate;

use crate::dto::{ApiResponse, SearchForm, SearchQuery, VehicleResponse, ZoneResponse};
use crate::models::zone::{ZoneSummary, ZONE_DIRECTORY};
use crate::services::SearchService;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::validation::validate_zone_id;

pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/zones", get(list_zones))
        .route("/route/:zone_id", get(get_zone))
        .route("/search", get(search_vehicle))
}

/// Endpoint de salud con estadísticas del cache
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let stats = state.vehicle_cache.get_stats().await;
    Json(json!({
        "status": "ok",
        "service": "toto-lookup",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "cache": {
            "entries": state.vehicle_cache.size().await,
            "stats": stats,
        }
    }))
}

async fn list_zones() -> Json<ApiResponse<Vec<ZoneSummary>>> {
    Json(ApiResponse::success(ZONE_DIRECTORY.to_vec()))
}

/// Rechazar ids de zona no positivos antes de llamar al backend
fn check_zone_id(zone_id: u32) -> AppResult<()> {
    validate_zone_id(zone_id).map_err(|e| {
        let mut errors = validator::ValidationErrors::new();
        errors.add("zone_id", e);
        errors.into()
    })
}

async fn get_zone(
    State(state): State<AppState>,
    Path(zone_id): Path<u32>,
) -> AppResult<Json<ApiResponse<ZoneResponse>>> {
    check_zone_id(zone_id)?;

    let zone = state.toto_api.fetch_zone(zone_id).await?;
    Ok(Json(ApiResponse::success(ZoneResponse::from(&zone))))
}

async fn search_vehicle(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<ApiResponse<VehicleResponse>>> {
    params.validate()?;

    let zone = match params.zone_id {
        Some(zone_id) => {
            check_zone_id(zone_id)?;
            Some(state.toto_api.fetch_zone(zone_id).await?)
        }
        None => None,
    };

    let service = SearchService::new(state.toto_api.clone(), state.vehicle_cache.clone());
    let form = SearchForm { query: params.query };
    let outcome = service.search(zone.as_ref(), &form).await?;

    Ok(Json(ApiResponse::success_with_message(
        VehicleResponse::new(outcome.reference, outcome.vehicle),
        "Vehicle found".to_string(),
    )))
}
