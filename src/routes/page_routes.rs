//! Rutas de las páginas HTML
//!
//! `/` redirige a la zona por defecto, `/route-<n>` muestra la zona y su
//! formulario de búsqueda, `/vehicle?ref=<id>` el detalle del vehículo.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use tracing::{debug, info};

use crate::dto::{SearchForm, VehiclePageQuery, ZonePageQuery};
use crate::models::navigation::{vehicle_path, zone_path};
use crate::models::{FetchState, Route};
use crate::services::{SearchService, ZoneService};
use crate::state::AppState;
use crate::utils::dates;
use crate::utils::validation::validate_correlation_id;
use crate::views::{self, ZonePageView};

pub fn create_page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/vehicle", get(vehicle_page))
        .route("/:slug", get(zone_page))
        .route("/:slug/search", post(search_vehicle).fallback(not_found))
}

/// Página 404 común a rutas desconocidas
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(views::render_not_found())).into_response()
}

async fn home(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&zone_path(state.config.default_zone_id))
}

/// Id de zona de un slug, o `None` si el slug no es `route-<n>`
fn zone_id_from_slug(slug: &str) -> Option<u32> {
    match Route::from_path(&format!("/{}", slug)) {
        Route::ZoneView(zone_id) => Some(zone_id),
        _ => None,
    }
}

fn zone_response(view: &ZonePageView) -> Response {
    let status = match view.zone {
        FetchState::Failed(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };
    (status, Html(views::render_zone_page(view))).into_response()
}

async fn zone_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<ZonePageQuery>,
) -> Response {
    let Some(zone_id) = zone_id_from_slug(&slug) else {
        debug!("Slug desconocido: {}", slug);
        return not_found().await;
    };

    let zone = ZoneService::new(state.toto_api.clone()).load(zone_id).await;
    let mut view = ZonePageView::new(zone_id, zone);
    view.show_all_thanas = params.show_all();

    zone_response(&view)
}

async fn search_vehicle(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<SearchForm>,
) -> Response {
    let Some(zone_id) = zone_id_from_slug(&slug) else {
        return not_found().await;
    };

    // La zona activa se vuelve a cargar para comparar su color
    let zone_state = ZoneService::new(state.toto_api.clone()).load(zone_id).await;
    let Some(zone) = zone_state.data().cloned() else {
        return zone_response(&ZonePageView::new(zone_id, zone_state));
    };

    let service = SearchService::new(state.toto_api.clone(), state.vehicle_cache.clone());
    match service.search(Some(&zone), &form).await {
        Ok(outcome) => {
            info!(
                "🚗 Vehículo {} encontrado en zona {}",
                outcome.vehicle.registration_no, zone_id
            );
            Redirect::to(&vehicle_path(outcome.reference)).into_response()
        }
        Err(e) => {
            let view = ZonePageView::new(zone_id, FetchState::Success(zone))
                .with_search_error(&form.query, e.to_string());
            zone_response(&view)
        }
    }
}

async fn vehicle_page(
    State(state): State<AppState>,
    Query(params): Query<VehiclePageQuery>,
) -> Response {
    let reference = params
        .reference
        .as_deref()
        .and_then(|value| validate_correlation_id(value).ok());

    let vehicle = match reference {
        Some(reference) => state.vehicle_cache.get(&reference).await,
        None => None,
    };

    match vehicle {
        Some(vehicle) => Html(views::render_vehicle_page(&vehicle, dates::today())).into_response(),
        None => {
            debug!("Detalle de vehículo sin registro en cache: {:?}", params.reference);
            (StatusCode::NOT_FOUND, Html(views::render_vehicle_not_found())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_id_from_slug() {
        assert_eq!(zone_id_from_slug("route-3"), Some(3));
        assert_eq!(zone_id_from_slug("route-x"), None);
        assert_eq!(zone_id_from_slug("favicon.ico"), None);
    }
}
