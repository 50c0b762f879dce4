use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::cache::VehicleResultCache;
use crate::client::TotoApi;
use crate::dto::SearchForm;
use crate::models::{Vehicle, Zone};
use crate::utils::errors::SearchError;

/// Resultado de una búsqueda aceptada
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Id de correlación en el cache de resultados
    pub reference: Uuid,
    pub vehicle: Vehicle,
}

/// Búsqueda de vehículos desde una zona
pub struct SearchService {
    api: Arc<dyn TotoApi>,
    cache: Arc<VehicleResultCache>,
}

impl SearchService {
    pub fn new(api: Arc<dyn TotoApi>, cache: Arc<VehicleResultCache>) -> Self {
        Self { api, cache }
    }

    /// Buscar un vehículo y guardarlo en el cache.
    ///
    /// Si hay una zona activa, el color de ruta del vehículo debe
    /// coincidir con ella; si no, la búsqueda se rechaza y nada se guarda.
    pub async fn search(&self, zone: Option<&Zone>, form: &SearchForm) -> Result<SearchOutcome, SearchError> {
        form.validate().map_err(|_| SearchError::EmptyQuery)?;

        let vehicle = self.api.search_vehicle(&form.query).await?;

        if let Some(zone) = zone {
            ensure_same_zone(zone, &vehicle)?;
        }

        let reference = self.cache.insert(vehicle.clone()).await;
        log::info!(
            "✅ Búsqueda '{}' aceptada, ref {}",
            form.query.trim(),
            reference
        );

        Ok(SearchOutcome { reference, vehicle })
    }
}

/// Rechazar vehículos de otra zona
pub fn ensure_same_zone(zone: &Zone, vehicle: &Vehicle) -> Result<(), SearchError> {
    if zone.matches_route_color(&vehicle.route_color) {
        return Ok(());
    }

    log::warn!(
        "⚠️ Vehículo {} es de la ruta '{}', zona activa '{}'",
        vehicle.registration_no,
        vehicle.route_color,
        zone.color_name
    );
    Err(SearchError::ZoneMismatch {
        expected: zone.color_name.clone(),
        found: vehicle.route_color.clone(),
    })
}
