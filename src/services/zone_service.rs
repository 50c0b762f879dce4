use std::sync::Arc;

use crate::client::TotoApi;
use crate::models::{FetchState, Zone};

/// Carga de zonas para la página de zona
pub struct ZoneService {
    api: Arc<dyn TotoApi>,
}

impl ZoneService {
    pub fn new(api: Arc<dyn TotoApi>) -> Self {
        Self { api }
    }

    /// Cargar una zona; cualquier fallo queda en `FetchState::Failed`
    pub async fn load(&self, zone_id: u32) -> FetchState<Zone> {
        let mut state = FetchState::Idle;
        state.start();
        state.resolve(self.api.fetch_zone(zone_id).await);

        if let Some(reason) = state.error() {
            log::warn!("⚠️ Zona {} no disponible: {}", zone_id, reason);
        }
        state
    }
}
