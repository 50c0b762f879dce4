//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::cache::{CacheConfig, VehicleResultCache};
use crate::client::{TotoApi, TotoApiClient};
use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub toto_api: Arc<dyn TotoApi>,
    pub vehicle_cache: Arc<VehicleResultCache>,
}

impl AppState {
    /// Estado de producción: cliente HTTP contra `config.api_base_url`
    pub fn new(config: EnvironmentConfig) -> anyhow::Result<Self> {
        let client = TotoApiClient::new(config.api_base_url.clone())?;
        Ok(Self::with_api(config, Arc::new(client)))
    }

    /// Estado con una implementación arbitraria del backend
    pub fn with_api(config: EnvironmentConfig, toto_api: Arc<dyn TotoApi>) -> Self {
        let vehicle_cache = Arc::new(VehicleResultCache::new(CacheConfig::from(&config)));
        Self {
            config,
            toto_api,
            vehicle_cache,
        }
    }
}
