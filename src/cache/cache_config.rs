//! Configuración de cache
//!
//! Este módulo contiene la configuración del cache de resultados de búsqueda.

use serde::{Deserialize, Serialize};

use crate::config::EnvironmentConfig;

/// Configuración del cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub ttl_seconds: u64,
    pub max_entries: usize,
    /// Intervalo de la tarea de limpieza
    pub cleanup_interval_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 1800, // 30 minutos
            max_entries: 1000,
            cleanup_interval_seconds: 300,
        }
    }
}

impl From<&EnvironmentConfig> for CacheConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            ttl_seconds: config.result_cache_ttl_secs,
            max_entries: config.result_cache_max_entries.max(1),
            cleanup_interval_seconds: config.result_cache_cleanup_secs.max(1),
        }
    }
}
