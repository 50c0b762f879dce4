//! Cache de resultados de búsqueda
//!
//! Una búsqueda exitosa guarda el vehículo bajo un id de correlación y
//! redirige a `/vehicle?ref=<id>`. Recargar la página de detalle vuelve a
//! encontrar el registro mientras no expire.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::CacheConfig;
use crate::models::Vehicle;

/// Cache en memoria de vehículos encontrados
pub struct VehicleResultCache {
    memory_cache: RwLock<HashMap<Uuid, CachedVehicle>>,
    config: CacheConfig,
    stats: RwLock<CacheStats>,
}

/// Datos en cache con metadatos
#[derive(Debug, Clone)]
struct CachedVehicle {
    vehicle: Vehicle,
    created_at: Instant,
    last_accessed: Instant,
}

/// Estadísticas del cache
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries_created: u64,
    pub entries_expired: u64,
    /// Entradas eliminadas por LRU
    pub entries_evicted: u64,
}

impl VehicleResultCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            memory_cache: RwLock::new(HashMap::new()),
            config,
            stats: RwLock::new(CacheStats::default()),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Guardar un vehículo y devolver su id de correlación
    pub async fn insert(&self, vehicle: Vehicle) -> Uuid {
        let reference = Uuid::new_v4();
        let mut cache = self.memory_cache.write().await;
        let mut stats = self.stats.write().await;

        while cache.len() >= self.config.max_entries {
            if !Self::evict_lru_entry(&mut cache, &mut stats) {
                break;
            }
        }

        let now = Instant::now();
        debug!("Vehículo {} guardado en cache con ref {}", vehicle.registration_no, reference);
        cache.insert(
            reference,
            CachedVehicle {
                vehicle,
                created_at: now,
                last_accessed: now,
            },
        );
        stats.entries_created += 1;

        reference
    }

    /// Obtener un vehículo por su id de correlación
    pub async fn get(&self, reference: &Uuid) -> Option<Vehicle> {
        let mut cache = self.memory_cache.write().await;
        let mut stats = self.stats.write().await;

        let expired = match cache.get(reference) {
            Some(entry) => self.is_expired(entry.created_at),
            None => {
                stats.misses += 1;
                debug!("Cache miss para ref: {}", reference);
                return None;
            }
        };

        if expired {
            cache.remove(reference);
            stats.entries_expired += 1;
            stats.misses += 1;
            debug!("Cache miss (expired) para ref: {}", reference);
            return None;
        }

        let entry = cache.get_mut(reference)?;
        entry.last_accessed = Instant::now();
        stats.hits += 1;
        debug!("Cache hit para ref: {}", reference);
        Some(entry.vehicle.clone())
    }

    /// Limpiar entradas expiradas
    pub async fn cleanup_expired(&self) -> u64 {
        let mut cache = self.memory_cache.write().await;
        let mut stats = self.stats.write().await;

        let initial_size = cache.len();
        cache.retain(|_, entry| !self.is_expired(entry.created_at));
        let cleaned = (initial_size - cache.len()) as u64;

        if cleaned > 0 {
            stats.entries_expired += cleaned;
            info!("Cache cleanup: {} entradas expiradas eliminadas", cleaned);
        }

        cleaned
    }

    pub async fn get_stats(&self) -> CacheStats {
        self.stats.read().await.clone()
    }

    pub async fn size(&self) -> usize {
        self.memory_cache.read().await.len()
    }

    fn is_expired(&self, created_at: Instant) -> bool {
        created_at.elapsed() > Duration::from_secs(self.config.ttl_seconds)
    }

    /// Eliminar la entrada con acceso más antiguo
    fn evict_lru_entry(cache: &mut HashMap<Uuid, CachedVehicle>, stats: &mut CacheStats) -> bool {
        let oldest = cache
            .iter()
            .min_by_key(|(_, entry)| entry.last_accessed)
            .map(|(key, _)| *key);

        match oldest {
            Some(key) => {
                cache.remove(&key);
                stats.entries_evicted += 1;
                debug!("Entrada LRU eliminada: {}", key);
                true
            }
            None => false,
        }
    }
}
