//! Cache
//!
//! Este módulo contiene el cache de resultados de búsqueda.

pub mod cache_config;
pub mod vehicle_cache;

pub use cache_config::CacheConfig;
pub use vehicle_cache::{CacheStats, VehicleResultCache};
