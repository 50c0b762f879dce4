//! Servicios de la aplicación
//!
//! Carga de zonas y búsqueda de vehículos sobre el cliente del backend.

pub mod search_service;
pub mod zone_service;

pub use search_service::{ensure_same_zone, SearchOutcome, SearchService};
pub use zone_service::ZoneService;
