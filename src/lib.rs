//! Toto Zone Lookup
//!
//! Aplicación web pública para consultar a qué zona de tráfico pertenece
//! un e-rickshaw (toto) y verificar matrícula, seguro, fitness e impuesto
//! de un vehículo. Los datos vienen de un backend HTTP externo.

pub mod cache;
pub mod client;
pub mod config;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

pub use routes::create_router;
pub use state::AppState;
