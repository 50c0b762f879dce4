//! Cliente HTTP para el backend de totos
//!
//! Dos consultas, una por acción del usuario: datos de una zona
//! (`color-details`) y búsqueda pública de un vehículo
//! (`search-toto-public`). No reintenta; cualquier fallo se normaliza
//! al error de la operación.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::models::{Thana, Vehicle, Zone};
use crate::utils::errors::{SearchError, ZoneLoadError};

/// Operaciones contra el backend de totos
#[async_trait]
pub trait TotoApi: Send + Sync {
    /// Obtener color y thanas de una zona
    async fn fetch_zone(&self, zone_id: u32) -> Result<Zone, ZoneLoadError>;

    /// Buscar un vehículo por matrícula o número de serie
    async fn search_vehicle(&self, query: &str) -> Result<Vehicle, SearchError>;
}

/// Cuerpo de `color-details/{id}`
#[derive(Debug, Deserialize)]
struct ColorDetailsResponse {
    color_name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::null_to_default")]
    thanas: Vec<Thana>,
}

/// Cliente HTTP con URL base configurable
#[derive(Debug, Clone)]
pub struct TotoApiClient {
    client: Client,
    base_url: String,
}

impl TotoApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("toto-lookup/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Enviar la petición y leer el cuerpo JSON.
    ///
    /// Devuelve el estado HTTP junto al cuerpo para que cada operación
    /// decida cómo normalizarlo.
    async fn get_json(&self, request: reqwest::RequestBuilder) -> Result<(StatusCode, Value), reqwest::Error> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.json::<Value>().await?;
        Ok((status, body))
    }
}

#[async_trait]
impl TotoApi for TotoApiClient {
    async fn fetch_zone(&self, zone_id: u32) -> Result<Zone, ZoneLoadError> {
        let url = format!("{}/color-details/{}", self.base_url, zone_id);
        log::info!("🗺️ Cargando zona {}: {}", zone_id, url);

        let (status, body) = self
            .get_json(self.client.get(&url))
            .await
            .map_err(|e| {
                log::error!("❌ Error de red cargando zona {}: {}", zone_id, e);
                ZoneLoadError::Transport(e.to_string())
            })?;

        if let Some(message) = backend_error(&body) {
            log::warn!("⚠️ Backend rechazó zona {}: {}", zone_id, message);
            return Err(ZoneLoadError::Backend(message));
        }

        if !status.is_success() {
            log::error!("❌ Zona {} respondió HTTP {}", zone_id, status);
            return Err(ZoneLoadError::Transport(format!("HTTP {}", status)));
        }

        let details: ColorDetailsResponse = serde_json::from_value(body).map_err(|e| {
            log::warn!("⚠️ Respuesta de zona {} mal formada: {}", zone_id, e);
            ZoneLoadError::Missing
        })?;

        let color_name = details
            .color_name
            .filter(|c| !c.trim().is_empty())
            .ok_or(ZoneLoadError::Missing)?;

        log::info!(
            "✅ Zona {} cargada: {} ({} thanas)",
            zone_id,
            color_name,
            details.thanas.len()
        );

        Ok(Zone {
            id: zone_id,
            color_name,
            thanas: details.thanas,
        })
    }

    async fn search_vehicle(&self, query: &str) -> Result<Vehicle, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let url = format!("{}/search-toto-public", self.base_url);
        log::info!("🔍 Buscando vehículo: {}", query);

        let (status, body) = self
            .get_json(self.client.get(&url).query(&[("query", query)]))
            .await
            .map_err(|e| {
                log::error!("❌ Error de red buscando '{}': {}", query, e);
                SearchError::Transport(e.to_string())
            })?;

        if let Some(message) = backend_error(&body) {
            log::warn!("⚠️ Búsqueda '{}' sin resultado: {}", query, message);
            return Err(SearchError::Backend(message));
        }

        if status.is_server_error() {
            log::error!("❌ Búsqueda '{}' respondió HTTP {}", query, status);
            return Err(SearchError::Transport(format!("HTTP {}", status)));
        }

        if !status.is_success() {
            return Err(SearchError::NoRecord);
        }

        let vehicle: Vehicle = serde_json::from_value(body).map_err(|e| {
            log::warn!("⚠️ Registro mal formado para '{}': {}", query, e);
            SearchError::NoRecord
        })?;

        if !vehicle.has_registration() {
            return Err(SearchError::NoRecord);
        }

        log::info!("✅ Vehículo encontrado: {} ({})", vehicle.registration_no, vehicle.route_color);
        Ok(vehicle)
    }
}

/// Extraer el campo `error` del cuerpo, si tiene un valor significativo
fn backend_error(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.trim().is_empty() => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
