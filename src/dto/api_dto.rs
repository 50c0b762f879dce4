use serde::Serialize;
use uuid::Uuid;

use crate::models::vehicle::Credential;
use crate::models::{Vehicle, Zone};
use crate::utils::theme::ThemePalette;

/// Envoltorio común de las respuestas JSON
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

// Response de zona
#[derive(Debug, Serialize)]
pub struct ZoneResponse {
    pub id: u32,
    pub name: String,
    pub color_name: String,
    pub theme: &'static ThemePalette,
    pub thanas: Vec<String>,
}

impl From<&Zone> for ZoneResponse {
    fn from(zone: &Zone) -> Self {
        Self {
            id: zone.id,
            name: zone.display_name(),
            color_name: zone.color_name.clone(),
            theme: zone.theme(),
            thanas: zone.station_names().map(str::to_string).collect(),
        }
    }
}

// Response de vehículo con sus credenciales evaluadas
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    /// Id de correlación para `/vehicle?ref=`
    pub reference: Uuid,
    pub vehicle: Vehicle,
    pub credentials: Vec<Credential>,
}

impl VehicleResponse {
    pub fn new(reference: Uuid, vehicle: Vehicle) -> Self {
        let credentials = vehicle.credentials().to_vec();
        Self {
            reference,
            vehicle,
            credentials,
        }
    }
}
