//! Modelo de Zone
//!
//! Una zona de tráfico se identifica por un id numérico en la URL
//! (`/route-<id>`) y por un color; cubre un conjunto de thanas
//! (comisarías locales).

use serde::{Deserialize, Serialize};

use crate::utils::theme::{resolve_theme, ThemePalette, ZoneColor};

/// Thana (jurisdicción policial) cubierta por una zona
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thana {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "super::null_to_default")]
    pub name: String,
    #[serde(default)]
    pub zone_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Zona obtenida del backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zone {
    pub id: u32,
    pub color_name: String,
    pub thanas: Vec<Thana>,
}

impl Zone {
    pub fn theme(&self) -> &'static ThemePalette {
        resolve_theme(&self.color_name)
    }

    /// Nombre mostrado, p. ej. `Red Zone`
    pub fn display_name(&self) -> String {
        let mut chars = self.color_name.trim().chars();
        match chars.next() {
            Some(first) => format!(
                "{}{} Zone",
                first.to_uppercase(),
                chars.as_str().to_lowercase()
            ),
            None => format!("Zone {}", self.id),
        }
    }

    pub fn station_names(&self) -> impl Iterator<Item = &str> {
        self.thanas.iter().map(|thana| thana.name.as_str())
    }

    /// Comparación sin distinguir mayúsculas entre el color de la zona
    /// y el color de ruta de un vehículo
    pub fn matches_route_color(&self, route_color: &str) -> bool {
        self.color_name.trim().eq_ignore_ascii_case(route_color.trim())
    }
}

/// Entrada del selector de zonas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneSummary {
    pub id: u32,
    pub name: &'static str,
    pub color: ZoneColor,
}

/// Directorio estático de zonas mostrado en el selector
pub const ZONE_DIRECTORY: [ZoneSummary; 7] = [
    ZoneSummary { id: 1, name: "Red Zone", color: ZoneColor::Red },
    ZoneSummary { id: 2, name: "Green Zone", color: ZoneColor::Green },
    ZoneSummary { id: 3, name: "Saffron Zone", color: ZoneColor::Saffron },
    ZoneSummary { id: 4, name: "Blue Zone", color: ZoneColor::Blue },
    ZoneSummary { id: 5, name: "Yellow Zone", color: ZoneColor::Yellow },
    ZoneSummary { id: 6, name: "Violet Zone", color: ZoneColor::Violet },
    ZoneSummary { id: 7, name: "Pink Zone", color: ZoneColor::Pink },
];

pub fn zone_summary(id: u32) -> Option<&'static ZoneSummary> {
    ZONE_DIRECTORY.iter().find(|zone| zone.id == id)
}
