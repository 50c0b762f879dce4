//! Navegación entre páginas
//!
//! Estados posibles: página de zona, detalle de vehículo y página no
//! encontrada. La raíz redirige a la zona por defecto.

use uuid::Uuid;

/// Prefijo de las rutas de zona (`/route-3`)
pub const ZONE_SLUG_PREFIX: &str = "route-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`, redirige a la zona por defecto
    Home,
    ZoneView(u32),
    /// `/vehicle`; el registro se busca en el cache por su referencia
    VehicleView,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path {
            "" | "/" => Route::Home,
            "/vehicle" => Route::VehicleView,
            _ => match path.strip_prefix('/') {
                Some(slug) if !slug.contains('/') => parse_zone_slug(slug)
                    .map(Route::ZoneView)
                    .unwrap_or(Route::NotFound),
                _ => Route::NotFound,
            },
        }
    }
}

/// Extraer el id de zona de un segmento `route-<n>`.
///
/// Solo se aceptan enteros positivos.
pub fn parse_zone_slug(slug: &str) -> Option<u32> {
    slug.strip_prefix(ZONE_SLUG_PREFIX)
        .filter(|id| !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()))
        .and_then(|id| id.parse::<u32>().ok())
        .filter(|id| *id > 0)
}

pub fn zone_path(zone_id: u32) -> String {
    format!("/{}{}", ZONE_SLUG_PREFIX, zone_id)
}

pub fn search_path(zone_id: u32) -> String {
    format!("{}/search", zone_path(zone_id))
}

pub fn vehicle_path(reference: Uuid) -> String {
    format!("/vehicle?ref={}", reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table() {
        let cases = [
            ("/", Route::Home),
            ("", Route::Home),
            ("/route-1", Route::ZoneView(1)),
            ("/route-7/", Route::NotFound),
            ("/vehicle/", Route::NotFound),
            ("/route-42", Route::ZoneView(42)),
            ("/vehicle", Route::VehicleView),
            ("/route-", Route::NotFound),
            ("/route-0", Route::NotFound),
            ("/route-abc", Route::NotFound),
            ("/route--1", Route::NotFound),
            ("/route-1/extra", Route::NotFound),
            ("/route-1/search", Route::NotFound),
            ("/zone-1", Route::NotFound),
            ("/about", Route::NotFound),
        ];

        for (path, expected) in cases {
            assert_eq!(Route::from_path(path), expected, "path {}", path);
        }
    }

    #[test]
    fn test_paths() {
        assert_eq!(zone_path(3), "/route-3");
        assert_eq!(search_path(3), "/route-3/search");
        let id = Uuid::nil();
        assert_eq!(vehicle_path(id), "/vehicle?ref=00000000-0000-0000-0000-000000000000");
    }
}
