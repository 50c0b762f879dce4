//! Utilidades de validación
//!
//! La única validación que hace la aplicación es rechazar búsquedas
//! vacías; además se validan los parámetros que llegan por URL.

use std::borrow::Cow;
use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};

/// Mensaje mostrado cuando la búsqueda está vacía
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a registration or serial number";

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        error.message = Some(Cow::Borrowed(EMPTY_QUERY_MESSAGE));
        return Err(error);
    }
    Ok(())
}

/// Validar y convertir el identificador de correlación del cache
pub fn validate_correlation_id(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value.trim()).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar que el id de zona sea positivo
pub fn validate_zone_id(value: u32) -> Result<(), ValidationError> {
    if value == 0 {
        let mut error = ValidationError::new("zone_id");
        error.add_param("value".into(), &value);
        error.message = Some(Cow::Borrowed("Zone id must be a positive number"));
        return Err(error);
    }
    Ok(())
}

/// Primer mensaje legible de un conjunto de errores
pub fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
