//! Evaluación de vencimientos
//!
//! Seguro, fitness e impuesto de un vehículo llegan como cadenas de fecha.
//! Estas funciones son totales: una fecha vacía o mal formada nunca
//! hace fallar la página, se degrada a "sin datos".

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Texto mostrado cuando no hay fecha
pub const DATE_PLACEHOLDER: &str = "N/A";

/// Estado de una credencial del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialStatus {
    Valid,
    Expired,
    Unknown,
}

impl CredentialStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CredentialStatus::Valid => "Valid",
            CredentialStatus::Expired => "Expired",
            CredentialStatus::Unknown => "No data",
        }
    }
}

/// Interpretar una fecha de calendario.
///
/// Acepta `YYYY-MM-DD`, RFC 3339 y `YYYY-MM-DDTHH:MM:SS[.fff]` sin zona.
/// Para timestamps con zona se toma la fecha en su propio offset.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|datetime| datetime.date())
}

/// Fecha de hoy en la zona horaria local del servidor
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Verdadero si la fecha es estrictamente anterior a `today`
pub fn is_expired_on(value: &str, today: NaiveDate) -> bool {
    parse_calendar_date(value).is_some_and(|date| date < today)
}

/// Verdadero si la fecha ya venció respecto a hoy
pub fn is_expired(value: &str) -> bool {
    is_expired_on(value, today())
}

pub fn credential_status_on(value: &str, today: NaiveDate) -> CredentialStatus {
    match parse_calendar_date(value) {
        Some(date) if date < today => CredentialStatus::Expired,
        Some(_) => CredentialStatus::Valid,
        None => CredentialStatus::Unknown,
    }
}

/// Formato largo en-IN: `15 June 2025`
pub fn format_date(value: &str) -> String {
    match parse_calendar_date(value) {
        Some(date) => date.format("%-d %B %Y").to_string(),
        None => DATE_PLACEHOLDER.to_string(),
    }
}
