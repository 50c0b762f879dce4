//! Modelo de Vehicle
//!
//! Registro de un toto (e-rickshaw) tal como lo devuelve la búsqueda
//! pública del backend. Los nombres de campo siguen el JSON del backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::dates::{self, CredentialStatus};

/// Vehículo devuelto por `search-toto-public`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vehicle {
    #[serde(rename = "_id", deserialize_with = "super::null_to_default")]
    pub id: String,
    pub zone_id: Option<i64>,
    pub thana_id: Option<i64>,
    #[serde(deserialize_with = "super::null_to_default")]
    pub zone_name: String,
    #[serde(deserialize_with = "super::null_to_default")]
    pub thana_name: String,
    #[serde(deserialize_with = "super::null_to_default")]
    pub route_color: String,
    #[serde(deserialize_with = "super::null_to_default")]
    pub registration_no: String,
    #[serde(deserialize_with = "super::null_to_default")]
    pub chasis_no: String,
    #[serde(deserialize_with = "super::null_to_default")]
    pub serial_number: String,
    #[serde(deserialize_with = "super::null_to_default")]
    pub owner_name: String,
    #[serde(deserialize_with = "super::null_to_default")]
    pub owner_phone: String,
    #[serde(deserialize_with = "super::null_to_default")]
    pub owner_aadhar: String,
    #[serde(deserialize_with = "super::null_to_default")]
    pub insurance_upto: String,
    #[serde(deserialize_with = "super::null_to_default")]
    pub fitness_upto: String,
    #[serde(deserialize_with = "super::null_to_default")]
    pub tax_upto: String,
    #[serde(deserialize_with = "super::null_to_default")]
    pub created_at: String,
    #[serde(deserialize_with = "super::null_to_default")]
    pub updated_at: String,
}

/// Tipo de credencial con fecha de vencimiento
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialKind {
    Insurance,
    Fitness,
    Tax,
}

impl CredentialKind {
    pub fn title(&self) -> &'static str {
        match self {
            CredentialKind::Insurance => "Insurance Valid Upto",
            CredentialKind::Fitness => "Fitness Valid Upto",
            CredentialKind::Tax => "Tax Valid Upto",
        }
    }
}

/// Credencial evaluada contra una fecha
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credential {
    pub kind: CredentialKind,
    pub valid_upto: String,
    pub formatted: String,
    pub status: CredentialStatus,
}

impl Credential {
    pub fn is_expired(&self) -> bool {
        self.status == CredentialStatus::Expired
    }
}

impl Vehicle {
    /// Un registro sin matrícula no cuenta como resultado
    pub fn has_registration(&self) -> bool {
        !self.registration_no.trim().is_empty()
    }

    /// Evaluar seguro, fitness e impuesto contra `today`
    pub fn credentials_on(&self, today: NaiveDate) -> [Credential; 3] {
        let build = |kind: CredentialKind, value: &str| Credential {
            kind,
            valid_upto: value.to_string(),
            formatted: dates::format_date(value),
            status: dates::credential_status_on(value, today),
        };

        [
            build(CredentialKind::Insurance, &self.insurance_upto),
            build(CredentialKind::Fitness, &self.fitness_upto),
            build(CredentialKind::Tax, &self.tax_upto),
        ]
    }

    pub fn credentials(&self) -> [Credential; 3] {
        self.credentials_on(dates::today())
    }
}
