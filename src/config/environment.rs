//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables
//! tienen un valor por defecto; un valor numérico inválido es un error.

use std::env;
use thiserror::Error;

/// Host de producción del backend de totos
pub const DEFAULT_API_BASE_URL: &str = "https://totoapi.kvtmedia.com";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Configuración del entorno
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    /// URL base del backend (`color-details`, `search-toto-public`)
    pub api_base_url: String,
    /// Zona a la que redirige `/`
    pub default_zone_id: u32,
    pub result_cache_ttl_secs: u64,
    pub result_cache_max_entries: usize,
    pub result_cache_cleanup_secs: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origins: Vec::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_zone_id: 1,
            result_cache_ttl_secs: 1800,
            result_cache_max_entries: 1000,
            result_cache_cleanup_secs: 300,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Construir la configuración desde una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_base_url = get("TOTO_API_BASE_URL")
            .unwrap_or(defaults.api_base_url)
            .trim_end_matches('/')
            .to_string();
        if api_base_url.is_empty() {
            return Err(ConfigError::Empty("TOTO_API_BASE_URL"));
        }

        let default_zone_id = parse_number(&get, "DEFAULT_ZONE_ID", defaults.default_zone_id)?;
        if default_zone_id == 0 {
            return Err(ConfigError::InvalidNumber {
                name: "DEFAULT_ZONE_ID",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            environment: get("ENVIRONMENT").unwrap_or(defaults.environment),
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_number(&get, "PORT", defaults.port)?,
            cors_origins: get("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            api_base_url,
            default_zone_id,
            result_cache_ttl_secs: parse_number(&get, "RESULT_CACHE_TTL_SECS", defaults.result_cache_ttl_secs)?,
            result_cache_max_entries: parse_number(&get, "RESULT_CACHE_MAX_ENTRIES", defaults.result_cache_max_entries)?,
            result_cache_cleanup_secs: parse_number(&get, "RESULT_CACHE_CLEANUP_SECS", defaults.result_cache_cleanup_secs)?,
        })
    }

    /// Sustituir la URL del backend (tests, entornos de staging)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T, G>(get: &G, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = EnvironmentConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, EnvironmentConfig::default());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.is_development());
    }

    #[test]
    fn test_reads_overrides() {
        let config = EnvironmentConfig::from_lookup(lookup(&[
            ("ENVIRONMENT", "production"),
            ("PORT", "8080"),
            ("TOTO_API_BASE_URL", "http://localhost:9000/"),
            ("DEFAULT_ZONE_ID", "4"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
        ]))
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_base_url, "http://localhost:9000");
        assert_eq!(config.default_zone_id, 4);
        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_number_is_an_error() {
        let err = EnvironmentConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber { name: "PORT", value: "eighty".to_string() }
        );
        assert!(EnvironmentConfig::from_lookup(lookup(&[("DEFAULT_ZONE_ID", "0")])).is_err());
    }

    #[test]
    fn test_with_api_base_url() {
        let config = EnvironmentConfig::default().with_api_base_url("http://127.0.0.1:1234/");
        assert_eq!(config.api_base_url, "http://127.0.0.1:1234");
    }
}
