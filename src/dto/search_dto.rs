use serde::Deserialize;
use validator::Validate;

/// Formulario de búsqueda de la página de zona
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SearchForm {
    #[serde(default)]
    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub query: String,
}

/// Parámetros de `GET /api/search`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SearchQuery {
    #[serde(default)]
    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub query: String,
    pub zone_id: Option<u32>,
}

/// Parámetros de la página de zona
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZonePageQuery {
    /// Mostrar todas las thanas en lugar de las primeras ocho
    #[serde(default)]
    pub all: Option<String>,
}

impl ZonePageQuery {
    /// Valores no reconocidos equivalen a `false`
    pub fn show_all(&self) -> bool {
        matches!(
            self.all.as_deref().map(str::trim),
            Some("true" | "1" | "yes" | "on")
        )
    }
}

/// Parámetros de `GET /vehicle`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehiclePageQuery {
    #[serde(rename = "ref")]
    pub reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_form_rejects_blank_query() {
        let form = SearchForm { query: "  ".to_string() };
        assert!(form.validate().is_err());

        let form = SearchForm { query: "UP78AB1234".to_string() };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_search_query_zone_is_optional() {
        let query: SearchQuery = serde_json::from_str(r#"{"query":"SN001234"}"#).unwrap();
        assert_eq!(query.zone_id, None);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_zone_page_query_is_lenient() {
        let parse = |all: Option<&str>| ZonePageQuery { all: all.map(str::to_string) }.show_all();
        assert!(parse(Some("true")));
        assert!(parse(Some("1")));
        assert!(!parse(Some("false")));
        assert!(!parse(Some("banana")));
        assert!(!parse(None));
    }
}
