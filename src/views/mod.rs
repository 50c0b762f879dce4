//! Vistas HTML
//!
//! Las páginas se generan en el servidor como cadenas HTML. Todo texto
//! que viene del backend o del usuario pasa por `escape_html`.

pub mod layout;
pub mod not_found;
pub mod vehicle_page;
pub mod zone_page;

pub use not_found::{render_not_found, render_vehicle_not_found};
pub use vehicle_page::render_vehicle_page;
pub use zone_page::{render_zone_page, ZonePageView};

/// Escapar texto para insertarlo en HTML
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
