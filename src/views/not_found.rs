use crate::utils::theme::DEFAULT_ZONE_COLOR;

use super::layout;

fn centered(title: &str, heading: &str, message: &str) -> String {
    let body = format!(
        r#"<main><div class="card centered"><div style="font-size:3rem">🚫</div><h2>{heading}</h2><p>{message}</p><a class="button" href="/">Return Home</a></div></main>"#,
        heading = heading,
        message = message,
    );
    layout::page(title, DEFAULT_ZONE_COLOR.palette(), &body)
}

pub fn render_not_found() -> String {
    centered(
        "Page Not Found",
        "Page Not Found",
        "The page you are looking for does not exist.",
    )
}

/// Página de detalle sin un registro en cache
pub fn render_vehicle_not_found() -> String {
    centered(
        "Vehicle Data Not Found",
        "Vehicle Data Not Found",
        "Please search for the vehicle from the home page.",
    )
}
