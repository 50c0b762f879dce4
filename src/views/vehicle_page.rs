use chrono::NaiveDate;

use crate::models::navigation::zone_path;
use crate::models::vehicle::Credential;
use crate::models::Vehicle;
use crate::utils::theme::resolve_theme;

use super::{escape_html, layout};

fn field(label: &str, value: &str) -> String {
    let value = if value.trim().is_empty() { "N/A" } else { value };
    format!(
        r#"<div class="card field"><p class="label">{}</p><p class="value">{}</p></div>"#,
        escape_html(label),
        escape_html(value)
    )
}

fn credential_card(credential: &Credential) -> String {
    let (class, badge) = if credential.is_expired() {
        ("card field credential expired", r#"<span class="badge-expired">Expired</span>"#)
    } else {
        ("card field credential", "")
    };

    format!(
        r#"<div class="{class}" data-status="{status}"><p class="label">{title}{badge}</p><p class="value">{date}</p></div>"#,
        class = class,
        status = credential.status.label(),
        title = credential.kind.title(),
        badge = badge,
        date = escape_html(&credential.formatted),
    )
}

/// Detalle del vehículo evaluado contra `today`
pub fn render_vehicle_page(vehicle: &Vehicle, today: NaiveDate) -> String {
    let theme = resolve_theme(&vehicle.route_color);
    let credentials: String = vehicle.credentials_on(today).iter().map(credential_card).collect();

    let back = match vehicle.zone_id.and_then(|id| u32::try_from(id).ok()).filter(|id| *id > 0) {
        Some(zone_id) => zone_path(zone_id),
        None => "/".to_string(),
    };

    let body = format!(
        r#"{header}
<main>
<p><a href="{back}">&larr; Back to zone</a></p>
<section class="banner"><h2>{zone_name}</h2><p>{thana} Thana</p><p>{registration}</p></section>
<section><h3>Owner Details</h3><div class="grid">{owner}{aadhar}{phone}</div></section>
<section><h3>Vehicle Details</h3><div class="grid">{reg_field}{serial}{chassis}</div></section>
<section><h3>Documents</h3><div class="grid">{credentials}</div></section>
</main>"#,
        header = layout::header("Vehicle Details", &vehicle.registration_no, None),
        back = back,
        zone_name = escape_html(&vehicle.zone_name),
        thana = escape_html(&vehicle.thana_name),
        registration = escape_html(&vehicle.registration_no),
        owner = field("Owner Name", &vehicle.owner_name),
        aadhar = field("Aadhaar Number", &vehicle.owner_aadhar),
        phone = field("Mobile Number", &vehicle.owner_phone),
        reg_field = field("Registration Number", &vehicle.registration_no),
        serial = field("Serial Number", &vehicle.serial_number),
        chassis = field("Chassis Number", &vehicle.chasis_no),
        credentials = credentials,
    );

    layout::page(&format!("Vehicle {}", vehicle.registration_no), theme, &body)
}
