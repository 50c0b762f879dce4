use crate::models::navigation::zone_path;
use crate::models::zone::ZONE_DIRECTORY;
use crate::utils::theme::ThemePalette;

use super::escape_html;

const STYLESHEET: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,-apple-system,"Segoe UI",Roboto,sans-serif;background:var(--primary-light);color:#1f2937;min-height:100vh}
header.app-header{position:sticky;top:0;backdrop-filter:blur(12px);background:rgba(255,255,255,.4);border-bottom:1px solid rgba(255,255,255,.3);padding:1rem 1.5rem;display:flex;justify-content:space-between;align-items:center;gap:1rem;flex-wrap:wrap}
header.app-header h1{margin:0;font-size:1.25rem;color:var(--text)}
main{max-width:64rem;margin:0 auto;padding:2rem 1rem}
.card{background:rgba(255,255,255,.75);border-radius:1.5rem;padding:1.5rem;margin-bottom:1.5rem;box-shadow:0 10px 30px rgba(0,0,0,.08)}
.banner{background:var(--gradient);color:#fff;border-radius:1.5rem;padding:1.5rem;margin-bottom:1.5rem}
.zone-selector{display:flex;gap:.5rem;flex-wrap:wrap}
.zone-selector a{padding:.35rem .75rem;border-radius:999px;color:#fff;text-decoration:none;font-size:.85rem}
.zone-selector a.active{outline:3px solid var(--primary-dark)}
.thanas{display:flex;flex-wrap:wrap;gap:.5rem;list-style:none;padding:0}
.thanas li{background:var(--primary-light);color:var(--text);padding:.35rem .8rem;border-radius:999px}
form.search{display:flex;gap:.5rem}
form.search input{flex:1;padding:.8rem 1rem;border-radius:1rem;border:2px solid var(--secondary);font-size:1rem}
form.search button,.button{padding:.8rem 1.5rem;border:0;border-radius:1rem;background:var(--gradient);color:#fff;font-size:1rem;text-decoration:none;display:inline-block}
.error{background:#fee2e2;color:#991b1b;border:1px solid #fecaca;border-radius:1rem;padding:.75rem 1rem;margin-top:1rem}
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(14rem,1fr));gap:1rem}
.field .label{font-size:.85rem;color:#4b5563;margin:0}
.field .value{font-size:1.2rem;font-weight:700;margin:.25rem 0 0}
.credential.expired{background:rgba(254,242,242,.9);border:1px solid #fecaca}
.credential.expired .value{color:#991b1b}
.badge-expired{background:#dc2626;color:#fff;border-radius:999px;padding:.1rem .6rem;font-size:.75rem;margin-left:.5rem}
.centered{text-align:center;padding:3rem 1rem}
"#;

/// Documento HTML completo con la paleta como variables CSS
pub fn page(title: &str, theme: &ThemePalette, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>:root{{--primary:{primary};--primary-dark:{primary_dark};--primary-light:{primary_light};--secondary:{secondary};--accent:{accent};--gradient:{gradient};--text:{text}}}{stylesheet}</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = escape_html(title),
        primary = theme.primary,
        primary_dark = theme.primary_dark,
        primary_light = theme.primary_light,
        secondary = theme.secondary,
        accent = theme.accent,
        gradient = theme.gradient,
        text = theme.text,
        stylesheet = STYLESHEET,
        body = body,
    )
}

/// Cabecera con el selector de zonas; `current` marca la zona activa
pub fn header(title: &str, subtitle: &str, current: Option<u32>) -> String {
    let links: String = ZONE_DIRECTORY
        .iter()
        .map(|zone| {
            format!(
                r#"<a href="{href}" class="{class}" style="background:{gradient}">{name}</a>"#,
                href = zone_path(zone.id),
                class = if current == Some(zone.id) { "active" } else { "" },
                gradient = zone.color.palette().gradient,
                name = zone.name,
            )
        })
        .collect();

    format!(
        r#"<header class="app-header"><div><h1>{title}</h1><p class="label">{subtitle}</p></div><nav class="zone-selector" aria-label="Zones">{links}</nav></header>"#,
        title = escape_html(title),
        subtitle = escape_html(subtitle),
        links = links,
    )
}
