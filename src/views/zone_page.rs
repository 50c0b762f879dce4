use crate::models::navigation::{search_path, zone_path};
use crate::models::{FetchState, Zone};
use crate::utils::theme::{resolve_theme, DEFAULT_ZONE_COLOR};

use super::{escape_html, layout};

/// Número de thanas visibles antes de "show all"
pub const VISIBLE_THANAS: usize = 8;

/// Datos de la página de zona
#[derive(Debug, Clone)]
pub struct ZonePageView {
    pub zone_id: u32,
    pub zone: FetchState<Zone>,
    pub show_all_thanas: bool,
    /// Texto de búsqueda a conservar en el formulario
    pub query: String,
    pub search: FetchState<()>,
}

impl ZonePageView {
    pub fn new(zone_id: u32, zone: FetchState<Zone>) -> Self {
        Self {
            zone_id,
            zone,
            show_all_thanas: false,
            query: String::new(),
            search: FetchState::Idle,
        }
    }

    pub fn with_search_error(mut self, query: &str, message: impl Into<String>) -> Self {
        self.query = query.to_string();
        self.search = FetchState::Failed(message.into());
        self
    }
}

pub fn render_zone_page(view: &ZonePageView) -> String {
    match &view.zone {
        FetchState::Idle | FetchState::Pending => {
            let body = format!(
                r#"{header}<main><div class="card centered" aria-busy="true">Loading route data…</div></main>"#,
                header = layout::header("Toto Zone Lookup", "", Some(view.zone_id)),
            );
            layout::page("Loading", DEFAULT_ZONE_COLOR.palette(), &body)
        }
        FetchState::Failed(reason) => {
            let body = format!(
                r#"{header}<main><div class="card centered"><h2>Error</h2><p>{reason}</p><a class="button" href="{home}">Return Home</a></div></main>"#,
                header = layout::header("Toto Zone Lookup", "", Some(view.zone_id)),
                reason = escape_html(reason),
                home = "/",
            );
            layout::page("Error", DEFAULT_ZONE_COLOR.palette(), &body)
        }
        FetchState::Success(zone) => render_zone(view, zone),
    }
}

fn render_zone(view: &ZonePageView, zone: &Zone) -> String {
    let theme = resolve_theme(&zone.color_name);
    let name = zone.display_name();

    let visible = if view.show_all_thanas {
        zone.thanas.len()
    } else {
        VISIBLE_THANAS
    };
    let thanas: String = zone
        .station_names()
        .take(visible)
        .map(|station| format!("<li>{}</li>", escape_html(station)))
        .collect();

    let toggle = if zone.thanas.len() > VISIBLE_THANAS {
        if view.show_all_thanas {
            format!(r#"<a href="{}">Show less</a>"#, zone_path(zone.id))
        } else {
            format!(
                r#"<a href="{}?all=true">Show all {} thanas</a>"#,
                zone_path(zone.id),
                zone.thanas.len()
            )
        }
    } else {
        String::new()
    };

    let search_error = match view.search.error() {
        Some(message) => format!(r#"<p class="error" role="alert">{}</p>"#, escape_html(message)),
        None => String::new(),
    };

    let body = format!(
        r#"{header}
<main>
<section class="banner"><h2>{name}</h2><p>{count} thanas covered</p></section>
<section class="card"><h3>Search Vehicle</h3>
<form class="search" method="post" action="{action}">
<input type="text" name="query" value="{query}" placeholder="Registration or serial number" autocomplete="off">
<button type="submit">Search</button>
</form>{search_error}</section>
<section class="card"><h3>Covered Thanas</h3><ul class="thanas">{thanas}</ul>{toggle}</section>
</main>"#,
        header = layout::header("Toto Zone Lookup", &name, Some(zone.id)),
        name = escape_html(&name),
        count = zone.thanas.len(),
        action = search_path(zone.id),
        query = escape_html(&view.query),
        search_error = search_error,
        thanas = thanas,
        toggle = toggle,
    );

    layout::page(&name, theme, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Thana;

    fn zone_with(count: usize) -> Zone {
        Zone {
            id: 2,
            color_name: "green".to_string(),
            thanas: (0..count)
                .map(|i| Thana {
                    id: Some(i as i64),
                    name: format!("Thana {}", i),
                    zone_id: Some(2),
                    created_at: None,
                    updated_at: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_success_renders_zone_and_form() {
        let html = render_zone_page(&ZonePageView::new(2, FetchState::Success(zone_with(3))));
        assert!(html.contains("Green Zone"));
        assert!(html.contains(r#"action="/route-2/search""#));
        assert!(html.contains("rgb(22, 163, 74)"));
        assert!(!html.contains("Show all"));
    }

    #[test]
    fn test_thana_list_is_truncated() {
        let html = render_zone_page(&ZonePageView::new(2, FetchState::Success(zone_with(10))));
        assert!(html.contains("Thana 7"));
        assert!(!html.contains("Thana 8"));
        assert!(html.contains("Show all 10 thanas"));

        let mut view = ZonePageView::new(2, FetchState::Success(zone_with(10)));
        view.show_all_thanas = true;
        let html = render_zone_page(&view);
        assert!(html.contains("Thana 9"));
        assert!(html.contains("Show less"));
    }

    #[test]
    fn test_unresolved_zone_renders_loader() {
        for state in [FetchState::Idle, FetchState::Pending] {
            let html = render_zone_page(&ZonePageView::new(4, state));
            assert!(html.contains(r#"aria-busy="true""#));
            assert!(html.contains("Loading route data"));
            assert!(!html.contains(r#"class="search""#));
        }
    }

    #[test]
    fn test_failed_zone_renders_error_card() {
        let html = render_zone_page(&ZonePageView::new(9, FetchState::Failed("Not found".to_string())));
        assert!(html.contains("<h2>Error</h2>"));
        assert!(html.contains("Not found"));
        assert!(!html.contains(r#"class="search""#));
    }

    #[test]
    fn test_search_error_is_escaped_and_query_kept() {
        let view = ZonePageView::new(2, FetchState::Success(zone_with(1)))
            .with_search_error("<UP78>", "No record found");
        let html = render_zone_page(&view);
        assert!(html.contains("No record found"));
        assert!(html.contains(r#"value="&lt;UP78&gt;""#));
    }
}
