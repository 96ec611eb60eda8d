//! Landing page handler.

use axum::response::Html;

/// Routes listed on the landing page, as displayed.
pub const API_ROUTES: [&str; 5] = [
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/&lt;start&gt;",
    "/api/v1.0/&lt;start&gt;/&lt;end&gt;",
];

/// GET / - HTML index of the API routes
pub async fn landing_handler() -> Html<String> {
    Html(render_index(&API_ROUTES))
}

fn render_index(routes: &[&str]) -> String {
    routes
        .iter()
        .map(|route| format!(r#"<a href="{0}">{0}</a>"#, route))
        .collect::<Vec<_>>()
        .join("<br>")
}
