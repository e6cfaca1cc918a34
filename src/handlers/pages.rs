use axum::response::Html;

use crate::render;

/// GET / -> landing page.
pub async fn home() -> Html<String> {
    render::home_page()
}
