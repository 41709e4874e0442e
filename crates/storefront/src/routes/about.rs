//! About page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use super::page::Page;
use crate::filters;

/// Brand values, as dictionary keys.
const VALUES: [&str; 4] = [
    "about.values.craftsmanship",
    "about.values.elegance",
    "about.values.mindfulness",
    "about.values.sustainability",
];

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub page: Page,
    pub values: [&'static str; 4],
}

/// Display the brand story.
pub async fn about(page: Page) -> impl IntoResponse {
    AboutTemplate {
        page,
        values: VALUES,
    }
}
