use axum::response::IntoResponse;

use crate::template::{IndexTemplate, Template};

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate::default())
}
