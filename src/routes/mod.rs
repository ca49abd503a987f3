use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use fox2it_contact::SubmissionGateway;

use crate::template::{NotFoundTemplate, Template};

mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn SubmissionGateway>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, template.render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoint (no state required)
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", get(contact::page).post(contact::action))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
