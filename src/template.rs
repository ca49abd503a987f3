use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use fox2it_contact::{ContactForm, Level, Notification};
use std::convert::Infallible;

use crate::landing::{self, Service};

/// Header sent by the page script when it only wants the contact fragment back
pub const PARTIAL_HEADER: &str = "ts-request";

pub struct Template {
    pub partial: bool,
}

impl Template {
    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "Failed to render template");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let partial = parts
            .headers
            .get(PARTIAL_HEADER)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        Ok(Template { partial })
    }
}

pub struct Toast {
    pub level: Level,
    pub message: String,
}

impl From<Notification> for Toast {
    fn from(value: Notification) -> Self {
        Self {
            level: value.level(),
            message: value.to_string(),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub company: &'static str,
    pub tagline: &'static str,
    pub services: &'static [Service],
    pub reach_title: &'static str,
    pub reach_text: &'static str,
    pub form: ContactForm,
    pub is_submitting: bool,
    pub toast: Option<Toast>,
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self {
            company: landing::COMPANY,
            tagline: landing::TAGLINE,
            services: landing::SERVICES,
            reach_title: landing::REACH_TITLE,
            reach_text: landing::REACH_TEXT,
            form: ContactForm::default(),
            is_submitting: false,
            toast: None,
        }
    }
}

#[derive(askama::Template)]
#[template(path = "partials/contact.html")]
pub struct ContactFragmentTemplate {
    pub form: ContactForm,
    pub is_submitting: bool,
    pub toast: Option<Toast>,
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;
