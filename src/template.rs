use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use portfolio_contact::UNEXPECTED_FAILURE_MESSAGE;
use std::convert::Infallible;

/// Header sent by the page script when it only wants a fragment back.
pub const PARTIAL_HEADER: &str = "ts-request";

pub struct Template {
    partial: bool,
}

impl Template {
    /// Whether the request came from the page script rather than a plain
    /// form post.
    pub fn is_partial(&self) -> bool {
        self.partial
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");

                (StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_FAILURE_MESSAGE).into_response()
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

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub current_path: &'static str,
}
