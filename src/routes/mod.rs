use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use portfolio_contact::{Gateway, Mailer};

use crate::template::{NotFoundTemplate, Template};

mod api;
mod assets;
mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub gateway: Gateway<Arc<dyn Mailer>>,
}

impl AppState {
    pub fn new(config: crate::config::Config, mailer: Arc<dyn Mailer>) -> Self {
        let gateway = Gateway::new(mailer, config.email.envelope());

        Self { config, gateway }
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate { current_path: "" }),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/api/contact", post(api::contact))
        .route("/static/{*path}", get(assets::serve))
        .fallback(fallback)
        .with_state(app_state)
}
