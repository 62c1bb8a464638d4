#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use portfolio::{
    AppState, Config,
    config::{ObservabilityConfig, ServerConfig},
};
use portfolio_contact::{Mailer, OutboundMessage};
use portfolio_notification::EmailConfig;

/// Transport stub standing in for the SMTP relay.
#[derive(Clone, Default)]
pub struct StubMailer {
    pub unconfigured: bool,
    pub fail_with: Option<String>,
    sent: Arc<Mutex<Vec<OutboundMessage>>>,
    calls: Arc<AtomicUsize>,
}

impl StubMailer {
    pub fn unconfigured() -> Self {
        Self {
            unconfigured: true,
            ..Default::default()
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            fail_with: Some(reason.into()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for StubMailer {
    fn is_configured(&self) -> bool {
        !self.unconfigured
    }

    async fn send(&self, message: OutboundMessage) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(reason) = &self.fail_with {
            anyhow::bail!("{reason}");
        }

        self.sent.lock().unwrap().push(message);

        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub mailer: StubMailer,
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 0,
        },
        email: EmailConfig {
            contact_address: "owner@portfolio.localhost".to_owned(),
            from_address: "owner@portfolio.localhost".to_owned(),
            ..Default::default()
        },
        observability: ObservabilityConfig::default(),
    }
}

pub fn create_test_app(mailer: StubMailer) -> TestApp {
    let state = AppState::new(test_config(), Arc::new(mailer.clone()));

    TestApp {
        router: portfolio::router(state),
        mailer,
    }
}

pub fn form_body(name: &str, email: &str, subject: &str, message: &str) -> String {
    serde_urlencoded::to_string([
        ("name", name),
        ("email", email),
        ("subject", subject),
        ("message", message),
    ])
    .unwrap()
}

pub fn post_form(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contact")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn post_json(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_string(response: Response<Body>) -> anyhow::Result<String> {
    let body = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(body.to_vec())?)
}
