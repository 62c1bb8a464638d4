use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use portfolio_contact::{
    ContactSubmission, Envelope, Gateway, Mailer, OutboundMessage, SubmissionGateway,
    SubmissionResult,
};

/// Transport spy recording every message it is asked to send.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub unconfigured: bool,
    pub fail_with: Option<String>,
    sent: Arc<Mutex<Vec<OutboundMessage>>>,
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl RecordingMailer {
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
impl Mailer for RecordingMailer {
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

/// Remote gateway whose call itself blows up.
#[allow(dead_code)]
pub struct BrokenGateway;

#[async_trait]
impl SubmissionGateway for BrokenGateway {
    async fn submit(&self, _submission: ContactSubmission) -> anyhow::Result<SubmissionResult> {
        anyhow::bail!("connection reset by peer")
    }
}

/// Remote gateway that never answers in time.
#[allow(dead_code)]
pub struct StalledGateway;

#[async_trait]
impl SubmissionGateway for StalledGateway {
    async fn submit(&self, _submission: ContactSubmission) -> anyhow::Result<SubmissionResult> {
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;

        Ok(SubmissionResult::sent())
    }
}

pub fn envelope() -> Envelope {
    Envelope {
        from_name: "Portfolio Contact".to_owned(),
        from_address: "owner@portfolio.localhost".to_owned(),
        to: "owner@portfolio.localhost".to_owned(),
        subject_prefix: "Portfolio Contact: ".to_owned(),
    }
}

pub fn gateway(mailer: &RecordingMailer) -> Gateway<RecordingMailer> {
    Gateway::new(mailer.clone(), envelope())
}

pub fn jane() -> ContactSubmission {
    ContactSubmission {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        subject: "Project Inquiry".to_owned(),
        message: "Hello, I'd like to discuss a project.".to_owned(),
    }
}
