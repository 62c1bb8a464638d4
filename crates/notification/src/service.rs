//! Email notification service using lettre

use anyhow::Context;
use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use portfolio_contact::{Envelope, Mailer, OutboundMessage};
use serde::Deserialize;

/// Value shipped in the sample environment file. Treated as missing.
pub const PLACEHOLDER_PASSWORD: &str = "your_app_password_here";

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default = "default_address")]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    /// Local relays such as MailDev accept mail without credentials.
    #[serde(default)]
    pub smtp_unauthenticated: bool,
    #[serde(default = "default_address")]
    pub from_address: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
    #[serde(default = "default_address")]
    pub contact_address: String,
    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: default_address(),
            smtp_password: String::new(),
            smtp_unauthenticated: false,
            from_address: default_address(),
            from_name: default_from_name(),
            contact_address: default_address(),
            subject_prefix: default_subject_prefix(),
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_address() -> String {
    "sagarpandey.in@gmail.com".to_string()
}

fn default_from_name() -> String {
    "Portfolio Contact".to_string()
}

fn default_subject_prefix() -> String {
    "Portfolio Contact: ".to_string()
}

impl EmailConfig {
    /// A password is set and is not the sample placeholder.
    pub fn has_credentials(&self) -> bool {
        let password = self.smtp_password.trim();

        !password.is_empty() && password != PLACEHOLDER_PASSWORD
    }

    pub fn envelope(&self) -> Envelope {
        Envelope {
            from_name: self.from_name.to_owned(),
            from_address: self.from_address.to_owned(),
            to: self.contact_address.to_owned(),
            subject_prefix: self.subject_prefix.to_owned(),
        }
    }
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    configured: bool,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_unauthenticated {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "Using unauthenticated SMTP connection (e.g., MailDev)"
            );

            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            // 465 speaks TLS from the first byte, submission ports upgrade with STARTTLS
            let builder = if config.smtp_port == 465 {
                SmtpTransport::relay(&config.smtp_host)?
            } else {
                SmtpTransport::starttls_relay(&config.smtp_host)?
            };

            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                configured = config.has_credentials(),
                "Email service initialized with authentication and TLS"
            );

            builder.port(config.smtp_port).credentials(creds).build()
        };

        Ok(Self {
            mailer,
            configured: config.smtp_unauthenticated || config.has_credentials(),
        })
    }
}

#[async_trait]
impl Mailer for EmailService {
    fn is_configured(&self) -> bool {
        self.configured
    }

    #[tracing::instrument(skip_all, fields(to = %message.to, subject = %message.subject))]
    async fn send(&self, message: OutboundMessage) -> anyhow::Result<()> {
        let email = build_message(message)?;

        tracing::info!("Sending email");

        let mailer = self.mailer.clone();
        let response = tokio::task::spawn_blocking(move || mailer.send(&email)).await??;

        tracing::debug!(code = %response.code(), "SMTP relay accepted message");

        Ok(())
    }
}

fn build_message(message: OutboundMessage) -> anyhow::Result<Message> {
    let from: Mailbox = message.from.parse().context("invalid sender address")?;
    let reply_to: Mailbox = message
        .reply_to
        .parse()
        .context("invalid reply-to address")?;
    let to: Mailbox = message.to.parse().context("invalid recipient address")?;

    Ok(Message::builder()
        .from(from)
        .reply_to(reply_to)
        .to(to)
        .subject(message.subject)
        .multipart(MultiPart::alternative_plain_html(message.text, message.html))?)
}
