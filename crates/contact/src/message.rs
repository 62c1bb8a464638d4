use askama::Template;
use serde::{Deserialize, Serialize};

use crate::ContactSubmission;

/// Fixed addressing for contact notifications.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub from_name: String,
    pub from_address: String,
    pub to: String,
    pub subject_prefix: String,
}

impl Envelope {
    pub fn from_mailbox(&self) -> String {
        format!("\"{}\" <{}>", self.from_name, self.from_address)
    }
}

/// A fully composed notification, ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub from: String,
    pub reply_to: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[derive(Template)]
#[template(path = "contact-notification.html")]
struct NotificationHtmlTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "contact-notification.txt")]
struct NotificationPlainTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

/// Build the owner notification for a submission.
///
/// Reply-to points at the visitor so answering the mail reaches them
/// directly. Every field is escaped in the HTML part.
pub fn compose(
    envelope: &Envelope,
    submission: &ContactSubmission,
) -> Result<OutboundMessage, askama::Error> {
    let html = NotificationHtmlTemplate {
        name: &submission.name,
        email: &submission.email,
        subject: &submission.subject,
        message: &submission.message,
    }
    .render()?;

    let text = NotificationPlainTemplate {
        name: &submission.name,
        email: &submission.email,
        subject: &submission.subject,
        message: &submission.message,
    }
    .render()?;

    Ok(OutboundMessage {
        from: envelope.from_mailbox(),
        reply_to: submission.email.to_owned(),
        to: envelope.to.to_owned(),
        subject: format!("{}{}", envelope.subject_prefix, submission.subject),
        text,
        html,
    })
}
