use async_trait::async_trait;
use serde::Deserialize;

use crate::{ContactSubmission, FieldErrors, Gateway, Mailer, SubmissionResult};

pub const UNEXPECTED_FAILURE_MESSAGE: &str = "Something went wrong, please retry later";

/// Anything the form can hand a submission to.
///
/// The in-process [`Gateway`] never fails; remote implementations can, and
/// the form turns such failures into a generic notification.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, submission: ContactSubmission) -> anyhow::Result<SubmissionResult>;
}

#[async_trait]
impl<M: Mailer> SubmissionGateway for Gateway<M> {
    async fn submit(&self, submission: ContactSubmission) -> anyhow::Result<SubmissionResult> {
        Ok(self.handle(submission).await)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Notification::Success(message) | Notification::Error(message) => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notification::Success(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed, the gateway was not called.
    Invalid(FieldErrors),
    /// A submission from this form is already in flight.
    Busy,
    /// The gateway was called once and answered.
    Completed(Notification),
}

/// Holds the in-flight flag up for one gateway call and lowers it on drop,
/// including when the submit future is cancelled mid-call.
struct InFlight<'a>(&'a mut bool);

impl<'a> InFlight<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// Client side state of the contact form.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(skip)]
    errors: FieldErrors,
    #[serde(skip)]
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the gateway call is in flight; the submit control is
    /// disabled for that duration.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Field errors from the last local validation.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.to_owned(),
            email: self.email.to_owned(),
            subject: self.subject.to_owned(),
            message: self.message.to_owned(),
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.errors = FieldErrors::default();
    }

    pub async fn submit<G>(&mut self, gateway: &G) -> SubmitOutcome
    where
        G: SubmissionGateway + ?Sized,
    {
        if self.submitting {
            return SubmitOutcome::Busy;
        }

        let submission = self.submission();
        if let Err(errors) = submission.check() {
            self.errors = errors.clone();
            return SubmitOutcome::Invalid(errors);
        }

        self.errors = FieldErrors::default();
        let response = {
            let _in_flight = InFlight::start(&mut self.submitting);
            gateway.submit(submission).await
        };

        let notification = match response {
            Ok(result) if result.success => {
                self.clear();
                Notification::Success(result.message)
            }
            Ok(result) => {
                if let Some(fields) = result.field_errors() {
                    self.errors = fields.clone();
                }
                Notification::Error(result.message)
            }
            Err(err) => {
                tracing::error!(error = %err, "Contact gateway call failed");
                Notification::Error(UNEXPECTED_FAILURE_MESSAGE.to_owned())
            }
        };

        SubmitOutcome::Completed(notification)
    }
}

impl From<ContactSubmission> for ContactForm {
    fn from(value: ContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
            ..Default::default()
        }
    }
}
