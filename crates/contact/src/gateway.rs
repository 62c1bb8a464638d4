use tracing::{debug, error, info, warn};

use crate::{
    ContactSubmission, Envelope, Error, Mailer, Result, SubmissionResult, SubmissionState, compose,
};

/// Server side of the contact form.
///
/// Holds no mutable state: every call validates, checks the transport and
/// sends at most one message.
#[derive(Clone)]
pub struct Gateway<M> {
    mailer: M,
    envelope: Envelope,
}

impl<M: Mailer> Gateway<M> {
    pub fn new(mailer: M, envelope: Envelope) -> Self {
        Self { mailer, envelope }
    }

    /// Run one submission through the gateway. Never fails, failures are
    /// reported in the returned result.
    #[tracing::instrument(skip_all, fields(state = tracing::field::Empty))]
    pub async fn handle(&self, submission: ContactSubmission) -> SubmissionResult {
        let outcome = self.dispatch(&submission).await;
        let state = match &outcome {
            Ok(_) => SubmissionState::Sent,
            Err(err) => err.state(),
        };

        tracing::Span::current().record("state", state.as_ref());

        match &outcome {
            Ok(_) => info!("Contact message sent"),
            Err(Error::Validate(fields)) => {
                info!(fields = fields.len(), "Contact submission rejected")
            }
            Err(Error::NotConfigured) => {
                error!("Email transport credentials are missing or still the placeholder")
            }
            Err(Error::Transport(err)) => warn!(error = %err, "Failed to send contact message"),
        }

        outcome.into()
    }

    async fn dispatch(&self, submission: &ContactSubmission) -> Result<()> {
        let state = transition(SubmissionState::Idle, SubmissionState::Validating);
        submission.check().map_err(Error::Validate)?;

        let state = transition(state, SubmissionState::Configuring);
        if !self.mailer.is_configured() {
            return Err(Error::NotConfigured);
        }

        let message =
            compose(&self.envelope, submission).map_err(|err| Error::Transport(err.to_string()))?;

        transition(state, SubmissionState::Sending);
        self.mailer.send(message).await?;

        Ok(())
    }
}

fn transition(from: SubmissionState, to: SubmissionState) -> SubmissionState {
    debug_assert!(from.can_transition_to(to), "{from} -> {to}");
    debug!(from = %from, to = %to, "Contact submission state");

    to
}
