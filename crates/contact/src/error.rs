use crate::{FieldErrors, SubmissionState};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(FieldErrors),

    #[error("email transport credentials are not configured")]
    NotConfigured,

    #[error("{0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Terminal state reached by a submission that stopped on this error.
    pub fn state(&self) -> SubmissionState {
        match self {
            Error::Validate(_) => SubmissionState::Rejected,
            Error::NotConfigured => SubmissionState::Unconfigured,
            Error::Transport(_) => SubmissionState::Failed,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(value: anyhow::Error) -> Self {
        Self::Transport(format!("{value:#}"))
    }
}
