use strum::{AsRefStr, Display};

/// Steps a single submission goes through inside the gateway.
///
/// ```text
/// Idle -> Validating -> Rejected | Configuring
/// Configuring -> Unconfigured | Sending
/// Sending -> Sent | Failed
/// ```
#[derive(Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Rejected,
    Configuring,
    Unconfigured,
    Sending,
    Sent,
    Failed,
}

impl SubmissionState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Rejected
                | SubmissionState::Unconfigured
                | SubmissionState::Sent
                | SubmissionState::Failed
        )
    }

    /// States reachable in one step. Terminal states have none, there is no
    /// retry edge.
    pub fn next(&self) -> &'static [SubmissionState] {
        use SubmissionState::*;

        match self {
            Idle => &[Validating],
            Validating => &[Rejected, Configuring],
            Configuring => &[Unconfigured, Sending],
            Sending => &[Sent, Failed],
            Rejected | Unconfigured | Sent | Failed => &[],
        }
    }

    pub fn can_transition_to(&self, next: SubmissionState) -> bool {
        self.next().contains(&next)
    }
}
