//! Submission failures.

use thiserror::Error;

/// Coarse classification of a [`SubmitError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitErrorKind {
    /// The campaign API could not be reached.
    Network,
    /// The campaign API did not answer in time.
    Timeout,
    /// The campaign API answered with a non-success status.
    Rejected,
    /// The request could not be built or the answer could not be understood.
    Invalid,
}

/// Failure reported by a [`CampaignGateway`](super::CampaignGateway).
///
/// `Display` yields the message shown in the wizard's error region.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Unable to reach the campaign service: {0}")]
    Network(String),

    #[error("The campaign service did not respond in time")]
    Timeout,

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("{0}")]
    Invalid(String),
}

impl SubmitError {
    #[must_use]
    pub fn kind(&self) -> SubmitErrorKind {
        match self {
            Self::Network(_) => SubmitErrorKind::Network,
            Self::Timeout => SubmitErrorKind::Timeout,
            Self::Rejected { .. } => SubmitErrorKind::Rejected,
            Self::Invalid(_) => SubmitErrorKind::Invalid,
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_builder() || err.is_decode() {
            Self::Invalid(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
