use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors raised by wizard operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WizardError {
    /// No wizard with this id is active.
    #[error("Wizard not found: {0}")]
    NotFound(String),

    /// The identifier is not part of the catalog.
    #[error("Unknown campaign type: {0}")]
    UnknownCampaignType(String),

    /// A submission for this wizard is already in flight.
    #[error("A submission is already in progress")]
    SubmissionPending,
}

impl WizardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UnknownCampaignType(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::SubmissionPending => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for WizardError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
