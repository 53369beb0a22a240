//! Campaign-type step state.

use serde::Serialize;

use super::WizardError;
use crate::campaign::CampaignCatalog;

/// Lifecycle of the step's single submission slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Waiting for confirmation.
    #[default]
    Idle,
    /// A submission is in flight; the confirm control is disabled.
    Pending,
    /// The last submission failed with this display message.
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Message for the error region, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Selection and submission status of one campaign-type step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepState {
    selected: String,
    status: SubmissionStatus,
}

impl StepState {
    /// Fresh state with the catalog's default option selected.
    pub fn new(catalog: &CampaignCatalog) -> Self {
        Self {
            selected: catalog.default_option().value.clone(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Select a campaign type from the catalog.
    ///
    /// Unknown identifiers leave the selection untouched.
    pub fn select(&mut self, catalog: &CampaignCatalog, value: &str) -> Result<(), WizardError> {
        if !catalog.contains(value) {
            return Err(WizardError::UnknownCampaignType(value.to_string()));
        }
        self.selected = value.to_string();
        Ok(())
    }

    /// Enter `Pending`, clearing any previous failure.
    ///
    /// Returns the campaign type to submit.
    pub fn begin_submit(&mut self) -> Result<String, WizardError> {
        if self.status.is_pending() {
            return Err(WizardError::SubmissionPending);
        }
        self.status = SubmissionStatus::Pending;
        Ok(self.selected.clone())
    }

    /// Leave `Pending`: back to `Idle` on success, `Failed` otherwise.
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        self.status = match outcome {
            Ok(()) => SubmissionStatus::Idle,
            Err(message) => SubmissionStatus::Failed(message),
        };
    }
}
