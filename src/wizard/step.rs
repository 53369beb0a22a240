//! The campaign-type wizard step.

use std::sync::Arc;

use serde::Deserialize;

use super::{StepState, WizardError, WizardStore};
use crate::campaign::{CampaignCatalog, CampaignGateway, CampaignTypeRequest};

/// Where a navigation control leads.
///
/// `{id}` in the href is replaced by the wizard id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct NavTarget(String);

impl NavTarget {
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }

    /// Concrete href for one wizard.
    pub fn resolve(&self, wizard_id: &str) -> String {
        self.0.replace("{id}", wizard_id)
    }
}

/// Navigation supplied by the routing shell. Absent targets are not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepNavigation {
    pub next: Option<NavTarget>,
    pub back: Option<NavTarget>,
}

/// Shown when the submission task dies without an answer.
const ABORTED_MESSAGE: &str = "The campaign service failed unexpectedly";

/// Result of a completed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Success with a forward target: the caller navigates to this href.
    Advance(String),
    /// Success without a forward target, or a failure recorded in the state.
    Stay(StepState),
}

/// Campaign-type selection step with its injected catalog and navigation.
#[derive(Debug, Clone)]
pub struct CampaignTypeStep {
    catalog: Arc<CampaignCatalog>,
    navigation: StepNavigation,
    class: Option<String>,
}

impl CampaignTypeStep {
    pub fn new(catalog: Arc<CampaignCatalog>, navigation: StepNavigation) -> Self {
        Self {
            catalog,
            navigation,
            class: None,
        }
    }

    /// Extra CSS classes for the step's form.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into()).filter(|c| !c.trim().is_empty());
        self
    }

    pub fn catalog(&self) -> &Arc<CampaignCatalog> {
        &self.catalog
    }

    pub fn navigation(&self) -> &StepNavigation {
        &self.navigation
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Confirm the current selection.
    ///
    /// Marks the wizard `Pending`, sends the selection through the gateway
    /// and records the outcome. The forward target is returned only when the
    /// gateway succeeded. A wizard that is already `Pending` is rejected.
    ///
    /// The gateway call and the outcome bookkeeping run on their own task:
    /// dropping this future (request timeout, client disconnect) still
    /// leaves `Pending` once the gateway answers.
    pub async fn submit(
        &self,
        store: &WizardStore,
        wizard_id: &str,
        gateway: Arc<dyn CampaignGateway>,
    ) -> Result<SubmitOutcome, WizardError> {
        let campaign_type = store.begin_submit(wizard_id)?;

        tracing::info!(
            name: "wizard.submit.started",
            wizard_id = %wizard_id,
            campaign_type = %campaign_type,
            "Submitting campaign type"
        );

        let request = CampaignTypeRequest {
            wizard_id: wizard_id.to_string(),
            campaign_type,
        };
        let task_store = store.clone();
        let task = tokio::spawn(async move {
            let result = gateway.submit_campaign_type(&request).await;
            let outcome = match &result {
                Ok(()) => Ok(()),
                Err(e) => {
                    tracing::warn!(
                        name: "wizard.submit.failed",
                        wizard_id = %request.wizard_id,
                        kind = ?e.kind(),
                        error = %e,
                        "Campaign type submission failed"
                    );
                    Err(e.to_string())
                }
            };
            (result.is_ok(), task_store.finish_submit(&request.wizard_id, outcome))
        });

        let (succeeded, state) = match task.await {
            Ok(done) => done,
            Err(e) => {
                tracing::error!(
                    name: "wizard.submit.aborted",
                    wizard_id = %wizard_id,
                    error = %e,
                    "Campaign type submission task failed"
                );
                let state = store.finish_submit(wizard_id, Err(ABORTED_MESSAGE.to_string()));
                (false, state)
            }
        };
        let state = state?;

        if !succeeded {
            return Ok(SubmitOutcome::Stay(state));
        }

        tracing::info!(
            name: "wizard.submit.completed",
            wizard_id = %wizard_id,
            "Campaign type submitted"
        );

        Ok(match &self.navigation.next {
            Some(next) => SubmitOutcome::Advance(next.resolve(wizard_id)),
            None => SubmitOutcome::Stay(state),
        })
    }
}
