//! Campaign API gateways.
//!
//! The wizard only knows the [`CampaignGateway`] trait. The server picks
//! [`HttpGateway`] when an endpoint is configured and falls back to
//! [`PlaceholderGateway`] otherwise.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use super::SubmitError;

/// Body sent when a wizard confirms its campaign type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignTypeRequest {
    /// Wizard the request originates from.
    #[serde(skip)]
    pub wizard_id: String,
    /// Chosen campaign type identifier.
    pub campaign_type: String,
}

/// Destination for confirmed campaign types.
#[async_trait]
pub trait CampaignGateway: Send + Sync + std::fmt::Debug {
    /// Persist the chosen campaign type.
    async fn submit_campaign_type(&self, request: &CampaignTypeRequest) -> Result<(), SubmitError>;
}

/// Gateway that accepts every request without leaving the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderGateway;

#[async_trait]
impl CampaignGateway for PlaceholderGateway {
    async fn submit_campaign_type(&self, request: &CampaignTypeRequest) -> Result<(), SubmitError> {
        tracing::debug!(
            name: "gateway.placeholder.accepted",
            wizard_id = %request.wizard_id,
            campaign_type = %request.campaign_type,
            "Campaign type accepted without a backend"
        );
        Ok(())
    }
}

/// Gateway posting JSON to `{endpoint}/campaigns/type`.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    url: Url,
    api_key: Option<String>,
}

impl HttpGateway {
    const PATH: &'static str = "campaigns/type";

    /// Create a gateway for the given base endpoint.
    pub fn new(
        endpoint: &str,
        timeout: Duration,
        api_key: Option<String>,
    ) -> Result<Self, SubmitError> {
        let mut base =
            Url::parse(endpoint).map_err(|e| SubmitError::Invalid(format!("Invalid endpoint: {e}")))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let url = base
            .join(Self::PATH)
            .map_err(|e| SubmitError::Invalid(format!("Invalid endpoint: {e}")))?;

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    /// Full URL requests are sent to.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Longest rejection text shown in the wizard.
const MAX_MESSAGE_CHARS: usize = 200;

/// User-facing text for a non-success answer.
///
/// Only `text/plain` bodies and the `message` field of JSON bodies are
/// shown; anything else (proxy HTML pages) falls back to the status reason.
fn rejection_message(status: reqwest::StatusCode, content_type: Option<&str>, body: &str) -> String {
    let mime = content_type
        .and_then(|c| c.split(';').next())
        .map(|m| m.trim().to_ascii_lowercase());

    let text = match mime.as_deref() {
        Some("text/plain") => Some(body.to_string()),
        Some("application/json") => serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message")?.as_str().map(str::to_string)),
        _ => None,
    };

    match text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()) {
        Some(t) if t.chars().count() > MAX_MESSAGE_CHARS => {
            let mut short: String = t.chars().take(MAX_MESSAGE_CHARS).collect();
            short.push('…');
            short
        }
        Some(t) => t,
        None => status
            .canonical_reason()
            .unwrap_or("Campaign service error")
            .to_string(),
    }
}

#[async_trait]
impl CampaignGateway for HttpGateway {
    async fn submit_campaign_type(&self, request: &CampaignTypeRequest) -> Result<(), SubmitError> {
        let mut rb = self.client.post(self.url.clone()).json(request);
        if let Some(k) = &self.api_key {
            rb = rb.bearer_auth(k);
        }

        let response = rb.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = response.text().await.unwrap_or_default();
            let message = rejection_message(status, content_type.as_deref(), &body);
            tracing::warn!(
                name: "gateway.http.rejected",
                wizard_id = %request.wizard_id,
                status = status.as_u16(),
                "Campaign service rejected campaign type"
            );
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        tracing::info!(
            name: "gateway.http.accepted",
            wizard_id = %request.wizard_id,
            campaign_type = %request.campaign_type,
            "Campaign type stored"
        );
        Ok(())
    }
}
