use async_trait::async_trait;
use url::Url;

use crate::api::dtos::{
    parse_analyze_body, AnalysisResult, DreamAnalysisRequest, LeadCaptureRequest,
};
use crate::config::AppConfig;
use crate::error::ApiError;

pub const ANALYZE_PATH: &str = "api/dream/analyze";
pub const LEAD_PATH: &str = "api/lead";

/// Why a lead submission was dropped. Lead capture is best-effort, so these are
/// logged and exposed to callers but never shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadIgnored {
    Transport,
    Status(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadOutcome {
    Accepted,
    Ignored(LeadIgnored),
}

impl LeadOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, LeadOutcome::Accepted)
    }
}

/// The two outbound calls of the landing page. Implementations must not panic
/// or leak transport faults; everything comes back as a typed outcome.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DreamApi: Send + Sync {
    async fn submit_analysis(
        &self,
        req: &DreamAnalysisRequest,
    ) -> Result<AnalysisResult, ApiError>;

    async fn submit_lead(&self, req: &LeadCaptureRequest) -> LeadOutcome;
}

/// reqwest-backed client for the analysis backend
#[derive(Debug, Clone)]
pub struct HttpDreamApi {
    client: reqwest::Client,
    analyze_url: Url,
    lead_url: Url,
}

impl HttpDreamApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(config.request_timeout)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            analyze_url: config.endpoint(ANALYZE_PATH),
            lead_url: config.endpoint(LEAD_PATH),
        }
    }

    async fn post_analysis(
        &self,
        req: &DreamAnalysisRequest,
    ) -> Result<AnalysisResult, ApiError> {
        let response = self
            .client
            .post(self.analyze_url.clone())
            .json(req)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_analyze_body(&body)
    }
}

#[async_trait]
impl DreamApi for HttpDreamApi {
    async fn submit_analysis(
        &self,
        req: &DreamAnalysisRequest,
    ) -> Result<AnalysisResult, ApiError> {
        tracing::debug!(
            url = %self.analyze_url,
            language = %req.language,
            chars = req.text.chars().count(),
            with_email = req.user_email.is_some(),
            "Submitting dream for analysis"
        );

        match self.post_analysis(req).await {
            Ok(result) => {
                tracing::debug!(themes = result.themes.len(), "Dream analysis received");
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Dream analysis request failed");
                Err(e)
            }
        }
    }

    async fn submit_lead(&self, req: &LeadCaptureRequest) -> LeadOutcome {
        tracing::debug!(url = %self.lead_url, language = %req.language, "Submitting lead");

        match self.client.post(self.lead_url.clone()).json(req).send().await {
            Ok(response) if response.status().is_success() => LeadOutcome::Accepted,
            Ok(response) => {
                let status = response.status().as_u16();
                tracing::info!(status, "Lead capture not accepted, ignoring");
                LeadOutcome::Ignored(LeadIgnored::Status(status))
            }
            Err(e) => {
                tracing::info!(error = %e, "Lead capture request failed, ignoring");
                LeadOutcome::Ignored(LeadIgnored::Transport)
            }
        }
    }
}
