use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::client::DreamApi;
use crate::api::dtos::{AnalysisResult, DreamAnalysisRequest};
use crate::error::ApiError;
use crate::i18n::{self, Language};
use crate::workflows::state::{InFlightGuard, SkipReason, Submission, WorkflowState};

/// Coarse failure kind kept in state. The underlying error is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisFailure {
    Transport,
    Status(u16),
    Malformed,
    Rejected,
}

impl From<&ApiError> for AnalysisFailure {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::Transport(_) => AnalysisFailure::Transport,
            ApiError::Status(code) => AnalysisFailure::Status(*code),
            ApiError::Malformed(_) => AnalysisFailure::Malformed,
            ApiError::ServiceReported(_) => AnalysisFailure::Rejected,
        }
    }
}

pub type AnalysisState = WorkflowState<AnalysisResult, AnalysisFailure>;

/// Result text ready for display in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAnalysis {
    pub heading: &'static str,
    pub summary: String,
    pub themes_label: &'static str,
    pub themes: String,
    pub tips_label: &'static str,
    pub recommendations: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisView {
    Hidden,
    Loading { label: &'static str },
    Ready(RenderedAnalysis),
    Failed { message: &'static str },
}

impl AnalysisView {
    pub fn render(state: &AnalysisState, language: Language) -> Self {
        let texts = i18n::resolve(language);
        match state {
            WorkflowState::Idle => AnalysisView::Hidden,
            WorkflowState::InFlight => AnalysisView::Loading {
                label: texts.analyzing,
            },
            WorkflowState::Succeeded(result) => AnalysisView::Ready(RenderedAnalysis {
                heading: texts.summary_heading,
                summary: result.summary_for(language).to_string(),
                themes_label: texts.themes_label,
                themes: result.themes_display(),
                tips_label: texts.tips_label,
                recommendations: result.recommendations_display(language),
            }),
            WorkflowState::Failed(_) => AnalysisView::Failed {
                message: texts.analysis_error,
            },
        }
    }
}

/// Submit-and-display state machine for dream analysis.
///
/// Clones share the same state, so a handle can be moved into a spawned task
/// while the UI keeps rendering from another. A submission is refused while one
/// is in flight; that guard is what keeps a stale response from overwriting a
/// newer one, since requests are never cancelled.
pub struct AnalysisWorkflow<C: ?Sized> {
    client: Arc<C>,
    state: Arc<Mutex<AnalysisState>>,
}

impl<C: ?Sized> Clone for AnalysisWorkflow<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            state: Arc::clone(&self.state),
        }
    }
}

impl<C: DreamApi + ?Sized> AnalysisWorkflow<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(WorkflowState::Idle)),
        }
    }

    pub fn state(&self) -> AnalysisState {
        self.state.lock().clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.lock().is_in_flight()
    }

    pub fn view(&self, language: Language) -> AnalysisView {
        AnalysisView::render(&self.state.lock(), language)
    }

    pub async fn submit(
        &self,
        text: &str,
        language: Language,
        email: Option<&str>,
    ) -> Submission {
        let Some(request) = DreamAnalysisRequest::new(text, language, email) else {
            tracing::debug!("Skipping analysis: dream text is blank");
            return Submission::Skipped(SkipReason::BlankText);
        };

        let Some(guard) = InFlightGuard::enter(&self.state) else {
            tracing::debug!("Skipping analysis: a submission is already in flight");
            return Submission::Skipped(SkipReason::AlreadyInFlight);
        };

        let next = match self.client.submit_analysis(&request).await {
            Ok(result) => WorkflowState::Succeeded(result),
            Err(e) => {
                let failure = AnalysisFailure::from(&e);
                tracing::warn!(?failure, "Dream analysis failed");
                WorkflowState::Failed(failure)
            }
        };
        guard.finish(next);
        Submission::Settled
    }
}
