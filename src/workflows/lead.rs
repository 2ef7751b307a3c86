use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::client::{DreamApi, LeadIgnored, LeadOutcome};
use crate::api::dtos::LeadCaptureRequest;
use crate::i18n::{self, Language};
use crate::workflows::state::{InFlightGuard, SkipReason, Submission, WorkflowState};

pub type LeadState = WorkflowState<(), LeadIgnored>;

/// Only a confirmed lead produces visible text; failures stay silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadView {
    pub message: Option<&'static str>,
}

impl LeadView {
    pub fn render(state: &LeadState, language: Language) -> Self {
        let message = match state {
            WorkflowState::Succeeded(()) => Some(i18n::resolve(language).lead_thanks),
            _ => None,
        };
        Self { message }
    }
}

/// Best-effort email capture. Shares the client with the analysis workflow but
/// none of its state.
pub struct LeadWorkflow<C: ?Sized> {
    client: Arc<C>,
    state: Arc<Mutex<LeadState>>,
}

impl<C: ?Sized> Clone for LeadWorkflow<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            state: Arc::clone(&self.state),
        }
    }
}

impl<C: DreamApi + ?Sized> LeadWorkflow<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(WorkflowState::Idle)),
        }
    }

    pub fn state(&self) -> LeadState {
        self.state.lock().clone()
    }

    pub fn view(&self, language: Language) -> LeadView {
        LeadView::render(&self.state.lock(), language)
    }

    pub async fn submit(&self, email: &str, language: Language) -> Submission {
        let Some(request) = LeadCaptureRequest::new(email, language) else {
            return Submission::Skipped(SkipReason::BlankEmail);
        };

        let Some(guard) = InFlightGuard::enter(&self.state) else {
            return Submission::Skipped(SkipReason::AlreadyInFlight);
        };

        let next = match self.client.submit_lead(&request).await {
            LeadOutcome::Accepted => {
                tracing::info!(language = %language, "Lead captured");
                WorkflowState::Succeeded(())
            }
            LeadOutcome::Ignored(reason) => WorkflowState::Failed(reason),
        };
        guard.finish(next);
        Submission::Settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::MockDreamApi;
    use crate::api::dtos::{AnalysisResult, DreamAnalysisRequest};
    use crate::error::ApiError;
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Accepts every lead, but only once `release` has been notified.
    struct GatedLeadApi {
        release: Notify,
    }

    #[async_trait]
    impl DreamApi for GatedLeadApi {
        async fn submit_analysis(
            &self,
            _req: &DreamAnalysisRequest,
        ) -> Result<AnalysisResult, ApiError> {
            Err(ApiError::Status(404))
        }

        async fn submit_lead(&self, _req: &LeadCaptureRequest) -> LeadOutcome {
            self.release.notified().await;
            LeadOutcome::Accepted
        }
    }

    #[tokio::test]
    async fn blank_email_is_skipped() {
        let mut mock = MockDreamApi::new();
        mock.expect_submit_lead().never();
        let workflow = LeadWorkflow::new(Arc::new(mock));

        assert_eq!(
            workflow.submit("", Language::Es).await,
            Submission::Skipped(SkipReason::BlankEmail)
        );
        assert_eq!(
            workflow.submit("   ", Language::Es).await,
            Submission::Skipped(SkipReason::BlankEmail)
        );
        assert_eq!(workflow.state(), WorkflowState::Idle);
    }

    #[tokio::test]
    async fn accepted_lead_shows_localized_thanks() {
        let mut mock = MockDreamApi::new();
        mock.expect_submit_lead()
            .withf(|req| req.email == "me@dreams.io" && req.language == Language::Pt)
            .times(1)
            .returning(|_| LeadOutcome::Accepted);
        let workflow = LeadWorkflow::new(Arc::new(mock));

        workflow.submit(" me@dreams.io ", Language::Pt).await;
        assert_eq!(
            workflow.view(Language::Pt).message,
            Some("Obrigado! Confira sua caixa de entrada em breve.")
        );
        assert_eq!(
            workflow.view(Language::Es).message,
            Some("¡Gracias! Revisa tu bandeja pronto.")
        );
    }

    #[tokio::test]
    async fn ignored_lead_stays_silent_and_clears_previous_message() {
        let mut mock = MockDreamApi::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_submit_lead()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| LeadOutcome::Accepted);
        mock.expect_submit_lead()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| LeadOutcome::Ignored(LeadIgnored::Status(500)));
        let workflow = LeadWorkflow::new(Arc::new(mock));

        workflow.submit("a@b.co", Language::En).await;
        assert!(workflow.view(Language::En).message.is_some());

        assert_eq!(workflow.submit("a@b.co", Language::En).await, Submission::Settled);
        assert_eq!(workflow.state(), WorkflowState::Failed(LeadIgnored::Status(500)));
        assert_eq!(workflow.view(Language::En), LeadView { message: None });
    }

    #[tokio::test]
    async fn confirmation_is_cleared_while_next_attempt_is_in_flight() {
        let api = Arc::new(GatedLeadApi {
            release: Notify::new(),
        });
        let workflow = LeadWorkflow::new(Arc::clone(&api));

        api.release.notify_one();
        workflow.submit("a@b.co", Language::Es).await;
        assert!(workflow.view(Language::Es).message.is_some());

        let second = tokio::spawn({
            let workflow = workflow.clone();
            async move { workflow.submit("a@b.co", Language::Es).await }
        });
        while !workflow.state().is_in_flight() {
            tokio::task::yield_now().await;
        }
        assert_eq!(workflow.view(Language::Es), LeadView { message: None });
        assert_eq!(
            workflow.submit("a@b.co", Language::Es).await,
            Submission::Skipped(SkipReason::AlreadyInFlight)
        );

        api.release.notify_one();
        assert_eq!(second.await.unwrap(), Submission::Settled);
        assert!(workflow.view(Language::Es).message.is_some());
    }

    #[tokio::test]
    async fn abandoned_lead_submission_can_be_retried() {
        let api = Arc::new(GatedLeadApi {
            release: Notify::new(),
        });
        let workflow = LeadWorkflow::new(Arc::clone(&api));

        let abandoned =
            tokio::time::timeout(Duration::from_millis(50), workflow.submit("a@b.co", Language::En))
                .await;
        assert!(abandoned.is_err());
        assert_eq!(workflow.state(), WorkflowState::Idle);

        api.release.notify_one();
        assert_eq!(workflow.submit("a@b.co", Language::En).await, Submission::Settled);
        assert!(workflow.state().is_succeeded());
    }
}
