//! Per-visitor landing page state.
//!
//! All mutable UI state lives here: the selected language, the form drafts and
//! the two workflows. Rendering code reads views from the session and routes
//! every action back through it.

use std::sync::Arc;

use crate::api::client::DreamApi;
use crate::i18n::{self, Language, LocalizationEntry, PlanTier};
use crate::workflows::analysis::{AnalysisView, AnalysisWorkflow};
use crate::workflows::lead::{LeadView, LeadWorkflow};
use crate::workflows::state::Submission;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCard {
    pub tier: PlanTier,
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub highlighted: bool,
}

pub struct LandingSession<C: ?Sized> {
    language: Language,
    dream_text: String,
    email: String,
    analysis: AnalysisWorkflow<C>,
    lead: LeadWorkflow<C>,
}

impl<C: DreamApi + ?Sized> LandingSession<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            language: Language::default(),
            dream_text: String::new(),
            email: String::new(),
            analysis: AnalysisWorkflow::new(Arc::clone(&client)),
            lead: LeadWorkflow::new(client),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            tracing::debug!(from = %self.language, to = %language, "Language switched");
        }
        self.language = language;
    }

    pub fn dream_text(&self) -> &str {
        &self.dream_text
    }

    pub fn set_dream_text(&mut self, text: impl Into<String>) {
        self.dream_text = text.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The hero form and the lead form edit the same address.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn texts(&self) -> &'static LocalizationEntry {
        i18n::resolve(self.language)
    }

    pub fn analysis(&self) -> &AnalysisWorkflow<C> {
        &self.analysis
    }

    pub fn lead(&self) -> &LeadWorkflow<C> {
        &self.lead
    }

    pub async fn analyze(&self) -> Submission {
        let email = Some(self.email.as_str());
        self.analysis.submit(&self.dream_text, self.language, email).await
    }

    pub async fn capture_lead(&self) -> Submission {
        self.lead.submit(&self.email, self.language).await
    }

    pub fn analyze_button_label(&self) -> &'static str {
        let texts = self.texts();
        if self.analysis.is_in_flight() {
            texts.analyzing
        } else {
            texts.cta_analyze
        }
    }

    pub fn analysis_view(&self) -> AnalysisView {
        self.analysis.view(self.language)
    }

    pub fn lead_view(&self) -> LeadView {
        self.lead.view(self.language)
    }

    pub fn pricing(&self) -> Vec<PlanCard> {
        let texts = self.texts();
        PlanTier::ALL
            .into_iter()
            .map(|tier| {
                let plan = texts.plan(tier);
                PlanCard {
                    tier,
                    name: plan.name,
                    price: tier.price_label(),
                    features: plan.features,
                    cta: plan.cta,
                    highlighted: tier.is_highlighted(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::{LeadIgnored, LeadOutcome, MockDreamApi};
    use crate::api::dtos::AnalysisResult;
    use crate::workflows::state::SkipReason;
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn analyze_uses_session_fields() {
        let mut mock = MockDreamApi::new();
        mock.expect_submit_analysis()
            .withf(|req| {
                req.text == "A river of light"
                    && req.language == Language::En
                    && req.user_email.as_deref() == Some("v@x.io")
            })
            .times(1)
            .returning(|_| {
                Ok(AnalysisResult {
                    summary: BTreeMap::from([
                        ("en".to_string(), "Renewal".to_string()),
                        ("pt".to_string(), "Renovação".to_string()),
                    ]),
                    themes: vec!["water".to_string()],
                    recommendations: BTreeMap::new(),
                })
            });
        let mut session = LandingSession::new(Arc::new(mock));
        session.set_language(Language::En);
        session.set_dream_text("A river of light");
        session.set_email("v@x.io");

        assert_eq!(session.analyze_button_label(), "Analyze my dream");
        assert_eq!(session.analyze().await, Submission::Settled);

        let AnalysisView::Ready(rendered) = session.analysis_view() else {
            panic!("expected a rendered result");
        };
        assert_eq!(rendered.summary, "Renewal");

        session.set_language(Language::Pt);
        let AnalysisView::Ready(rendered) = session.analysis_view() else {
            panic!("expected a rendered result");
        };
        assert_eq!(rendered.summary, "Renovação");
        assert_eq!(rendered.themes, "water");
        assert_eq!(rendered.recommendations, "");
    }

    #[tokio::test]
    async fn empty_drafts_are_skipped() {
        let mut mock = MockDreamApi::new();
        mock.expect_submit_analysis().never();
        mock.expect_submit_lead().never();
        let session = LandingSession::new(Arc::new(mock));

        assert_eq!(session.analyze().await, Submission::Skipped(SkipReason::BlankText));
        assert_eq!(session.capture_lead().await, Submission::Skipped(SkipReason::BlankEmail));
        assert_eq!(session.analysis_view(), AnalysisView::Hidden);
        assert_eq!(session.lead_view().message, None);
    }

    #[tokio::test]
    async fn failed_lead_does_not_affect_analysis() {
        let mut mock = MockDreamApi::new();
        mock.expect_submit_lead()
            .times(1)
            .returning(|_| LeadOutcome::Ignored(LeadIgnored::Transport));
        let mut session = LandingSession::new(Arc::new(mock));
        session.set_email("lead@x.io");

        assert_eq!(session.capture_lead().await, Submission::Settled);
        assert_eq!(session.lead_view().message, None);
        assert_eq!(session.analysis_view(), AnalysisView::Hidden);
    }

    #[test]
    fn pricing_follows_language() {
        let mut session = LandingSession::new(Arc::new(MockDreamApi::new()));
        let cards = session.pricing();
        assert_eq!(
            cards.iter().map(|c| (c.name, c.price)).collect::<Vec<_>>(),
            vec![("Gratis", "$0"), ("Pro", "$9"), ("Premium", "$29")]
        );
        assert!(cards[1].highlighted);
        assert!(!cards[0].highlighted && !cards[2].highlighted);

        session.set_language(Language::En);
        assert_eq!(session.pricing()[0].cta, "Start");
        assert_eq!(session.texts().pricing_title, "Choose your plan");
    }
}
