//! Localized landing page strings and pricing plans.
//!
//! The table is static and complete for every [`Language`]; `validate_catalog`
//! is run at startup so an empty field fails loudly instead of rendering blank.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Supported UI languages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
    Pt,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Es, Language::En, Language::Pt];

    /// Wire code used in request bodies and as key in analysis results
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
            Language::Pt => "pt",
        }
    }

    /// Label shown in the language selector
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Es => "ES",
            Language::En => "EN",
            Language::Pt => "PT",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            _ => Err(CatalogError::UnsupportedLanguage(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanTier {
    Free,
    Pro,
    Premium,
}

impl PlanTier {
    pub const ALL: [PlanTier; 3] = [PlanTier::Free, PlanTier::Pro, PlanTier::Premium];

    pub fn price_label(&self) -> &'static str {
        match self {
            PlanTier::Free => "$0",
            PlanTier::Pro => "$9",
            PlanTier::Premium => "$29",
        }
    }

    /// The middle tier is the one the page pushes.
    pub fn is_highlighted(&self) -> bool {
        matches!(self, PlanTier::Pro)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanDescriptor {
    pub name: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizationEntry {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta_analyze: &'static str,
    pub analyzing: &'static str,
    pub placeholder: &'static str,
    pub email_placeholder: &'static str,
    pub lead_title: &'static str,
    pub lead_cta: &'static str,
    pub lead_thanks: &'static str,
    pub pricing_title: &'static str,
    pub lang_label: &'static str,
    pub seo_hero: &'static str,
    pub summary_heading: &'static str,
    pub themes_label: &'static str,
    pub tips_label: &'static str,
    pub analysis_error: &'static str,
    pub free: PlanDescriptor,
    pub pro: PlanDescriptor,
    pub premium: PlanDescriptor,
}

impl LocalizationEntry {
    pub fn plan(&self, tier: PlanTier) -> &PlanDescriptor {
        match tier {
            PlanTier::Free => &self.free,
            PlanTier::Pro => &self.pro,
            PlanTier::Premium => &self.premium,
        }
    }

    /// Names of every field that is blank, including plan names, ctas and features.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let texts = [
            ("title", self.title),
            ("subtitle", self.subtitle),
            ("cta_analyze", self.cta_analyze),
            ("analyzing", self.analyzing),
            ("placeholder", self.placeholder),
            ("email_placeholder", self.email_placeholder),
            ("lead_title", self.lead_title),
            ("lead_cta", self.lead_cta),
            ("lead_thanks", self.lead_thanks),
            ("pricing_title", self.pricing_title),
            ("lang_label", self.lang_label),
            ("seo_hero", self.seo_hero),
            ("summary_heading", self.summary_heading),
            ("themes_label", self.themes_label),
            ("tips_label", self.tips_label),
            ("analysis_error", self.analysis_error),
        ];
        let mut missing: Vec<&'static str> = texts
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        let plans = [("free", &self.free), ("pro", &self.pro), ("premium", &self.premium)];
        for (name, plan) in plans {
            if plan.name.trim().is_empty()
                || plan.cta.trim().is_empty()
                || plan.features.is_empty()
                || plan.features.iter().any(|f| f.trim().is_empty())
            {
                missing.push(name);
            }
        }
        missing
    }
}

static ES: LocalizationEntry = LocalizationEntry {
    title: "Revelia.life",
    subtitle: "Descifra tus sueños con IA — claridad, intuición y guía práctica",
    cta_analyze: "Analizar mi sueño",
    analyzing: "Analizando…",
    placeholder: "Describe tu sueño con el mayor detalle posible...",
    email_placeholder: "email@ejemplo.com",
    lead_title: "Recibe un informe detallado en tu correo",
    lead_cta: "Quiero mi informe",
    lead_thanks: "¡Gracias! Revisa tu bandeja pronto.",
    pricing_title: "Elige tu nivel",
    lang_label: "Idioma",
    seo_hero: "Interprete de sueños con IA | Revelia.life",
    summary_heading: "Resumen",
    themes_label: "Temas",
    tips_label: "Consejos",
    analysis_error: "No pudimos analizar tu sueño. Inténtalo de nuevo.",
    free: PlanDescriptor {
        name: "Gratis",
        features: &["Análisis instantáneo", "Etiquetas temáticas", "Recomendaciones básicas"],
        cta: "Empezar",
    },
    pro: PlanDescriptor {
        name: "Pro",
        features: &["Todo lo Gratis", "Quiz de contexto personal", "Historial de sueños"],
        cta: "Probar Pro",
    },
    premium: PlanDescriptor {
        name: "Premium",
        features: &["Todo Pro", "Sube audio de tu sueño", "Prioridad y reportes avanzados"],
        cta: "Ir Premium",
    },
};

static EN: LocalizationEntry = LocalizationEntry {
    title: "Revelia.life",
    subtitle: "Decode your dreams with AI — clarity, intuition, and practical guidance",
    cta_analyze: "Analyze my dream",
    analyzing: "Analyzing…",
    placeholder: "Describe your dream in as much detail as possible...",
    email_placeholder: "email@example.com",
    lead_title: "Get a detailed report to your email",
    lead_cta: "Send me the report",
    lead_thanks: "Thanks! Check your inbox soon.",
    pricing_title: "Choose your plan",
    lang_label: "Language",
    seo_hero: "AI Dream Interpreter | Revelia.life",
    summary_heading: "Summary",
    themes_label: "Themes",
    tips_label: "Tips",
    analysis_error: "We couldn't analyze your dream. Please try again.",
    free: PlanDescriptor {
        name: "Free",
        features: &["Instant analysis", "Theme tagging", "Basic recommendations"],
        cta: "Start",
    },
    pro: PlanDescriptor {
        name: "Pro",
        features: &["Everything in Free", "Personal context quiz", "Dream history"],
        cta: "Try Pro",
    },
    premium: PlanDescriptor {
        name: "Premium",
        features: &["Everything in Pro", "Upload dream audio", "Priority + advanced reports"],
        cta: "Go Premium",
    },
};

static PT: LocalizationEntry = LocalizationEntry {
    title: "Revelia.life",
    subtitle: "Decifre seus sonhos com IA — clareza, intuição e orientação prática",
    cta_analyze: "Analisar meu sonho",
    analyzing: "Analisando…",
    placeholder: "Descreva seu sonho com o máximo de detalhes...",
    email_placeholder: "email@exemplo.com",
    lead_title: "Receba um relatório detalhado por e‑mail",
    lead_cta: "Quero o relatório",
    lead_thanks: "Obrigado! Confira sua caixa de entrada em breve.",
    pricing_title: "Escolha seu plano",
    lang_label: "Idioma",
    seo_hero: "Intérprete de Sonhos com IA | Revelia.life",
    summary_heading: "Resumo",
    themes_label: "Temas",
    tips_label: "Dicas",
    analysis_error: "Não conseguimos analisar seu sonho. Tente novamente.",
    free: PlanDescriptor {
        name: "Grátis",
        features: &["Análise instantânea", "Tags de tema", "Recomendações básicas"],
        cta: "Começar",
    },
    pro: PlanDescriptor {
        name: "Pro",
        features: &["Tudo do Grátis", "Quiz de contexto pessoal", "Histórico de sonhos"],
        cta: "Testar Pro",
    },
    premium: PlanDescriptor {
        name: "Premium",
        features: &["Tudo do Pro", "Enviar áudio do sonho", "Prioridade + relatórios avançados"],
        cta: "Ir Premium",
    },
};

/// Looks up the strings for a language. Pure and infallible on the closed set.
pub fn resolve(language: Language) -> &'static LocalizationEntry {
    match language {
        Language::Es => &ES,
        Language::En => &EN,
        Language::Pt => &PT,
    }
}

/// Looks up the strings for a raw language code. Unknown codes are an error,
/// never a silent fallback to the default language.
pub fn resolve_code(code: &str) -> Result<&'static LocalizationEntry, CatalogError> {
    let language: Language = code.parse()?;
    Ok(resolve(language))
}

/// Checks that every language resolves to a complete entry.
pub fn validate_catalog() -> Result<(), CatalogError> {
    for language in Language::ALL {
        let fields = resolve(language).missing_fields();
        if !fields.is_empty() {
            return Err(CatalogError::IncompleteEntry { language, fields });
        }
    }
    Ok(())
}
