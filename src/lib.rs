pub mod config;
pub mod error;
pub mod i18n;
pub mod session;

pub mod api {
    pub mod client;
    pub mod dtos;
}

pub mod workflows {
    pub mod analysis;
    pub mod lead;
    pub mod state;
}

pub use api::client::{DreamApi, HttpDreamApi};
pub use config::AppConfig;
pub use error::{ApiError, CatalogError, ConfigError};
pub use i18n::{resolve, resolve_code, Language, LocalizationEntry, PlanTier};
pub use session::LandingSession;
