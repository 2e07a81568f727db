pub mod advisory;
pub mod analytics;
pub mod placeholder;

use crate::config::Settings;
use crate::domain::advice::PortfolioAdvice;
use crate::domain::analytics::{AdvancedAnalytics, MarketAnalyticsReport};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub use advisory::recommend_portfolio;
pub use analytics::{get_advanced_analytics, market_analytics};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdvisoryInput {
    #[serde(default)]
    pub user_profile: Value,
    #[serde(default)]
    pub market_data: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsInput {
    #[serde(default)]
    pub market_data: Value,
    #[serde(default)]
    pub sentiment_data: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    Placeholder,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Placeholder => "placeholder",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "placeholder" => Ok(Provider::Placeholder),
            other => anyhow::bail!("unknown advisory provider: {other:?}"),
        }
    }
}

#[async_trait::async_trait]
pub trait AdvisoryModel: Send + Sync {
    fn provider(&self) -> Provider;

    async fn recommend_portfolio(&self, input: AdvisoryInput) -> anyhow::Result<PortfolioAdvice>;

    async fn market_analytics(&self, input: AnalyticsInput)
        -> anyhow::Result<MarketAnalyticsReport>;

    async fn advanced_analytics(&self) -> anyhow::Result<AdvancedAnalytics>;
}

pub fn from_settings(settings: &Settings) -> anyhow::Result<Arc<dyn AdvisoryModel>> {
    let provider = settings.provider()?;
    tracing::info!(%provider, "advisory model selected");
    match provider {
        Provider::Placeholder => Ok(Arc::new(placeholder::PlaceholderModel)),
    }
}
