use crate::domain::advice::PortfolioAdvice;
use crate::domain::analytics::{AdvancedAnalytics, MarketAnalyticsReport};
use crate::models::{advisory, analytics, AdvisoryInput, AdvisoryModel, AnalyticsInput, Provider};

/// Serves the fixed placeholder reports. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderModel;

#[async_trait::async_trait]
impl AdvisoryModel for PlaceholderModel {
    fn provider(&self) -> Provider {
        Provider::Placeholder
    }

    async fn recommend_portfolio(&self, input: AdvisoryInput) -> anyhow::Result<PortfolioAdvice> {
        Ok(advisory::recommend_portfolio(
            &input.user_profile,
            &input.market_data,
        ))
    }

    async fn market_analytics(
        &self,
        input: AnalyticsInput,
    ) -> anyhow::Result<MarketAnalyticsReport> {
        Ok(analytics::market_analytics(
            &input.market_data,
            &input.sentiment_data,
        ))
    }

    async fn advanced_analytics(&self) -> anyhow::Result<AdvancedAnalytics> {
        Ok(analytics::get_advanced_analytics())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn delegates_to_fixed_reports() {
        let model = PlaceholderModel;

        let advice = model
            .recommend_portfolio(AdvisoryInput {
                user_profile: json!({"risk": "low"}),
                market_data: json!({"ETH": 3000}),
            })
            .await
            .unwrap();
        assert_eq!(
            advice,
            advisory::recommend_portfolio(&Value::Null, &Value::Null)
        );

        let report = model
            .market_analytics(AnalyticsInput::default())
            .await
            .unwrap();
        assert_eq!(report.market_sentiment, "Bullish");
        assert_eq!(report.top_traders, vec!["alice", "bob"]);

        let advanced = model.advanced_analytics().await.unwrap();
        assert_eq!(advanced, analytics::get_advanced_analytics());
    }
}
