use crate::domain::advice::PortfolioAdvice;
use serde_json::Value;

/// Portfolio recommendation for a user given the current market.
///
/// Both inputs are currently unused: the advice is a fixed placeholder until a
/// reasoning model and live market data are wired in.
pub fn recommend_portfolio(_user_profile: &Value, _market_data: &Value) -> PortfolioAdvice {
    PortfolioAdvice {
        recommendation: "Buy $500 ETH if it dips 5%".to_string(),
        reasoning: "ETH shows strong support at current levels.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn returns_fixed_advice() {
        let advice = recommend_portfolio(&Value::Null, &Value::Null);
        assert_eq!(advice.recommendation, "Buy $500 ETH if it dips 5%");
        assert_eq!(
            advice.reasoning,
            "ETH shows strong support at current levels."
        );
    }

    #[test]
    fn ignores_inputs() {
        let baseline = recommend_portfolio(&Value::Null, &Value::Null);
        let profile = json!({"risk": "high", "holdings": {"BTC": 2.5}});
        let market = json!([{"symbol": "ETH", "price": 3100.0}]);
        assert_eq!(recommend_portfolio(&profile, &market), baseline);
    }

    #[test]
    fn serializes_to_expected_json() {
        let value = serde_json::to_value(recommend_portfolio(&json!({}), &json!({}))).unwrap();
        assert_eq!(
            value,
            json!({
                "recommendation": "Buy $500 ETH if it dips 5%",
                "reasoning": "ETH shows strong support at current levels.",
            })
        );
    }
}
