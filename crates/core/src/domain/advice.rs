use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioAdvice {
    pub recommendation: String,
    pub reasoning: String,
}
