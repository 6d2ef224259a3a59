use serde::{Deserialize, Serialize};

/// Subscription plan ("FREE" / "STANDARD" / "PREMIUM").
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: u64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub duration_in_days: i64,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Plan {
    pub fn icon(&self) -> &'static str {
        match self.code.as_str() {
            "FREE" => "🆓",
            "STANDARD" => "⭐",
            "PREMIUM" => "💎",
            _ => "📦",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Feature {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create/update body for POST|PUT /plan.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPayload {
    pub code: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration_in_days: i64,
    pub plan_feature_ids: Vec<u64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    pub account_id: u64,
    pub plan_id: u64,
}
