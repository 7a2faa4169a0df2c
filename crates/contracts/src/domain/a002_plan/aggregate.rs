use serde::{Deserialize, Serialize};

/// Subscription plan (credits bundle) offered to customers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub credits: i64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub features: Vec<String>,
}
