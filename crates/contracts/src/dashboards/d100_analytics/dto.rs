use serde::{Deserialize, Serialize};
use std::fmt;

/// Group key of an aggregated bucket.
///
/// The weekly endpoint groups by ISO week number, but the key is kept
/// opaque: numbers and strings are both accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupKey {
    Number(i64),
    Text(String),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Number(n) => write!(f, "{}", n),
            GroupKey::Text(s) => f.write_str(s),
        }
    }
}

/// One bucket of a grouped count (`{ "_id": 12, "count": 40 }`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedCount {
    #[serde(rename = "_id")]
    pub key: GroupKey,
    pub count: u64,
}

/// Response of `GET /analytics/all`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_resumes: u64,
    #[serde(default)]
    pub total_cover_letters: u64,
    #[serde(default)]
    pub users_data_weekly: Vec<GroupedCount>,
    #[serde(default)]
    pub resumes_data_weekly: Vec<GroupedCount>,
    #[serde(default)]
    pub cover_letters_data_weekly: Vec<GroupedCount>,
    /// Week-over-week growth in percent
    #[serde(default)]
    pub weekly_user_growth: f64,
    #[serde(default)]
    pub weekly_resume_growth: f64,
}
