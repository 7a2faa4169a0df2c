use contracts::dashboards::d100_analytics::AnalyticsSummary;

use crate::shared::api_utils::{ApiClient, ApiError};

/// Totals, weekly buckets and growth in one call
pub async fn get_analytics(api: &ApiClient) -> Result<AnalyticsSummary, ApiError> {
    api.get_json("/analytics/all").await
}
