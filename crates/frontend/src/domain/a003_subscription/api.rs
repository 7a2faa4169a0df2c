use contracts::domain::a003_subscription::Subscription;

use crate::shared::api_utils::{ApiClient, ApiError};

/// Deletes go to `/subscriptions/{id}`, the list is served under `/subs/`
pub const SUBSCRIPTIONS_COLLECTION: &str = "subscriptions";

pub async fn fetch_subscriptions(api: ApiClient) -> Result<Vec<Subscription>, ApiError> {
    api.get_json("/subs/").await
}
