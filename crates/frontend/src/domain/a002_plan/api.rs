use contracts::domain::a002_plan::Plan;

use crate::shared::api_utils::{ApiClient, ApiError};

pub const PLANS_COLLECTION: &str = "plans";

pub async fn fetch_plans(api: ApiClient) -> Result<Vec<Plan>, ApiError> {
    api.get_json("/plans/").await
}
