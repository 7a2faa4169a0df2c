use contracts::system::users::UserAccount;

use crate::shared::api_utils::{ApiClient, ApiError};

/// Accounts live under the auth resource of the backend
pub const USERS_COLLECTION: &str = "auth";

/// Fetch all registered accounts
pub async fn fetch_users(api: ApiClient) -> Result<Vec<UserAccount>, ApiError> {
    api.get_json("/auth/").await
}
