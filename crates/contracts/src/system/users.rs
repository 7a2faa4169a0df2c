use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(rename = "type", default)]
    pub kinds: Vec<String>,
}

/// Registered account of the resume builder, as returned by `GET /auth/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub permissions: Option<Permissions>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub came_from: Option<String>,
}

impl UserAccount {
    pub fn permission_kinds(&self) -> &[String] {
        self.permissions
            .as_ref()
            .map(|p| p.kinds.as_slice())
            .unwrap_or(&[])
    }
}
