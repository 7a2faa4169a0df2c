//! Runtime configuration of the admin console
//!
//! The API endpoint is picked at build time: release builds read
//! `ADMIN_API_URL`, debug builds read `ADMIN_DEV_API_URL`. When the selected
//! variable is not set the console talks to port 3000 of the host it was
//! served from (see [`api_base`](crate::shared::api_utils::api_base)).
//!
//! ```bash
//! ADMIN_API_URL=https://api.example.com trunk build --release
//! ```

use crate::shared::api_utils::api_base;

const PRODUCTION_API_URL: Option<&str> = option_env!("ADMIN_API_URL");
const DEVELOPMENT_API_URL: Option<&str> = option_env!("ADMIN_DEV_API_URL");

/// How long a toast notification stays on screen
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST backend, without a trailing slash
    pub api_base_url: String,
    pub notice_timeout_ms: u32,
}

impl AppConfig {
    /// Build the configuration for the current build profile
    pub fn load() -> Self {
        let configured = if cfg!(debug_assertions) {
            DEVELOPMENT_API_URL
        } else {
            PRODUCTION_API_URL
        };
        Self::resolve(configured, api_base)
    }

    fn resolve(configured: Option<&str>, fallback: impl FnOnce() -> String) -> Self {
        let base = configured
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .unwrap_or_else(fallback);

        Self {
            api_base_url: base.trim_end_matches('/').to_string(),
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }
}
