use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// Client configuration. Lives in memory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend origin. Empty means same-origin relative paths.
    pub api_base: String,
    /// Prefix for client-generated session identifiers
    pub session_prefix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            session_prefix: DEFAULT_SESSION_PREFIX.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_api_base(api_base: impl Into<String>) -> crate::Result<Self> {
        let api_base = api_base.into();
        let trimmed = api_base.trim();
        if !trimmed.is_empty()
            && !(trimmed.starts_with("http://") || trimmed.starts_with("https://") || trimmed.starts_with('/'))
        {
            return Err(ChatError::Config(format!(
                "api base must be an http(s) URL or an absolute path, got {:?}",
                trimmed
            )));
        }
        Ok(Self {
            api_base: trimmed.trim_end_matches('/').to_string(),
            ..Self::default()
        })
    }

    /// Join an absolute endpoint path (e.g. `/sessions`) onto the api base.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

const DEFAULT_SESSION_PREFIX: &str = "session-";
