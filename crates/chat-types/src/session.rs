use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier naming a backend session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh identifier for a new chat: `<prefix><unix-millis>-<8 hex>`.
    /// The random suffix keeps two clients created in the same millisecond apart.
    pub fn generate(prefix: &str) -> Self {
        Self::from_parts(prefix, chrono::Utc::now().timestamp_millis(), Uuid::new_v4())
    }

    pub fn from_parts(prefix: &str, millis: i64, nonce: Uuid) -> Self {
        let simple = nonce.simple().to_string();
        Self(format!("{}{}-{}", prefix, millis, &simple[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
