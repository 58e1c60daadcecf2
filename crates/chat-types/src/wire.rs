//! Request and response bodies exchanged with the chat backend.

use serde::{Deserialize, Serialize};

use crate::session::SessionId;

/// `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub session_id: SessionId,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// `POST /session/new`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSessionRequest {
    pub session_id: SessionId,
}

/// `POST /rename-session`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRequest {
    pub old_id: SessionId,
    pub new_id: SessionId,
}

/// Rename answer. The backend omits `status` on failures and only sends `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RenameResponse {
    pub const SUCCESS: &'static str = "success";

    pub fn success() -> Self {
        Self {
            status: Some(Self::SUCCESS.to_string()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            status: Some("error".to_string()),
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(Self::SUCCESS)
    }

    /// Error text for a failed rename; mirrors what the backend put in `error`.
    pub fn error_text(&self) -> &str {
        self.error.as_deref().unwrap_or("undefined")
    }
}

/// Generic `{ "error": ... }` body the backend sends with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn message(&self) -> String {
        match &self.details {
            Some(d) if !d.is_empty() => format!("{}: {}", self.error, d),
            _ => self.error.clone(),
        }
    }
}
