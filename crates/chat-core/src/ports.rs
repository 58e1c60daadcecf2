//! Port traits: the hexagonal architecture boundary.
//!
//! `chat-core` only talks to the chat backend through [`BackendPort`].
//! The browser implementation lives in `chat-platform`.

use async_trait::async_trait;
use chat_types::{
    Result,
    message::Message,
    session::SessionId,
    wire::{ChatReply, ChatRequest, RenameRequest, RenameResponse},
};

#[async_trait(?Send)]
pub trait BackendPort {
    /// `GET /sessions`, in backend order
    async fn list_sessions(&self) -> Result<Vec<SessionId>>;

    /// `GET /session/{id}`
    async fn load_transcript(&self, id: &SessionId) -> Result<Vec<Message>>;

    /// `POST /chat`
    async fn send_chat(&self, req: &ChatRequest) -> Result<ChatReply>;

    /// `POST /session/new`; the response body is ignored
    async fn create_session(&self, id: &SessionId) -> Result<()>;

    /// `POST /rename-session`. Application-level refusals come back as
    /// `Ok` with a non-success [`RenameResponse`], not as `Err`.
    async fn rename_session(&self, req: &RenameRequest) -> Result<RenameResponse>;

    /// `DELETE /session/{id}`; the response body is ignored
    async fn delete_session(&self, id: &SessionId) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
