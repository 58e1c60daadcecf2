//! HTTP backend adapter.
//!
//! Talks JSON to the chat server's session endpoints.
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use chat_core::ports::BackendPort;
use chat_types::{
    ChatError, Result,
    config::ClientConfig,
    message::Message,
    session::SessionId,
    wire::{ChatReply, ChatRequest, ErrorBody, NewSessionRequest, RenameRequest, RenameResponse},
};
use crate::encode::encode_path_segment;

pub struct HttpBackend {
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn sessions_url(&self) -> String {
        self.config.endpoint("/sessions")
    }

    /// `/session/{id}` with the id percent-encoded
    pub fn session_url(&self, id: &SessionId) -> String {
        self.config
            .endpoint(&format!("/session/{}", encode_path_segment(id.as_str())))
    }

    pub fn new_session_url(&self) -> String {
        self.config.endpoint("/session/new")
    }

    pub fn chat_url(&self) -> String {
        self.config.endpoint("/chat")
    }

    pub fn rename_url(&self) -> String {
        self.config.endpoint("/rename-session")
    }
}

#[async_trait(?Send)]
impl BackendPort for HttpBackend {
    async fn list_sessions(&self) -> Result<Vec<SessionId>> {
        let response = Request::get(&self.sessions_url())
            .send()
            .await
            .map_err(network)?;
        read_json(expect_ok(response).await?).await
    }

    async fn load_transcript(&self, id: &SessionId) -> Result<Vec<Message>> {
        let response = Request::get(&self.session_url(id))
            .send()
            .await
            .map_err(network)?;
        read_json(expect_ok(response).await?).await
    }

    async fn send_chat(&self, req: &ChatRequest) -> Result<ChatReply> {
        let response = Request::post(&self.chat_url())
            .header("Content-Type", "application/json")
            .json(req)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(expect_ok(response).await?).await
    }

    async fn create_session(&self, id: &SessionId) -> Result<()> {
        let body = NewSessionRequest {
            session_id: id.clone(),
        };
        let response = Request::post(&self.new_session_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        expect_ok(response).await?;
        Ok(())
    }

    async fn rename_session(&self, req: &RenameRequest) -> Result<RenameResponse> {
        let response = Request::post(&self.rename_url())
            .header("Content-Type", "application/json")
            .json(req)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;

        // Refusals arrive as 400/404 with an `{error}` body; read it either way.
        let status = response.status();
        let text = response.text().await.map_err(network)?;
        parse_rename_reply(status, &text)
    }

    async fn delete_session(&self, id: &SessionId) -> Result<()> {
        let response = Request::delete(&self.session_url(id))
            .send()
            .await
            .map_err(network)?;
        expect_ok(response).await?;
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "http"
    }
}

fn network(e: gloo_net::Error) -> ChatError {
    ChatError::Network(e.to_string())
}

async fn expect_ok(response: Response) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| response.status_text());
    Err(http_error(status, &text))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response.text().await.map_err(network)?;
    Ok(serde_json::from_str(&text)?)
}

/// Map a failed response to `ChatError::Http`, preferring the backend's
/// `{error, details}` body over the raw text.
pub(crate) fn http_error(status: u16, body: &str) -> ChatError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.message(),
        Err(_) if body.trim().is_empty() => "request failed".to_string(),
        Err(_) => body.trim().to_string(),
    };
    ChatError::Http { status, message }
}

pub(crate) fn parse_rename_reply(status: u16, body: &str) -> Result<RenameResponse> {
    match serde_json::from_str::<RenameResponse>(body) {
        Ok(reply) if reply.status.is_some() || reply.error.is_some() => Ok(reply),
        _ if (200..300).contains(&status) => Err(ChatError::Serialization(format!(
            "unexpected rename reply: {}",
            body
        ))),
        _ => Err(http_error(status, body)),
    }
}
