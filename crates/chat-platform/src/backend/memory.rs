//! In-memory backend.
//! Answers like the chat server does, without a network. Useful for
//! exercising the controller end to end in tests.

use std::cell::RefCell;

use async_trait::async_trait;

use chat_core::ports::BackendPort;
use chat_types::{
    ChatError, Result,
    message::Message,
    session::SessionId,
    wire::{ChatReply, ChatRequest, RenameRequest, RenameResponse},
};

type Responder = Box<dyn Fn(&[Message]) -> String>;

pub struct MemoryBackend {
    sessions: RefCell<Vec<(SessionId, Vec<Message>)>>,
    responder: Responder,
}

impl MemoryBackend {
    /// Backend whose assistant repeats the last user message.
    pub fn new() -> Self {
        Self::with_responder(|history| {
            let last = history
                .iter()
                .rev()
                .find(|m| m.role == chat_types::message::Role::User)
                .map(|m| m.content.as_str())
                .unwrap_or_default();
            format!("You said: {}", last)
        })
    }

    pub fn with_responder(responder: impl Fn(&[Message]) -> String + 'static) -> Self {
        Self {
            sessions: RefCell::new(Vec::new()),
            responder: Box::new(responder),
        }
    }

    /// Seed a session with an existing transcript.
    pub fn insert(&self, id: impl Into<SessionId>, messages: Vec<Message>) {
        self.sessions.borrow_mut().push((id.into(), messages));
    }

    pub fn session_ids(&self) -> Vec<SessionId> {
        self.sessions.borrow().iter().map(|(id, _)| id.clone()).collect()
    }

    fn position(&self, id: &SessionId) -> Option<usize> {
        self.sessions.borrow().iter().position(|(sid, _)| sid == id)
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found() -> ChatError {
    ChatError::Http {
        status: 404,
        message: "Session not found".to_string(),
    }
}

#[async_trait(?Send)]
impl BackendPort for MemoryBackend {
    async fn list_sessions(&self) -> Result<Vec<SessionId>> {
        Ok(self.session_ids())
    }

    async fn load_transcript(&self, id: &SessionId) -> Result<Vec<Message>> {
        let idx = self.position(id).ok_or_else(not_found)?;
        Ok(self.sessions.borrow()[idx].1.clone())
    }

    async fn send_chat(&self, req: &ChatRequest) -> Result<ChatReply> {
        if req.session_id.as_str().is_empty() || req.prompt.is_empty() {
            return Err(ChatError::Http {
                status: 400,
                message: "Missing session_id or prompt".to_string(),
            });
        }

        // The server upserts: chatting into an unknown id creates it.
        if self.position(&req.session_id).is_none() {
            self.insert(req.session_id.clone(), Vec::new());
        }

        let mut sessions = self.sessions.borrow_mut();
        let Some((_, history)) = sessions.iter_mut().find(|(sid, _)| *sid == req.session_id) else {
            return Err(not_found());
        };
        history.push(Message::user(&req.prompt));
        let reply = (self.responder)(history);
        history.push(Message::assistant(&reply));
        Ok(ChatReply { response: reply })
    }

    async fn create_session(&self, id: &SessionId) -> Result<()> {
        if id.as_str().is_empty() {
            return Err(ChatError::Http {
                status: 400,
                message: "Missing session_id".to_string(),
            });
        }
        match self.position(id) {
            Some(idx) => self.sessions.borrow_mut()[idx].1.push(Message::system("")),
            None => self.insert(id.clone(), vec![Message::system("")]),
        }
        Ok(())
    }

    async fn rename_session(&self, req: &RenameRequest) -> Result<RenameResponse> {
        if req.old_id.as_str().is_empty() || req.new_id.as_str().is_empty() {
            return Ok(RenameResponse {
                status: None,
                error: Some("Missing old_id or new_id".to_string()),
            });
        }
        let Some(idx) = self.position(&req.old_id) else {
            return Ok(RenameResponse {
                status: None,
                error: Some("Old session not found".to_string()),
            });
        };
        if req.old_id != req.new_id && self.position(&req.new_id).is_some() {
            return Ok(RenameResponse::failure("Session name already in use"));
        }
        self.sessions.borrow_mut()[idx].0 = req.new_id.clone();
        Ok(RenameResponse::success())
    }

    async fn delete_session(&self, id: &SessionId) -> Result<()> {
        let idx = self.position(id).ok_or_else(not_found)?;
        self.sessions.borrow_mut().remove(idx);
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
