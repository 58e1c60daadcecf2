//! UI-level state that drives rendering.
//! A read-only projection of the session controller, updated each frame
//! by draining the EventBus.

use chat_types::event::ControllerEvent;
use chat_types::message::Message;
use chat_types::session::SessionId;

/// State visible to UI panels
pub struct UiState {
    /// Session list in backend order
    pub sessions: Vec<SessionId>,
    /// Session shown in the chat panel
    pub active: Option<SessionId>,
    /// Displayed transcript of `active`
    pub messages: Vec<ChatEntry>,
    /// Message input content
    pub input_text: String,
    /// Status line text
    pub status_text: String,
    /// Last failure, shown until dismissed
    pub banner: Option<String>,
    /// Backend calls in flight
    pending: usize,
    /// Rename refusals the app still has to alert
    alerts: Vec<String>,
}

/// A chat entry for display
#[derive(Clone, Debug, PartialEq)]
pub struct ChatEntry {
    pub role: String,
    pub content: String,
    /// Local echo awaiting the authoritative reload
    pub echoed: bool,
}

impl ChatEntry {
    fn from_message(msg: &Message, echoed: bool) -> Self {
        Self {
            role: msg.role.to_string(),
            content: msg.content.clone(),
            echoed,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
            active: None,
            messages: Vec::new(),
            input_text: String::new(),
            status_text: "Ready".to_string(),
            banner: None,
            pending: 0,
            alerts: Vec::new(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ControllerEvent>) {
        for event in events {
            match event {
                ControllerEvent::RequestStarted { label } => {
                    self.pending += 1;
                    self.status_text = format!("{}...", label);
                }
                ControllerEvent::RequestFinished => {
                    self.pending = self.pending.saturating_sub(1);
                    if self.pending == 0 {
                        self.status_text = "Ready".to_string();
                    }
                }
                ControllerEvent::SessionsListed { sessions } => {
                    self.sessions = sessions;
                }
                ControllerEvent::ActiveChanged { session_id } => {
                    if session_id != self.active {
                        self.messages.clear();
                    }
                    self.active = session_id;
                }
                ControllerEvent::TranscriptLoaded { session_id, messages } => {
                    if self.active.as_ref() != Some(&session_id) {
                        log::debug!("Ignoring transcript for inactive session {}", session_id);
                        continue;
                    }
                    self.messages = messages
                        .iter()
                        .filter(|m| m.is_visible())
                        .map(|m| ChatEntry::from_message(m, false))
                        .collect();
                }
                ControllerEvent::TranscriptCleared => {
                    self.messages.clear();
                }
                ControllerEvent::MessagesEchoed { session_id, messages } => {
                    if self.active.as_ref() == Some(&session_id) {
                        self.messages
                            .extend(messages.iter().map(|m| ChatEntry::from_message(m, true)));
                    }
                }
                ControllerEvent::RenameRejected { message } => {
                    self.banner = Some(message.clone());
                    self.alerts.push(message);
                }
                ControllerEvent::Error { message } => {
                    self.status_text = format!("Error: {}", message);
                    self.banner = Some(message);
                }
            }
        }
    }

    /// Messages that must be shown with a blocking alert, oldest first.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Take the input for sending. Nothing is taken while the text is blank
    /// or no session is active; otherwise the field is cleared right away,
    /// whatever happens to the request.
    pub fn take_input(&mut self) -> Option<String> {
        let text = self.input_text.trim();
        if text.is_empty() || self.active.is_none() {
            return None;
        }
        let text = text.to_string();
        self.input_text.clear();
        Some(text)
    }

    /// Text of the active session field; empty when nothing is active.
    pub fn active_label(&self) -> &str {
        self.active.as_ref().map(SessionId::as_str).unwrap_or_default()
    }

    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }

    pub fn is_active(&self, id: &SessionId) -> bool {
        self.active.as_ref() == Some(id)
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
