use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::session::SessionId;

/// Events emitted by the session controller.
/// The UI drains these each frame and projects them into its view state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ControllerEvent {
    /// A backend call started
    RequestStarted { label: String },

    /// A backend call finished (successfully or not)
    RequestFinished,

    /// The session list was re-fetched; replaces whatever was shown
    SessionsListed { sessions: Vec<SessionId> },

    /// The active session changed (None when nothing is selected)
    ActiveChanged { session_id: Option<SessionId> },

    /// Authoritative transcript for the active session
    TranscriptLoaded {
        session_id: SessionId,
        messages: Vec<Message>,
    },

    /// The transcript view was emptied (no active session left)
    TranscriptCleared,

    /// Locally echoed messages, superseded by the next `TranscriptLoaded`
    MessagesEchoed {
        session_id: SessionId,
        messages: Vec<Message>,
    },

    /// The backend refused a rename; shown to the user as a blocking alert
    RenameRejected { message: String },

    /// An operation failed
    Error { message: String },
}
