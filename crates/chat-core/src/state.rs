//! Client-side application state owned by the session controller.

use chat_types::{message::Message, session::SessionId};

/// Everything the client knows about the backend at a point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Session identifiers in backend order
    pub sessions: Vec<SessionId>,
    /// Session currently shown and receiving messages
    pub active: Option<SessionId>,
    /// Transcript of `active` (or the last one applied)
    pub transcript: Vec<Message>,
    /// Bumped for every transcript load; only the latest may repaint
    pub load_generation: u64,
    /// Bumped on every explicit selection; a list call that sees it change
    /// while in flight leaves the selection alone
    pub selection_epoch: u64,
    /// Backend calls currently in flight
    pub in_flight: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, id: &SessionId) -> bool {
        self.active.as_ref() == Some(id)
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}

/// How a refreshed session list picks the active session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Activate the first listed session (the default after listing)
    First,
    /// Keep the current active session if it is still listed, else `First`
    KeepActive,
    /// Activate this id regardless of what was listed
    Force(SessionId),
}

/// Resolved outcome of a [`Selection`] against a fetched list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Target {
    Select { id: SessionId, explicit: bool },
    Keep,
    Clear,
}

impl Selection {
    pub(crate) fn resolve(&self, sessions: &[SessionId], active: Option<&SessionId>) -> Target {
        let first = || match sessions.first() {
            Some(id) => Target::Select { id: id.clone(), explicit: false },
            None => Target::Clear,
        };
        match self {
            Selection::First => first(),
            Selection::KeepActive => match active {
                Some(id) if sessions.contains(id) => Target::Keep,
                _ => first(),
            },
            Selection::Force(id) => Target::Select { id: id.clone(), explicit: true },
        }
    }
}
