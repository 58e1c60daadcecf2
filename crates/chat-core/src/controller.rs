//! Session controller. Keeps the session list, the active session, and
//! the visible transcript in step with the backend.
//!
//! Every operation is a sequence of backend calls awaited one after the
//! other. Operations triggered independently by the user may interleave,
//! so two guards keep the view consistent:
//! - each transcript load carries a generation number and the id it was
//!   issued for; a load that finishes after a newer one was started, or
//!   after its session stopped being active, is discarded;
//! - an explicit selection made while a list call is in flight wins over
//!   that list's default selection.
//!
//! Must be driven from a single thread (`wasm_bindgen_futures::spawn_local`).
//! State borrows are never held across an `.await`.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use chat_types::{
    ChatError, Result,
    config::ClientConfig,
    event::ControllerEvent,
    message::Message,
    session::SessionId,
    wire::{ChatRequest, RenameRequest},
};
use crate::event_bus::EventBus;
use crate::ports::BackendPort;
use crate::state::{AppState, Selection, Target};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The transcript was replaced with the backend's copy
    Applied,
    /// A newer load or another selection superseded this one
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank text or no active session; nothing was sent
    Skipped,
    Sent { reply: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The user cancelled or entered a blank name; nothing was sent
    Aborted,
    Renamed { new_id: SessionId, was_active: bool },
}

/// Clone-cheap handle; clones share state, backend and event bus.
#[derive(Clone)]
pub struct SessionController {
    backend: Rc<dyn BackendPort>,
    state: Rc<RefCell<AppState>>,
    events: EventBus,
    config: Rc<ClientConfig>,
}

impl SessionController {
    pub fn new(backend: Rc<dyn BackendPort>, config: ClientConfig, events: EventBus) -> Self {
        log::info!("Session controller using {} backend", backend.backend_name());
        Self {
            backend,
            state: Rc::new(RefCell::new(AppState::new())),
            events,
            config: Rc::new(config),
        }
    }

    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    pub fn active(&self) -> Option<SessionId> {
        self.state.borrow().active.clone()
    }

    pub fn sessions(&self) -> Vec<SessionId> {
        self.state.borrow().sessions.clone()
    }

    pub fn transcript(&self) -> Vec<Message> {
        self.state.borrow().transcript.clone()
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// True while any backend call is in flight
    pub fn is_busy(&self) -> bool {
        self.state.borrow().is_busy()
    }

    /// Fetch the session list and activate the first entry.
    ///
    /// Resolves once the list is applied and the default session's
    /// transcript load has finished.
    pub async fn list_sessions(&self) -> Result<Vec<SessionId>> {
        self.refresh(Selection::First).await
    }

    /// Make `id` the active session and load its transcript.
    pub async fn select_session(&self, id: &SessionId) -> Result<LoadOutcome> {
        self.activate(id, true);
        self.load_session(id).await
    }

    /// Fetch the transcript of `id` and show it, unless superseded.
    /// Does not change the active session; a load for a session that is
    /// not active is `Stale` without touching the network.
    pub async fn load_session(&self, id: &SessionId) -> Result<LoadOutcome> {
        let generation = {
            let mut st = self.state.borrow_mut();
            // a load for another session must not supersede the active one's
            if !st.is_active(id) {
                log::debug!("Not loading {}: it is not the active session", id);
                return Ok(LoadOutcome::Stale);
            }
            st.load_generation += 1;
            st.load_generation
        };

        let messages = self
            .call("Loading transcript", self.backend.load_transcript(id))
            .await?;

        {
            let mut st = self.state.borrow_mut();
            if st.load_generation != generation || !st.is_active(id) {
                log::debug!("Discarding stale transcript for {}", id);
                return Ok(LoadOutcome::Stale);
            }
            st.transcript = messages.clone();
        }

        log::debug!("Loaded {} messages for {}", messages.len(), id);
        self.events.emit(ControllerEvent::TranscriptLoaded {
            session_id: id.clone(),
            messages,
        });
        Ok(LoadOutcome::Applied)
    }

    /// Send `text` to the active session, echo the exchange, then reload
    /// the transcript so the backend's copy replaces the echo.
    pub async fn send_message(&self, text: &str) -> Result<SendOutcome> {
        let prompt = text.trim();
        let active = self.active();
        let session_id = match active {
            Some(id) if !prompt.is_empty() => id,
            _ => return Ok(SendOutcome::Skipped),
        };

        let req = ChatRequest {
            session_id: session_id.clone(),
            prompt: prompt.to_string(),
        };
        let reply = self
            .call("Waiting for reply", self.backend.send_chat(&req))
            .await?;

        let echoed = vec![Message::user(prompt), Message::assistant(&reply.response)];
        let still_active = {
            let mut st = self.state.borrow_mut();
            let still_active = st.is_active(&session_id);
            if still_active {
                st.transcript.extend(echoed.iter().cloned());
            }
            still_active
        };
        if still_active {
            self.events.emit(ControllerEvent::MessagesEchoed {
                session_id: session_id.clone(),
                messages: echoed,
            });
            // Failures here are already reported; the message itself went through.
            let _ = self.load_session(&session_id).await;
        } else {
            log::debug!("Reply for {} arrived after switching away", session_id);
        }

        Ok(SendOutcome::Sent { reply: reply.response })
    }

    /// Register a fresh session, relist, and switch to it.
    pub async fn create_session(&self) -> Result<SessionId> {
        let id = SessionId::generate(&self.config.session_prefix);
        log::info!("Creating session {}", id);

        self.call("Creating session", self.backend.create_session(&id))
            .await?;
        self.refresh(Selection::Force(id.clone())).await?;
        Ok(id)
    }

    /// Rename `old_id` to `new_name` (the text from the rename prompt,
    /// `None` when the prompt was cancelled).
    pub async fn rename_session(
        &self,
        old_id: &SessionId,
        new_name: Option<&str>,
    ) -> Result<RenameOutcome> {
        let new_id = match new_name.map(str::trim) {
            Some(name) if !name.is_empty() => SessionId::new(name),
            _ => return Ok(RenameOutcome::Aborted),
        };

        let req = RenameRequest {
            old_id: old_id.clone(),
            new_id: new_id.clone(),
        };
        let resp = self
            .call("Renaming session", self.backend.rename_session(&req))
            .await?;

        if !resp.is_success() {
            let err = ChatError::RenameRejected(resp.error_text().to_string());
            self.report(&err);
            return Err(err);
        }

        let was_active = self.state.borrow().is_active(old_id);
        log::info!("Renamed session {} -> {}", old_id, new_id);

        let selection = if was_active {
            Selection::Force(new_id.clone())
        } else {
            Selection::KeepActive
        };
        self.refresh(selection).await?;

        Ok(RenameOutcome::Renamed { new_id, was_active })
    }

    /// Delete `id`, then relist whether or not the delete succeeded.
    /// If `id` was active, the first remaining session takes over.
    pub async fn delete_session(&self, id: &SessionId) -> Result<()> {
        log::info!("Deleting session {}", id);
        let deleted = self
            .call("Deleting session", self.backend.delete_session(id))
            .await;
        let listed = self.refresh(Selection::First).await;
        deleted?;
        listed.map(|_| ())
    }

    // ─── internals ───────────────────────────────────────────

    async fn refresh(&self, selection: Selection) -> Result<Vec<SessionId>> {
        let epoch = self.state.borrow().selection_epoch;

        let sessions = self
            .call("Loading sessions", self.backend.list_sessions())
            .await?;

        let target = {
            let mut st = self.state.borrow_mut();
            st.sessions = sessions.clone();
            if st.selection_epoch != epoch {
                log::debug!("Selection changed while listing; keeping it");
                Target::Keep
            } else {
                selection.resolve(&sessions, st.active.as_ref())
            }
        };
        self.events.emit(ControllerEvent::SessionsListed {
            sessions: sessions.clone(),
        });

        match target {
            Target::Select { id, explicit } => {
                self.activate(&id, explicit);
                // Failures are already reported; the list itself is fine.
                let _ = self.load_session(&id).await;
            }
            Target::Keep => {}
            Target::Clear => self.clear_active(),
        }

        Ok(sessions)
    }

    fn activate(&self, id: &SessionId, explicit: bool) {
        {
            let mut st = self.state.borrow_mut();
            // the transcript always belongs to the active session
            if !st.is_active(id) {
                st.transcript.clear();
            }
            st.active = Some(id.clone());
            if explicit {
                st.selection_epoch += 1;
            }
        }
        self.events.emit(ControllerEvent::ActiveChanged {
            session_id: Some(id.clone()),
        });
    }

    fn clear_active(&self) {
        let changed = {
            let mut st = self.state.borrow_mut();
            let changed = st.active.is_some() || !st.transcript.is_empty();
            st.active = None;
            st.transcript.clear();
            // invalidate loads still in flight
            st.load_generation += 1;
            changed
        };
        if changed {
            self.events.emit(ControllerEvent::ActiveChanged { session_id: None });
            self.events.emit(ControllerEvent::TranscriptCleared);
        }
    }

    /// Run one backend call with busy tracking and uniform error reporting.
    async fn call<T>(&self, label: &str, fut: impl Future<Output = Result<T>>) -> Result<T> {
        self.state.borrow_mut().in_flight += 1;
        self.events.emit(ControllerEvent::RequestStarted {
            label: label.to_string(),
        });

        let result = fut.await;

        {
            let mut st = self.state.borrow_mut();
            st.in_flight = st.in_flight.saturating_sub(1);
        }
        self.events.emit(ControllerEvent::RequestFinished);

        if let Err(ref e) = result {
            log::error!("{} failed: {}", label, e);
            self.report(e);
        }
        result
    }

    fn report(&self, err: &ChatError) {
        match err {
            ChatError::RenameRejected(_) => {
                log::warn!("{}", err);
                self.events.emit(ControllerEvent::RenameRejected {
                    message: err.to_string(),
                });
            }
            _ => self.events.emit(ControllerEvent::Error {
                message: err.to_string(),
            }),
        }
    }
}
