//! Event bus between the session controller and the UI.
//!
//! Single-threaded (WASM), interior mutability via RefCell.
//! Events are buffered and drained by the UI on each frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use chat_types::event::ControllerEvent;

/// Shared event bus, clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<ControllerEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Queue an event. A transcript for a session replaces any copy of
    /// that session's transcript the UI has not drained yet.
    pub fn emit(&self, event: ControllerEvent) {
        let mut queue = self.inner.borrow_mut();
        if let ControllerEvent::TranscriptLoaded { session_id, .. } = &event {
            queue.retain(|queued| {
                !matches!(queued, ControllerEvent::TranscriptLoaded { session_id: older, .. } if older == session_id)
            });
        }
        queue.push_back(event);
    }

    /// Drain all pending events. Called by the UI layer each frame.
    pub fn drain(&self) -> Vec<ControllerEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// Whether the UI has anything to apply this frame
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
