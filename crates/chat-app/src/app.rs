//! Main egui application: composes the panels and dispatches user actions
//! to the session controller.

use std::future::Future;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use chat_core::event_bus::EventBus;
use chat_core::ports::BackendPort;
use chat_core::controller::SessionController;
use chat_platform::backend::HttpBackend;
use chat_platform::browser;
use chat_types::config::ClientConfig;
use chat_types::session::SessionId;
use chat_ui::panels::sessions::SessionAction;
use chat_ui::panels::{chat, sessions, status};
use chat_ui::state::UiState;
use chat_ui::theme;

const API_BASE_META: &str = "chat-api-base";
const RENAME_PROMPT: &str = "Enter new session name:";

/// The main application state
pub struct ChatApp {
    ui_state: UiState,
    event_bus: EventBus,
    controller: SessionController,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = Self::load_config();
        let event_bus = EventBus::new();
        let backend: Rc<dyn BackendPort> = Rc::new(HttpBackend::new(config.clone()));
        let controller = SessionController::new(backend, config, event_bus.clone());

        let app = Self {
            ui_state: UiState::new(),
            event_bus,
            controller,
            first_frame: true,
        };

        let ctrl = app.controller.clone();
        app.spawn(&cc.egui_ctx, async move {
            if let Err(e) = ctrl.list_sessions().await {
                log::warn!("Initial session list failed: {}", e);
            }
        });

        app
    }

    /// API base from `<meta name="chat-api-base">`, same origin otherwise.
    fn load_config() -> ClientConfig {
        match browser::meta_content(API_BASE_META) {
            Some(base) => ClientConfig::with_api_base(base).unwrap_or_else(|e| {
                log::warn!("Ignoring {} meta tag: {}", API_BASE_META, e);
                ClientConfig::default()
            }),
            None => ClientConfig::default(),
        }
    }

    /// Run a controller operation in the background and repaint once it settles.
    fn spawn<F>(&self, ctx: &egui::Context, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            fut.await;
            ctx.request_repaint();
        });
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the controller
        if self.event_bus.has_pending() {
            self.ui_state.process_events(self.event_bus.drain());
            ctx.request_repaint();
        }

        for message in self.ui_state.take_alerts() {
            browser::alert(&message);
        }

        if self.controller.is_busy() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Session Chat")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                let base = match self.controller.config().api_base.as_str() {
                    "" => "same origin",
                    base => base,
                };
                ui.label(
                    RichText::new(format!("Backend: {}", base))
                        .color(theme::TEXT_SECONDARY)
                        .small(),
                );
            });
        });

        // ── Session sidebar ──────────────────────────────────
        let mut action = None;
        SidePanel::left("sessions_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .show(ctx, |ui| {
                action = sessions::sessions_panel(ui, &self.ui_state);
            });
        if let Some(action) = action {
            self.dispatch_session_action(action, ctx);
        }

        // ── Main content ─────────────────────────────────────
        let mut submitted = None;
        CentralPanel::default().show(ctx, |ui| {
            status::status_banner(ui, &mut self.ui_state);
            submitted = chat::chat_panel(ui, &mut self.ui_state);
        });
        if let Some(text) = submitted {
            self.dispatch_message(text, ctx);
        }
    }
}

impl ChatApp {
    fn dispatch_session_action(&self, action: SessionAction, ctx: &egui::Context) {
        let ctrl = self.controller.clone();
        match action {
            SessionAction::NewChat => self.spawn(ctx, async move {
                if let Err(e) = ctrl.create_session().await {
                    log::warn!("Create session failed: {}", e);
                }
            }),
            SessionAction::Select(id) => self.spawn(ctx, async move {
                if let Err(e) = ctrl.select_session(&id).await {
                    log::warn!("Select session {} failed: {}", id, e);
                }
            }),
            SessionAction::Rename(id) => self.dispatch_rename(id, ctx),
            SessionAction::Delete(id) => self.spawn(ctx, async move {
                if let Err(e) = ctrl.delete_session(&id).await {
                    log::warn!("Delete session {} failed: {}", id, e);
                }
            }),
        }
    }

    /// Ask for the new name synchronously, then rename in the background.
    fn dispatch_rename(&self, id: SessionId, ctx: &egui::Context) {
        let answer = browser::prompt(RENAME_PROMPT, id.as_str());
        let ctrl = self.controller.clone();
        self.spawn(ctx, async move {
            if let Err(e) = ctrl.rename_session(&id, answer.as_deref()).await {
                log::warn!("Rename session {} failed: {}", id, e);
            }
        });
    }

    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        let ctrl = self.controller.clone();
        self.spawn(ctx, async move {
            if let Err(e) = ctrl.send_message(&text).await {
                log::warn!("Send failed: {}", e);
            }
        });
    }
}
