//! Session sidebar: "New chat" plus one row per session with
//! select, rename, and delete.

use egui::{self, Align, Layout, RichText, ScrollArea, Sense, Vec2};
use chat_types::session::SessionId;
use crate::state::UiState;
use crate::theme::*;

/// What the user asked for in the sidebar this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    NewChat,
    Select(SessionId),
    Rename(SessionId),
    Delete(SessionId),
}

/// Render the session sidebar. Returns at most one action per frame.
pub fn sessions_panel(ui: &mut egui::Ui, state: &UiState) -> Option<SessionAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_SIDEBAR)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            let new_chat = ui.add_sized(
                Vec2::new(ui.available_width(), 32.0),
                egui::Button::new(RichText::new("+ New chat").color(TEXT_PRIMARY).strong())
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING),
            );
            if new_chat.clicked() {
                action = Some(SessionAction::NewChat);
            }

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Sessions ({})", state.sessions.len()))
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            ui.separator();

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if state.sessions.is_empty() {
                        ui.label(
                            RichText::new("No sessions yet")
                                .color(TEXT_SECONDARY)
                                .italics(),
                        );
                    }
                    for id in &state.sessions {
                        if let Some(a) = session_row(ui, id, state.is_active(id)) {
                            action = Some(a);
                        }
                        ui.add_space(2.0);
                    }
                });
        });

    action
}

fn session_row(ui: &mut egui::Ui, id: &SessionId, active: bool) -> Option<SessionAction> {
    let mut action = None;
    let fill = if active { BG_SURFACE } else { BG_SECONDARY };

    egui::Frame::default()
        .fill(fill)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .small_button(RichText::new("🗑").color(ERROR))
                        .on_hover_text("Delete session")
                        .clicked()
                    {
                        action = Some(SessionAction::Delete(id.clone()));
                    }
                    if ui
                        .small_button(RichText::new("✏").color(TEXT_SECONDARY))
                        .on_hover_text("Rename session")
                        .clicked()
                    {
                        action = Some(SessionAction::Rename(id.clone()));
                    }
                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                        let color = if active { TEXT_PRIMARY } else { TEXT_SECONDARY };
                        let name = ui.add(
                            egui::Label::new(RichText::new(id.as_str()).color(color))
                                .wrap()
                                .sense(Sense::click()),
                        );
                        if name.on_hover_text("Open session").clicked() {
                            action = Some(SessionAction::Select(id.clone()));
                        }
                    });
                });
            });
        });

    action
}
