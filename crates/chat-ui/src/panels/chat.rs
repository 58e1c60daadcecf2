//! Chat panel: active session header, transcript, and message input.

use egui::{self, Align, Key, Layout, Modifiers, RichText, ScrollArea, Vec2};
use crate::state::{ChatEntry, UiState};
use crate::theme::*;

/// Render the chat panel. Returns Some(message) when the user submits input.
///
/// Enter submits; Shift+Enter inserts a newline.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Session").color(TEXT_SECONDARY));
                    // &str buffers are read-only: selectable, not editable
                    let mut active_id = state.active_label();
                    ui.add(
                        egui::TextEdit::singleline(&mut active_id)
                            .id_salt("active_session_id")
                            .hint_text("No session selected")
                            .text_color(TEXT_PRIMARY)
                            .desired_width(280.0),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = if state.is_busy() { WARNING } else { SUCCESS };
                        ui.label(
                            RichText::new(&state.status_text)
                                .color(status_color)
                                .small(),
                        );
                    });
                });

                ui.separator();

                // Messages area
                let available_height = ui.available_height() - 80.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in &state.messages {
                            render_message(ui, entry);
                            ui.add_space(4.0);
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let input_id = ui.make_persistent_id("message_input");
                    let has_focus = ui.memory(|m| m.has_focus(input_id));
                    let shift = ui.input(|i| i.modifiers.shift);
                    let enter = has_focus
                        && !shift
                        && ui.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Enter));

                    let can_send = state.active.is_some();
                    let input = egui::TextEdit::multiline(&mut state.input_text)
                        .id(input_id)
                        .hint_text(if can_send {
                            "Type a message... (Shift+Enter for a newline)"
                        } else {
                            "Create or pick a session first"
                        })
                        .desired_rows(2)
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));
                    let response = ui.add(input);

                    let send_enabled = can_send && !state.input_text.trim().is_empty();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    if enter || send_btn.clicked() {
                        submitted = state.take_input();
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

fn render_message(ui: &mut egui::Ui, entry: &ChatEntry) {
    let (label, label_color) = role_style(&entry.role);
    let bg = if entry.role == "user" { BG_SURFACE } else { BG_SECONDARY };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).color(label_color).strong().small());
                if entry.echoed {
                    ui.label(RichText::new("sending").color(TEXT_SECONDARY).italics().small());
                }
            });
            ui.label(RichText::new(&entry.content).color(TEXT_PRIMARY));
        });
}
