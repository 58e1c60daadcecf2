//! Error banner shown above the chat panel until dismissed.

use egui::{self, Align, Layout, RichText};
use crate::state::UiState;
use crate::theme::*;

pub fn status_banner(ui: &mut egui::Ui, state: &mut UiState) {
    let Some(message) = state.banner.clone() else {
        return;
    };

    egui::Frame::default()
        .fill(BG_ERROR)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Error").color(ERROR).strong());
                ui.label(RichText::new(&message).color(TEXT_PRIMARY));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.small_button("Dismiss").clicked() {
                        state.dismiss_banner();
                    }
                });
            });
        });
}
