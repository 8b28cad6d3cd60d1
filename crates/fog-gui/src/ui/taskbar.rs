//! Bottom panel: start badge, one button per window, status and clock.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use eframe::egui::{self, RichText};

use fog_core::intent::Intent;

use crate::app::FogApp;
use crate::ui::theme;

pub fn draw_taskbar(ctx: &egui::Context, app: &mut FogApp) {
    let mut selected = None;

    egui::TopBottomPanel::bottom("taskbar")
        .exact_height(48.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(RichText::new(" F ").strong().background_color(theme::CYAN));
                ui.separator();

                for entry in app.windows.taskbar() {
                    let color = if entry.minimized { theme::TEXT_DIM } else { theme::TEXT };
                    let button = egui::Button::new(RichText::new(&entry.title).color(color))
                        .selected(entry.active);
                    if ui.add(button).clicked() {
                        selected = Some(entry.id);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(clock_utc()).small());
                    ui.label(RichText::new("Connected").small());
                    ui.label(RichText::new("●").color(theme::STATUS_OK));
                });
            });
        });

    // Keep the clock ticking while idle.
    ctx.request_repaint_after(Duration::from_secs(1));

    if let Some(id) = selected {
        app.dispatch(&Intent::SelectFromTaskbar { id });
    }
}

fn clock_utc() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let minutes = secs / 60 % 60;
    let hours = secs / 3600 % 24;
    format!("{hours:02}:{minutes:02} UTC")
}
