//! Startup splash: product mark, progress bar, boot messages.

use eframe::egui::{self, RichText};

use crate::ui::theme;

const BOOT_MESSAGES: [(f32, &str); 5] = [
    (10.0, "Loading core modules..."),
    (30.0, "Initializing security protocols..."),
    (50.0, "Connecting to secure network..."),
    (70.0, "Verifying system integrity..."),
    (90.0, "Preparing desktop..."),
];

pub fn draw_loading(ctx: &egui::Context, progress: f32) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(theme::SPLASH_BG))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.25);
                ui.label(RichText::new("FOG").size(64.0).strong().color(theme::ACCENT));
                ui.label(RichText::new("SECURITY SUITE").size(13.0).color(theme::TEXT_DIM));
                ui.add_space(40.0);

                ui.add(
                    egui::ProgressBar::new(progress / 100.0)
                        .desired_width(420.0)
                        .text(format!("Initializing system... {}%", progress.round() as u32)),
                );
                ui.add_space(40.0);

                for (threshold, message) in BOOT_MESSAGES {
                    if progress > threshold {
                        ui.label(RichText::new(message).monospace().small().color(theme::TEXT_DIM));
                    }
                }
            });
        });
}
