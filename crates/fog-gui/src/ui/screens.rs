//! Suite screens: dashboard, settings, scan and results, plus the status bar.
//!
//! Bodies are placeholders. Each screen carries the navigation buttons of
//! the product flow: run a scan from the dashboard, view the report or
//! cancel from the scan screen, go back or scan again from the results.

use eframe::egui::{self, RichText};

use crate::app::{FogApp, Screen};
use crate::ui::theme;

pub fn draw_status_bar(ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar")
        .exact_height(24.0)
        .frame(egui::Frame::none().fill(theme::ACCENT).inner_margin(egui::Margin::symmetric(12.0, 4.0)))
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(RichText::new("●").color(theme::STATUS_OK));
                ui.label(RichText::new("Protected").small());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("FOG Security Suite v{}", env!("CARGO_PKG_VERSION")))
                            .small(),
                    );
                });
            });
        });
}

pub fn draw_screen(ctx: &egui::Context, app: &mut FogApp) {
    let mut target = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(12.0);
        match app.screen {
            Screen::Dashboard => {
                header(ui, "Security Dashboard", "System overview and security status");
                if ui.button("Run Quick Scan").clicked() {
                    target = Some(Screen::Processing);
                }
            }
            Screen::Settings => {
                header(ui, "Settings", "Scan and protection preferences");
            }
            Screen::Processing => {
                header(ui, "Scan in Progress", "Checking files for threats");
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        target = Some(Screen::Dashboard);
                    }
                    if ui.button("View Report").clicked() {
                        target = Some(Screen::Completion);
                    }
                });
            }
            Screen::Completion => {
                header(ui, "Scan Complete", "Summary of the last scan");
                ui.horizontal(|ui| {
                    if ui.button("Back to Dashboard").clicked() {
                        target = Some(Screen::Dashboard);
                    }
                    if ui.button("Run Another Scan").clicked() {
                        target = Some(Screen::Processing);
                    }
                });
            }
            Screen::Loading | Screen::Desktop => {}
        }
    });

    if let Some(screen) = target {
        app.navigate(screen);
    }
}

fn header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.heading(RichText::new(title).size(24.0));
    ui.label(RichText::new(subtitle).color(theme::TEXT_DIM));
    ui.add_space(16.0);
}
