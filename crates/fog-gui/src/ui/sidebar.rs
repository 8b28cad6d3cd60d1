//! Left panel: product mark and navigation between the suite's screens.

use eframe::egui::{self, RichText};

use crate::app::{FogApp, Screen};
use crate::ui::theme;

pub fn draw_sidebar(ctx: &egui::Context, app: &mut FogApp) {
    let mut target = None;

    egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(200.0)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.add_space(8.0);
                ui.label(RichText::new("FOG SECURITY SUITE").strong().color(theme::ACCENT));
                ui.separator();

                ui.label(RichText::new("NAVIGATION").small().color(theme::TEXT_DIM));
                for screen in Screen::NAVIGATION {
                    let button = egui::Button::new(screen.label()).selected(app.screen == screen);
                    if ui
                        .add_sized([ui.available_width(), 28.0], button)
                        .clicked()
                    {
                        target = Some(screen);
                    }
                }
            });
        });

    if let Some(screen) = target {
        app.navigate(screen);
    }
}
