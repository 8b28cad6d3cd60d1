//! Dark desktop theme with cyan accents.

use eframe::egui::{self, Color32, Visuals};

pub const ACCENT: Color32 = Color32::from_rgb(0, 120, 215);
pub const CYAN: Color32 = Color32::from_rgb(34, 211, 238);
pub const DESKTOP_BG: Color32 = Color32::from_rgb(17, 24, 39);
pub const SPLASH_BG: Color32 = Color32::from_rgb(30, 30, 30);
pub const TITLE_ACTIVE: Color32 = Color32::from_rgb(31, 41, 55);
pub const TITLE_INACTIVE: Color32 = Color32::from_rgb(45, 52, 64);
pub const BODY_ACTIVE: Color32 = Color32::from_rgb(17, 24, 39);
pub const BODY_INACTIVE: Color32 = Color32::from_rgb(24, 30, 44);
pub const BORDER_ACTIVE: Color32 = Color32::from_rgb(22, 120, 140);
pub const BORDER_INACTIVE: Color32 = Color32::from_rgb(55, 65, 81);
pub const TEXT: Color32 = Color32::from_rgb(229, 231, 235);
pub const TEXT_DIM: Color32 = Color32::from_rgb(156, 163, 175);
pub const STATUS_OK: Color32 = Color32::from_rgb(34, 197, 94);

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.override_text_color = Some(TEXT);
    visuals.selection.bg_fill = ACCENT;
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    ctx.set_style(style);
}
