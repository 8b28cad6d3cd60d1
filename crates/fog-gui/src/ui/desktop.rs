//! Desktop canvas: icons, windows in paint order, title-bar dragging.
//!
//! Nothing here writes to the window manager directly. Pointer and click
//! events are collected as intents during the frame and dispatched once
//! drawing is done.

use eframe::egui::{self, Align2, FontId, Id, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use fog_core::intent::Intent;
use fog_core::window::WindowView;

use crate::app::FogApp;
use crate::ui::theme;

const TITLE_BAR_HEIGHT: f32 = 36.0;
const TITLE_BUTTON_SIZE: Vec2 = Vec2::new(28.0, 24.0);
const CORNER: f32 = 8.0;

/// Desktop shortcuts. `projects` has no window of its own.
const DESKTOP_ICONS: [(&str, &str); 4] = [
    ("database", "Database"),
    ("settings", "Settings"),
    ("terminal", "Terminal"),
    ("projects", "Projects"),
];

pub fn draw_desktop(ctx: &egui::Context, app: &mut FogApp) {
    let mut intents = Vec::new();
    let dragging = app.windows.dragging().is_some();

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(theme::DESKTOP_BG))
        .show(ctx, |ui| {
            let canvas = ui.max_rect();

            draw_icons(ui, canvas, &mut intents);
            for view in app.windows.canvas() {
                draw_window(ui, canvas.min, &view, &mut intents);
            }

            if dragging {
                track_drag(ui, canvas, &mut intents);
            }
        });

    for intent in &intents {
        app.dispatch(intent);
    }
}

fn draw_icons(ui: &mut egui::Ui, canvas: Rect, intents: &mut Vec<Intent>) {
    let size = Vec2::new(88.0, 56.0);
    for (i, (id, label)) in DESKTOP_ICONS.iter().enumerate() {
        let min = canvas.min + Vec2::new(16.0, 16.0 + i as f32 * (size.y + 16.0));
        let button = egui::Button::new(*label).frame(false);
        if ui.put(Rect::from_min_size(min, size), button).clicked() {
            intents.push(Intent::Focus { id: (*id).into() });
        }
    }
}

fn draw_window(ui: &mut egui::Ui, origin: Pos2, view: &WindowView, intents: &mut Vec<Intent>) {
    let rect = Rect::from_min_size(
        origin + Vec2::new(view.position.x, view.position.y),
        Vec2::new(view.size.width, view.size.height),
    );
    let title_rect = Rect::from_min_max(rect.min, Pos2::new(rect.max.x, rect.min.y + TITLE_BAR_HEIGHT));

    let (body_fill, title_fill, border) = if view.active {
        (theme::BODY_ACTIVE, theme::TITLE_ACTIVE, theme::BORDER_ACTIVE)
    } else {
        (theme::BODY_INACTIVE, theme::TITLE_INACTIVE, theme::BORDER_INACTIVE)
    };

    let body = ui.interact(rect, Id::new(("window", &view.id)), Sense::click());

    let painter = ui.painter();
    painter.rect_filled(rect, Rounding::same(CORNER), body_fill);
    painter.rect_filled(
        title_rect,
        Rounding {
            nw: CORNER,
            ne: CORNER,
            sw: 0.0,
            se: 0.0,
        },
        title_fill,
    );
    painter.rect_stroke(rect, Rounding::same(CORNER), Stroke::new(1.0, border));
    painter.text(
        title_rect.left_center() + Vec2::new(12.0, 0.0),
        Align2::LEFT_CENTER,
        &view.title,
        FontId::proportional(14.0),
        theme::TEXT,
    );

    let title = ui.interact(title_rect, Id::new(("title", &view.id)), Sense::click_and_drag());
    if title.drag_started() {
        if let Some(pointer) = title.interact_pointer_pos() {
            let local = pointer - origin;
            intents.push(Intent::Focus { id: view.id.clone() });
            intents.push(Intent::BeginDrag {
                id: view.id.clone(),
                x: local.x,
                y: local.y,
            });
        }
    } else if title.clicked() || body.clicked() {
        intents.push(Intent::Focus { id: view.id.clone() });
    }

    // Right to left: close, maximize, minimize.
    let button_rect = |slot: f32| {
        let max = Pos2::new(
            title_rect.max.x - 6.0 - slot * TITLE_BUTTON_SIZE.x,
            title_rect.center().y + TITLE_BUTTON_SIZE.y / 2.0,
        );
        Rect::from_min_max(max - TITLE_BUTTON_SIZE, max)
    };
    if ui.put(button_rect(0.0), egui::Button::new("✕").frame(false)).clicked() {
        intents.push(Intent::Close { id: view.id.clone() });
    }
    // Maximize does nothing on this desktop.
    ui.put(button_rect(1.0), egui::Button::new("□").frame(false));
    if ui.put(button_rect(2.0), egui::Button::new("—").frame(false)).clicked() {
        intents.push(Intent::Minimize { id: view.id.clone() });
    }

    let content_rect = Rect::from_min_max(Pos2::new(rect.min.x, title_rect.max.y), rect.max).shrink(12.0);
    ui.allocate_new_ui(egui::UiBuilder::new().max_rect(content_rect), |ui| {
        ui.set_clip_rect(content_rect);
        draw_content(ui, view);
    });
}

fn draw_content(ui: &mut egui::Ui, view: &WindowView) {
    // Labels must not swallow the click that focuses the window.
    let text = |ui: &mut egui::Ui, rich: egui::RichText| {
        ui.add(egui::Label::new(rich).selectable(false));
    };

    text(ui, egui::RichText::new(&view.title).heading().color(theme::CYAN));
    ui.add_space(4.0);
    text(
        ui,
        egui::RichText::new(format!(
            "{:.0} x {:.0} at ({:.0}, {:.0})",
            view.size.width, view.size.height, view.position.x, view.position.y
        ))
        .monospace()
        .color(theme::TEXT_DIM),
    );
    if view.active {
        text(ui, egui::RichText::new("Focused").small());
    }
}

/// Follow the pointer while a drag is live. Releasing the button, moving
/// off the canvas or the viewport losing focus all end the drag.
fn track_drag(ui: &egui::Ui, canvas: Rect, intents: &mut Vec<Intent>) {
    let (down, pointer, focused) =
        ui.input(|i| (i.pointer.primary_down(), i.pointer.latest_pos(), i.focused));

    match pointer {
        Some(p) if down && focused && canvas.contains(p) => {
            let local = p - canvas.min;
            intents.push(Intent::UpdateDrag {
                x: local.x,
                y: local.y,
            });
        }
        _ => intents.push(Intent::EndDrag),
    }
}
