//! Window manager for the desktop shell: focus, minimize, drag and z-order.
//!
//! The manager owns the only copy of the desktop state. The canvas and the
//! taskbar read it through [`WindowManager::canvas`] and
//! [`WindowManager::taskbar`] and send changes back as [`Intent`]s.
//!
//! Operations naming a window outside the fixed set are ignored and logged.

use std::collections::BTreeSet;
use std::ops::Sub;

use anyhow::{Result, bail};
use serde::Serialize;

use crate::config::DesktopLayout;
use crate::intent::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub id: String,
    pub title: String,
    pub position: Point,
    pub size: Size,
}

/// Per-window state as seen by the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    VisibleInactive,
    VisibleActive,
    Minimized,
}

/// An in-progress title-bar drag.
///
/// Stands in for the global pointer-move/pointer-up listeners: it exists
/// from `begin_drag` until the manager drops it, and every path that ends
/// a drag does so by dropping this value.
#[derive(Debug)]
pub struct DragSession {
    window_id: String,
    offset: Point,
}

impl DragSession {
    pub fn window_id(&self) -> &str {
        &self.window_id
    }
}

impl Drop for DragSession {
    fn drop(&mut self) {
        log::trace!("drag session released for {}", self.window_id);
    }
}

/// A window as painted on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowView {
    pub id: String,
    pub title: String,
    pub position: Point,
    pub size: Size,
    pub active: bool,
}

/// A taskbar button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskbarEntry {
    pub id: String,
    pub title: String,
    pub active: bool,
    pub minimized: bool,
}

#[derive(Debug)]
pub struct WindowManager {
    windows: Vec<Window>,
    active: Option<String>,
    minimized: BTreeSet<String>,
    drag: Option<DragSession>,
}

impl WindowManager {
    /// Build the manager from a layout. All windows start visible with
    /// the layout's default window focused.
    pub fn from_layout(layout: &DesktopLayout) -> Result<Self> {
        if layout.windows.is_empty() {
            bail!("layout defines no windows");
        }

        let mut windows: Vec<Window> = Vec::with_capacity(layout.windows.len());
        for spec in &layout.windows {
            if windows.iter().any(|w| w.id == spec.id) {
                bail!("duplicate window id {:?} in layout", spec.id);
            }
            if spec.width < 0.0 || spec.height < 0.0 {
                bail!("window {:?} has a negative size", spec.id);
            }
            windows.push(Window {
                id: spec.id.clone(),
                title: spec.title.clone(),
                position: Point::new(spec.x, spec.y),
                size: Size {
                    width: spec.width,
                    height: spec.height,
                },
            });
        }

        if !windows.iter().any(|w| w.id == layout.default_active) {
            bail!(
                "default active window {:?} is not in the layout",
                layout.default_active
            );
        }

        Ok(Self {
            windows,
            active: Some(layout.default_active.clone()),
            minimized: BTreeSet::new(),
            drag: None,
        })
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn window(&self, id: &str) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn is_minimized(&self, id: &str) -> bool {
        self.minimized.contains(id)
    }

    pub fn minimized_ids(&self) -> impl Iterator<Item = &str> {
        self.minimized.iter().map(String::as_str)
    }

    pub fn state_of(&self, id: &str) -> Option<WindowState> {
        self.window(id)?;
        Some(if self.is_minimized(id) {
            WindowState::Minimized
        } else if self.is_active(id) {
            WindowState::VisibleActive
        } else {
            WindowState::VisibleInactive
        })
    }

    /// Id of the window being dragged, if any.
    pub fn dragging(&self) -> Option<&str> {
        self.drag.as_ref().map(DragSession::window_id)
    }

    /// Dispatch an intent coming from a view.
    pub fn apply(&mut self, intent: &Intent) {
        match intent {
            Intent::Focus { id } => self.focus(id),
            Intent::Minimize { id } => self.minimize(id),
            Intent::Close { id } => self.close(id),
            Intent::SelectFromTaskbar { id } => self.select_from_taskbar(id),
            Intent::BeginDrag { id, x, y } => self.begin_drag(id, Point::new(*x, *y)),
            Intent::UpdateDrag { x, y } => self.update_drag(Point::new(*x, *y)),
            Intent::EndDrag => self.end_drag(),
        }
    }

    /// Raise and focus a window, restoring it if it was minimized.
    pub fn focus(&mut self, id: &str) {
        let Some(idx) = self.lookup("focus", id) else {
            return;
        };

        // The dragged window losing focus ends its drag.
        if self.dragging().is_some_and(|dragged| dragged != id) {
            self.end_drag();
        }

        if self.minimized.remove(id) {
            log::debug!("restored {id}");
        }
        if !self.is_active(id) {
            log::debug!("focus {:?} -> {id}", self.active);
            self.active = Some(self.windows[idx].id.clone());
        }
    }

    /// Hide a window. Focus is cleared, not handed to another window.
    pub fn minimize(&mut self, id: &str) {
        self.hide("minimize", id);
    }

    /// Same as [`minimize`](Self::minimize): the window stays in the
    /// taskbar and can be brought back with `select_from_taskbar`.
    pub fn close(&mut self, id: &str) {
        self.hide("close", id);
    }

    pub fn select_from_taskbar(&mut self, id: &str) {
        self.focus(id);
    }

    /// Start dragging `id`, remembering where the pointer grabbed it.
    pub fn begin_drag(&mut self, id: &str, pointer: Point) {
        let Some(idx) = self.lookup("begin_drag", id) else {
            return;
        };
        if self.is_minimized(id) {
            log::debug!("begin_drag: {id} is minimized, ignoring");
            return;
        }

        let window = &self.windows[idx];
        self.drag = Some(DragSession {
            window_id: window.id.clone(),
            offset: pointer - window.position,
        });
        log::debug!("drag started for {id}");
    }

    /// Move the dragged window so the grab point follows the pointer.
    pub fn update_drag(&mut self, pointer: Point) {
        let Some(session) = &self.drag else {
            return;
        };
        if let Some(window) = self.windows.iter_mut().find(|w| w.id == session.window_id) {
            window.position = pointer - session.offset;
        }
    }

    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            log::debug!("drag ended");
        }
    }

    /// Visible windows in paint order: inactive ones in layout order,
    /// then the active window on top.
    pub fn canvas(&self) -> Vec<WindowView> {
        let visible = |w: &&Window| !self.is_minimized(&w.id);
        let view = |w: &Window| WindowView {
            id: w.id.clone(),
            title: w.title.clone(),
            position: w.position,
            size: w.size,
            active: self.is_active(&w.id),
        };

        let mut views: Vec<WindowView> = self
            .windows
            .iter()
            .filter(visible)
            .filter(|w| !self.is_active(&w.id))
            .map(view)
            .collect();
        if let Some(top) = self.windows.iter().filter(visible).find(|w| self.is_active(&w.id)) {
            views.push(view(top));
        }
        views
    }

    /// Every window, minimized or not, in layout order.
    pub fn taskbar(&self) -> Vec<TaskbarEntry> {
        self.windows
            .iter()
            .map(|w| TaskbarEntry {
                id: w.id.clone(),
                title: w.title.clone(),
                active: self.is_active(&w.id),
                minimized: self.is_minimized(&w.id),
            })
            .collect()
    }

    fn hide(&mut self, op: &str, id: &str) {
        let Some(idx) = self.lookup(op, id) else {
            return;
        };

        if self.dragging() == Some(id) {
            self.end_drag();
        }
        if self.is_active(id) {
            self.active = None;
        }
        if self.minimized.insert(self.windows[idx].id.clone()) {
            log::debug!("{op} {id}");
        }
    }

    fn lookup(&self, op: &str, id: &str) -> Option<usize> {
        let idx = self.windows.iter().position(|w| w.id == id);
        if idx.is_none() {
            log::warn!("{op}: unknown window {id:?}, ignoring");
        }
        idx
    }
}
