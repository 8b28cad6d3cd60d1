//! Desktop layout: the fixed set of windows and where they start.
//!
//! A layout can be loaded from JSON; otherwise the built-in default
//! provides the four windows of the stock desktop:
//! - dashboard (active at startup)
//! - database
//! - terminal
//! - settings

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Initial placement of one window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindowSpec {
    pub id: String,
    pub title: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl WindowSpec {
    fn new(id: &str, title: &str, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DesktopLayout {
    pub default_active: String,
    pub windows: Vec<WindowSpec>,
}

impl Default for DesktopLayout {
    fn default() -> Self {
        Self {
            default_active: "dashboard".into(),
            windows: vec![
                WindowSpec::new("dashboard", "System Dashboard", 100.0, 50.0, 800.0, 500.0),
                WindowSpec::new("database", "Database Explorer", 150.0, 100.0, 750.0, 480.0),
                WindowSpec::new("terminal", "Terminal", 200.0, 150.0, 700.0, 400.0),
                WindowSpec::new("settings", "System Settings", 250.0, 120.0, 650.0, 450.0),
            ],
        }
    }
}

pub fn load_layout(path: &Path) -> Result<DesktopLayout> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading layout {}", path.display()))?;
    let layout: DesktopLayout = serde_json::from_str(&data)
        .with_context(|| format!("parsing layout {}", path.display()))?;
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_layout_matches_stock_desktop() {
        let layout = DesktopLayout::default();
        let ids: Vec<_> = layout.windows.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["dashboard", "database", "terminal", "settings"]);
        assert_eq!(layout.default_active, "dashboard");

        let terminal = &layout.windows[2];
        assert_eq!((terminal.x, terminal.y), (200.0, 150.0));
        assert_eq!((terminal.width, terminal.height), (700.0, 400.0));
    }

    #[test]
    fn load_layout_from_json() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"{{
                "default_active": "scanner",
                "windows": [
                    {{ "id": "scanner", "title": "Scanner", "x": 10, "y": 20, "width": 300, "height": 200 }}
                ]
            }}"#
        )
        .unwrap();
        tmp.flush().unwrap();

        let layout = load_layout(tmp.path()).unwrap();
        assert_eq!(layout.default_active, "scanner");
        assert_eq!(
            layout.windows,
            vec![WindowSpec::new("scanner", "Scanner", 10.0, 20.0, 300.0, 200.0)]
        );
    }

    #[test]
    fn demo_layout_builds_a_desktop() {
        use crate::window::WindowManager;

        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/layout.json");
        let layout = load_layout(&path).unwrap();
        let wm = WindowManager::from_layout(&layout).unwrap();

        assert_eq!(wm.active(), Some("scanner"));
        assert_eq!(wm.windows().len(), 3);
        assert_eq!(wm.canvas().last().unwrap().id, "scanner");
    }

    #[test]
    fn load_layout_not_found() {
        let result = load_layout(Path::new("/nonexistent/layout.json"));
        assert!(result.is_err());
    }

    #[test]
    fn load_layout_rejects_malformed_json() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"{ \"windows\": ").unwrap();
        tmp.flush().unwrap();

        let err = load_layout(tmp.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing layout"));
    }
}
