//! Requested state changes sent from the views to the window manager.
//!
//! Scripts for the replay CLI are JSON arrays of intents, one object per
//! event, tagged by `op`:
//!
//! ```json
//! [
//!   { "op": "begin_drag", "id": "terminal", "x": 250, "y": 160 },
//!   { "op": "update_drag", "x": 400, "y": 300 },
//!   { "op": "end_drag" },
//!   { "op": "minimize", "id": "dashboard" }
//! ]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Intent {
    Focus { id: String },
    Minimize { id: String },
    Close { id: String },
    SelectFromTaskbar { id: String },
    BeginDrag { id: String, x: f32, y: f32 },
    UpdateDrag { x: f32, y: f32 },
    EndDrag,
}

pub fn parse_script(data: &str) -> Result<Vec<Intent>> {
    let intents: Vec<Intent> = serde_json::from_str(data)?;
    Ok(intents)
}

pub fn load_script(path: &Path) -> Result<Vec<Intent>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    parse_script(&data).with_context(|| format!("parsing script {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_every_op() {
        let json = serde_json::json!([
            { "op": "focus", "id": "database" },
            { "op": "minimize", "id": "database" },
            { "op": "close", "id": "settings" },
            { "op": "select_from_taskbar", "id": "settings" },
            { "op": "begin_drag", "id": "terminal", "x": 250, "y": 160.5 },
            { "op": "update_drag", "x": 400, "y": 300 },
            { "op": "end_drag" }
        ]);

        let intents = parse_script(&json.to_string()).unwrap();
        assert_eq!(
            intents,
            vec![
                Intent::Focus { id: "database".into() },
                Intent::Minimize { id: "database".into() },
                Intent::Close { id: "settings".into() },
                Intent::SelectFromTaskbar { id: "settings".into() },
                Intent::BeginDrag { id: "terminal".into(), x: 250.0, y: 160.5 },
                Intent::UpdateDrag { x: 400.0, y: 300.0 },
                Intent::EndDrag,
            ]
        );
    }

    #[test]
    fn unknown_op_is_rejected() {
        let json = serde_json::json!([{ "op": "maximize", "id": "terminal" }]);
        assert!(parse_script(&json.to_string()).is_err());
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = serde_json::json!([{ "op": "begin_drag", "id": "terminal", "x": 1 }]);
        assert!(parse_script(&json.to_string()).is_err());
    }

    #[test]
    fn load_script_from_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(br#"[{ "op": "focus", "id": "ghost" }, { "op": "end_drag" }]"#)
            .unwrap();
        tmp.flush().unwrap();

        let intents = load_script(tmp.path()).unwrap();
        assert_eq!(intents.len(), 2);
        assert_eq!(intents[0], Intent::Focus { id: "ghost".into() });
    }

    #[test]
    fn demo_session_replays() {
        use crate::config::DesktopLayout;
        use crate::window::{Point, WindowManager};

        let intents = parse_script(include_str!("../../../demos/session.json")).unwrap();
        let mut wm = WindowManager::from_layout(&DesktopLayout::default()).unwrap();
        for intent in &intents {
            wm.apply(intent);
        }

        assert_eq!(wm.active(), Some("terminal"));
        assert!(wm.is_minimized("database"));
        assert!(!wm.is_minimized("terminal"));
        assert_eq!(wm.window("terminal").unwrap().position, Point::new(370.0, 250.0));
    }

    #[test]
    fn load_script_not_found() {
        assert!(load_script(Path::new("/nonexistent/script.json")).is_err());
    }
}
