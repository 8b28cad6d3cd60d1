//! Output formatting for the window manager state.

use serde_json::Value;

use crate::window::WindowManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {s}. Use 'text' or 'json'.")),
        }
    }
}

pub fn print_state(wm: &WindowManager, format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", render_text(wm)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&render_json(wm)).unwrap_or_default()
        ),
    }
}

pub fn render_text(wm: &WindowManager) -> String {
    let mut out = String::new();
    let rule = "=".repeat(70);

    out.push_str(&format!("\n{rule}\nDESKTOP STATE\n{rule}\n"));

    let canvas = wm.canvas();
    out.push_str(&format!("\nCANVAS ({} visible, bottom to top):\n", canvas.len()));
    for view in &canvas {
        out.push_str(&format!(
            "  {} {:<12} {:<20} at ({:>6.1}, {:>6.1})  {:.0}x{:.0}\n",
            if view.active { "*" } else { " " },
            view.id,
            view.title,
            view.position.x,
            view.position.y,
            view.size.width,
            view.size.height,
        ));
    }

    out.push_str("\nTASKBAR:\n");
    for entry in wm.taskbar() {
        let status = if entry.active {
            "ACTIVE"
        } else if entry.minimized {
            "MINIMIZED"
        } else {
            "VISIBLE"
        };
        out.push_str(&format!("  [{status:<9}] {}\n", entry.title));
    }

    out.push_str(&format!(
        "\nACTIVE: {}\n{rule}\n",
        wm.active().unwrap_or("(none)")
    ));
    out
}

pub fn render_json(wm: &WindowManager) -> Value {
    serde_json::json!({
        "canvas": wm.canvas(),
        "taskbar": wm.taskbar(),
        "summary": {
            "visible": wm.canvas().len(),
            "minimized": wm.minimized_ids().count(),
            "active": wm.active(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DesktopLayout;

    fn desktop() -> WindowManager {
        WindowManager::from_layout(&DesktopLayout::default()).unwrap()
    }

    #[test]
    fn parse_output_format() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn json_summary_tracks_minimized_and_active() {
        let mut wm = desktop();
        wm.minimize("dashboard");
        wm.close("terminal");

        let json = render_json(&wm);
        assert_eq!(json["summary"]["visible"], 2);
        assert_eq!(json["summary"]["minimized"], 2);
        assert!(json["summary"]["active"].is_null());
        assert_eq!(json["taskbar"].as_array().unwrap().len(), 4);
        assert_eq!(json["canvas"][0]["id"], "database");
        assert_eq!(json["canvas"][0]["position"]["x"], 150.0);
    }

    #[test]
    fn text_lists_active_window_last_on_canvas() {
        let mut wm = desktop();
        wm.focus("settings");

        let text = render_text(&wm);
        let canvas_lines: Vec<&str> = text
            .lines()
            .skip_while(|l| !l.starts_with("CANVAS"))
            .skip(1)
            .take_while(|l| !l.is_empty())
            .collect();
        assert_eq!(canvas_lines.len(), 4);
        assert!(canvas_lines[3].contains("* settings"));
        assert!(text.contains("[ACTIVE   ] System Settings"));
        assert!(text.contains("ACTIVE: settings"));
    }
}
