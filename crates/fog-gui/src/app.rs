//! Application state: which screen is showing and the desktop's windows.

use fog_core::intent::Intent;
use fog_core::window::WindowManager;

/// Splash progress gained per second, in percent.
const LOADING_RATE: f32 = 25.0;
/// How long the splash stays at 100% before the dashboard appears.
const SPLASH_HOLD_SECS: f32 = 0.5;

/// Application state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Dashboard,
    Settings,
    Processing,
    Completion,
    Desktop,
}

impl Screen {
    /// Screens reachable from the sidebar, in display order.
    pub const NAVIGATION: [Screen; 5] = [
        Screen::Dashboard,
        Screen::Settings,
        Screen::Processing,
        Screen::Completion,
        Screen::Desktop,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Loading => "Loading",
            Screen::Dashboard => "Dashboard",
            Screen::Settings => "Settings",
            Screen::Processing => "Run Scan",
            Screen::Completion => "Results",
            Screen::Desktop => "Desktop",
        }
    }
}

pub struct FogApp {
    pub screen: Screen,
    pub loading_progress: f32,
    splash_hold: f32,
    pub windows: WindowManager,
}

impl FogApp {
    pub fn new(windows: WindowManager, skip_splash: bool) -> Self {
        let (screen, loading_progress) = if skip_splash {
            (Screen::Dashboard, 100.0)
        } else {
            (Screen::Loading, 0.0)
        };
        Self {
            screen,
            loading_progress,
            splash_hold: 0.0,
            windows,
        }
    }

    /// Advance the splash by `dt` seconds. Called each frame while loading.
    pub fn advance_loading(&mut self, dt: f32) {
        if self.screen != Screen::Loading {
            return;
        }
        if self.loading_progress < 100.0 {
            self.loading_progress = (self.loading_progress + dt * LOADING_RATE).min(100.0);
            return;
        }
        self.splash_hold += dt;
        if self.splash_hold >= SPLASH_HOLD_SECS {
            log::info!("loading complete, showing dashboard");
            self.screen = Screen::Dashboard;
        }
    }

    /// Switch screens. The splash can neither be left early nor re-entered.
    pub fn navigate(&mut self, to: Screen) {
        if self.screen == Screen::Loading || to == Screen::Loading || to == self.screen {
            return;
        }
        // Leaving the desktop takes the pointer off its canvas.
        if self.screen == Screen::Desktop {
            self.dispatch(&Intent::EndDrag);
        }
        log::debug!("screen {:?} -> {:?}", self.screen, to);
        self.screen = to;
    }

    /// The only path by which the views change window state.
    pub fn dispatch(&mut self, intent: &Intent) {
        self.windows.apply(intent);
    }
}

impl eframe::App for FogApp {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        match self.screen {
            Screen::Loading => {
                let dt = ctx.input(|i| i.stable_dt);
                self.advance_loading(dt);
                ctx.request_repaint();
                crate::ui::loading::draw_loading(ctx, self.loading_progress);
            }
            Screen::Desktop => {
                crate::ui::sidebar::draw_sidebar(ctx, self);
                crate::ui::taskbar::draw_taskbar(ctx, self);
                crate::ui::desktop::draw_desktop(ctx, self);
            }
            Screen::Dashboard | Screen::Settings | Screen::Processing | Screen::Completion => {
                crate::ui::sidebar::draw_sidebar(ctx, self);
                crate::ui::screens::draw_status_bar(ctx);
                crate::ui::screens::draw_screen(ctx, self);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fog_core::config::DesktopLayout;

    fn app(skip_splash: bool) -> FogApp {
        let windows = WindowManager::from_layout(&DesktopLayout::default()).unwrap();
        FogApp::new(windows, skip_splash)
    }

    #[test]
    fn splash_reaches_dashboard_after_hold() {
        let mut app = app(false);
        assert_eq!(app.screen, Screen::Loading);

        app.advance_loading(2.0);
        assert_eq!(app.loading_progress, 50.0);

        app.advance_loading(10.0);
        assert_eq!(app.loading_progress, 100.0);
        assert_eq!(app.screen, Screen::Loading);

        app.advance_loading(0.25);
        assert_eq!(app.screen, Screen::Loading);
        app.advance_loading(0.25);
        assert_eq!(app.screen, Screen::Dashboard);
    }

    #[test]
    fn skip_splash_starts_on_dashboard() {
        let app = app(true);
        assert_eq!(app.screen, Screen::Dashboard);
    }

    #[test]
    fn navigation_follows_scan_flow() {
        let mut app = app(true);
        app.navigate(Screen::Processing);
        assert_eq!(app.screen, Screen::Processing);
        app.navigate(Screen::Completion);
        assert_eq!(app.screen, Screen::Completion);
        app.navigate(Screen::Settings);
        assert_eq!(app.screen, Screen::Settings);
        app.navigate(Screen::Desktop);
        assert_eq!(app.screen, Screen::Desktop);
        app.navigate(Screen::Dashboard);
        assert_eq!(app.screen, Screen::Dashboard);
    }

    #[test]
    fn navigation_is_ignored_while_loading() {
        let mut app = app(false);
        app.navigate(Screen::Settings);
        assert_eq!(app.screen, Screen::Loading);
    }

    #[test]
    fn splash_cannot_be_reentered() {
        let mut app = app(true);
        app.navigate(Screen::Loading);
        assert_eq!(app.screen, Screen::Dashboard);
    }

    #[test]
    fn leaving_desktop_ends_drag() {
        let mut app = app(true);
        app.navigate(Screen::Desktop);
        app.dispatch(&Intent::BeginDrag { id: "terminal".into(), x: 210.0, y: 160.0 });
        assert_eq!(app.windows.dragging(), Some("terminal"));

        app.navigate(Screen::Completion);
        assert_eq!(app.windows.dragging(), None);
        assert_eq!(app.screen, Screen::Completion);
    }

    #[test]
    fn dispatch_goes_through_window_manager() {
        let mut app = app(true);
        app.dispatch(&Intent::Minimize { id: "dashboard".into() });
        assert_eq!(app.windows.active(), None);

        app.dispatch(&Intent::SelectFromTaskbar { id: "dashboard".into() });
        assert_eq!(app.windows.active(), Some("dashboard"));
    }
}
