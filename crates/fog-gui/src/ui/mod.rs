pub mod desktop;
pub mod loading;
pub mod screens;
pub mod sidebar;
pub mod taskbar;
pub mod theme;
