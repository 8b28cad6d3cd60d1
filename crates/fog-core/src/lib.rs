//! fog-core — shared library for the FOG Security Suite desktop shell.
//!
//! Provides the window manager state, layout loading, input intents
//! and state reporting used by both the GUI and the replay CLI.

pub mod config;
pub mod intent;
pub mod report;
pub mod window;
