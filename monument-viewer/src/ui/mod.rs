//! bevy_ui overlay for the viewer: control bar, info panel, loading screen.
//!
//! Panels are spawned as absolute-positioned node trees with marker
//! components; interaction systems translate button presses into
//! `ViewerCommandEvent`s and never mutate viewer state directly.

/// Bottom control bar: zoom out, zoom slider, zoom in, reset, fullscreen,
/// info toggle.
pub mod control_bar;

/// Monument info panel: name, location, period, description, facts.
pub mod info_panel;

/// Loading overlay with progress bar and percentage readout.
pub mod loading_screen;

use bevy::prelude::*;

/// Shared panel palette.
pub const PANEL_BACKGROUND: Color = Color::srgb(0.10, 0.11, 0.13);
pub const PANEL_SURFACE: Color = Color::srgb(0.14, 0.16, 0.20);
pub const BUTTON_BACKGROUND: Color = Color::srgb(0.22, 0.24, 0.28);
pub const BUTTON_HOVER: Color = Color::srgb(0.28, 0.31, 0.36);
pub const ACCENT: Color = Color::srgb(0.85, 0.62, 0.28);
pub const TEXT_PRIMARY: Color = Color::srgb(1.0, 1.0, 1.0);
pub const TEXT_MUTED: Color = Color::srgba(1.0, 1.0, 1.0, 0.65);
