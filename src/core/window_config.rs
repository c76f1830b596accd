//! Window configuration resource
//!
//! Centralizes window settings for the application so `main` can build the primary
//! window before `DefaultPlugins` is added.

use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowResolution};

/// Configuration for the primary application window
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Whether the window should be resizable
    pub resizable: bool,
    /// CSS selector of the canvas to render into (wasm builds)
    pub canvas: Option<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "chess3d".to_string(),
            width: 1280,
            height: 800,
            resizable: true,
            canvas: None,
        }
    }
}

impl WindowConfig {
    /// Create a Bevy Window from this configuration
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resizable: self.resizable,
            present_mode: PresentMode::AutoVsync,
            canvas: self.canvas.clone(),
            fit_canvas_to_parent: self.canvas.is_some(),
            ..default()
        }
    }
}
