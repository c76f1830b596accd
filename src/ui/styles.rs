//! Color palette for the status panel
//!
//! Colors are defined as egui::Color32 for direct use in UI code.

use bevy_egui::egui;

pub struct UiColors;

impl UiColors {
    /// Panel background (semi-transparent)
    pub const BG_OVERLAY: egui::Color32 = egui::Color32::from_black_alpha(200);

    /// Panel border
    pub const BORDER: egui::Color32 = egui::Color32::from_rgb(70, 70, 80);

    /// Game over banner (gold)
    pub const ACCENT_GOLD: egui::Color32 = egui::Color32::from_rgb(218, 165, 32);

    /// Startup failure
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

    /// Headings, status line
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 240, 245);

    /// Move log, secondary lines
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(180, 180, 190);
}
