//! System parameter groups for UI systems

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::core::{GameSettings, InitFailure};
use crate::game::GameSession;
use crate::input::PointerOverUi;

/// Everything the status panel reads or edits
#[derive(SystemParam)]
pub struct GameUIParams<'w, 's> {
    /// Egui contexts for UI rendering
    pub contexts: EguiContexts<'w, 's>,
    /// Absent until the session is set up, or if setup failed
    pub session: Option<Res<'w, GameSession>>,
    /// Hints toggle lives here
    pub settings: ResMut<'w, GameSettings>,
    pub init_failure: Option<Res<'w, InitFailure>>,
    pub pointer_over_ui: ResMut<'w, PointerOverUi>,
    pub exit: MessageWriter<'w, AppExit>,
}
