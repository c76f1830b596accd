//! Scene camera and lights
//!
//! The camera starts above White's side of the board, looking down at its centre, and
//! orbits from there (see [`super::orbit`]). Ambient light rides on the camera; a
//! directional and an overhead point light sit in the scene.

use bevy::prelude::*;

use super::orbit::OrbitCamera;
use crate::core::GameState;

/// Camera position, looking at the origin
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 10.0, 10.0);

/// Sky blue background
pub const SKY_COLOR: Color = Color::srgb(0.529, 0.808, 0.922);

#[derive(Component)]
pub struct SceneCamera;

pub fn setup_scene_camera(mut commands: Commands) {
    let orbit = OrbitCamera::looking_at(CAMERA_POSITION, Vec3::ZERO);
    commands.spawn((
        Camera3d::default(),
        orbit.transform(),
        orbit,
        AmbientLight {
            color: Color::WHITE,
            brightness: 300.0,
            ..default()
        },
        SceneCamera,
        Name::new("Scene Camera"),
        DespawnOnExit(GameState::InGame),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Directional Light"),
        DespawnOnExit(GameState::InGame),
    ));

    commands.spawn((
        PointLight {
            intensity: 1_000_000.0,
            range: 40.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 8.0, 0.0),
        Name::new("Overhead Light"),
        DespawnOnExit(GameState::InGame),
    ));

    info!(
        "[CAMERA] Scene camera at {:?} looking at the board centre",
        CAMERA_POSITION
    );
}
