//! Orbit camera
//!
//! The camera circles the board centre. Right-drag swings it around the board and tilts
//! it; the mouse wheel moves it closer or further away. Input only moves the targets.
//! Every frame the actual angles and distance close [`ORBIT_DAMPING`] of the remaining
//! gap, so the view eases to rest after the mouse stops.
//!
//! # Controls
//!
//! - **Right mouse drag**: orbit and tilt
//! - **Mouse wheel**: zoom, between [`MIN_DISTANCE`] and [`MAX_DISTANCE`] from the centre

use std::f32::consts::FRAC_PI_2;

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;

use crate::input::PointerOverUi;

/// Share of the remaining gap closed per frame
pub const ORBIT_DAMPING: f32 = 0.05;
pub const MIN_DISTANCE: f32 = 5.0;
pub const MAX_DISTANCE: f32 = 20.0;

/// Radians of orbit per pixel of mouse motion
pub const RADIANS_PER_DOT: f32 = 1.0 / 180.0;

/// Distance factor per wheel line
const ZOOM_STEP: f32 = 0.95;
/// Pixel-based wheels report roughly this many pixels per line
const PIXELS_PER_LINE: f32 = 100.0;

const MIN_ELEVATION: f32 = 0.05;
const MAX_ELEVATION: f32 = FRAC_PI_2 - 0.01;

/// Below this the eased values snap onto their targets
const SETTLE_EPSILON: f32 = 1e-4;

/// Camera orbiting a focus point
///
/// `yaw` is measured around the vertical axis, zero looking from +Z (White's side).
/// `elevation` is the angle above the board plane.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub yaw: f32,
    pub elevation: f32,
    pub distance: f32,
    pub target_yaw: f32,
    pub target_elevation: f32,
    pub target_distance: f32,
}

impl OrbitCamera {
    /// Orbit at rest with the camera at `position`, looking at `focus`
    pub fn looking_at(position: Vec3, focus: Vec3) -> Self {
        let offset = position - focus;
        let horizontal = Vec2::new(offset.x, offset.z).length();
        let yaw = offset.x.atan2(offset.z);
        let elevation = offset.y.atan2(horizontal).clamp(MIN_ELEVATION, MAX_ELEVATION);
        let distance = offset.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        Self {
            focus,
            yaw,
            elevation,
            distance,
            target_yaw: yaw,
            target_elevation: elevation,
            target_distance: distance,
        }
    }

    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_elev, cos_elev) = self.elevation.sin_cos();
        self.focus + self.distance * Vec3::new(cos_elev * sin_yaw, sin_elev, cos_elev * cos_yaw)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.focus, Vec3::Y)
    }

    /// Drag by `delta` pixels: right swings the camera left around the board, down
    /// raises it
    pub fn rotate(&mut self, delta: Vec2) {
        self.target_yaw -= delta.x * RADIANS_PER_DOT;
        self.target_elevation = (self.target_elevation + delta.y * RADIANS_PER_DOT)
            .clamp(MIN_ELEVATION, MAX_ELEVATION);
    }

    /// Zoom by wheel `lines`, positive moves closer
    pub fn zoom(&mut self, lines: f32) {
        self.target_distance =
            (self.target_distance * ZOOM_STEP.powf(lines)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn is_settled(&self) -> bool {
        self.yaw == self.target_yaw
            && self.elevation == self.target_elevation
            && self.distance == self.target_distance
    }

    /// One frame of damping
    pub fn ease(&mut self) {
        self.yaw = approach(self.yaw, self.target_yaw);
        self.elevation = approach(self.elevation, self.target_elevation);
        self.distance = approach(self.distance, self.target_distance);
    }
}

fn approach(current: f32, target: f32) -> f32 {
    let next = current + (target - current) * ORBIT_DAMPING;
    if (target - next).abs() < SETTLE_EPSILON {
        target
    } else {
        next
    }
}

pub fn orbit_camera_input(
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    buttons: Res<ButtonInput<MouseButton>>,
    over_ui: Res<PointerOverUi>,
    mut cameras: Query<&mut OrbitCamera>,
) {
    if over_ui.0 {
        return;
    }
    let dragging = buttons.pressed(MouseButton::Right) && mouse_motion.delta != Vec2::ZERO;
    let lines = match mouse_scroll.unit {
        MouseScrollUnit::Line => mouse_scroll.delta.y,
        MouseScrollUnit::Pixel => mouse_scroll.delta.y / PIXELS_PER_LINE,
    };

    for mut orbit in &mut cameras {
        if dragging {
            orbit.rotate(mouse_motion.delta);
        }
        if lines != 0.0 {
            orbit.zoom(lines);
        }
    }
}

/// Ease each orbit camera toward its targets and place it
pub fn orbit_camera_follow(mut cameras: Query<(&mut OrbitCamera, &mut Transform)>) {
    for (mut orbit, mut transform) in &mut cameras {
        if orbit.is_settled() {
            continue;
        }
        orbit.ease();
        *transform = orbit.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::camera::CAMERA_POSITION;

    fn settle(orbit: &mut OrbitCamera) -> usize {
        let mut frames = 0;
        while !orbit.is_settled() {
            orbit.ease();
            frames += 1;
            assert!(frames < 1_000, "orbit never settled");
        }
        frames
    }

    #[test]
    fn test_starts_at_camera_position() {
        let orbit = OrbitCamera::looking_at(CAMERA_POSITION, Vec3::ZERO);
        assert!(orbit.is_settled());
        assert!(orbit.position().distance(CAMERA_POSITION) < 1e-4);
        assert!((orbit.elevation - std::f32::consts::FRAC_PI_4).abs() < 1e-5);

        let transform = orbit.transform();
        assert!(transform.forward().dot((Vec3::ZERO - CAMERA_POSITION).normalize()) > 0.9999);
    }

    #[test]
    fn test_zoom_limits() {
        let mut orbit = OrbitCamera::looking_at(CAMERA_POSITION, Vec3::ZERO);
        orbit.zoom(200.0);
        assert_eq!(orbit.target_distance, MIN_DISTANCE);
        settle(&mut orbit);
        assert!((orbit.position().length() - MIN_DISTANCE).abs() < 1e-3);

        orbit.zoom(-200.0);
        assert_eq!(orbit.target_distance, MAX_DISTANCE);
        settle(&mut orbit);
        assert!((orbit.position().length() - MAX_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn test_damping_eases_toward_target() {
        //! The first frame covers a twentieth of the swing, the rest follows
        let mut orbit = OrbitCamera::looking_at(CAMERA_POSITION, Vec3::ZERO);
        orbit.rotate(Vec2::new(90.0, 0.0));
        let swing = orbit.target_yaw - orbit.yaw;
        assert!((swing + 0.5).abs() < 1e-5);

        orbit.ease();
        assert!((orbit.yaw - swing * ORBIT_DAMPING).abs() < 1e-5);

        let frames = settle(&mut orbit);
        assert!(frames > 50, "settled after {frames} frames");
        assert_eq!(orbit.yaw, orbit.target_yaw);
    }

    #[test]
    fn test_tilt_stays_above_board() {
        let mut orbit = OrbitCamera::looking_at(CAMERA_POSITION, Vec3::ZERO);
        orbit.rotate(Vec2::new(0.0, -10_000.0));
        assert_eq!(orbit.target_elevation, MIN_ELEVATION);
        orbit.rotate(Vec2::new(0.0, 10_000.0));
        assert_eq!(orbit.target_elevation, MAX_ELEVATION);

        settle(&mut orbit);
        assert!(orbit.position().y > 0.0);
    }
}
