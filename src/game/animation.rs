//! Move animation
//!
//! A moved piece flies along a quadratic Bezier curve from where it stands to the centre
//! of its destination. The control point sits above the horizontal midpoint at a fixed
//! arc height, so every move, short or long, is a hop of the same height.
//!
//! # Timing
//!
//! The flight is split into a fixed number of steps spread evenly over a fixed duration;
//! neither depends on the distance travelled. [`MoveAnimation::tick`] is fed frame time
//! and returns the position for the step reached. Once the step counter passes the last
//! step the frame is `finished` and the position is exactly the end point.

use bevy::prelude::*;

use crate::core::AnimationSettings;

/// `(1-t)²·p0 + 2(1-t)t·p1 + t²·p2`
pub fn quadratic_bezier(start: Vec3, control: Vec3, end: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    start * (u * u) + control * (2.0 * u * t) + end * (t * t)
}

/// Where the piece should be this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub position: Vec3,
    pub finished: bool,
}

/// One piece in flight
#[derive(Debug, Clone, PartialEq)]
pub struct MoveAnimation {
    start: Vec3,
    control: Vec3,
    end: Vec3,
    steps: u32,
    step_secs: f32,
    elapsed: f32,
}

impl MoveAnimation {
    pub fn new(start: Vec3, end: Vec3, settings: &AnimationSettings) -> Self {
        let steps = settings.steps.max(1);
        let mut control = (start + end) / 2.0;
        control.y = settings.arc_height;
        Self {
            start,
            control,
            end,
            steps,
            step_secs: settings.duration_secs.max(0.0) / steps as f32,
            elapsed: 0.0,
        }
    }

    pub fn control(&self) -> Vec3 {
        self.control
    }

    pub fn end(&self) -> Vec3 {
        self.end
    }

    /// Point on the path at `t` in `[0, 1]`
    pub fn sample(&self, t: f32) -> Vec3 {
        quadratic_bezier(self.start, self.control, self.end, t.clamp(0.0, 1.0))
    }

    /// Advance by `delta` seconds
    pub fn tick(&mut self, delta: f32) -> AnimationFrame {
        self.elapsed += delta.max(0.0);

        let step = if self.step_secs <= 0.0 {
            self.steps + 1
        } else {
            // A tiny step length saturates the cast; the step is then past the end anyway
            ((self.elapsed / self.step_secs).floor() as u32).saturating_add(1)
        };

        if step > self.steps {
            return AnimationFrame {
                position: self.end,
                finished: true,
            };
        }
        AnimationFrame {
            position: self.sample(step as f32 / self.steps as f32),
            finished: false,
        }
    }
}
