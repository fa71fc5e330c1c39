//! Synthetic camera for headless runs.

use glam::{Mat4, Vec3};

/// A camera circling a target point at constant height and speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    /// Point the camera looks at.
    pub target: Vec3,
    /// Horizontal distance from the target.
    pub radius: f32,
    /// Height above the target.
    pub height: f32,
    /// Radians per second. Zero holds the camera still.
    pub angular_speed: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::new(0.0, 1.0, -7.0),
            radius: 12.0,
            height: 1.0,
            angular_speed: 0.25,
        }
    }
}

impl OrbitCamera {
    /// Eye position `seconds` into the orbit.
    #[must_use]
    pub fn eye(&self, seconds: f32) -> Vec3 {
        let angle = self.angular_speed * seconds;
        self.target + Vec3::new(angle.sin() * self.radius, self.height, angle.cos() * self.radius)
    }

    /// Right-handed view matrix `seconds` into the orbit.
    #[must_use]
    pub fn view(&self, seconds: f32) -> Mat4 {
        Mat4::look_at_rh(self.eye(seconds), self.target, Vec3::Y)
    }
}
