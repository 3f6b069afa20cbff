//! Head pose supplied by the host once per frame.
//!
//! Yaw follows the engine convention: degrees clockwise around +Y seen from
//! above, with 0 looking down +Z. The pose is read-only input to the core;
//! the mutating helpers exist for hosts that simulate head tracking.

use glam::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewer {
    pub position: Vec3,
    pub yaw_degrees: f32,
}

impl Viewer {
    pub fn new(position: Vec3, yaw_degrees: f32) -> Self {
        Self {
            position,
            yaw_degrees,
        }
    }

    /// Unit heading on the floor plane.
    pub fn forward(&self) -> Vec3 {
        let yaw = self.yaw_degrees.to_radians();
        Vec3::new(yaw.sin(), 0.0, yaw.cos())
    }

    /// Rotate by `degrees`, keeping yaw in `[0, 360)` like engine euler angles.
    pub fn turn(&mut self, degrees: f32) {
        self.yaw_degrees = (self.yaw_degrees + degrees).rem_euclid(360.0);
    }

    /// Move `meters` along the current heading.
    pub fn advance(&mut self, meters: f32) {
        self.position += self.forward() * meters;
    }
}
