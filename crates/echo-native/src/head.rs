//! Keyboard stand-in for VR head tracking.

use echo_core::Viewer;
use glam::Vec3;
use winit::keyboard::KeyCode;

const TURN_DEG_PER_SEC: f32 = 90.0;
const WALK_M_PER_SEC: f32 = 2.0;
pub const EYE_HEIGHT: f32 = 1.6;

/// One-shot actions triggered by a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadCommand {
    Retarget,
}

#[derive(Default)]
struct HeldKeys {
    left: bool,
    right: bool,
    forward: bool,
    back: bool,
}

pub struct SimulatedHead {
    viewer: Viewer,
    held: HeldKeys,
    feed_enabled: bool,
}

impl SimulatedHead {
    pub fn new(floor_center: Vec3) -> Self {
        Self {
            viewer: Viewer::new(floor_center + Vec3::Y * EYE_HEIGHT, 0.0),
            held: HeldKeys::default(),
            feed_enabled: true,
        }
    }

    pub fn handle_key(
        &mut self,
        code: KeyCode,
        pressed: bool,
        repeat: bool,
    ) -> Option<HeadCommand> {
        match code {
            KeyCode::ArrowLeft => self.held.left = pressed,
            KeyCode::ArrowRight => self.held.right = pressed,
            KeyCode::ArrowUp => self.held.forward = pressed,
            KeyCode::ArrowDown => self.held.back = pressed,
            KeyCode::KeyV if pressed && !repeat => {
                self.feed_enabled = !self.feed_enabled;
                log::info!(
                    "head tracking feed {}",
                    if self.feed_enabled { "on" } else { "off" }
                );
            }
            KeyCode::KeyR if pressed && !repeat => return Some(HeadCommand::Retarget),
            _ => {}
        }
        None
    }

    pub fn update(&mut self, dt_sec: f32) {
        let turn = (self.held.right as i32 - self.held.left as i32) as f32;
        let walk = (self.held.forward as i32 - self.held.back as i32) as f32;
        if turn != 0.0 {
            self.viewer.turn(turn * TURN_DEG_PER_SEC * dt_sec);
        }
        if walk != 0.0 {
            self.viewer.advance(walk * WALK_M_PER_SEC * dt_sec);
        }
    }

    /// Current pose, or `None` while the feed is switched off.
    pub fn snapshot(&self) -> Option<Viewer> {
        self.feed_enabled.then_some(self.viewer)
    }
}
