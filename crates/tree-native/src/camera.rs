use glam::{Mat4, Vec3};
use std::f32::consts::{FRAC_PI_2, TAU};
use tree_core::{
    Mode, AUTO_ROTATE_SPEED, CAMERA_DISTANCE, CAMERA_FOV_DEGREES, CAMERA_MAX_DISTANCE,
    CAMERA_MIN_DISTANCE,
};

const DRAG_RADIANS_PER_PIXEL: f32 = 0.005;
const ZOOM_PER_LINE: f32 = 0.95;
// keep away from the poles so look_at never sees a degenerate up vector
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Orbit camera around the origin: drag rotates, wheel zooms, tree mode drifts.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: CAMERA_DISTANCE,
        }
    }
}

impl OrbitCamera {
    /// Rotate by a pointer drag measured in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * DRAG_RADIANS_PER_PIXEL;
        self.pitch = (self.pitch + dy * DRAG_RADIANS_PER_PIXEL).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Positive `lines` zoom in.
    pub fn zoom(&mut self, lines: f32) {
        self.distance = (self.distance * ZOOM_PER_LINE.powf(lines))
            .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// Auto-rotate while the tree is standing; one orbit takes `60 / speed` seconds.
    pub fn update(&mut self, mode: Mode, delta: f32) {
        if mode.auto_rotate() {
            self.yaw += TAU / 60.0 * AUTO_ROTATE_SPEED * delta;
            self.yaw = self.yaw.rem_euclid(TAU);
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(sy * cp, sp, cy * cp) * self.distance
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(CAMERA_FOV_DEGREES.to_radians(), aspect, 0.1, 200.0);
        let view = Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y);
        proj * view
    }
}
