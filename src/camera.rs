//! Damped orbit camera.
//!
//! Pointer input mutates goal values only; `update` eases the live values
//! toward them each tick so interaction keeps a smooth, weighted feel even
//! after the pointer stops moving.

use glam::{Mat4, Vec3};

use crate::config;

pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
    target: Vec3,

    yaw_goal: f32,
    pitch_goal: f32,
    distance_goal: f32,
    target_goal: Vec3,

    aspect: f32,
}

impl OrbitCamera {
    /// Camera looking at the origin from the configured start eye.
    pub fn new(aspect: f32) -> Self {
        let start = Vec3::new(0.0, config::CAMERA_START_Y, config::CAMERA_START_Z);
        let distance = start.length();
        let yaw = start.x.atan2(start.z);
        let pitch = (start.y / distance).asin();
        Self {
            yaw,
            pitch,
            distance,
            target: Vec3::ZERO,
            yaw_goal: yaw,
            pitch_goal: pitch,
            distance_goal: distance,
            target_goal: Vec3::ZERO,
            aspect,
        }
    }

    /// Orbit by a pointer delta, in logical pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        let speed = config::CAMERA_ROTATE_SPEED * 0.01;
        self.yaw_goal -= dx * speed;
        self.pitch_goal = (self.pitch_goal + dy * speed)
            .clamp(-std::f32::consts::FRAC_PI_2 + 0.05, std::f32::consts::FRAC_PI_2 - 0.05);
    }

    /// Zoom by wheel steps; positive steps move the camera closer.
    pub fn zoom(&mut self, steps: f32) {
        let factor = config::CAMERA_ZOOM_SPEED.powf(steps);
        self.distance_goal =
            (self.distance_goal / factor).clamp(config::CAMERA_DIST_MIN, config::CAMERA_DIST_MAX);
    }

    /// Pan the look-at target in the camera plane.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let scale = self.distance * 0.001;
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let right = Vec3::new(cos_yaw, 0.0, -sin_yaw);
        let up = Vec3::Y;
        self.target_goal += right * (-dx * scale) + up * (dy * scale);
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Apply pending damped interaction. Call once per tick.
    pub fn update(&mut self) {
        let d = config::CAMERA_DAMPING;
        self.yaw += (self.yaw_goal - self.yaw) * d;
        self.pitch += (self.pitch_goal - self.pitch) * d;
        self.distance += (self.distance_goal - self.distance) * d;
        self.target += (self.target_goal - self.target) * d;
    }

    /// World-space eye position.
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + Vec3::new(
                self.distance * cos_pitch * sin_yaw,
                self.distance * sin_pitch,
                self.distance * cos_pitch * cos_yaw,
            )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            config::CAMERA_FOV_DEG.to_radians(),
            self.aspect,
            config::CAMERA_NEAR,
            config::CAMERA_FAR,
        )
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_configured_eye() {
        let cam = OrbitCamera::new(16.0 / 9.0);
        let eye = cam.eye();
        assert!((eye.x - 0.0).abs() < 1e-3);
        assert!((eye.y - config::CAMERA_START_Y).abs() < 1e-3);
        assert!((eye.z - config::CAMERA_START_Z).abs() < 1e-3);
    }

    #[test]
    fn zoom_clamps_to_distance_limits() {
        let mut cam = OrbitCamera::new(1.0);
        cam.zoom(1_000.0);
        for _ in 0..10_000 {
            cam.update();
        }
        assert!(cam.distance() >= config::CAMERA_DIST_MIN - 1e-3);

        cam.zoom(-1_000.0);
        for _ in 0..10_000 {
            cam.update();
        }
        assert!(cam.distance() <= config::CAMERA_DIST_MAX + 1e-3);
    }

    #[test]
    fn damping_converges_toward_goal() {
        let mut cam = OrbitCamera::new(1.0);
        let before = cam.eye();
        cam.rotate(120.0, 0.0);
        cam.update();
        let one_step = cam.eye();
        for _ in 0..2_000 {
            cam.update();
        }
        let settled = cam.eye();
        // One step moves only part of the way; many steps settle.
        assert!((one_step - before).length() > 1e-4);
        assert!((settled - one_step).length() > 1e-4);
        let mut cam2 = OrbitCamera::new(1.0);
        cam2.rotate(120.0, 0.0);
        for _ in 0..4_000 {
            cam2.update();
        }
        assert!((cam2.eye() - settled).length() < 1.0);
    }

    #[test]
    fn pitch_never_reaches_the_poles() {
        let mut cam = OrbitCamera::new(1.0);
        cam.rotate(0.0, 1e6);
        for _ in 0..5_000 {
            cam.update();
        }
        let eye = cam.eye();
        let horizontal = (eye.x * eye.x + eye.z * eye.z).sqrt();
        assert!(horizontal > 1.0, "camera collapsed onto the vertical axis");
    }
}
