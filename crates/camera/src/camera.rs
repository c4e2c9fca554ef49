use crate::projection::Projection;
use crate::settings::{
    CameraSettings, MIN_MOUSE_SENSITIVITY, MIN_MOVEMENT_SPEED, PITCH_LIMIT, ZOOM_MAX, ZOOM_MIN,
};
use glam::{Mat4, Vec3};

/// Direction selector for keyboard-driven translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

impl CameraMovement {
    pub const ALL: [CameraMovement; 4] = [
        CameraMovement::Forward,
        CameraMovement::Backward,
        CameraMovement::Left,
        CameraMovement::Right,
    ];
}

/// Euler-angle fly camera.
///
/// Angles are in degrees. The `front`, `right` and `up` vectors are
/// recomputed from `yaw`/`pitch` after every orientation change; there is
/// no roll, `world_up` is fixed to +Y and anchors the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    world_up: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_settings(&CameraSettings::default())
    }
}

impl Camera {
    /// Build a camera with default speed, sensitivity and zoom.
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self::from_settings(&CameraSettings {
            position,
            yaw,
            pitch,
            ..CameraSettings::default()
        })
    }

    pub fn from_settings(settings: &CameraSettings) -> Self {
        let mut camera = Self {
            position: settings.position,
            world_up: Vec3::Y,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            yaw: settings.yaw,
            pitch: settings.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            movement_speed: settings.movement_speed.max(MIN_MOVEMENT_SPEED),
            mouse_sensitivity: settings.mouse_sensitivity.max(MIN_MOUSE_SENSITIVITY),
            zoom: settings.zoom.clamp(ZOOM_MIN, ZOOM_MAX),
        };
        camera.update_vectors();
        camera
    }

    /// Restore the pose and tuning described by `settings`.
    pub fn reset(&mut self, settings: &CameraSettings) {
        *self = Self::from_settings(settings);
        tracing::debug!(position = ?self.position, "camera reset");
    }

    /// Snapshot the current state as settings.
    pub fn settings(&self) -> CameraSettings {
        CameraSettings {
            position: self.position,
            yaw: self.yaw,
            pitch: self.pitch,
            movement_speed: self.movement_speed,
            mouse_sensitivity: self.mouse_sensitivity,
            zoom: self.zoom,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Always +Y: the yaw/pitch parametrisation assumes a Y-up world.
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed.max(MIN_MOVEMENT_SPEED);
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity.max(MIN_MOUSE_SENSITIVITY);
    }

    /// Translate along `front` or `right`, scaled by `movement_speed * dt`.
    pub fn process_keyboard(&mut self, direction: CameraMovement, dt: f32) {
        let velocity = self.movement_speed * dt;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a mouse-look delta in pixels. Positive `y_offset` looks up.
    ///
    /// With `constrain_pitch` off the caller is responsible for keeping
    /// pitch away from +/-90 degrees.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Narrow (positive) or widen (negative) the field of view by scroll notches.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.set_zoom(self.zoom - y_offset);
    }

    /// Right-handed look-at transform from the current pose.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// `projection * view`, using the current zoom as vertical FOV.
    pub fn view_projection(&self, projection: &Projection) -> Mat4 {
        projection.matrix(self.zoom) * self.view_matrix()
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
            .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < EPS
    }

    fn assert_orthonormal(cam: &Camera) {
        for v in [cam.front(), cam.right(), cam.up()] {
            assert!((v.length() - 1.0).abs() < EPS, "not unit: {v:?}");
        }
        assert!(cam.front().dot(cam.right()).abs() < EPS);
        assert!(cam.front().dot(cam.up()).abs() < EPS);
        assert!(cam.right().dot(cam.up()).abs() < EPS);
    }

    #[test]
    fn default_camera_faces_negative_z() {
        let cam = Camera::default();
        assert!(approx(cam.front(), Vec3::NEG_Z));
        assert!(approx(cam.right(), Vec3::X));
        assert!(approx(cam.up(), Vec3::Y));
        assert_orthonormal(&cam);
    }

    #[test]
    fn forward_one_second_at_default_speed() {
        let mut cam = Camera::new(Vec3::new(0.0, 2.0, 5.0), -90.0, 0.0);
        cam.set_movement_speed(2.5);
        cam.process_keyboard(CameraMovement::Forward, 1.0);
        assert!(approx(cam.position(), Vec3::new(0.0, 2.0, 2.5)));
    }

    #[test]
    fn forward_then_backward_returns_home() {
        let mut cam = Camera::new(Vec3::new(1.0, 3.0, -2.0), 30.0, 20.0);
        let start = cam.position();
        cam.process_keyboard(CameraMovement::Forward, 0.37);
        cam.process_keyboard(CameraMovement::Backward, 0.37);
        assert!(approx(cam.position(), start));

        cam.process_keyboard(CameraMovement::Left, 0.5);
        cam.process_keyboard(CameraMovement::Right, 0.5);
        assert!(approx(cam.position(), start));
    }

    #[test]
    fn strafe_follows_right_vector() {
        let mut cam = Camera::default();
        let start = cam.position();
        cam.process_keyboard(CameraMovement::Right, 2.0);
        assert!(approx(cam.position(), start + Vec3::X * 5.0));
    }

    #[test]
    fn zero_dt_does_not_move() {
        let mut cam = Camera::default();
        let start = cam.position();
        for dir in CameraMovement::ALL {
            cam.process_keyboard(dir, 0.0);
        }
        assert_eq!(cam.position(), start);
    }

    #[test]
    fn pitch_clamped_on_large_upward_delta() {
        let mut cam = Camera::new(Vec3::ZERO, -90.0, 80.0);
        cam.process_mouse_movement(0.0, 500.0, true);
        assert_eq!(cam.pitch(), PITCH_LIMIT);
        assert_orthonormal(&cam);

        cam.process_mouse_movement(0.0, -5000.0, true);
        assert_eq!(cam.pitch(), -PITCH_LIMIT);
        assert_orthonormal(&cam);
    }

    #[test]
    fn unconstrained_pitch_passes_through() {
        let mut cam = Camera::new(Vec3::ZERO, -90.0, 80.0);
        cam.process_mouse_movement(0.0, 50.0, false);
        assert!((cam.pitch() - 85.0).abs() < EPS);
    }

    #[test]
    fn pitch_stays_bounded_over_many_moves() {
        let mut cam = Camera::default();
        let deltas = [
            (13.0, 400.0),
            (-250.0, 3.5),
            (999.0, -1200.0),
            (0.5, 0.25),
            (-77.0, 880.0),
            (3600.0, -33.0),
        ];
        for _ in 0..20 {
            for (dx, dy) in deltas {
                cam.process_mouse_movement(dx, dy, true);
                assert!((-PITCH_LIMIT..=PITCH_LIMIT).contains(&cam.pitch()));
                assert_orthonormal(&cam);
            }
        }
    }

    #[test]
    fn yaw_is_not_wrapped() {
        let mut cam = Camera::default();
        cam.set_mouse_sensitivity(1.0);
        cam.process_mouse_movement(720.0, 0.0, true);
        assert!((cam.yaw() - 630.0).abs() < EPS);
        // 630 deg points the same way as -90 deg
        assert!(approx(cam.front(), Vec3::NEG_Z));
    }

    #[test]
    fn scroll_clamps_zoom() {
        let mut cam = Camera::default();
        assert_eq!(cam.zoom(), 45.0);
        cam.process_mouse_scroll(10.0);
        assert_eq!(cam.zoom(), 35.0);
        cam.process_mouse_scroll(100.0);
        assert_eq!(cam.zoom(), ZOOM_MIN);
        cam.process_mouse_scroll(-100.0);
        assert_eq!(cam.zoom(), ZOOM_MAX);
    }

    #[test]
    fn scroll_overshoot_clamps_to_min() {
        let mut cam = Camera::default();
        cam.set_zoom(5.0);
        cam.process_mouse_scroll(10.0);
        assert_eq!(cam.zoom(), 1.0);
    }

    #[test]
    fn tuning_setters_stay_positive() {
        let mut cam = Camera::default();
        cam.set_movement_speed(-3.0);
        assert_eq!(cam.movement_speed(), MIN_MOVEMENT_SPEED);
        cam.set_mouse_sensitivity(0.0);
        assert_eq!(cam.mouse_sensitivity(), MIN_MOUSE_SENSITIVITY);
        cam.set_zoom(90.0);
        assert_eq!(cam.zoom(), ZOOM_MAX);
    }

    #[test]
    fn construction_clamps_settings() {
        let cam = Camera::from_settings(&CameraSettings {
            pitch: 120.0,
            zoom: 0.0,
            movement_speed: 0.0,
            ..CameraSettings::default()
        });
        assert_eq!(cam.pitch(), PITCH_LIMIT);
        assert_eq!(cam.zoom(), ZOOM_MIN);
        assert_eq!(cam.movement_speed(), MIN_MOVEMENT_SPEED);
        assert_orthonormal(&cam);
    }

    #[test]
    fn basis_is_finite_at_every_cardinal_yaw() {
        for yaw in [0.0, 90.0, 180.0, 270.0, -90.0] {
            let cam = Camera::new(Vec3::ZERO, yaw, 0.0);
            assert_eq!(cam.world_up(), Vec3::Y);
            assert!(cam.right().is_finite() && cam.up().is_finite());
            assert!(cam.view_matrix().is_finite());
            assert_orthonormal(&cam);
            // No roll: right stays horizontal.
            assert!(cam.right().y.abs() < EPS);
        }
    }

    #[test]
    fn view_matrix_is_pure() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(42.0, -17.0, true);
        let a = cam.view_matrix();
        let b = cam.view_matrix();
        assert_eq!(a, b);
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let cam = Camera::new(Vec3::new(4.0, 1.0, -3.0), 15.0, -10.0);
        let eye = cam.view_matrix().transform_point3(cam.position());
        assert!(approx(eye, Vec3::ZERO));
        // A point straight ahead lands on the -Z axis in view space.
        let ahead = cam
            .view_matrix()
            .transform_point3(cam.position() + cam.front() * 2.0);
        assert!(approx(ahead, Vec3::new(0.0, 0.0, -2.0)));
    }

    #[test]
    fn reset_restores_settings() {
        let settings = CameraSettings::default();
        let mut cam = Camera::from_settings(&settings);
        cam.process_keyboard(CameraMovement::Forward, 3.0);
        cam.process_mouse_movement(100.0, 100.0, true);
        cam.process_mouse_scroll(4.0);
        cam.reset(&settings);
        assert_eq!(cam, Camera::from_settings(&settings));
    }

    #[test]
    fn settings_round_trip_through_camera() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(10.0, 5.0, true);
        cam.set_movement_speed(7.0);
        let rebuilt = Camera::from_settings(&cam.settings());
        assert_eq!(rebuilt, cam);
    }

    #[test]
    fn view_projection_has_no_nan() {
        let cam = Camera::default();
        let vp = cam.view_projection(&Projection::new(1280, 720));
        assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
