use crate::config::DemoConfig;
use flyview_camera::{Camera, CameraSettings, Projection};
use flyview_input::InputState;
use glam::Mat4;
use std::time::Instant;

/// Longest frame step fed to the camera, in seconds.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Everything the frame loop mutates, owned in one place.
pub struct AppState {
    pub camera: Camera,
    pub input: InputState,
    pub projection: Projection,
    pub clear_color: [f32; 3],
    pub show_overlay: bool,
    /// Smoothed frame time in milliseconds, for the overlay.
    pub frame_ms: f32,
    /// Name of the wgpu backend in use, once the GPU is up.
    pub gpu_backend: Option<&'static str>,
    start: CameraSettings,
    last_frame: Instant,
}

impl AppState {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            camera: Camera::from_settings(&config.camera),
            input: InputState::new(config.input.invert_y),
            projection: Projection::new(config.window.width, config.window.height)
                .with_clip(config.render.near, config.render.far),
            clear_color: config.render.clear_color,
            show_overlay: true,
            frame_ms: 0.0,
            gpu_backend: None,
            start: config.camera,
            last_frame: Instant::now(),
        }
    }

    /// Seconds since the previous call, capped at [`MAX_FRAME_DT`].
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_DT);
        self.last_frame = now;
        dt
    }

    /// Apply this frame's accumulated input.
    pub fn update(&mut self, dt: f32) {
        self.input.take_frame().apply_to(&mut self.camera, dt);
        if self.input.take_overlay_toggle() {
            self.show_overlay = !self.show_overlay;
        }
        self.frame_ms += (dt * 1000.0 - self.frame_ms) * 0.1;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.set_viewport(width, height);
    }

    pub fn reset_camera(&mut self) {
        self.camera.reset(&self.start);
        tracing::info!("camera reset to start pose");
    }

    pub fn view_projection(&self) -> Mat4 {
        self.camera.view_projection(&self.projection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flyview_camera::CameraMovement;
    use flyview_input::Action;
    use glam::Vec3;

    fn state() -> AppState {
        AppState::new(&DemoConfig::default())
    }

    #[test]
    fn starts_at_configured_pose() {
        let s = state();
        assert_eq!(s.camera.position(), Vec3::new(0.0, 2.0, 5.0));
        assert_eq!(s.clear_color, [0.2, 0.1, 0.3]);
        assert!((s.projection.aspect - 1280.0 / 720.0).abs() < 1e-6);
    }

    #[test]
    fn update_moves_camera_from_held_keys() {
        let mut s = state();
        s.input.handle(Action::Move {
            direction: CameraMovement::Forward,
            pressed: true,
        });
        s.update(1.0);
        assert!((s.camera.position() - Vec3::new(0.0, 2.0, 2.5)).length() < 1e-4);
    }

    #[test]
    fn overlay_toggle_applies_on_update() {
        let mut s = state();
        s.input.handle(Action::ToggleOverlay);
        s.update(0.0);
        assert!(!s.show_overlay);
        s.update(0.0);
        assert!(!s.show_overlay);
    }

    #[test]
    fn reset_restores_start_pose() {
        let mut s = state();
        s.camera.process_mouse_movement(50.0, 20.0, true);
        s.camera.process_keyboard(CameraMovement::Left, 2.0);
        s.reset_camera();
        assert_eq!(s.camera, Camera::from_settings(&CameraSettings::default()));
    }

    #[test]
    fn tick_is_capped() {
        let mut s = state();
        let dt = s.tick();
        assert!((0.0..=MAX_FRAME_DT).contains(&dt));
    }

    #[test]
    fn backend_unknown_until_gpu_is_up() {
        let mut s = state();
        assert_eq!(s.gpu_backend, None);
        s.gpu_backend = Some(wgpu::Backend::Vulkan.to_str());
        assert_eq!(s.gpu_backend, Some("vulkan"));
    }

    #[test]
    fn resize_updates_aspect() {
        let mut s = state();
        s.resize(500, 500);
        assert_eq!(s.projection.aspect, 1.0);
    }
}
