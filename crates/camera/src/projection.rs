use glam::Mat4;

/// Perspective projection parameters. The field of view comes from the
/// camera's zoom each frame, so only aspect and clip planes live here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        let mut projection = Self::default();
        projection.set_viewport(width, height);
        projection
    }

    pub fn with_clip(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// Update the aspect ratio after a resize. Zero sizes are treated as 1.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Right-handed perspective matrix with `fov_degrees` as vertical FOV.
    pub fn matrix(&self, fov_degrees: f32) -> Mat4 {
        Mat4::perspective_rh(fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_from_viewport() {
        let p = Projection::new(1280, 720);
        assert!((p.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn zero_height_does_not_divide_by_zero() {
        let mut p = Projection::default();
        p.set_viewport(800, 0);
        assert_eq!(p.aspect, 800.0);
        assert!(p.matrix(45.0).to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn narrower_fov_magnifies() {
        let p = Projection::default();
        let wide = p.matrix(45.0);
        let narrow = p.matrix(10.0);
        // y scale is cot(fov/2)
        assert!(narrow.y_axis.y > wide.y_axis.y);
    }

    #[test]
    fn clip_planes_override() {
        let p = Projection::default().with_clip(0.5, 250.0);
        assert_eq!(p.near, 0.5);
        assert_eq!(p.far, 250.0);
    }
}
