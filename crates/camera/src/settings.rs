use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Pitch is kept strictly inside (-90, 90) degrees so `front x +Y` never collapses.
pub const PITCH_LIMIT: f32 = 89.0;
/// Narrowest vertical field of view, in degrees.
pub const ZOOM_MIN: f32 = 1.0;
/// Widest vertical field of view, in degrees.
pub const ZOOM_MAX: f32 = 45.0;
/// Lower bound for movement speed (world units per second).
pub const MIN_MOVEMENT_SPEED: f32 = 0.01;
/// Lower bound for mouse sensitivity (degrees per pixel).
pub const MIN_MOUSE_SENSITIVITY: f32 = 0.001;

/// Start-up parameters for a [`Camera`](crate::Camera).
///
/// Every field has a default so partial config files deserialize cleanly.
/// Unknown keys are rejected; in particular there is no `world_up`, the
/// camera is always Y-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraSettings {
    pub position: Vec3,
    /// Degrees. -90 looks down the negative Z axis.
    pub yaw: f32,
    /// Degrees above the horizontal plane.
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees.
    pub zoom: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 5.0),
            yaw: -90.0,
            pitch: 0.0,
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            zoom: ZOOM_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_look_down_negative_z() {
        let s = CameraSettings::default();
        assert_eq!(s.yaw, -90.0);
        assert_eq!(s.pitch, 0.0);
        assert_eq!(s.zoom, ZOOM_MAX);
    }

    #[test]
    fn limits_are_ordered() {
        assert!(PITCH_LIMIT < 90.0);
        assert!(ZOOM_MIN < ZOOM_MAX);
        assert!(MIN_MOVEMENT_SPEED > 0.0);
        assert!(MIN_MOUSE_SENSITIVITY > 0.0);
    }
}
