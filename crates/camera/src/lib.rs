//! Free-fly camera model.
//!
//! Orientation is stored as yaw/pitch in degrees; the `front`/`right`/`up`
//! basis is derived from those angles and never edited directly.
//!
//! # Invariants
//! - Basis vectors are orthonormal and consistent with yaw/pitch.
//! - Pitch stays inside `[-PITCH_LIMIT, PITCH_LIMIT]` unless the caller opts out.
//! - Zoom (vertical FOV) stays inside `[ZOOM_MIN, ZOOM_MAX]`.
//! - Movement speed and mouse sensitivity stay positive.

mod camera;
mod projection;
mod settings;

pub use camera::{Camera, CameraMovement};
pub use projection::Projection;
pub use settings::{
    CameraSettings, MIN_MOUSE_SENSITIVITY, MIN_MOVEMENT_SPEED, PITCH_LIMIT, ZOOM_MAX, ZOOM_MIN,
};
