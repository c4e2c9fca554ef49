use flyview_camera::CameraMovement;

/// A high-level input action, independent of the windowing library.
///
/// The desktop app maps raw key, mouse and wheel events onto these; the
/// camera only ever sees what [`InputState`](crate::InputState) derives from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// A movement key was pressed or released.
    Move {
        direction: CameraMovement,
        pressed: bool,
    },
    /// Raw pointer motion in screen pixels (+y is down).
    Look { dx: f32, dy: f32 },
    /// Wheel notches, positive away from the user.
    Scroll(f32),
    /// The free-cursor modifier was pressed (`true`) or released.
    FreeCursor(bool),
    /// Show or hide the debug overlay.
    ToggleOverlay,
}

/// How the window should treat the OS cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
    /// Grabbed and hidden; motion drives mouse-look.
    Captured,
    /// Visible and free, for interacting with the overlay.
    Free,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_action_carries_direction() {
        let a = Action::Move {
            direction: CameraMovement::Left,
            pressed: true,
        };
        assert!(matches!(
            a,
            Action::Move {
                direction: CameraMovement::Left,
                pressed: true
            }
        ));
    }

    #[test]
    fn cursor_modes_differ() {
        assert_ne!(CursorMode::Captured, CursorMode::Free);
    }
}
