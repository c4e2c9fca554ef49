use crate::action::{Action, CursorMode};
use flyview_camera::{Camera, CameraMovement};
use glam::Vec2;

fn slot(direction: CameraMovement) -> usize {
    match direction {
        CameraMovement::Forward => 0,
        CameraMovement::Backward => 1,
        CameraMovement::Left => 2,
        CameraMovement::Right => 3,
    }
}

/// Input accumulated between two frames.
///
/// Owned by the frame loop. Event handlers call [`InputState::handle`]
/// while the window library is polled; the frame step then calls
/// [`InputState::take_frame`] exactly once.
#[derive(Debug, Clone)]
pub struct InputState {
    held: [bool; 4],
    free_cursor: bool,
    skip_next_look: bool,
    invert_y: bool,
    look: Vec2,
    scroll: f32,
    overlay_toggled: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl InputState {
    /// Starts captured, with the first look sample suppressed.
    pub fn new(invert_y: bool) -> Self {
        Self {
            held: [false; 4],
            free_cursor: false,
            skip_next_look: true,
            invert_y,
            look: Vec2::ZERO,
            scroll: 0.0,
            overlay_toggled: false,
        }
    }

    pub fn invert_y(&self) -> bool {
        self.invert_y
    }

    pub fn set_invert_y(&mut self, invert_y: bool) {
        self.invert_y = invert_y;
    }

    pub fn cursor_mode(&self) -> CursorMode {
        if self.free_cursor {
            CursorMode::Free
        } else {
            CursorMode::Captured
        }
    }

    /// Record one action. Returns the new cursor mode when it changed.
    pub fn handle(&mut self, action: Action) -> Option<CursorMode> {
        match action {
            Action::Move { direction, pressed } => {
                self.held[slot(direction)] = pressed;
                None
            }
            Action::Look { dx, dy } => {
                if self.free_cursor {
                    return None;
                }
                if self.skip_next_look {
                    self.skip_next_look = false;
                    tracing::trace!(dx, dy, "dropped first look sample");
                    return None;
                }
                let y = if self.invert_y { dy } else { -dy };
                self.look += Vec2::new(dx, y);
                None
            }
            Action::Scroll(notches) => {
                self.scroll += notches;
                None
            }
            Action::FreeCursor(pressed) => {
                if pressed == self.free_cursor {
                    return None;
                }
                self.free_cursor = pressed;
                self.skip_next_look = true;
                self.look = Vec2::ZERO;
                let mode = self.cursor_mode();
                tracing::debug!(?mode, "cursor mode changed");
                Some(mode)
            }
            Action::ToggleOverlay => {
                self.overlay_toggled = !self.overlay_toggled;
                None
            }
        }
    }

    /// The window lost focus: key releases and the modifier release may go
    /// to another window, so forget held keys and drop back to captured.
    /// Returns the new cursor mode when it changed.
    pub fn focus_lost(&mut self) -> Option<CursorMode> {
        self.held = [false; 4];
        self.look = Vec2::ZERO;
        self.skip_next_look = true;
        if !self.free_cursor {
            return None;
        }
        self.free_cursor = false;
        tracing::debug!("focus lost while cursor was free, recapturing");
        Some(CursorMode::Captured)
    }

    /// The window regained focus. Arms first-sample suppression and returns
    /// the cursor mode the window should reapply.
    pub fn focus_gained(&mut self) -> CursorMode {
        self.skip_next_look = true;
        self.look = Vec2::ZERO;
        self.cursor_mode()
    }

    /// Drain accumulated look and scroll deltas; held keys carry over.
    pub fn take_frame(&mut self) -> FrameInput {
        let frame = FrameInput {
            held: self.held,
            look: self.look,
            scroll: self.scroll,
        };
        self.look = Vec2::ZERO;
        self.scroll = 0.0;
        frame
    }

    /// Whether the overlay toggle was pressed an odd number of times since the last call.
    pub fn take_overlay_toggle(&mut self) -> bool {
        std::mem::take(&mut self.overlay_toggled)
    }
}

/// One frame's worth of input, ready to apply to a camera.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    held: [bool; 4],
    /// Mouse-look offset in pixels, +y looks up.
    pub look: Vec2,
    pub scroll: f32,
}

impl FrameInput {
    pub fn is_held(&self, direction: CameraMovement) -> bool {
        self.held[slot(direction)]
    }

    /// Keyboard motion, then mouse-look, then zoom.
    pub fn apply_to(&self, camera: &mut Camera, dt: f32) {
        for direction in CameraMovement::ALL {
            if self.is_held(direction) {
                camera.process_keyboard(direction, dt);
            }
        }
        if self.look != Vec2::ZERO {
            camera.process_mouse_movement(self.look.x, self.look.y, true);
        }
        if self.scroll != 0.0 {
            camera.process_mouse_scroll(self.scroll);
        }
    }
}
