use flyview_camera::CameraMovement;
use flyview_input::Action;
use winit::keyboard::KeyCode;

/// Map a physical key transition to an input action.
///
/// WASD and the arrow keys move, either Alt frees the cursor while held,
/// F1 toggles the overlay. Auto-repeat only matters for movement keys.
pub fn key_action(key: KeyCode, pressed: bool, repeat: bool) -> Option<Action> {
    let direction = match key {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(CameraMovement::Forward),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(CameraMovement::Backward),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(CameraMovement::Left),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(CameraMovement::Right),
        _ => None,
    };
    if let Some(direction) = direction {
        return Some(Action::Move { direction, pressed });
    }

    match key {
        KeyCode::AltLeft | KeyCode::AltRight if !repeat => Some(Action::FreeCursor(pressed)),
        KeyCode::F1 if pressed && !repeat => Some(Action::ToggleOverlay),
        _ => None,
    }
}
