use crate::state::AppState;
use egui::Context as EguiContext;
use flyview_camera::{MIN_MOUSE_SENSITIVITY, MIN_MOVEMENT_SPEED, ZOOM_MAX, ZOOM_MIN};

/// Debug overlay: camera read-outs and tuning sliders.
///
/// Widgets only respond while the cursor is free (Alt held).
pub fn draw(ctx: &EguiContext, state: &mut AppState) {
    if !state.show_overlay {
        return;
    }

    egui::Window::new("flyview")
        .default_pos(egui::pos2(12.0, 12.0))
        .resizable(false)
        .show(ctx, |ui| {
            let fps = if state.frame_ms > 0.0 {
                1000.0 / state.frame_ms
            } else {
                0.0
            };
            ui.label(format!("Frame: {:.2} ms ({fps:.0} fps)", state.frame_ms));
            if let Some(backend) = state.gpu_backend {
                ui.label(format!("Backend: {backend}"));
            }
            ui.separator();

            let camera = &mut state.camera;
            let p = camera.position();
            ui.label(format!("Position: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z));
            ui.label(format!(
                "Yaw: {:.1}  Pitch: {:.1}",
                camera.yaw(),
                camera.pitch()
            ));
            ui.separator();

            let mut speed = camera.movement_speed();
            if ui
                .add(egui::Slider::new(&mut speed, MIN_MOVEMENT_SPEED..=20.0).text("Speed"))
                .changed()
            {
                camera.set_movement_speed(speed);
            }

            let mut sensitivity = camera.mouse_sensitivity();
            if ui
                .add(
                    egui::Slider::new(&mut sensitivity, MIN_MOUSE_SENSITIVITY..=1.0)
                        .text("Sensitivity"),
                )
                .changed()
            {
                camera.set_mouse_sensitivity(sensitivity);
            }

            let mut zoom = camera.zoom();
            if ui
                .add(egui::Slider::new(&mut zoom, ZOOM_MIN..=ZOOM_MAX).text("FOV"))
                .changed()
            {
                camera.set_zoom(zoom);
            }

            let mut invert_y = state.input.invert_y();
            if ui.checkbox(&mut invert_y, "Invert Y").changed() {
                state.input.set_invert_y(invert_y);
            }

            ui.horizontal(|ui| {
                ui.label("Clear colour");
                ui.color_edit_button_rgb(&mut state.clear_color);
            });

            if ui.button("Reset camera").clicked() {
                state.reset_camera();
            }

            ui.separator();
            ui.small("Alt: free cursor | WASD: move | Wheel: zoom | F1: overlay | Esc: quit");
        });
}
