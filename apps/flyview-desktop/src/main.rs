mod bindings;
mod config;
mod overlay;
mod state;

use anyhow::Result;
use clap::Parser;
use config::DemoConfig;
use egui::Context as EguiContext;
use flyview_input::{Action, CursorMode};
use flyview_render_wgpu::{GpuContext, SceneRenderer};
use state::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

/// Pixels of trackpad scroll that count as one wheel notch.
const PIXELS_PER_NOTCH: f32 = 50.0;

#[derive(Parser)]
#[command(name = "flyview", about = "Free-fly camera demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Invert vertical mouse-look
    #[arg(long)]
    invert_y: bool,

    /// Window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<u32>,
}

impl Cli {
    /// Load the config file (if any) and apply command-line overrides.
    fn resolve_config(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load(path)?,
            None => DemoConfig::default(),
        };
        if self.invert_y {
            config.input.invert_y = true;
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Window plus everything that needs a live GPU device.
struct Graphics {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: SceneRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl Graphics {
    fn new(
        event_loop: &ActiveEventLoop,
        config: &DemoConfig,
        egui_ctx: &EguiContext,
    ) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.window.title.clone())
            .with_inner_size(PhysicalSize::new(config.window.width, config.window.height));
        let window = Arc::new(event_loop.create_window(attrs)?);

        let size = window.inner_size();
        let gpu = GpuContext::new(window.clone(), size.width, size.height)?;
        let renderer = SceneRenderer::new(&gpu.device, gpu.format(), size.width, size.height);

        let egui_winit = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&gpu.device, gpu.format(), None, 1, false);

        Ok(Self {
            window,
            gpu,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        let (width, height) = self.gpu.size();
        self.renderer.resize(&self.gpu.device, width, height);
    }

    /// Grab and hide the cursor, or release and show it.
    fn apply_cursor_mode(&self, mode: CursorMode) {
        match mode {
            CursorMode::Captured => {
                let grabbed = self
                    .window
                    .set_cursor_grab(CursorGrabMode::Locked)
                    .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined));
                if let Err(e) = grabbed {
                    tracing::warn!("cursor grab unavailable: {e}");
                }
                self.window.set_cursor_visible(false);
                let size = self.window.inner_size();
                let center = PhysicalPosition::new(size.width / 2, size.height / 2);
                if let Err(e) = self.window.set_cursor_position(center) {
                    tracing::debug!("cursor recentre unavailable: {e}");
                }
            }
            CursorMode::Free => {
                if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
                    tracing::warn!("cursor release failed: {e}");
                }
                self.window.set_cursor_visible(true);
            }
        }
    }

    /// Render the scene and overlay for one frame.
    fn draw(&mut self, egui_ctx: &EguiContext, state: &mut AppState) {
        let output = match self.gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface lost, reconfiguring");
                self.gpu.reconfigure();
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.render(
            &self.gpu.device,
            &self.gpu.queue,
            &view,
            state.view_projection(),
            state.clear_color,
        );

        let raw_input = self.egui_winit.take_egui_input(&self.window);
        let full_output = egui_ctx.run(raw_input, |ctx| {
            overlay::draw(ctx, state);
        });
        self.egui_winit
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        let (width, height) = self.gpu.size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let device = &self.gpu.device;
        let queue = &self.gpu.queue;
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("egui_encoder"),
        });
        self.egui_renderer.update_buffers(
            device,
            queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            self.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        output.present();
    }
}

struct FlyviewApp {
    config: DemoConfig,
    state: AppState,
    graphics: Option<Graphics>,
    egui_ctx: EguiContext,
    focused: bool,
}

impl FlyviewApp {
    fn new(config: DemoConfig) -> Self {
        Self {
            state: AppState::new(&config),
            config,
            graphics: None,
            egui_ctx: EguiContext::default(),
            focused: true,
        }
    }

    /// Feed one action to the input layer and follow any cursor-mode change.
    fn dispatch(&mut self, action: Action) {
        let Some(mode) = self.state.input.handle(action) else {
            return;
        };
        if let Some(graphics) = &self.graphics {
            graphics.apply_cursor_mode(mode);
        }
    }

    fn redraw(&mut self) {
        let dt = self.state.tick();
        self.state.update(dt);

        if let Some(graphics) = &mut self.graphics {
            graphics.draw(&self.egui_ctx, &mut self.state);
            graphics.window.request_redraw();
        }
    }
}

impl ApplicationHandler for FlyviewApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }

        match Graphics::new(event_loop, &self.config, &self.egui_ctx) {
            Ok(graphics) => {
                let size = graphics.window.inner_size();
                self.state.resize(size.width, size.height);
                self.state.gpu_backend = Some(graphics.gpu.backend().to_str());
                graphics.apply_cursor_mode(self.state.input.cursor_mode());
                self.graphics = Some(graphics);
            }
            Err(e) => {
                tracing::error!("failed to initialize graphics: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // The overlay only gets to swallow input while the cursor is free.
        let mut ui_consumed = false;
        if let Some(graphics) = &mut self.graphics {
            let response = graphics
                .egui_winit
                .on_window_event(&graphics.window, &event);
            ui_consumed =
                response.consumed && self.state.input.cursor_mode() == CursorMode::Free;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(graphics) = &mut self.graphics {
                    graphics.resize(new_size.width, new_size.height);
                    let (width, height) = graphics.gpu.size();
                    self.state.resize(width, height);
                }
            }
            WindowEvent::Focused(focused) => {
                self.focused = focused;
                if focused {
                    let mode = self.state.input.focus_gained();
                    if let Some(graphics) = &self.graphics {
                        graphics.apply_cursor_mode(mode);
                    }
                } else {
                    self.state.input.focus_lost();
                    // Hand the OS cursor back while another window has focus.
                    if let Some(graphics) = &self.graphics {
                        graphics.apply_cursor_mode(CursorMode::Free);
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        repeat,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;
                if key == KeyCode::Escape && pressed {
                    event_loop.exit();
                    return;
                }
                let Some(action) = bindings::key_action(key, pressed, repeat) else {
                    return;
                };
                // Releases always go through so no key stays stuck.
                if ui_consumed && pressed && !matches!(action, Action::FreeCursor(_)) {
                    return;
                }
                self.dispatch(action);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if ui_consumed {
                    return;
                }
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_NOTCH,
                };
                self.dispatch(Action::Scroll(notches));
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        match event {
            DeviceEvent::MouseMotion { delta } if self.focused => {
                self.dispatch(Action::Look {
                    dx: delta.0 as f32,
                    dy: delta.1 as f32,
                });
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(graphics) = &self.graphics {
            graphics.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = cli.resolve_config()?;
    tracing::info!(
        width = config.window.width,
        height = config.window.height,
        invert_y = config.input.invert_y,
        "flyview starting"
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = FlyviewApp::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_defaults() {
        let cli = Cli::parse_from(["flyview", "--invert-y", "--width", "800"]);
        let config = cli.resolve_config().unwrap();
        assert!(config.input.invert_y);
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 720);
    }

    #[test]
    fn cli_rejects_zero_height() {
        let cli = Cli::parse_from(["flyview", "--height", "0"]);
        assert!(cli.resolve_config().is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
