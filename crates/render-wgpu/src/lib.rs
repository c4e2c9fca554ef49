//! wgpu render backend for the fly-camera demo.
//!
//! Renders a few static coloured triangles over a ground plane with grid
//! lines. The renderer only consumes a view-projection matrix; it never
//! touches camera state.

mod context;
mod gpu;
mod scene;
mod shaders;

pub use context::{GpuContext, RenderError};
pub use gpu::SceneRenderer;
pub use scene::{ColorVertex, ground_plane, grid_lines, scene_triangles};

/// Default clear colour (linear RGB).
pub const DEFAULT_CLEAR_COLOR: [f32; 3] = [0.2, 0.1, 0.3];
