pub mod canvas_backend;
pub mod scene;

pub use canvas_backend::CanvasBackend;
pub use scene::{DrawCommand, TextAlign, build_scene, hover_index, hover_state_at};
