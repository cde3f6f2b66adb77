//! Rendering module
//!
//! `scene` builds a backend-neutral draw list from a simulation snapshot;
//! `canvas` paints it with the browser's 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::{DrawCommand, Paint, build_scene, end_message};
