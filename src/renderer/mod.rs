//! Rendering module
//!
//! Frames are described as a [`Scene`] and handed to a [`Surface`]; on the web
//! that is a Canvas 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::{Circle, PreviewLayer, Scene};

/// Anything that can paint a finished frame
pub trait Surface {
    fn present(&mut self, scene: &Scene);
}
