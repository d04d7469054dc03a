//! Browser-side drawing. The terminal renderer lives in `forage_tui`.

#[cfg(target_arch = "wasm32")]
pub mod web_renderer;

#[cfg(target_arch = "wasm32")]
pub use web_renderer::CanvasSurface;
