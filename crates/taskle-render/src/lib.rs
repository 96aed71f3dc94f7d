//! Taskle Whiteboard Render Library
//!
//! Renderer abstraction and the software raster surface strokes are painted onto.
//! The surface is backed by a tiny-skia pixmap and exported as PNG.

mod export;
mod present;
mod renderer;
mod surface;

pub use export::{decode_png, encode_png, write_export};
pub use present::present;
pub use renderer::{RenderResult, Renderer, RendererError};
pub use surface::RasterSurface;

/// Demultiplied 8-bit RGBA pixel, as read back from a surface.
pub use tiny_skia::ColorU8;
