//! Renderer trait abstraction.

use kurbo::Size;
use taskle_core::session::StrokeSegment;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Cannot allocate a {width}x{height} surface")]
    SurfaceAlloc { width: u32, height: u32 },
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("PNG decoding failed: {0}")]
    Decode(#[from] png::DecodingError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Export file name {0:?} must be a plain file name")]
    InvalidFileName(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Trait for the surface a drawing session paints onto.
///
/// Painting is immediate: every segment is composited as soon as it arrives
/// and nothing is retained besides the resulting pixels.
pub trait Renderer {
    /// Composite one stroke segment using the segment's brush.
    fn paint_segment(&mut self, segment: &StrokeSegment);

    /// Repaint the whole surface with its background.
    fn clear(&mut self);

    /// Surface size in pixels.
    fn size(&self) -> Size;

    /// Encode the current pixels as PNG.
    fn encode_png(&self) -> RenderResult<Vec<u8>>;
}
