//! Raster surface backed by a tiny-skia pixmap.

use crate::export;
use crate::renderer::{RenderResult, Renderer, RendererError};
use kurbo::Size;
use peniko::Color;
use taskle_core::config::WhiteboardConfig;
use taskle_core::session::StrokeSegment;
use taskle_core::tools::Brush;
use taskle_core::SerializableColor;
use tiny_skia::{
    BlendMode, ColorU8, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PremultipliedColorU8, Stroke,
    Transform,
};

fn skia_color(color: Color) -> tiny_skia::Color {
    let rgba = color.to_rgba8();
    tiny_skia::Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Fixed-size pixel buffer that strokes are composited onto.
///
/// The surface is always fully filled with its background after creation and
/// after [`Renderer::clear`]. Eraser strokes cut through the background,
/// leaving fully transparent pixels behind.
pub struct RasterSurface {
    pixmap: Pixmap,
    background: SerializableColor,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("background", &self.background)
            .finish()
    }
}

impl RasterSurface {
    /// Allocate a surface and fill it with `background`.
    pub fn new(width: u32, height: u32, background: SerializableColor) -> RenderResult<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RendererError::SurfaceAlloc { width, height })?;
        let mut surface = Self { pixmap, background };
        surface.fill_background();
        Ok(surface)
    }

    /// Allocate a surface using the configured size and background.
    pub fn from_config(config: &WhiteboardConfig) -> RenderResult<Self> {
        Self::new(config.width, config.height, config.background)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn background(&self) -> SerializableColor {
        self.background
    }

    /// Read a pixel (demultiplied). `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorU8> {
        // Pixmap::pixel only checks the flat index, so x past the row end would wrap.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(|p| p.demultiply())
    }

    /// Raw premultiplied pixels, row-major.
    pub fn pixels(&self) -> &[PremultipliedColorU8] {
        self.pixmap.pixels()
    }

    /// Demultiplied RGBA8 bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        data
    }

    /// Whether every pixel equals the opaque background.
    pub fn is_blank(&self) -> bool {
        let bg = self.background;
        self.pixmap.pixels().iter().all(|p| {
            let c = p.demultiply();
            c == ColorU8::from_rgba(bg.r, bg.g, bg.b, bg.a)
        })
    }

    fn fill_background(&mut self) {
        self.pixmap.fill(skia_color(self.background.into()));
    }
}

impl Renderer for RasterSurface {
    fn paint_segment(&mut self, segment: &StrokeSegment) {
        let mut pb = PathBuilder::new();
        pb.move_to(segment.from.x as f32, segment.from.y as f32);
        pb.line_to(segment.to.x as f32, segment.to.y as f32);
        let Some(path) = pb.finish() else {
            return;
        };

        let mut paint = Paint::default();
        paint.anti_alias = true;
        match segment.brush {
            Brush::Paint { color, .. } => {
                paint.set_color(skia_color(color));
                paint.blend_mode = BlendMode::SourceOver;
            }
            Brush::Erase { .. } => {
                // Only the coverage matters for destination-out.
                paint.set_color(tiny_skia::Color::BLACK);
                paint.blend_mode = BlendMode::DestinationOut;
            }
        }

        let stroke = Stroke {
            width: segment.brush.width() as f32,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        self.pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn clear(&mut self) {
        self.fill_background();
        log::info!("Surface cleared");
    }

    fn size(&self) -> Size {
        Size::new(f64::from(self.width()), f64::from(self.height()))
    }

    fn encode_png(&self) -> RenderResult<Vec<u8>> {
        export::encode_png(self.width(), self.height(), &self.to_rgba8())
    }
}
