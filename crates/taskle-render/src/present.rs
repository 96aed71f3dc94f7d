//! Zoomed presentation of a surface into a framebuffer.

use crate::renderer::Renderer;
use crate::surface::RasterSurface;
use kurbo::{Point, Size};
use taskle_core::{SerializableColor, Viewport};

/// Composite a premultiplied channel over an opaque backdrop channel.
fn over(src: u8, src_alpha: u8, backdrop: u8) -> u32 {
    u32::from(src) + (u32::from(backdrop) * (255 - u32::from(src_alpha)) + 127) / 255
}

/// Render `surface` into a `frame_width` x `frame_height` buffer of `0x00RRGGBB` pixels.
///
/// The surface is centered in the frame and scaled by the viewport zoom
/// (nearest neighbor). Transparent regions and the area around the surface
/// show `backdrop`. The surface itself is only read.
pub fn present(
    surface: &RasterSurface,
    viewport: &Viewport,
    frame_width: u32,
    frame_height: u32,
    backdrop: SerializableColor,
) -> Vec<u32> {
    let container = Size::new(f64::from(frame_width), f64::from(frame_height));
    let inverse = viewport.inverse_transform(surface.size(), container);
    let backdrop_rgb = backdrop.to_rgb_u32();
    let pixels = surface.pixels();
    let (width, height) = (surface.width(), surface.height());

    let mut frame = Vec::with_capacity(frame_width as usize * frame_height as usize);
    for y in 0..frame_height {
        for x in 0..frame_width {
            let p = inverse * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let (sx, sy) = (p.x.floor(), p.y.floor());
            if sx < 0.0 || sy < 0.0 || sx >= f64::from(width) || sy >= f64::from(height) {
                frame.push(backdrop_rgb);
                continue;
            }

            let px = pixels[sy as usize * width as usize + sx as usize];
            let a = px.alpha();
            let r = over(px.red(), a, backdrop.r);
            let g = over(px.green(), a, backdrop.g);
            let b = over(px.blue(), a, backdrop.b);
            frame.push((r << 16) | (g << 8) | b);
        }
    }
    frame
}
