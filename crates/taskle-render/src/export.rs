//! PNG export of surface pixels.

use crate::renderer::{RenderResult, RendererError};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use taskle_core::config::is_plain_file_name;

/// Encode demultiplied RGBA8 pixels as an 8-bit RGBA PNG.
///
/// Encoding is deterministic: identical pixels always produce identical bytes.
pub fn encode_png(width: u32, height: u32, rgba: &[u8]) -> RenderResult<Vec<u8>> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(rgba)?;
        writer.finish()?;
    }
    Ok(png_data)
}

/// Decode a PNG back into `(width, height, rgba8)`.
///
/// Only 8-bit RGBA images (as written by [`encode_png`]) come back unconverted.
pub fn decode_png(bytes: &[u8]) -> RenderResult<(u32, u32, Vec<u8>)> {
    let decoder = png::Decoder::new(Cursor::new(bytes));
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());
    Ok((info.width, info.height, buf))
}

/// Write an encoded export into `dir` as `file_name`, replacing any previous download.
///
/// `file_name` must not contain path separators, so the file always lands in `dir`.
pub fn write_export(png_data: &[u8], dir: &Path, file_name: &str) -> RenderResult<PathBuf> {
    if !is_plain_file_name(file_name) {
        return Err(RendererError::InvalidFileName(file_name.to_string()));
    }
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, png_data)?;
    log::info!("Exported PNG to: {:?} ({} bytes)", path, png_data.len());
    Ok(path)
}
