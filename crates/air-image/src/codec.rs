use crate::{ChannelOrder, Frame, ImageError};
use image::{ImageFormat, RgbImage, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// How [`encode_png`] fills the alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alpha {
    /// Plain RGB output.
    Opaque,
    /// RGBA output where pure black pixels become fully transparent.
    BlackIsTransparent,
}

/// Decode an encoded image (JPEG, PNG) into an RGB frame.
///
/// # Errors
///
/// Returns `ImageError::Decode` if the data is invalid or the format is unsupported.
pub fn decode_frame(data: &[u8]) -> Result<Frame, ImageError> {
    let rgb = image::load_from_memory(data)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    Frame::new(width as usize, height as usize, ChannelOrder::Rgb, rgb.into_raw())
}

/// Encode a frame as PNG bytes.
pub fn encode_png(frame: &Frame, alpha: Alpha) -> Result<Vec<u8>, ImageError> {
    let rgb = frame.to_rgb();
    let (width, height) = (rgb.width() as u32, rgb.height() as u32);
    let mut bytes = Vec::new();
    let mut cursor = Cursor::new(&mut bytes);

    let written = match alpha {
        Alpha::Opaque => {
            let buf = RgbImage::from_raw(width, height, rgb.into_tensor().data)
                .ok_or_else(|| ImageError::Encode("pixel buffer too small".to_string()))?;
            buf.write_to(&mut cursor, ImageFormat::Png)
        }
        Alpha::BlackIsTransparent => {
            let mut rgba = Vec::with_capacity(rgb.data().len() / 3 * 4);
            for px in rgb.data().chunks_exact(Frame::CHANNELS) {
                let a = if px.iter().all(|&c| c == 0) { 0 } else { 255 };
                rgba.extend_from_slice(&[px[0], px[1], px[2], a]);
            }
            let buf = RgbaImage::from_raw(width, height, rgba)
                .ok_or_else(|| ImageError::Encode("pixel buffer too small".to_string()))?;
            buf.write_to(&mut cursor, ImageFormat::Png)
        }
    };
    written.map_err(|e| ImageError::Encode(e.to_string()))?;

    Ok(bytes)
}

/// Encode a frame as PNG and write it to `path`, replacing any existing file.
pub fn save_png(frame: &Frame, alpha: Alpha, path: impl AsRef<Path>) -> Result<(), ImageError> {
    let bytes = encode_png(frame, alpha)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
