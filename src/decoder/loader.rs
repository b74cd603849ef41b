use std::path::Path;

use super::frame_data::GrayFrame;
use crate::error::{PisciiError, Result};

/// Decodes any format the `image` crate understands into a grayscale frame.
///
/// The format is sniffed from the file contents, so the extension does not matter.
pub fn load_gray(path: &Path) -> Result<GrayFrame> {
    let decode_error = |source: image::ImageError| PisciiError::ImageDecode {
        path: path.to_path_buf(),
        source,
    };
    let img = image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(image::ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)?;

    let frame = rec601_gray(&img.to_rgb8());
    crate::utils::logger::debug(&format!(
        "decoded {} as {}x{} grayscale",
        path.display(),
        frame.width,
        frame.height
    ));
    Ok(frame)
}

/// Rec.601 luma: 0.299*R + 0.587*G + 0.114*B, rounded.
fn rec601_gray(rgb: &image::RgbImage) -> GrayFrame {
    let buffer = rgb
        .pixels()
        .map(|p| {
            let [r, g, b] = p.0;
            ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114 + 500) / 1000) as u8
        })
        .collect();
    GrayFrame::new(buffer, rgb.width(), rgb.height())
}
