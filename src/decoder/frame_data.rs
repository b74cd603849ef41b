use fast_image_resize as fr;
use fr::images::Image;

use crate::error::Result;
use crate::shared::constants;

/// Row-major grayscale pixel matrix, one byte per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct GrayFrame {
    pub buffer: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl GrayFrame {
    pub fn new(buffer: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(buffer.len(), (width * height) as usize);
        Self { buffer, width, height }
    }

    /// Frame of `width x height` filled with a single intensity.
    #[allow(dead_code)]
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self::new(vec![value; (width * height) as usize], width, height)
    }

    pub fn from_luma(img: image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self::new(img.into_raw(), width, height)
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.buffer[(y * self.width + x) as usize]
    }

    /// Area-averaging downsample to exactly `width x height`.
    pub fn resize_area(&self, width: u32, height: u32) -> Result<GrayFrame> {
        if width == self.width && height == self.height {
            return Ok(self.clone());
        }
        if width == 0 || height == 0 {
            return Ok(GrayFrame::new(Vec::new(), width, height));
        }

        let src_image = Image::from_vec_u8(
            self.width,
            self.height,
            self.buffer.clone(),
            fr::PixelType::U8,
        )?;
        let mut dst_image = Image::new(width, height, fr::PixelType::U8);

        // Box convolution averages every source pixel that falls under a
        // destination pixel.
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Box));
        let mut resizer = fr::Resizer::new();
        resizer.resize(&src_image, &mut dst_image, &options)?;

        Ok(GrayFrame::new(dst_image.buffer().to_vec(), width, height))
    }

    /// Binary threshold: `> threshold` becomes ON_VALUE, everything else OFF_VALUE.
    pub fn binarize(&self, threshold: u8) -> GrayFrame {
        let buffer = self
            .buffer
            .iter()
            .map(|&v| {
                if v > threshold {
                    constants::ON_VALUE
                } else {
                    constants::OFF_VALUE
                }
            })
            .collect();
        GrayFrame::new(buffer, self.width, self.height)
    }

    pub fn is_on(&self, x: u32, y: u32) -> bool {
        self.get(x, y) != constants::OFF_VALUE
    }
}
