use super::cell::{Cell, ColorPair};
use super::frequency::FrequencyTable;
use crate::decoder::{DigitStream, GrayFrame};
use crate::error::{PisciiError, Result};
use crate::shared::constants;

/// Colored digit grid plus the per-bucket digit counts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderResult {
    pub text: String,
    pub freq_on: FrequencyTable,
    pub freq_off: FrequencyTable,
}

impl RenderResult {
    pub fn total(&self) -> usize {
        self.freq_on.total() + self.freq_off.total()
    }
}

/// Maps a bilevel image onto a `width x height` grid of colored digits.
pub struct DigitRenderer {
    pub width: usize,
    pub height: usize,
    pub on: ColorPair,
    pub off: ColorPair,
}

impl DigitRenderer {
    pub fn new(width: usize, height: usize, on: ColorPair, off: ColorPair) -> Self {
        Self { width, height, on, off }
    }

    /// Grid sides as pixel dimensions; both sides and their product must fit in u32.
    fn dimensions(&self) -> Result<(u32, u32)> {
        let too_large = || PisciiError::GridTooLarge {
            width: self.width,
            height: self.height,
        };
        let width = u32::try_from(self.width).map_err(|_| too_large())?;
        let height = u32::try_from(self.height).map_err(|_| too_large())?;
        width.checked_mul(height).ok_or_else(too_large)?;
        Ok((width, height))
    }

    pub fn cell_count(&self) -> Result<usize> {
        let (width, height) = self.dimensions()?;
        Ok(width as usize * height as usize)
    }

    /// Downsamples `frame` to the grid size and thresholds it.
    pub fn prepare(&self, frame: &GrayFrame) -> Result<GrayFrame> {
        let (width, height) = self.dimensions()?;
        let resized = frame.resize_area(width, height)?;
        Ok(resized.binarize(constants::BINARY_THRESHOLD))
    }

    /// Walks a prepared grid row-major, pairing each cell with the next digit.
    ///
    /// `grid` must already be `width x height` and `digits` long enough.
    pub fn cells<'a>(
        &'a self,
        grid: &'a GrayFrame,
        digits: &'a DigitStream,
    ) -> impl Iterator<Item = Cell> + 'a {
        (0..self.height)
            .flat_map(move |row| (0..self.width).map(move |col| (row, col)))
            .zip(digits.as_slice().iter().copied())
            .map(move |((row, col), digit)| {
                let colors = if grid.is_on(col as u32, row as u32) {
                    self.on
                } else {
                    self.off
                };
                Cell { row, col, digit, colors }
            })
    }

    /// Fails with `InsufficientDigits` unless every cell gets a digit.
    pub fn check_digits(&self, digits: &DigitStream) -> Result<()> {
        let required = self.cell_count()?;
        if digits.len() < required {
            return Err(PisciiError::InsufficientDigits {
                required,
                actual: digits.len(),
            });
        }
        Ok(())
    }

    pub fn render(&self, frame: &GrayFrame, digits: &DigitStream) -> Result<RenderResult> {
        self.check_digits(digits)?;
        let required = self.cell_count()?;

        let mut result = RenderResult::default();
        if required == 0 {
            return Ok(result);
        }

        let grid = self.prepare(frame)?;
        // Each cell is two escape codes plus one digit.
        result.text.reserve(required * 11 + self.height);

        for cell in self.cells(&grid, digits) {
            if cell.col == 0 && cell.row > 0 {
                result.text.push('\n');
            }
            if grid.is_on(cell.col as u32, cell.row as u32) {
                result.freq_on.record(cell.digit);
            } else {
                result.freq_off.record(cell.digit);
            }
            cell.write_into(&mut result.text);
        }

        crate::utils::logger::debug(&format!(
            "rendered {}x{} grid: on={} off={}",
            self.width,
            self.height,
            result.freq_on.total(),
            result.freq_off.total()
        ));

        Ok(result)
    }
}
