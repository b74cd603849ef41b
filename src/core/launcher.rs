use anyhow::{Context, Result};
use std::io::Write;

use super::config::RenderConfig;
use crate::decoder::{loader, DigitStream};
use crate::error::PisciiError;
use crate::renderer::{DigitRenderer, DisplayManager, RenderResult, Summary};

/// How a run ended when no hard error occurred.
#[derive(Debug)]
pub enum RunOutcome {
    Rendered(RenderResult),
    /// Nothing was printed; the digit file is too short for the grid.
    InsufficientDigits { required: usize, actual: usize },
}

pub fn run<W: Write>(config: &RenderConfig, display: &mut DisplayManager<W>) -> Result<RunOutcome> {
    crate::utils::logger::info(&format!(
        "run: image={} digits={} size={}x{} on={}/{} off={}/{}",
        config.image_path.display(),
        config.digits_path.display(),
        config.width,
        config.height,
        config.on.fg,
        config.on.bg,
        config.off.fg,
        config.off.bg
    ));

    let digits = DigitStream::load(&config.digits_path)
        .with_context(|| format!("Failed to load digits: {:?}", config.digits_path))?;

    let renderer = DigitRenderer::new(config.width, config.height, config.on, config.off);

    // Checked before the image is decoded so a short file never costs a decode.
    match renderer.check_digits(&digits) {
        Ok(()) => {}
        Err(PisciiError::InsufficientDigits { required, actual }) => {
            crate::utils::logger::error(&format!(
                "the number of digits in '{}' ({}) is less than the output size {}x{}={}. \
                 Add more digits to the file or reduce the output size",
                config.digits_path.display(),
                actual,
                config.width,
                config.height,
                required
            ));
            return Ok(RunOutcome::InsufficientDigits { required, actual });
        }
        Err(e) => return Err(e.into()),
    }

    let frame = loader::load_gray(&config.image_path)
        .with_context(|| format!("Failed to load image: {:?}", config.image_path))?;

    let result = renderer.render(&frame, &digits)?;
    display.show_grid(&result.text)?;

    if let Some(format) = config.summary {
        let summary = Summary::new(&result.freq_on, config.on, &result.freq_off, config.off);
        display.show_summary(&summary, format)?;
    }

    crate::utils::logger::info(&format!("done: {} digits placed", result.total()));
    Ok(RunOutcome::Rendered(result))
}
