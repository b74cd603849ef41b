use anyhow::Result;
use crossterm::{
    queue,
    style::{Print, ResetColor},
};
use serde::Serialize;
use std::io::{BufWriter, Write};

use super::summary::Summary;
use crate::shared::constants;

/// How the frequency summary is printed after the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    Table,
    Json,
}

/// Buffered writer for rendered grids.
///
/// Every colored block is followed by a reset so the shell prompt keeps
/// its own colors.
pub struct DisplayManager<W: Write> {
    out: BufWriter<W>,
}

impl DisplayManager<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> DisplayManager<W> {
    pub fn new(writer: W) -> Self {
        Self {
            out: BufWriter::new(writer),
        }
    }

    pub fn show_grid(&mut self, text: &str) -> Result<()> {
        queue!(self.out, Print(text), ResetColor, Print("\n"))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn show_summary(&mut self, summary: &Summary<'_>, format: SummaryFormat) -> Result<()> {
        match format {
            SummaryFormat::Table => {
                queue!(
                    self.out,
                    Print("\n"),
                    Print(constants::SUMMARY_HEADING),
                    Print("\n"),
                    Print(summary.to_table()),
                    ResetColor,
                    Print("\n")
                )?;
            }
            SummaryFormat::Json => {
                let json = summary.to_json()?;
                queue!(self.out, Print(json), Print("\n"))?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(e) => panic!("flush failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::cell::ColorPair;
    use crate::renderer::frequency::FrequencyTable;
    use crate::renderer::palette::ColorName;

    #[test]
    fn test_grid_is_followed_by_reset() {
        let mut display = DisplayManager::new(Vec::new());
        display.show_grid("\x1b[37m\x1b[40m5").unwrap();
        let bytes = display.into_inner();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("\x1b[37m\x1b[40m5"));
        assert!(text.ends_with("\x1b[0m\n"));
    }

    #[test]
    fn test_table_summary_has_heading() {
        let pair = ColorPair::new(ColorName::Green, ColorName::Black);
        let table = FrequencyTable::new();
        let summary = Summary::new(&table, pair, &table, pair);

        let mut display = DisplayManager::new(Vec::new());
        display.show_summary(&summary, SummaryFormat::Table).unwrap();
        let text = String::from_utf8(display.into_inner()).unwrap();
        assert!(text.starts_with("\nSummary Table w/frequencies\n"));
        assert!(text.contains("Total=0"));
    }

    #[test]
    fn test_json_summary_parses() {
        let pair = ColorPair::new(ColorName::Blue, ColorName::Yellow);
        let table = FrequencyTable::new();
        let summary = Summary::new(&table, pair, &table, pair);

        let mut display = DisplayManager::new(Vec::new());
        display.show_summary(&summary, SummaryFormat::Json).unwrap();
        let text = String::from_utf8(display.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["off"]["colors"]["bg"], "YELLOW");
    }
}
