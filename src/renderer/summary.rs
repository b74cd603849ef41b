use serde::Serialize;

use super::cell::ColorPair;
use super::frequency::FrequencyTable;
use crate::shared::constants;

/// One summary row: a bucket's counts and the colors it was painted with.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Bucket<'a> {
    pub colors: ColorPair,
    pub counts: &'a FrequencyTable,
}

#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub on: Bucket<'a>,
    pub off: Bucket<'a>,
    pub total: usize,
}

impl<'a> Summary<'a> {
    pub fn new(
        freq_on: &'a FrequencyTable,
        on: ColorPair,
        freq_off: &'a FrequencyTable,
        off: ColorPair,
    ) -> Self {
        Self {
            on: Bucket { colors: on, counts: freq_on },
            off: Bucket { colors: off, counts: freq_off },
            total: freq_on.total() + freq_off.total(),
        }
    }

    /// Plain "simple" table: dash rules around two rows of `[d]=count`
    /// cells, each painted in its bucket's colors, then `Total=N`.
    pub fn to_table(&self) -> String {
        let rows: Vec<Vec<(String, ColorPair)>> = [self.on, self.off]
            .iter()
            .map(|bucket| {
                bucket
                    .counts
                    .iter()
                    .map(|(digit, count)| (format!("[{}]={}", digit, count), bucket.colors))
                    .collect()
            })
            .collect();

        // Column widths come from the visible text only.
        let widths: Vec<usize> = (0..10)
            .map(|col| rows.iter().map(|row| row[col].0.len()).max().unwrap_or(0))
            .collect();

        let rule = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ");

        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        for row in &rows {
            let line = row
                .iter()
                .zip(&widths)
                .map(|((text, colors), width)| {
                    format!(
                        "{}{}{}",
                        colors.paint(text),
                        constants::ANSI_RESET,
                        " ".repeat(width - text.len())
                    )
                })
                .collect::<Vec<_>>()
                .join("  ");
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("Total={}", self.total));
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
