use serde::Serialize;

use super::palette::ColorName;

/// Foreground/background combination applied to a rendered digit.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct ColorPair {
    pub fg: ColorName,
    pub bg: ColorName,
}

impl ColorPair {
    pub fn new(fg: ColorName, bg: ColorName) -> Self {
        Self { fg, bg }
    }

    /// Escape prefix written before every digit painted with this pair.
    pub fn prefix(&self) -> String {
        format!("{}{}", self.fg.fg_code(), self.bg.bg_code())
    }

    /// Wraps `text` in this pair's colors.
    pub fn paint(&self, text: &str) -> String {
        format!("{}{}", self.prefix(), text)
    }
}

/// A single grid cell as it is produced by the scan.
///
/// Cells are not retained; the processor formats them straight into text.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub digit: u8,
    pub colors: ColorPair,
}

impl Cell {
    pub fn glyph(&self) -> char {
        char::from(b'0' + self.digit)
    }

    pub fn write_into(&self, out: &mut String) {
        out.push_str(self.colors.fg.fg_code());
        out.push_str(self.colors.bg.bg_code());
        out.push(self.glyph());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_writes_fg_then_bg_then_digit() {
        let cell = Cell {
            row: 0,
            col: 0,
            digit: 7,
            colors: ColorPair::new(ColorName::White, ColorName::Black),
        };
        let mut out = String::new();
        cell.write_into(&mut out);
        assert_eq!(out, "\x1b[37m\x1b[40m7");
    }

    #[test]
    fn test_paint_uses_prefix() {
        let pair = ColorPair::new(ColorName::Red, ColorName::Yellow);
        assert_eq!(pair.paint("[1]=2"), "\x1b[31m\x1b[43m[1]=2");
    }
}
