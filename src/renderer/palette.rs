use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::PisciiError;

/// The eight basic ANSI colors a digit can be painted with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColorName {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

// Indexed by the ANSI color number (SGR 30+n / 40+n).
const ALL: [ColorName; 8] = [
    ColorName::Black,
    ColorName::Red,
    ColorName::Green,
    ColorName::Yellow,
    ColorName::Blue,
    ColorName::Magenta,
    ColorName::Cyan,
    ColorName::White,
];

const NAMES: [&str; 8] = [
    "BLACK", "RED", "GREEN", "YELLOW", "BLUE", "MAGENTA", "CYAN", "WHITE",
];

const FOREGROUND_CODES: [&str; 8] = [
    "\x1b[30m", "\x1b[31m", "\x1b[32m", "\x1b[33m", "\x1b[34m", "\x1b[35m", "\x1b[36m", "\x1b[37m",
];

const BACKGROUND_CODES: [&str; 8] = [
    "\x1b[40m", "\x1b[41m", "\x1b[42m", "\x1b[43m", "\x1b[44m", "\x1b[45m", "\x1b[46m", "\x1b[47m",
];

impl ColorName {
    fn index(self) -> usize {
        self as usize
    }

    pub fn all() -> &'static [ColorName] {
        &ALL
    }

    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    /// SGR escape that sets this color as the text color.
    pub fn fg_code(self) -> &'static str {
        FOREGROUND_CODES[self.index()]
    }

    /// SGR escape that sets this color as the cell background.
    pub fn bg_code(self) -> &'static str {
        BACKGROUND_CODES[self.index()]
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorName {
    type Err = PisciiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        NAMES
            .iter()
            .position(|name| *name == wanted)
            .map(|i| Self::all()[i])
            .ok_or_else(|| PisciiError::UnknownColorName(s.trim().to_string()))
    }
}

/// clap value parser for the color flags.
pub fn parse_color_name(s: &str) -> Result<ColorName, PisciiError> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!("red".parse::<ColorName>().unwrap(), ColorName::Red);
        assert_eq!("  Magenta\t".parse::<ColorName>().unwrap(), ColorName::Magenta);
        assert_eq!("WHITE".parse::<ColorName>().unwrap(), ColorName::White);
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        match "purple".parse::<ColorName>() {
            Err(PisciiError::UnknownColorName(name)) => assert_eq!(name, "purple"),
            other => panic!("expected UnknownColorName, got {:?}", other),
        }
        assert!(parse_color_name("").is_err());
    }

    #[test]
    fn test_codes_match_ansi_numbers() {
        assert_eq!(ColorName::Black.fg_code(), "\x1b[30m");
        assert_eq!(ColorName::Red.fg_code(), "\x1b[31m");
        assert_eq!(ColorName::White.fg_code(), "\x1b[37m");
        assert_eq!(ColorName::Blue.bg_code(), "\x1b[44m");
        assert_eq!(ColorName::Cyan.bg_code(), "\x1b[46m");
    }

    #[test]
    fn test_every_name_round_trips_through_display() {
        for color in ColorName::all() {
            assert_eq!(color.to_string().parse::<ColorName>().unwrap(), *color);
        }
    }
}
