pub const APP_NAME: &str = "Piscii";

pub const ERROR_LOG_FILE: &str = "error.log";
pub const DEBUG_LOG_FILE: &str = "debug.log";

pub const DEFAULT_WIDTH: usize = 25;
pub const DEFAULT_HEIGHT: usize = 16;

pub const DEFAULT_IMAGE_PATH: &str = "./pi.png";
pub const DEFAULT_DIGITS_PATH: &str = "./pi.txt";

pub const DEFAULT_ON_FG: &str = "WHITE";
pub const DEFAULT_ON_BG: &str = "BLACK";
pub const DEFAULT_OFF_FG: &str = "RED";
pub const DEFAULT_OFF_BG: &str = "BLACK";

/// Pixels strictly brighter than this become "on" cells.
pub const BINARY_THRESHOLD: u8 = 192;
pub const ON_VALUE: u8 = 255;
pub const OFF_VALUE: u8 = 0;

pub const SUMMARY_HEADING: &str = "Summary Table w/frequencies";

/// Exit code used when the digit file is too short for the requested grid.
pub const EXIT_INSUFFICIENT_DIGITS: i32 = 3;

pub const ANSI_RESET: &str = "\x1b[0m";
