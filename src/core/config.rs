use serde::Serialize;
use std::path::PathBuf;

use crate::renderer::{ColorPair, SummaryFormat};

/// Everything one run needs, resolved from the command line.
#[derive(Debug, Clone, Serialize)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub on: ColorPair,
    pub off: ColorPair,
    pub image_path: PathBuf,
    pub digits_path: PathBuf,
    /// `None` when no summary was requested.
    pub summary: Option<SummaryFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::ColorName;

    #[test]
    fn test_config_serializes_for_print_config() {
        let config = RenderConfig {
            width: 25,
            height: 16,
            on: ColorPair::new(ColorName::White, ColorName::Black),
            off: ColorPair::new(ColorName::Red, ColorName::Black),
            image_path: PathBuf::from("./pi.png"),
            digits_path: PathBuf::from("./pi.txt"),
            summary: Some(SummaryFormat::Json),
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["width"], 25);
        assert_eq!(value["off"]["fg"], "RED");
        assert_eq!(value["digits_path"], "./pi.txt");
        assert_eq!(value["summary"], "json");
    }
}
