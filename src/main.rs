mod core;
mod decoder;
mod error;
mod renderer;
mod shared;
mod utils;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::config::RenderConfig;
use crate::core::launcher::{self, RunOutcome};
use crate::renderer::palette::parse_color_name;
use crate::renderer::{ColorName, ColorPair, DisplayManager, SummaryFormat};
use crate::shared::constants;
use crate::utils::file_utils::expand_home;

/// Paint an image with the digits of a number.
///
/// Bright pixels use the --fg/--bg pair, dark pixels the --xfg/--xbg pair.
/// Valid color names: WHITE BLACK BLUE CYAN GREEN MAGENTA RED YELLOW.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output width in characters
    #[arg(short, long, default_value_t = constants::DEFAULT_WIDTH)]
    width: usize,
    /// Output height in characters
    #[arg(short = 'H', long, default_value_t = constants::DEFAULT_HEIGHT)]
    height: usize,
    /// Background color of bright cells
    #[arg(long, value_name = "NAME", default_value = constants::DEFAULT_ON_BG, value_parser = parse_color_name)]
    bg: ColorName,
    /// Foreground color of bright cells
    #[arg(long, value_name = "NAME", default_value = constants::DEFAULT_ON_FG, value_parser = parse_color_name)]
    fg: ColorName,
    /// Background color of dark cells
    #[arg(long, visible_alias = "nbg", value_name = "NAME", default_value = constants::DEFAULT_OFF_BG, value_parser = parse_color_name)]
    xbg: ColorName,
    /// Foreground color of dark cells
    #[arg(long, visible_alias = "nfg", value_name = "NAME", default_value = constants::DEFAULT_OFF_FG, value_parser = parse_color_name)]
    xfg: ColorName,
    /// Black/white input image
    #[arg(short, long, value_name = "PATH", default_value = constants::DEFAULT_IMAGE_PATH)]
    image: String,
    /// Text file holding the digits
    #[arg(short, long, value_name = "PATH", default_value = constants::DEFAULT_DIGITS_PATH)]
    digits: String,
    /// Print how many of each digit landed in each color
    #[arg(short, long, default_value_t = false)]
    summary: bool,
    /// Summary layout when --summary is given
    #[arg(long, value_enum, default_value_t = SummaryFormat::Table)]
    summary_format: SummaryFormat,
    /// Write error.log and debug.log into this directory
    #[arg(long, value_name = "DIR")]
    log_dir: Option<String>,
    /// Print the resolved configuration as JSON and exit
    #[arg(long, default_value_t = false)]
    print_config: bool,
}

impl Cli {
    fn to_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            on: ColorPair::new(self.fg, self.bg),
            off: ColorPair::new(self.xfg, self.xbg),
            image_path: expand_home(&self.image),
            digits_path: expand_home(&self.digits),
            summary: self.summary.then_some(self.summary_format),
        }
    }
}

/// Process exit code for outcomes that are not plain success.
fn exit_code(outcome: &RunOutcome) -> Option<i32> {
    match outcome {
        RunOutcome::Rendered(_) => None,
        RunOutcome::InsufficientDigits { .. } => Some(constants::EXIT_INSUFFICIENT_DIGITS),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(dir) = &cli.log_dir {
        let dir: PathBuf = expand_home(dir);
        std::fs::create_dir_all(&dir)?;
        crate::utils::logger::init(&dir);
    }

    let config = cli.to_config();

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let mut display = DisplayManager::stdout();
    let outcome = launcher::run(&config, &mut display)?;
    match &outcome {
        RunOutcome::Rendered(result) => crate::utils::logger::debug(&format!(
            "printed {} bytes of grid text",
            result.text.len()
        )),
        RunOutcome::InsufficientDigits { required, actual } => crate::utils::logger::debug(
            &format!("stopping: {} of {} digits", actual, required),
        ),
    }

    if let Some(code) = exit_code(&outcome) {
        std::process::exit(code);
    }
    Ok(())
}
