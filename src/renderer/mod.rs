pub mod cell;
pub mod display;
pub mod frequency;
pub mod palette;
pub mod processor;
pub mod summary;

pub use cell::ColorPair;
pub use display::{DisplayManager, SummaryFormat};
pub use palette::ColorName;
pub use processor::{DigitRenderer, RenderResult};
pub use summary::Summary;
