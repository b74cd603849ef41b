pub mod digits;
pub mod frame_data;
pub mod loader;

pub use digits::DigitStream;
pub use frame_data::GrayFrame;
