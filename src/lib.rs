pub mod common;
pub mod processing;

pub use processing::{Message, PixelGrid, ScanOrder, StegoError};
