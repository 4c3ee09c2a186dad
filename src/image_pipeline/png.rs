//! PNG writing module
//!
//! This module encodes 8-bit greyscale images as PNG files.

mod writer;
mod standard_png_writer;
pub mod types;

pub use writer::PngWriter;
pub use standard_png_writer::StandardPngWriter;
pub use types::{PngCompression, ConversionConfig, ConversionConfigBuilder};
