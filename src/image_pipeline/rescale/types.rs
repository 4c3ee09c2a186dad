//! Types for rescaling operations

/// 8-bit greyscale image data ready for encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreyscaleImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// One byte per pixel, row-major
    pub data: Vec<u8>,
}
