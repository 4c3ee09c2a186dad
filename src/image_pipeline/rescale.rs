//! Intensity rescaling from stored DICOM samples to displayable 8-bit greyscale

pub mod linear_rescale;
pub mod types;

pub use linear_rescale::{LinearRescaler, rescale_samples};
pub use types::GreyscaleImageData;
