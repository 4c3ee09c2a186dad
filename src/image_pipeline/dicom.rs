//! DICOM image reading module
//!
//! This module turns the bytes of a DICOM file into a plain grid of samples,
//! keeping only what the greyscale conversion needs.

mod reader;
mod dicom_object_reader;
pub mod types;

pub use reader::DicomImageReader;
pub use dicom_object_reader::DicomObjectReader;
pub use types::{DicomImageData, SamplePolarity};
