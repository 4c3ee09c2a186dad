//! Shared error types for the DICOM to PNG pipeline.

pub mod error;

pub use error::{ConversionError, Result};
