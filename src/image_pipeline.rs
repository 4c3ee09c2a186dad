//! Image processing pipeline module
//!
//! This module converts DICOM images to 8-bit greyscale PNG files, with
//! separate modules for DICOM reading, intensity rescaling, PNG writing,
//! and conversion orchestration.

pub mod dicom;
pub mod rescale;
pub mod png;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use dicom::{
    DicomImageData,
    DicomImageReader,
    DicomObjectReader,
    SamplePolarity,
};

pub use rescale::{
    GreyscaleImageData,
    LinearRescaler,
    rescale_samples,
};

pub use png::{
    PngCompression,
    ConversionConfig,
    ConversionConfigBuilder,
    PngWriter,
    StandardPngWriter,
};

pub use conversions::{
    BatchConfig,
    BatchConverter,
    BatchReport,
    ConvertedFile,
    DicomToPngPipeline,
    FailedFile,
};
