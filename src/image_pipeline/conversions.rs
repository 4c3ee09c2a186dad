//! Pipeline conversions module
//!
//! Orchestration of the DICOM to PNG conversion, for a single file and for a
//! whole source directory tree.

mod dicom_to_png;
mod batch;


pub use dicom_to_png::DicomToPngPipeline;
pub use batch::{
    BatchConfig, BatchConverter, BatchReport, ConvertedFile, FailedFile,
    discover_source_directories, list_directory_files, output_path_for,
};
