use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input: {0}")]
    InputReadError(String),
    
    #[error("Failed to write output: {0}")]
    OutputWriteError(String),
    
    #[error("Failed to decode DICOM image: {0}")]
    DecodeError(String),
    
    #[error("Failed to encode PNG image: {0}")]
    EncodeError(String),
    
    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),
    
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
