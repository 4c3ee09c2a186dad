//! Decoded DICOM image types

/// Photometric interpretation value for which larger stored samples display darker.
pub const MONOCHROME1: &str = "MONOCHROME1";

/// How stored sample magnitude relates to displayed brightness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplePolarity {
    /// Higher samples are brighter (MONOCHROME2 and everything else)
    #[default]
    Normal,
    /// Higher samples are darker (MONOCHROME1)
    Inverted,
}

impl SamplePolarity {
    /// Maps a Photometric Interpretation (0028,0004) value to a polarity.
    ///
    /// Trailing padding (spaces or NULs) is ignored. Only `MONOCHROME1` is inverted.
    pub fn from_photometric_interpretation(value: &str) -> Self {
        let value = value.trim_end_matches([' ', '\0']).trim_start();
        if value == MONOCHROME1 {
            SamplePolarity::Inverted
        } else {
            SamplePolarity::Normal
        }
    }
}

/// Represents the decoded pixel data of a single DICOM frame
#[derive(Debug, Clone)]
pub struct DicomImageData {
    /// Width of the image in pixels (Columns)
    pub width: usize,
    /// Height of the image in pixels (Rows)
    pub height: usize,
    /// Stored sample values in row-major order, no modality LUT applied
    pub data: Vec<f64>,
    /// Polarity derived from the photometric interpretation
    pub polarity: SamplePolarity,
    /// Number of frames in the source object; only the first one is decoded
    pub number_of_frames: u32,
}
