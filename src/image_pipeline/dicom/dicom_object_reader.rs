//! DICOM image reader implementation using the dicom-rs libraries.
//!
//! Parsing of the file is done by `dicom-object`, pixel data decoding
//! (including the compressed transfer syntaxes it supports) by
//! `dicom-pixeldata`. Only the first frame of a single channel image is read.

use tracing::debug;
use dicom_dictionary_std::tags;
use dicom_object::DefaultDicomObject;
use dicom_pixeldata::{ConvertOptions, ModalityLutOption, PixelDecoder};
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::dicom::types::{DicomImageData, SamplePolarity};
use crate::image_pipeline::dicom::reader::DicomImageReader;

/// DICOM image reader backed by `dicom-object` and `dicom-pixeldata`.
pub struct DicomObjectReader;

/// Length of the preamble preceding the `DICM` magic code in a Part 10 file.
const PREAMBLE_LEN: usize = 128;

const MAGIC_CODE: &[u8; 4] = b"DICM";

/// Strips the optional 128-byte preamble, returning the bytes starting at `DICM`.
fn skip_preamble(data: &[u8]) -> Result<&[u8]> {
    if data.starts_with(MAGIC_CODE) {
        return Ok(data);
    }

    match data.get(PREAMBLE_LEN..) {
        Some(rest) if rest.starts_with(MAGIC_CODE) => Ok(rest),
        _ => Err(ConversionError::DecodeError(
            "missing DICM magic code, not a DICOM Part 10 file".to_string(),
        )),
    }
}

fn photometric_interpretation(obj: &DefaultDicomObject) -> Result<String> {
    let element = obj
        .element(tags::PHOTOMETRIC_INTERPRETATION)
        .map_err(|e| ConversionError::DecodeError(format!("Photometric Interpretation: {}", e)))?;
    let value = element
        .to_str()
        .map_err(|e| ConversionError::DecodeError(format!("Photometric Interpretation: {}", e)))?;
    Ok(value.trim_end_matches([' ', '\0']).to_string())
}

fn number_of_frames(obj: &DefaultDicomObject) -> u32 {
    obj.element_opt(tags::NUMBER_OF_FRAMES)
        .ok()
        .flatten()
        .and_then(|element| element.to_int::<u32>().ok())
        .unwrap_or(1)
}

impl DicomImageReader for DicomObjectReader {
    /// Reads and decodes the first frame of a DICOM file.
    ///
    /// This method:
    /// 1. Parses the file meta group and data set with dicom-object
    /// 2. Reads the photometric interpretation to determine polarity
    /// 3. Decodes frame 0 into `f64` samples without the modality LUT, so
    ///    the values are the stored values of the file
    ///
    /// # Arguments
    ///
    /// * `data` - Bytes of the DICOM file, with or without the preamble
    ///
    /// # Returns
    ///
    /// * `Ok(DicomImageData)` - Decoded samples and polarity
    /// * `Err(ConversionError)` - Not a DICOM file, missing attributes, or
    ///   pixel data that cannot be decoded
    fn read_dicom(&self, data: &[u8]) -> Result<DicomImageData> {
        debug!("Decoding DICOM file, {} bytes", data.len());

        let body = skip_preamble(data)?;
        let obj = dicom_object::from_reader(body)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let interpretation = photometric_interpretation(&obj)?;
        let polarity = SamplePolarity::from_photometric_interpretation(&interpretation);
        let number_of_frames = number_of_frames(&obj);

        let decoded = obj
            .decode_pixel_data_frame(0)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let samples_per_pixel = decoded.samples_per_pixel();
        if samples_per_pixel != 1 {
            return Err(ConversionError::UnsupportedFormat(format!(
                "{} samples per pixel ({}), only greyscale images are supported",
                samples_per_pixel, interpretation
            )));
        }

        let width = decoded.columns() as usize;
        let height = decoded.rows() as usize;

        // Stored values, as read by the file: no rescale slope/intercept
        let options = ConvertOptions::new().with_modality_lut(ModalityLutOption::None);
        // `decoded` only holds frame 0, so this is that frame in row-major order
        let samples = decoded
            .to_vec_with_options::<f64>(&options)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        debug!(
            "Decoded image: {}x{}, {} ({:?}), {} frame(s)",
            width, height, interpretation, polarity, number_of_frames
        );
        if number_of_frames > 1 {
            debug!("Only the first of {} frames is converted", number_of_frames);
        }

        Ok(DicomImageData {
            width,
            height,
            data: samples,
            polarity,
            number_of_frames,
        })
    }
}
