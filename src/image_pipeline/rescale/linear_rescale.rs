use tracing::debug;
use crate::image_pipeline::{
    dicom::{DicomImageData, SamplePolarity},
    rescale::GreyscaleImageData,
};

const U8_MAX: f64 = u8::MAX as f64;

fn grid_max(samples: &[f64]) -> f64 {
    samples.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Rescales samples linearly into `0..=255`.
///
/// Inverted samples are first flipped against the grid maximum, then negative
/// values are clamped to zero, and the result is scaled so the largest sample
/// maps to 255. Fractions are truncated toward zero.
///
/// A grid whose maximum is not positive after clamping (all zeros, or empty)
/// has nothing to scale against and yields all zeros.
pub fn rescale_samples(samples: &[f64], polarity: SamplePolarity) -> Vec<u8> {
    let mut values = samples.to_vec();

    if polarity == SamplePolarity::Inverted {
        let max = grid_max(&values);
        for v in values.iter_mut() {
            *v = max - *v;
        }
    }

    for v in values.iter_mut() {
        *v = v.max(0.0);
    }

    let max = grid_max(&values);
    if max <= 0.0 {
        debug!("No positive samples to scale against, output is all zeros");
        return vec![0; values.len()];
    }

    // Divide before multiplying, truncating like a plain narrowing cast
    values
        .iter()
        .map(|&v| ((v / max) * U8_MAX) as u8)
        .collect()
}

/// Converts decoded DICOM samples into an 8-bit greyscale image.
pub struct LinearRescaler;

impl LinearRescaler {
    pub fn new() -> Self {
        Self
    }

    pub fn process(&self, image: &DicomImageData) -> GreyscaleImageData {
        debug!(
            "Rescaling {}x{} image ({:?})",
            image.width, image.height, image.polarity
        );

        GreyscaleImageData {
            width: image.width,
            height: image.height,
            data: rescale_samples(&image.data, image.polarity),
        }
    }
}

impl Default for LinearRescaler {
    fn default() -> Self {
        Self::new()
    }
}
