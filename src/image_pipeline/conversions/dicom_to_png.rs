use tracing::{debug, info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    dicom::{DicomImageReader, DicomObjectReader},
    png::{PngWriter, StandardPngWriter, ConversionConfig},
    rescale::LinearRescaler,
};

pub struct DicomToPngPipeline<R: DicomImageReader, W: PngWriter> {
    reader: R,
    writer: W,
    rescaler: LinearRescaler,
    config: ConversionConfig,
}

impl DicomToPngPipeline<DicomObjectReader, StandardPngWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self::with_custom(DicomObjectReader, StandardPngWriter, config)
    }
}

impl<R: DicomImageReader, W: PngWriter> DicomToPngPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            rescaler: LinearRescaler::new(),
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize, sample_count: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 || width.checked_mul(height) != Some(sample_count) {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        debug!("Starting DICOM to PNG conversion");

        let dicom_image = {
            let _span = tracing::info_span!("decode_dicom").entered();
            self.reader.read_dicom(input_data)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = dicom_image.width,
                height = dicom_image.height
            ).entered();
            self.validate_dimensions(dicom_image.width, dicom_image.height, dicom_image.data.len())?;
        }

        let greyscale = {
            let _span = tracing::info_span!("rescale").entered();
            self.rescaler.process(&dicom_image)
        };

        {
            let _span = tracing::info_span!("encode_png").entered();
            self.writer.write_png(&greyscale, output, &self.config)?;
        }

        debug!(
            width = greyscale.width,
            height = greyscale.height,
            "Conversion complete"
        );
        Ok(())
    }

    /// Converts `input_path` and writes the PNG to `output_path`.
    ///
    /// The PNG is encoded in memory first, so nothing is written when decoding fails.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut encoded = Vec::new();
        self.convert(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
