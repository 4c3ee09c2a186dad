use std::io::Write;
use tracing::debug;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::rescale::types::GreyscaleImageData;
use crate::image_pipeline::png::types::{ConversionConfig, PngCompression};
use crate::image_pipeline::png::writer::PngWriter;

pub struct StandardPngWriter;

impl PngWriter for StandardPngWriter {
    fn write_png(&self, image: &GreyscaleImageData, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width, image.height);

        let width = u32::try_from(image.width)
            .map_err(|_| ConversionError::InvalidDimensions(image.width, image.height))?;
        let height = u32::try_from(image.height)
            .map_err(|_| ConversionError::InvalidDimensions(image.width, image.height))?;

        // The encoder panics on a short buffer
        if image.data.len() != image.width * image.height {
            return Err(ConversionError::InvalidDimensions(image.width, image.height));
        }

        let compression = match config.compression {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Default => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        };

        let mut buffer = Vec::new();

        PngEncoder::new_with_quality(&mut buffer, compression, FilterType::Adaptive)
            .write_image(&image.data, width, height, ExtendedColorType::L8)
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("PNG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(image: &GreyscaleImageData, config: &ConversionConfig) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        StandardPngWriter.write_png(image, &mut output, config)?;
        Ok(output)
    }

    #[test]
    fn test_writes_greyscale_png() {
        let image = GreyscaleImageData {
            width: 3,
            height: 2,
            data: vec![0, 85, 170, 255, 10, 20],
        };

        let bytes = encode(&image, &ConversionConfig::default()).unwrap();
        let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png).unwrap();

        assert_eq!(decoded.color(), image::ColorType::L8);
        assert_eq!((decoded.width(), decoded.height()), (3, 2));
        assert_eq!(decoded.into_luma8().into_raw(), image.data);
    }

    #[test]
    fn test_every_compression_decodes_identically() {
        let image = GreyscaleImageData {
            width: 16,
            height: 16,
            data: (0..=255).collect(),
        };

        for compression in [PngCompression::Fast, PngCompression::Default, PngCompression::Best] {
            let config = ConversionConfig::builder().compression(compression).build();
            let bytes = encode(&image, &config).unwrap();
            let decoded = image::load_from_memory(&bytes).unwrap().into_luma8();
            assert_eq!(decoded.into_raw(), image.data, "{compression:?}");
        }
    }

    #[test]
    fn test_mismatched_buffer_is_rejected() {
        let image = GreyscaleImageData {
            width: 4,
            height: 4,
            data: vec![0; 3],
        };

        let result = encode(&image, &ConversionConfig::default());
        assert!(matches!(result.unwrap_err(), ConversionError::InvalidDimensions(4, 4)));
    }
}
