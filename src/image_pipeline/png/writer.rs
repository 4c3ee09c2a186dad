use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::rescale::types::GreyscaleImageData;
use crate::image_pipeline::png::types::ConversionConfig;

pub trait PngWriter {
    fn write_png(&self, image: &GreyscaleImageData, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
