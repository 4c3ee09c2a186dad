use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::dicom::types::DicomImageData;

pub trait DicomImageReader {
    fn read_dicom(&self, data: &[u8]) -> Result<DicomImageData>;
}
