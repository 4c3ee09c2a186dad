#![allow(dead_code)]

use std::path::Path;

use dicom_core::{DataElement, PrimitiveValue, VR};
use dicom_dictionary_std::{tags, uids};
use dicom_object::{FileMetaTableBuilder, InMemDicomObject};

const INSTANCE_UID: &str = "2.25.276195307238400937207939128325212543217";

fn image_object(rows: u16, columns: u16, photometric: &str, pixel_representation: u16) -> Vec<DataElement<InMemDicomObject>> {
    vec![
        DataElement::new(tags::SOP_CLASS_UID, VR::UI, PrimitiveValue::from(uids::SECONDARY_CAPTURE_IMAGE_STORAGE)),
        DataElement::new(tags::SOP_INSTANCE_UID, VR::UI, PrimitiveValue::from(INSTANCE_UID)),
        DataElement::new(tags::PHOTOMETRIC_INTERPRETATION, VR::CS, PrimitiveValue::from(photometric)),
        DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(rows)),
        DataElement::new(tags::COLUMNS, VR::US, PrimitiveValue::from(columns)),
        DataElement::new(tags::PIXEL_REPRESENTATION, VR::US, PrimitiveValue::from(pixel_representation)),
    ]
}

fn save(elements: Vec<DataElement<InMemDicomObject>>, path: &Path) {
    let obj = InMemDicomObject::from_element_iter(elements)
        .with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
                .media_storage_sop_class_uid(uids::SECONDARY_CAPTURE_IMAGE_STORAGE)
                .media_storage_sop_instance_uid(INSTANCE_UID),
        )
        .unwrap();
    obj.write_to_file(path).unwrap();
}

/// Writes a 16-bit unsigned single channel image.
pub fn write_grey_dicom(path: &Path, rows: u16, columns: u16, photometric: &str, pixels: &[u16]) {
    let mut elements = image_object(rows, columns, photometric, 0);
    elements.extend([
        DataElement::new(tags::SAMPLES_PER_PIXEL, VR::US, PrimitiveValue::from(1_u16)),
        DataElement::new(tags::BITS_ALLOCATED, VR::US, PrimitiveValue::from(16_u16)),
        DataElement::new(tags::BITS_STORED, VR::US, PrimitiveValue::from(16_u16)),
        DataElement::new(tags::HIGH_BIT, VR::US, PrimitiveValue::from(15_u16)),
        DataElement::new(tags::PIXEL_DATA, VR::OW, PrimitiveValue::U16(pixels.iter().copied().collect())),
    ]);
    save(elements, path);
}

/// Writes a 16-bit signed single channel image holding `frames` frames back to back.
pub fn write_signed_multiframe_dicom(path: &Path, rows: u16, columns: u16, frames: u32, pixels: &[i16]) {
    let mut elements = image_object(rows, columns, "MONOCHROME2", 1);
    elements.extend([
        DataElement::new(tags::NUMBER_OF_FRAMES, VR::IS, PrimitiveValue::from(frames.to_string())),
        DataElement::new(tags::SAMPLES_PER_PIXEL, VR::US, PrimitiveValue::from(1_u16)),
        DataElement::new(tags::BITS_ALLOCATED, VR::US, PrimitiveValue::from(16_u16)),
        DataElement::new(tags::BITS_STORED, VR::US, PrimitiveValue::from(16_u16)),
        DataElement::new(tags::HIGH_BIT, VR::US, PrimitiveValue::from(15_u16)),
        DataElement::new(tags::PIXEL_DATA, VR::OW, PrimitiveValue::U16(pixels.iter().map(|&v| v as u16).collect())),
    ]);
    save(elements, path);
}

pub fn write_rgb_dicom(path: &Path) {
    let mut elements = image_object(1, 2, "RGB", 0);
    elements.extend([
        DataElement::new(tags::SAMPLES_PER_PIXEL, VR::US, PrimitiveValue::from(3_u16)),
        DataElement::new(tags::PLANAR_CONFIGURATION, VR::US, PrimitiveValue::from(0_u16)),
        DataElement::new(tags::BITS_ALLOCATED, VR::US, PrimitiveValue::from(8_u16)),
        DataElement::new(tags::BITS_STORED, VR::US, PrimitiveValue::from(8_u16)),
        DataElement::new(tags::HIGH_BIT, VR::US, PrimitiveValue::from(7_u16)),
        DataElement::new(tags::PIXEL_DATA, VR::OB, PrimitiveValue::U8([255u8, 0, 0, 0, 255, 0].into_iter().collect())),
    ]);
    save(elements, path);
}

pub fn read_png(path: &Path) -> image::GrayImage {
    let image = image::open(path).unwrap();
    assert_eq!(image.color(), image::ColorType::L8);
    image.into_luma8()
}
