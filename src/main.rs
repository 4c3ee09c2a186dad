use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use dicom2png_rs::image_pipeline::{BatchConfig, BatchConverter, ConversionConfig, DicomToPngPipeline};
use dicom2png_rs::logger;

use tracing::{error, info};

/// Converts every DICOM file below a directory into an 8-bit greyscale PNG.
///
/// Outputs are written flat into the output directory as `<file name>.png`;
/// inputs sharing a file name overwrite each other.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory tree to search for DICOM files
    #[arg(env = "DICOM2PNG_SOURCE_DIR")]
    source_dir: PathBuf,

    /// Directory receiving the PNG files, created if missing
    #[arg(env = "DICOM2PNG_OUTPUT_DIR")]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init();

    info!("Starting dicom2png...");

    let pipeline = DicomToPngPipeline::new(ConversionConfig::default());
    info!("Compression: {:?}", pipeline.config().compression);

    let batch = BatchConverter::new(pipeline, BatchConfig::new(args.source_dir, args.output_dir));
    info!("Source: {}", batch.config().source_dir.display());
    info!("Output: {}", batch.config().output_dir.display());

    let report = batch.run()?;

    for failed in &report.failed {
        error!("Could not convert {}: {}", failed.source.display(), failed.error);
    }

    if !report.is_success() {
        bail!(
            "{} of {} file(s) failed to convert",
            report.failed.len(),
            report.failed.len() + report.converted.len()
        );
    }

    info!("Converted {} file(s)", report.converted.len());
    Ok(())
}
