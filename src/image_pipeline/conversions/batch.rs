//! Conversion of every file below a source directory into one flat output directory.

use std::collections::{BTreeSet, HashSet};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};
use walkdir::WalkDir;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    conversions::DicomToPngPipeline,
    dicom::DicomImageReader,
    png::PngWriter,
};

/// Extension appended to every input file name.
const PNG_SUFFIX: &str = ".png";

/// Source and destination of a batch run
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Root of the tree searched for DICOM files
    pub source_dir: PathBuf,
    /// Flat directory receiving one PNG per input file
    pub output_dir: PathBuf,
}

impl BatchConfig {
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub source: PathBuf,
    pub error: String,
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<ConvertedFile>,
    pub failed: Vec<FailedFile>,
    /// Outputs written more than once because input file names collided
    pub overwritten: Vec<PathBuf>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Returns `output_dir/<file_name>.png`, keeping any extension the input already has.
pub fn output_path_for(output_dir: &Path, file_name: &OsStr) -> PathBuf {
    let mut name = file_name.to_os_string();
    name.push(PNG_SUFFIX);
    output_dir.join(name)
}

/// Walks `root` and returns every directory directly containing at least one file, sorted.
pub fn discover_source_directories(root: &Path) -> Result<Vec<PathBuf>> {
    fs::read_dir(root).map_err(|e| {
        ConversionError::InputReadError(format!("{}: {}", root.display(), e))
    })?;

    let mut directories = BTreeSet::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.path().is_file() {
            if let Some(parent) = entry.path().parent() {
                directories.insert(parent.to_path_buf());
            }
        }
    }

    Ok(directories.into_iter().collect())
}

/// Lists the files directly inside `dir`, sorted. Subdirectories are skipped.
pub fn list_directory_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        ConversionError::InputReadError(format!("{}: {}", dir.display(), e))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

pub struct BatchConverter<R: DicomImageReader, W: PngWriter> {
    pipeline: DicomToPngPipeline<R, W>,
    config: BatchConfig,
}

impl<R: DicomImageReader, W: PngWriter> BatchConverter<R, W> {
    pub fn new(pipeline: DicomToPngPipeline<R, W>, config: BatchConfig) -> Self {
        Self { pipeline, config }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Converts every discovered file.
    ///
    /// Failures of individual files are logged and collected in the report.
    /// Only an unreadable source root or an output directory that can't be
    /// created abort the run.
    pub fn run(&self) -> Result<BatchReport> {
        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|e| {
            ConversionError::OutputWriteError(format!("{}: {}", output_dir.display(), e))
        })?;

        let directories = discover_source_directories(&self.config.source_dir)?;
        info!(
            source = %self.config.source_dir.display(),
            directories = directories.len(),
            "Discovered source directories"
        );

        let mut report = BatchReport::default();
        let mut written = HashSet::new();

        for directory in &directories {
            info!(directory = %directory.display(), "Processing source directory");

            let files = match list_directory_files(directory) {
                Ok(files) => files,
                Err(e) => {
                    error!(directory = %directory.display(), "Could not list directory: {}", e);
                    report.failed.push(FailedFile {
                        source: directory.clone(),
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            for file in files {
                self.convert_one(file, &mut written, &mut report);
            }
        }

        info!(
            converted = report.converted.len(),
            failed = report.failed.len(),
            overwritten = report.overwritten.len(),
            "Batch complete"
        );
        Ok(report)
    }

    fn convert_one(&self, source: PathBuf, written: &mut HashSet<PathBuf>, report: &mut BatchReport) {
        let Some(file_name) = source.file_name() else {
            warn!(source = %source.display(), "Skipping entry without a file name");
            report.failed.push(FailedFile {
                source: source.clone(),
                error: "path has no file name".to_string(),
            });
            return;
        };
        let output = output_path_for(&self.config.output_dir, file_name);

        match self.pipeline.convert_file(&source, &output) {
            Ok(()) => {
                if !written.insert(output.clone()) {
                    warn!(
                        source = %source.display(),
                        output = %output.display(),
                        "Output overwritten by a file with the same name"
                    );
                    report.overwritten.push(output.clone());
                }
                info!(source = %source.display(), "Converted");
                report.converted.push(ConvertedFile { source, output });
            }
            Err(e) => {
                error!(source = %source.display(), "Could not convert: {}", e);
                report.failed.push(FailedFile {
                    source,
                    error: e.to_string(),
                });
            }
        }
    }
}
