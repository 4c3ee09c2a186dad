//! PNG conversion configuration types

/// PNG compression levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngCompression {
    /// Fastest encoding, larger files
    Fast,
    /// Balanced (default)
    Default,
    /// Smallest files (slower)
    Best,
}

/// Configuration for DICOM to PNG conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Compression level to use
    pub compression: PngCompression,
    /// Whether to reject empty images and sample counts that don't match the dimensions
    pub validate_dimensions: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            compression: PngCompression::Default,
            validate_dimensions: true,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    compression: Option<PngCompression>,
    validate_dimensions: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn compression(mut self, compression: PngCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            compression: self.compression.unwrap_or(default.compression),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
        }
    }
}
