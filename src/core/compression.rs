use crate::errors::GliderTemplateError;

/// Per-variable zlib (deflate) setting of a NetCDF-4 variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compression {
    pub level: i32,
    pub shuffle: bool,
}

impl Compression {
    pub fn deflate(level: i32) -> Result<Self, GliderTemplateError> {
        if !(0..=9).contains(&level) {
            return Err(GliderTemplateError::InvalidCompressionLevel { level });
        }
        Ok(Self {
            level,
            shuffle: false,
        })
    }
}
