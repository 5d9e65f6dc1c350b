use crate::core::data_types::DataType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GliderTemplateError {
    #[error("Cannot open file '{filename}': {error}")]
    CannotOpenFile { filename: String, error: String },
    #[error("Cannot remove file '{filename}': {error}")]
    CannotRemoveFile { filename: String, error: String },
    #[error("File not found: {filename}")]
    FileNotFound { filename: String },
    #[error("Variable '{variable}' references undeclared dimension '{dimension}'")]
    UndeclaredDimension { variable: String, dimension: String },
    #[error("Dimension '{name}' is declared more than once")]
    DuplicateDimension { name: String },
    #[error("Variable '{name}' is declared more than once")]
    DuplicateVariable { name: String },
    #[error("Only one unlimited dimension is allowed")]
    MultipleUnlimitedDimensions,
    #[error("Variable '{variable}' must use the unlimited dimension as its first dimension")]
    UnlimitedDimensionNotLeading { variable: String },
    #[error("Fill value of variable '{variable}' is {found:?}, expected {expected:?}")]
    FillValueTypeMismatch {
        variable: String,
        expected: DataType,
        found: DataType,
    },
    #[error("Invalid compression level {level}, must be between 0 and 9")]
    InvalidCompressionLevel { level: i32 },
    #[error("Attribute '{name}' of '{owner}' cannot be stored in a classic model file")]
    NonClassicAttribute { owner: String, name: String },
    #[error("Attribute '{name}' has an unsupported value type")]
    UnsupportedAttributeType { name: String },
    #[error("NetCDF error: {0}")]
    NetCdf(#[from] netcdf::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
