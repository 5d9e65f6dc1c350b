//! glider-template-rs: generate the IOOS glider NetCDF template and export its schema
//!
//! The template builder writes an empty glider trajectory dataset (dimensions,
//! variables, attributes, no data) as a NetCDF-4 classic model file. The schema
//! exporter reads such a file back and flattens it into a JSON document.
//!
pub mod io {
    pub mod reader;
    pub mod writer;
}

pub mod core {
    pub mod attributes;
    pub mod compression;
    pub mod data_types;
    pub mod defaults;
    pub mod dimensions;
}

pub mod template {
    pub mod catalog;
    pub mod model;
    pub mod quality_control;
}

pub mod errors;
pub mod logging;
pub mod schema;

mod utils;

use errors::GliderTemplateError;
use std::path::{Path, PathBuf};

pub use schema::{export_schema, extract_schema, SchemaDocument};

/// Builds the glider template and writes it to `path`, replacing any existing file.
pub fn create_template<P: AsRef<Path>>(path: P) -> Result<PathBuf, GliderTemplateError> {
    let template = template::catalog::glider_template()?;
    io::writer::write_template(&template, path)
}
