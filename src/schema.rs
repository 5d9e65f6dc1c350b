use crate::core::attributes::AttrValue;
use crate::errors::GliderTemplateError;
use crate::io::reader::DatasetReader;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// The flattened description of a dataset, independent of the storage format:
///
/// ```json
/// { "Dimensions": ["time", ...],
///   "Attributes": [{"Name": "title", "Value": " "}, ...],
///   "Variables": [{"Name": "lat", "Dimensions": ["time"], "Attributes": [...]}, ...] }
/// ```
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SchemaDocument {
    /// Dimension names in file order
    pub dimensions: Vec<String>,

    /// Global attributes in file order
    pub attributes: Vec<SchemaAttribute>,

    pub variables: Vec<SchemaVariable>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SchemaAttribute {
    pub name: String,

    /// Serialized as a plain string, number, or array of numbers
    pub value: AttrValue,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SchemaVariable {
    pub name: String,
    pub dimensions: Vec<String>,
    pub attributes: Vec<SchemaAttribute>,
}

impl SchemaVariable {
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        find_attribute(&self.attributes, name)
    }
}

fn find_attribute<'a>(attributes: &'a [SchemaAttribute], name: &str) -> Option<&'a AttrValue> {
    attributes.iter().find(|a| a.name == name).map(|a| &a.value)
}

fn to_schema_attributes(attributes: Vec<(String, AttrValue)>) -> Vec<SchemaAttribute> {
    attributes
        .into_iter()
        .map(|(name, value)| SchemaAttribute {
            name,
            value: value.normalize(),
        })
        .collect()
}

impl SchemaDocument {
    pub fn from_reader(reader: &DatasetReader) -> Result<Self, GliderTemplateError> {
        let dimensions = reader.dimensions().into_iter().map(|d| d.name).collect();
        let attributes = to_schema_attributes(reader.global_attributes()?);
        let variables = reader
            .variables()?
            .into_iter()
            .map(|var| SchemaVariable {
                name: var.name,
                dimensions: var.dimensions,
                attributes: to_schema_attributes(var.attributes),
            })
            .collect();

        Ok(Self {
            dimensions,
            attributes,
            variables,
        })
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        find_attribute(&self.attributes, name)
    }

    pub fn variable(&self, name: &str) -> Option<&SchemaVariable> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn to_json(&self) -> Result<String, GliderTemplateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the document as pretty printed JSON, replacing `path`.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), GliderTemplateError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| GliderTemplateError::CannotOpenFile {
            filename: path.display().to_string(),
            error: e.to_string(),
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

/// Reads the schema of the NetCDF file at `path`.
pub fn extract_schema<P: AsRef<Path>>(path: P) -> Result<SchemaDocument, GliderTemplateError> {
    let reader = DatasetReader::open(path)?;
    SchemaDocument::from_reader(&reader)
}

/// Extracts the schema of `input` and writes it as JSON to `output`.
pub fn export_schema<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<SchemaDocument, GliderTemplateError> {
    let schema = extract_schema(&input)?;
    schema.write(&output)?;
    log::info!(
        "Exported schema of {} ({} variables) to {}",
        input.as_ref().display(),
        schema.variables.len(),
        output.as_ref().display()
    );
    Ok(schema)
}
