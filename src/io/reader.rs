use crate::core::attributes::AttrValue;
use crate::core::data_types::DataType;
use crate::core::dimensions::Dimension;
use crate::errors::GliderTemplateError;
use crate::utils::require_file;
use netcdf::{Attribute, File};
use std::path::Path;

/// A variable as stored in a file. `data_type` is `None` for types outside the
/// classic data model (unsigned, 64-bit, string, compound and similar).
#[derive(Debug, Clone, PartialEq)]
pub struct VariableInfo {
    pub name: String,
    pub data_type: Option<DataType>,
    pub dimensions: Vec<String>,
    /// In file order, values normalized
    pub attributes: Vec<(String, AttrValue)>,
}

impl VariableInfo {
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }
}

/// Read-only view of a NetCDF file. The handle is closed on drop.
pub struct DatasetReader {
    file: File,
}

impl DatasetReader {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GliderTemplateError> {
        let path = path.as_ref();
        require_file(path)?;
        let file = netcdf::open(path).map_err(|e| GliderTemplateError::CannotOpenFile {
            filename: path.display().to_string(),
            error: e.to_string(),
        })?;
        Ok(Self { file })
    }

    /// Root group dimensions in declaration order
    pub fn dimensions(&self) -> Vec<Dimension> {
        self.file
            .dimensions()
            .map(|d| {
                if d.is_unlimited() {
                    Dimension::unlimited(&d.name())
                } else {
                    Dimension::fixed(&d.name(), d.len())
                }
            })
            .collect()
    }

    pub fn global_attributes(&self) -> Result<Vec<(String, AttrValue)>, GliderTemplateError> {
        read_attributes(self.file.attributes())
    }

    /// Variables in declaration order
    ///
    /// # Panics
    ///
    /// The `netcdf` crate panics on a variable whose type it cannot describe,
    /// which only user defined types in foreign files can trigger.
    pub fn variables(&self) -> Result<Vec<VariableInfo>, GliderTemplateError> {
        self.file
            .variables()
            .map(|var| {
                Ok(VariableInfo {
                    name: var.name(),
                    data_type: DataType::from_nc(&var.vartype()),
                    dimensions: var.dimensions().iter().map(|d| d.name()).collect(),
                    attributes: read_attributes(var.attributes())?,
                })
            })
            .collect()
    }

    pub fn variable(&self, name: &str) -> Result<Option<VariableInfo>, GliderTemplateError> {
        Ok(self.variables()?.into_iter().find(|v| v.name == name))
    }
}

fn read_attributes<'a>(
    attributes: impl Iterator<Item = Attribute<'a>>,
) -> Result<Vec<(String, AttrValue)>, GliderTemplateError> {
    attributes
        .map(|attr| {
            let name = attr.name().to_owned();
            let value = AttrValue::from_nc(&name, attr.value()?)?;
            Ok((name, value))
        })
        .collect()
}
