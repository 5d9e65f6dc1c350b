use crate::core::data_types::FillValue;
use crate::core::dimensions::{Dimension, DimensionSize};
use crate::errors::GliderTemplateError;
use crate::template::model::{Attributes, DatasetTemplate, VariableDefinition};
use crate::utils::remove_file_if_exists;
use netcdf::{AttributeValue, FileMut, Options};
use std::path::{Path, PathBuf};

/// Writes a [`DatasetTemplate`] into a fresh NetCDF-4 classic model file.
///
/// The file stays open, in define mode, while the writer exists. It is closed
/// by [`TemplateWriter::finalize`] or when the writer is dropped on an error path.
pub struct TemplateWriter {
    file: FileMut,
    path: PathBuf,
}

impl TemplateWriter {
    /// Creates the file, deleting anything already at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, GliderTemplateError> {
        let path = path.as_ref().to_path_buf();
        if remove_file_if_exists(&path)? {
            log::info!("Removed existing file {}", path.display());
        }

        let file = netcdf::create_with(&path, Options::NETCDF4 | Options::CLASSIC)
            .map_err(|e| GliderTemplateError::CannotOpenFile {
                filename: path.display().to_string(),
                error: e.to_string(),
            })?;
        Ok(Self { file, path })
    }

    pub fn write_dimension(&mut self, dimension: &Dimension) -> Result<(), GliderTemplateError> {
        log::debug!("Declaring dimension {} ({:?})", dimension.name, dimension.size);
        match dimension.size {
            DimensionSize::Fixed(len) => {
                self.file.add_dimension(&dimension.name, len)?;
            }
            DimensionSize::Unlimited => {
                self.file.add_unlimited_dimension(&dimension.name)?;
            }
        }
        Ok(())
    }

    pub fn write_global_attributes(
        &mut self,
        attributes: &Attributes,
    ) -> Result<(), GliderTemplateError> {
        for (name, value) in attributes {
            self.file
                .add_attribute(name, AttributeValue::from(value.clone()))?;
        }
        Ok(())
    }

    pub fn write_variable(
        &mut self,
        variable: &VariableDefinition,
    ) -> Result<(), GliderTemplateError> {
        log::debug!(
            "Declaring variable {} {}({})",
            variable.data_type.cdl_name(),
            variable.name,
            variable.dimensions.join(", ")
        );
        let dimensions: Vec<&str> = variable.dimensions.iter().map(String::as_str).collect();
        let mut var =
            self.file
                .add_variable_with_type(&variable.name, &dimensions, &variable.data_type.to_nc())?;

        match variable.fill_value {
            Some(FillValue::Int8(x)) => var.set_fill_value(x)?,
            Some(FillValue::Int16(x)) => var.set_fill_value(x)?,
            Some(FillValue::Int32(x)) => var.set_fill_value(x)?,
            Some(FillValue::Float(x)) => var.set_fill_value(x)?,
            Some(FillValue::Double(x)) => var.set_fill_value(x)?,
            None => {}
        }

        // scalars are stored contiguously and cannot be deflated
        if let Some(compression) = variable.compression.filter(|_| !variable.is_scalar()) {
            var.set_compression(compression.level, compression.shuffle)?;
        }

        for (name, value) in &variable.attributes {
            var.put_attribute(name, AttributeValue::from(value.clone()))?;
        }
        Ok(())
    }

    /// Writes dimensions, then global attributes, then variables in order.
    pub fn write_template(&mut self, template: &DatasetTemplate) -> Result<(), GliderTemplateError> {
        for dimension in template.dimensions() {
            self.write_dimension(dimension)?;
        }
        self.write_global_attributes(template.global_attributes())?;
        for variable in template.variables() {
            self.write_variable(variable)?;
        }
        Ok(())
    }

    /// Closes the file and reports errors of the final flush. Only a finalized
    /// file is complete.
    pub fn finalize(self) -> Result<PathBuf, GliderTemplateError> {
        let Self { file, path } = self;
        file.close()?;
        Ok(path)
    }
}

/// Validates `template` and writes it to `path`, replacing any existing file.
pub fn write_template<P: AsRef<Path>>(
    template: &DatasetTemplate,
    path: P,
) -> Result<PathBuf, GliderTemplateError> {
    template.validate()?;
    let mut writer = TemplateWriter::create(path)?;
    writer.write_template(template)?;
    let path = writer.finalize()?;
    log::info!(
        "Wrote {} dimensions and {} variables to {}",
        template.dimensions().len(),
        template.variables().len(),
        path.display()
    );
    Ok(path)
}
