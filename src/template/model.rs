use crate::core::attributes::AttrValue;
use crate::core::compression::Compression;
use crate::core::data_types::{DataType, FillValue};
use crate::core::dimensions::Dimension;
use crate::errors::GliderTemplateError;
use std::collections::BTreeMap;

/// Attributes keyed by name. Iteration is in lexicographic key order, which is
/// the order they are written in.
pub type Attributes = BTreeMap<String, AttrValue>;

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDefinition {
    pub name: String,
    pub data_type: DataType,
    /// Dimension names, slowest varying first. Empty for a scalar.
    pub dimensions: Vec<String>,
    pub fill_value: Option<FillValue>,
    pub compression: Option<Compression>,
    pub attributes: Attributes,
}

impl VariableDefinition {
    pub fn new(name: &str, data_type: DataType, dimensions: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            data_type,
            dimensions: dimensions.iter().map(|d| (*d).to_owned()).collect(),
            fill_value: None,
            compression: None,
            attributes: Attributes::new(),
        }
    }

    pub fn with_fill_value(mut self, fill_value: FillValue) -> Self {
        self.fill_value = Some(fill_value);
        self
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.to_owned(), value.into());
        self
    }

    pub fn with_attributes<'a>(
        mut self,
        attributes: impl IntoIterator<Item = (&'a str, AttrValue)>,
    ) -> Self {
        self.attributes.extend(
            attributes
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value)),
        );
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    pub fn is_scalar(&self) -> bool {
        self.dimensions.is_empty()
    }
}

/// In-memory description of a dataset: dimensions, global attributes and
/// variables in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetTemplate {
    dimensions: Vec<Dimension>,
    global_attributes: Attributes,
    variables: Vec<VariableDefinition>,
}

impl DatasetTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dimension(&mut self, dimension: Dimension) -> Result<(), GliderTemplateError> {
        if self.dimension(&dimension.name).is_some() {
            return Err(GliderTemplateError::DuplicateDimension {
                name: dimension.name,
            });
        }
        if dimension.is_unlimited() && self.dimensions.iter().any(Dimension::is_unlimited) {
            return Err(GliderTemplateError::MultipleUnlimitedDimensions);
        }
        self.dimensions.push(dimension);
        Ok(())
    }

    pub fn set_global_attribute(&mut self, name: &str, value: impl Into<AttrValue>) {
        self.global_attributes.insert(name.to_owned(), value.into());
    }

    /// Declares a variable. All of its dimensions must already be declared.
    pub fn add_variable(&mut self, variable: VariableDefinition) -> Result<(), GliderTemplateError> {
        if self.variable(&variable.name).is_some() {
            return Err(GliderTemplateError::DuplicateVariable {
                name: variable.name,
            });
        }
        self.check_variable(&variable)?;
        self.variables.push(variable);
        Ok(())
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    pub fn global_attributes(&self) -> &Attributes {
        &self.global_attributes
    }

    pub fn variables(&self) -> &[VariableDefinition] {
        &self.variables
    }

    pub fn variable(&self, name: &str) -> Option<&VariableDefinition> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Checks every invariant of the whole template. Run before anything is
    /// written so a broken template never produces a file.
    pub fn validate(&self) -> Result<(), GliderTemplateError> {
        for (i, dimension) in self.dimensions.iter().enumerate() {
            if self.dimensions[..i].iter().any(|d| d.name == dimension.name) {
                return Err(GliderTemplateError::DuplicateDimension {
                    name: dimension.name.clone(),
                });
            }
        }
        if self.dimensions.iter().filter(|d| d.is_unlimited()).count() > 1 {
            return Err(GliderTemplateError::MultipleUnlimitedDimensions);
        }
        check_attributes("global", &self.global_attributes)?;
        for (i, variable) in self.variables.iter().enumerate() {
            if self.variables[..i].iter().any(|v| v.name == variable.name) {
                return Err(GliderTemplateError::DuplicateVariable {
                    name: variable.name.clone(),
                });
            }
            self.check_variable(variable)?;
        }
        Ok(())
    }

    fn check_variable(&self, variable: &VariableDefinition) -> Result<(), GliderTemplateError> {
        for (position, name) in variable.dimensions.iter().enumerate() {
            let dimension =
                self.dimension(name)
                    .ok_or_else(|| GliderTemplateError::UndeclaredDimension {
                        variable: variable.name.clone(),
                        dimension: name.clone(),
                    })?;
            if dimension.is_unlimited() && position > 0 {
                return Err(GliderTemplateError::UnlimitedDimensionNotLeading {
                    variable: variable.name.clone(),
                });
            }
        }
        check_attributes(&variable.name, &variable.attributes)?;
        if let Some(fill_value) = variable.fill_value {
            if fill_value.data_type() != variable.data_type {
                return Err(GliderTemplateError::FillValueTypeMismatch {
                    variable: variable.name.clone(),
                    expected: variable.data_type,
                    found: fill_value.data_type(),
                });
            }
        }
        Ok(())
    }
}

fn check_attributes(owner: &str, attributes: &Attributes) -> Result<(), GliderTemplateError> {
    match attributes.iter().find(|(_, value)| !value.is_classic()) {
        Some((name, _)) => Err(GliderTemplateError::NonClassicAttribute {
            owner: owner.to_owned(),
            name: name.clone(),
        }),
        None => Ok(()),
    }
}
