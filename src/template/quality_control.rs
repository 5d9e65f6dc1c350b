//! Quality flag companions (`<name>_qc`) following the CF flag conventions.
//!
//! Every primary variable that carries a CF `standard_name` and is not listed
//! in [`NO_QC_VARIABLES`] gets a byte variable of the same shape holding one
//! flag per value. All companions share the same ten flag codes.

use crate::core::attributes::AttrValue;
use crate::core::compression::Compression;
use crate::core::data_types::{DataType, FillValue};
use crate::core::defaults::{
    COMPRESSION_LEVEL, NC_FILL_BYTE, NO_QC_VARIABLES, QC_FLAG_MEANINGS, QC_SUFFIX,
};
use crate::errors::GliderTemplateError;
use crate::template::model::{Attributes, DatasetTemplate, VariableDefinition};

/// Flag codes `0..=9`, one per entry of [`QC_FLAG_MEANINGS`]
pub fn qc_flag_values() -> Vec<i8> {
    (0..QC_FLAG_MEANINGS.len() as i8).collect()
}

pub fn qc_flag_meanings() -> String {
    QC_FLAG_MEANINGS.join(" ")
}

pub fn qc_variable_name(primary: &str) -> String {
    format!("{primary}{QC_SUFFIX}")
}

pub fn is_qc_eligible(variable: &VariableDefinition) -> bool {
    !NO_QC_VARIABLES.contains(&variable.name.as_str()) && standard_name(variable).is_some()
}

fn standard_name(variable: &VariableDefinition) -> Option<&str> {
    variable.attribute("standard_name").and_then(AttrValue::as_text)
}

/// Builds the companion of `primary`, `None` if it is not eligible.
/// Each call creates its own attribute map.
pub fn qc_companion(
    primary: &VariableDefinition,
) -> Result<Option<VariableDefinition>, GliderTemplateError> {
    let Some(standard_name) = standard_name(primary) else {
        return Ok(None);
    };
    if NO_QC_VARIABLES.contains(&primary.name.as_str()) {
        return Ok(None);
    }

    let flags = qc_flag_values();
    let mut attributes = Attributes::new();
    attributes.insert(
        "long_name".to_owned(),
        AttrValue::from(format!("{} Quality Flag", primary.name)),
    );
    attributes.insert(
        "standard_name".to_owned(),
        AttrValue::from(format!("{standard_name} status_flag")),
    );
    attributes.insert("flag_meanings".to_owned(), AttrValue::Text(qc_flag_meanings()));
    attributes.insert("valid_min".to_owned(), AttrValue::Byte(flags[0]));
    attributes.insert(
        "valid_max".to_owned(),
        AttrValue::Byte(flags[flags.len() - 1]),
    );
    attributes.insert("flag_values".to_owned(), AttrValue::Bytes(flags));

    Ok(Some(VariableDefinition {
        name: qc_variable_name(&primary.name),
        data_type: DataType::Int8,
        dimensions: primary.dimensions.clone(),
        fill_value: Some(FillValue::Int8(NC_FILL_BYTE)),
        compression: Some(Compression::deflate(COMPRESSION_LEVEL)?),
        attributes,
    }))
}

/// Appends a companion for every eligible variable already in `template`, in
/// declaration order. Returns the number of companions added.
pub fn add_qc_companions(template: &mut DatasetTemplate) -> Result<usize, GliderTemplateError> {
    let mut companions = Vec::new();
    for variable in template.variables() {
        if let Some(companion) = qc_companion(variable)? {
            companions.push(companion);
        }
    }

    let count = companions.len();
    for companion in companions {
        log::debug!("Declaring quality flag variable {}", companion.name);
        template.add_variable(companion)?;
    }
    Ok(count)
}

impl DatasetTemplate {
    /// Consumes a template whose primary variables are all declared and
    /// returns it with the quality flag companions appended.
    pub fn with_quality_control(mut self) -> Result<Self, GliderTemplateError> {
        add_qc_companions(&mut self)?;
        Ok(self)
    }
}
