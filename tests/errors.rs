use glider_template_rs::core::attributes::AttrValue;
use glider_template_rs::core::compression::Compression;
use glider_template_rs::core::data_types::{DataType, FillValue};
use glider_template_rs::core::dimensions::Dimension;
use glider_template_rs::errors::GliderTemplateError;
use glider_template_rs::io::writer::write_template;
use glider_template_rs::template::model::{DatasetTemplate, VariableDefinition};
use glider_template_rs::{create_template, export_schema, extract_schema};
use std::fs;

use test_utils::template_in_temp_dir;

#[test]
fn test_undeclared_dimension() {
    let mut template = DatasetTemplate::new();
    template.add_dimension(Dimension::unlimited("time")).unwrap();

    let result = template.add_variable(VariableDefinition::new(
        "oxygen",
        DataType::Double,
        &["time", "depth"],
    ));

    assert_eq!(
        error_string(result),
        "Variable 'oxygen' references undeclared dimension 'depth'"
    );
}

#[test]
fn test_invalid_compression_level() {
    assert_eq!(
        error_string(Compression::deflate(10)),
        "Invalid compression level 10, must be between 0 and 9"
    );
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.nc");

    let result = extract_schema(&missing);
    assert!(matches!(result, Err(GliderTemplateError::FileNotFound { .. })));
    assert_eq!(
        error_string(result),
        format!("File not found: {}", missing.display())
    );
}

#[test]
fn test_opening_not_a_netcdf_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not_a_netcdf_file.nc");
    fs::write(&path, b"This is not a NetCDF file. It only pretends to be one.").unwrap();

    let result = extract_schema(&path);
    assert!(matches!(result, Err(GliderTemplateError::CannotOpenFile { .. })));
    assert!(error_string(result).contains("not_a_netcdf_file.nc"));
}

#[test]
fn test_unwritable_template_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_directory").join("template.nc");

    let result = create_template(&path);
    assert!(matches!(result, Err(GliderTemplateError::CannotOpenFile { .. })));
    assert!(!path.exists());
}

#[test]
fn test_unwritable_schema_path() {
    let (dir, path) = template_in_temp_dir();
    let output = dir.path().join("no_such_directory").join("schema.json");

    let result = export_schema(&path, &output);
    assert!(matches!(result, Err(GliderTemplateError::CannotOpenFile { .. })));
    assert!(error_string(result).contains("schema.json"));
}

#[test]
fn test_fill_value_type_mismatch() {
    let mut template = DatasetTemplate::new();
    let result = template.add_variable(
        VariableDefinition::new("profile_id", DataType::Int32, &[])
            .with_fill_value(FillValue::Double(-999.0)),
    );

    assert_eq!(
        error_string(result),
        "Fill value of variable 'profile_id' is Double, expected Int32"
    );
}

#[test]
fn test_duplicate_declarations() {
    let mut template = DatasetTemplate::new();
    template.add_dimension(Dimension::unlimited("time")).unwrap();

    assert_eq!(
        error_string(template.add_dimension(Dimension::fixed("time", 4))),
        "Dimension 'time' is declared more than once"
    );
    assert_eq!(
        error_string(template.add_dimension(Dimension::unlimited("obs"))),
        "Only one unlimited dimension is allowed"
    );

    let lat = VariableDefinition::new("lat", DataType::Double, &["time"]);
    template.add_variable(lat.clone()).unwrap();
    assert_eq!(
        error_string(template.add_variable(lat)),
        "Variable 'lat' is declared more than once"
    );
}

#[test]
fn test_non_classic_attribute_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("template.nc");

    let mut template = DatasetTemplate::new();
    template.add_dimension(Dimension::unlimited("time")).unwrap();
    template.set_global_attribute("deployment_id", AttrValue::Long(42));

    assert_eq!(
        error_string(write_template(&template, &path)),
        "Attribute 'deployment_id' of 'global' cannot be stored in a classic model file"
    );
    assert!(!path.exists());

    let result = template.add_variable(
        VariableDefinition::new("time", DataType::Double, &["time"])
            .with_attribute("aliases", AttrValue::Texts(vec!["t".to_owned(), "epoch".to_owned()])),
    );
    assert_eq!(
        error_string(result),
        "Attribute 'aliases' of 'time' cannot be stored in a classic model file"
    );
}

#[test]
fn test_rejected_variable_leaves_template_writable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("template.nc");

    let mut template = DatasetTemplate::new();
    template.add_dimension(Dimension::fixed("x", 3)).unwrap();
    template.add_dimension(Dimension::unlimited("time")).unwrap();
    assert!(matches!(
        template.add_variable(VariableDefinition::new("grid", DataType::Float, &["x", "time"])),
        Err(GliderTemplateError::UnlimitedDimensionNotLeading { .. })
    ));

    write_template(&template, &path).unwrap();
    assert!(path.exists());
}

fn error_string<T: std::fmt::Debug>(result: Result<T, GliderTemplateError>) -> String {
    match result {
        Ok(value) => panic!("Expected error, got {value:?}"),
        Err(e) => e.to_string(),
    }
}
