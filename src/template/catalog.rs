//! The IOOS glider DAC flat trajectory file, v1.0.
//!
//! Dimensions:
//!   time (unlimited), traj_strlen (length of `glider-YYYYmmddTHHMM`)
//!
//! Primary variables:
//!   trajectory(traj_strlen): char
//!   time, lat, lon, pressure, depth, temperature, conductivity, salinity,
//!   density (time): double
//!   profile_id: int, profile_time, profile_lat, profile_lon: double
//!   time_uv, lat_uv, lon_uv, u, v: double
//!   platform, instrument_ctd: int (container variables, attributes only)
//!
//! Quality flag companions are appended by [`glider_template`].

use crate::core::attributes::AttrValue;
use crate::core::compression::Compression;
use crate::core::data_types::{DataType, FillValue};
use crate::core::defaults::{
    COMPRESSION_LEVEL, MISSING_VALUE, NC_FILL_INT, TEMPLATE_FILE, TIME_DIMENSION,
    TRAJECTORY_DIMENSION, TRAJECTORY_STRING,
};
use crate::core::dimensions::Dimension;
use crate::errors::GliderTemplateError;
use crate::template::model::{DatasetTemplate, VariableDefinition};

const EPOCH_UNITS: &str = "seconds since 1970-01-01T00:00:00Z";
const DEPTH_AVERAGED_CURRENT: &str = "The depth-averaged current is an estimate of the net current measured while the glider is underwater over all profiles contained in the segment.";

fn blank() -> AttrValue {
    AttrValue::from(" ")
}

/// Complete template: primary catalog plus quality flag companions.
pub fn glider_template() -> Result<DatasetTemplate, GliderTemplateError> {
    primary_template()?.with_quality_control()
}

/// Dimensions, global attributes and primary variables, without companions.
pub fn primary_template() -> Result<DatasetTemplate, GliderTemplateError> {
    let mut template = DatasetTemplate::new();
    template.add_dimension(Dimension::unlimited(TIME_DIMENSION))?;
    template.add_dimension(Dimension::fixed(
        TRAJECTORY_DIMENSION,
        TRAJECTORY_STRING.len(),
    ))?;

    for (name, value) in global_attributes() {
        template.set_global_attribute(name, value);
    }
    for variable in primary_variables()? {
        template.add_variable(variable)?;
    }
    Ok(template)
}

pub fn global_attributes() -> Vec<(&'static str, AttrValue)> {
    vec![
        ("Metadata_Conventions", AttrValue::from("CF-1.6, Unidata Dataset Discovery v1.0")),
        ("Conventions", AttrValue::from("CF-1.6, Unidata Dataset Discovery v1.0")),
        ("acknowledgment", AttrValue::from("This deployment supported by ...")),
        ("comment", blank()),
        // comma separated
        ("contributor_name", blank()),
        ("contributor_role", blank()),
        ("creator_email", blank()),
        ("creator_name", blank()),
        ("creator_url", blank()),
        // YYYY-mm-ddTHH:MM:SSZ
        ("date_created", blank()),
        ("date_issued", blank()),
        ("date_modified", blank()),
        ("format_version", AttrValue::from(TEMPLATE_FILE)),
        ("history", blank()),
        ("id", blank()),
        ("institution", blank()),
        ("keywords", AttrValue::from("AUVS > Autonomous Underwater Vehicles, Oceans > Ocean Pressure > Water Pressure, Oceans > Ocean Temperature > Water Temperature, Oceans > Salinity/Density > Conductivity, Oceans > Salinity/Density > Density, Oceans > Salinity/Density > Salinity")),
        ("keywords_vocabulary", AttrValue::from("GCMD Science Keywords")),
        ("license", AttrValue::from("This data may be redistributed and used without restriction.  Data provided as is with no expressed or implied assurance of quality assurance or quality control")),
        ("metadata_link", blank()),
        ("naming_authority", AttrValue::from("edu.rutgers.marine")),
        ("platform_type", AttrValue::from("Slocum Glider")),
        ("processing_level", blank()),
        ("project", blank()),
        ("publisher_email", blank()),
        ("publisher_name", blank()),
        ("publisher_url", blank()),
        ("references", blank()),
        // http://www.nodc.noaa.gov/General/NODC-Archive/seanamelist.txt
        ("sea_name", blank()),
        ("source", AttrValue::from("Observational data from a profiling glider")),
        ("standard_name_vocabulary", AttrValue::from("CF-v25")),
        ("summary", AttrValue::from("The Rutgers University Coastal Ocean Observation Lab has deployed autonomous underwater gliders around the world since 1990.  Gliders are small, free-swimming, unmanned vehicles that use changes in buoyancy to move vertically and horizontally through the water column in a saw-tooth pattern. They are deployed for days to several months and gather detailed information about the physical, chemical and biological processes of the world's The Slocum glider was designed and oceans. built by Teledyne Webb Research Corporation, Falmouth, MA, USA.  This dataset contains observational sub-surface profile data of the water-column.")),
        // glider-YYYYmmddTHHMM
        ("title", blank()),
    ]
}

fn compression() -> Result<Compression, GliderTemplateError> {
    Compression::deflate(COMPRESSION_LEVEL)
}

fn time_series(name: &str) -> Result<VariableDefinition, GliderTemplateError> {
    Ok(
        VariableDefinition::new(name, DataType::Double, &[TIME_DIMENSION])
            .with_fill_value(FillValue::Double(MISSING_VALUE))
            .with_compression(compression()?),
    )
}

fn scalar(name: &str, data_type: DataType) -> Result<VariableDefinition, GliderTemplateError> {
    let fill_value = match data_type {
        DataType::Int32 => FillValue::Int32(MISSING_VALUE as i32),
        _ => FillValue::Double(MISSING_VALUE),
    };
    Ok(VariableDefinition::new(name, data_type, &[])
        .with_fill_value(fill_value)
        .with_compression(compression()?))
}

/// Attributes shared by the CTD measurements
fn ctd_attributes(qc_name: &str) -> [(&'static str, AttrValue); 6] {
    [
        ("ancillary_variables", AttrValue::from(qc_name)),
        ("platform", AttrValue::from("platform")),
        ("instrument", AttrValue::from("instrument_ctd")),
        ("accuracy", blank()),
        ("precision", blank()),
        ("resolution", blank()),
    ]
}

pub fn primary_variables() -> Result<Vec<VariableDefinition>, GliderTemplateError> {
    Ok(vec![
        time_series("time")?.with_attributes([
            ("ancillary_variables", blank()),
            ("calendar", AttrValue::from("gregorian")),
            ("units", AttrValue::from(EPOCH_UNITS)),
            ("standard_name", AttrValue::from("time")),
            ("long_name", AttrValue::from("Time")),
            ("observation_type", AttrValue::from("measured")),
        ]),
        VariableDefinition::new("trajectory", DataType::Char, &[TRAJECTORY_DIMENSION])
            .with_attributes([
                ("cf_role", AttrValue::from("trajectory_id")),
                ("long_name", AttrValue::from("Trajectory Name")),
                ("comment", AttrValue::from("A trajectory is a single glider deployment")),
                ("units", AttrValue::from("1")),
            ]),
        time_series("lat")?.with_attributes([
            ("units", AttrValue::from("degrees_north")),
            ("standard_name", AttrValue::from("latitude")),
            ("long_name", AttrValue::from("Latitude")),
            ("valid_min", AttrValue::Double(-90.0)),
            ("valid_max", AttrValue::Double(90.0)),
            ("observation_type", AttrValue::from("measured")),
            ("ancillary_variables", AttrValue::from("lat_qc")),
            ("platform", AttrValue::from("platform")),
            ("comment", AttrValue::from("Values are interpolated between measured GPS fixes")),
            ("reference", AttrValue::from("WGS84")),
            // GROOM manual, p16
            ("coordinate_reference_frame", AttrValue::from("urn:ogc:crs:EPSG::4326")),
        ]),
        time_series("lon")?.with_attributes([
            ("units", AttrValue::from("degrees_east")),
            ("standard_name", AttrValue::from("longitude")),
            ("long_name", AttrValue::from("Longitude")),
            ("valid_min", AttrValue::Double(-180.0)),
            ("valid_max", AttrValue::Double(180.0)),
            ("observation_type", AttrValue::from("measured")),
            ("ancillary_variables", AttrValue::from("lon_qc")),
            ("platform", AttrValue::from("platform")),
            ("comment", AttrValue::from("Values are interpolated between measured GPS fixes")),
            ("reference", AttrValue::from("WGS84")),
            ("coordinate_reference_frame", AttrValue::from("urn:ogc:crs:EPSG::4326")),
        ]),
        time_series("pressure")?
            .with_attributes(ctd_attributes("pressure_qc"))
            .with_attributes([
                ("units", AttrValue::from("dbar")),
                ("standard_name", AttrValue::from("sea_water_pressure")),
                ("valid_min", AttrValue::Int(0)),
                ("valid_max", AttrValue::Int(2000)),
                ("long_name", AttrValue::from("Pressure")),
                ("reference_datum", AttrValue::from("sea-surface")),
                ("positive", AttrValue::from("down")),
                ("observation_type", AttrValue::from("measured")),
                ("comment", blank()),
            ]),
        time_series("depth")?
            .with_attributes(ctd_attributes("depth_qc"))
            .with_attributes([
                ("units", AttrValue::from("m")),
                ("standard_name", AttrValue::from("depth")),
                ("valid_min", AttrValue::Int(0)),
                ("valid_max", AttrValue::Int(2000)),
                ("long_name", AttrValue::from("Depth")),
                ("reference_datum", AttrValue::from("sea-surface")),
                ("positive", AttrValue::from("down")),
                ("observation_type", AttrValue::from("calculated")),
                ("comment", blank()),
            ]),
        time_series("temperature")?
            .with_attributes(ctd_attributes("temperature_qc"))
            .with_attributes([
                ("units", AttrValue::from("Celsius")),
                ("standard_name", AttrValue::from("sea_water_temperature")),
                ("valid_min", AttrValue::Double(-5.0)),
                ("valid_max", AttrValue::Double(40.0)),
                ("long_name", AttrValue::from("Temperature")),
                ("observation_type", AttrValue::from("measured")),
            ]),
        time_series("conductivity")?
            .with_attributes(ctd_attributes("conductivity_qc"))
            .with_attributes([
                ("units", AttrValue::from("S m-1")),
                ("standard_name", AttrValue::from("sea_water_electrical_conductivity")),
                ("valid_min", AttrValue::Double(0.0)),
                ("valid_max", AttrValue::Double(10.0)),
                ("long_name", AttrValue::from("Conductivity")),
                ("observation_type", AttrValue::from("measured")),
            ]),
        time_series("salinity")?
            .with_attributes(ctd_attributes("salinity_qc"))
            .with_attributes([
                ("units", AttrValue::from("1e-3")),
                ("standard_name", AttrValue::from("sea_water_salinity")),
                ("valid_min", AttrValue::Double(0.0)),
                ("valid_max", AttrValue::Double(40.0)),
                ("long_name", AttrValue::from("Salinity")),
                ("observation_type", AttrValue::from("calculated")),
            ]),
        time_series("density")?
            .with_attributes(ctd_attributes("density_qc"))
            .with_attributes([
                ("units", AttrValue::from("kg m-3")),
                ("standard_name", AttrValue::from("sea_water_density")),
                ("valid_min", AttrValue::Double(1015.0)),
                ("valid_max", AttrValue::Double(1040.0)),
                ("long_name", AttrValue::from("Density")),
                ("observation_type", AttrValue::from("calculated")),
            ]),
        scalar("profile_id", DataType::Int32)?.with_attributes([
            ("comment", AttrValue::from("Sequential profile number within the trajectory")),
            ("long_name", AttrValue::from("Profile ID")),
            ("valid_min", AttrValue::Int(1)),
            ("valid_max", AttrValue::Int(NC_FILL_INT)),
        ]),
        scalar("profile_time", DataType::Double)?.with_attributes([
            ("units", AttrValue::from(EPOCH_UNITS)),
            ("standard_name", AttrValue::from("time")),
            ("long_name", AttrValue::from("Profile Center Time")),
            ("observation_type", AttrValue::from("calculated")),
            ("platform", AttrValue::from("platform")),
            ("comment", AttrValue::from("Value is the mean timestamp of the profile")),
        ]),
        scalar("profile_lat", DataType::Double)?.with_attributes([
            ("units", AttrValue::from("degrees_north")),
            ("standard_name", AttrValue::from("latitude")),
            ("long_name", AttrValue::from("Profile Center Latitude")),
            ("valid_min", AttrValue::Double(-90.0)),
            ("valid_max", AttrValue::Double(90.0)),
            ("observation_type", AttrValue::from("calculated")),
            ("platform", AttrValue::from("platform")),
            (
                "comment",
                AttrValue::from("Value is interpolated to provide the center latitude of the profile"),
            ),
        ]),
        scalar("profile_lon", DataType::Double)?.with_attributes([
            ("units", AttrValue::from("degrees_east")),
            ("standard_name", AttrValue::from("longitude")),
            ("long_name", AttrValue::from("Profile Center Longitude")),
            ("valid_min", AttrValue::Double(-180.0)),
            ("valid_max", AttrValue::Double(180.0)),
            ("observation_type", AttrValue::from("calculated")),
            ("platform", AttrValue::from("platform")),
            (
                "comment",
                AttrValue::from("Values are interpolated to provide the center longitude of the profile"),
            ),
        ]),
        scalar("time_uv", DataType::Double)?.with_attributes([
            ("calendar", AttrValue::from("gregorian")),
            ("units", AttrValue::from(EPOCH_UNITS)),
            ("standard_name", AttrValue::from("time")),
            ("long_name", AttrValue::from("Time")),
            ("observation_type", AttrValue::from("calculated")),
            (
                "comment",
                AttrValue::from(format!("{DEPTH_AVERAGED_CURRENT}  Values are interpolated to provide the center timestamp of the profile")),
            ),
        ]),
        scalar("lat_uv", DataType::Double)?.with_attributes([
            ("units", AttrValue::from("degrees_north")),
            ("standard_name", AttrValue::from("latitude")),
            ("long_name", AttrValue::from("Latitude")),
            ("valid_min", AttrValue::Double(-90.0)),
            ("valid_max", AttrValue::Double(90.0)),
            ("observation_type", AttrValue::from("calculated")),
            ("platform", AttrValue::from("platform")),
            (
                "comment",
                AttrValue::from(format!("{DEPTH_AVERAGED_CURRENT}  Values are interpolated to provide the center latitude of the profile.")),
            ),
        ]),
        scalar("lon_uv", DataType::Double)?.with_attributes([
            ("units", AttrValue::from("degrees_east")),
            ("standard_name", AttrValue::from("longitude")),
            ("long_name", AttrValue::from("Longitude")),
            ("valid_min", AttrValue::Double(-180.0)),
            ("valid_max", AttrValue::Double(180.0)),
            ("observation_type", AttrValue::from("calculated")),
            ("platform", AttrValue::from("platform")),
            (
                "comment",
                AttrValue::from(format!("{DEPTH_AVERAGED_CURRENT}  Values are interpolated to provide the center longitude of the profile.")),
            ),
        ]),
        scalar("u", DataType::Double)?.with_attributes([
            ("units", AttrValue::from("m s-1")),
            ("standard_name", AttrValue::from("eastward_sea_water_velocity")),
            ("valid_min", AttrValue::Double(-10.0)),
            ("valid_max", AttrValue::Double(10.0)),
            ("long_name", AttrValue::from("Depth-Averaged Eastward Sea Water Velocity")),
            ("observation_type", AttrValue::from("calculated")),
            ("platform", AttrValue::from("platform")),
            (
                "comment",
                AttrValue::from(format!("{DEPTH_AVERAGED_CURRENT}  The value is reported for each profile in the underwater segment.")),
            ),
        ]),
        scalar("v", DataType::Double)?.with_attributes([
            ("units", AttrValue::from("m s-1")),
            ("standard_name", AttrValue::from("northward_sea_water_velocity")),
            ("valid_min", AttrValue::Double(-10.0)),
            ("valid_max", AttrValue::Double(10.0)),
            ("long_name", AttrValue::from("Depth-Averaged Northward Sea Water Velocity")),
            ("observation_type", AttrValue::from("calculated")),
            ("platform", AttrValue::from("platform")),
            (
                "comment",
                AttrValue::from(format!("{DEPTH_AVERAGED_CURRENT}  The value is reported for each profile in the underwater segment.")),
            ),
        ]),
        scalar("platform", DataType::Int32)?.with_attributes([
            ("id", blank()),
            ("instrument", AttrValue::from("instrument_ctd")),
            ("long_name", blank()),
            ("type", AttrValue::from("platform")),
            ("comment", blank()),
            ("wmo_id", blank()),
        ]),
        scalar("instrument_ctd", DataType::Int32)?.with_attributes([
            ("calibration_date", blank()),
            ("calibration_report", blank()),
            ("factory_calibrated", blank()),
            ("make_model", AttrValue::from("Seabird GPCTD")),
            ("platform", AttrValue::from("instrument_ctd")),
            ("long_name", AttrValue::from("Seabird Glider Payload CTD")),
            ("type", AttrValue::from("platform")),
            ("comment", AttrValue::from("pumped CTD")),
            ("serial_number", blank()),
        ]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::defaults::NO_QC_VARIABLES;
    use crate::template::quality_control::{is_qc_eligible, qc_variable_name};

    #[test]
    fn test_catalog_shape() {
        let template = primary_template().unwrap();
        assert_eq!(template.variables().len(), 21);
        assert_eq!(template.global_attributes().len(), 33);
        assert_eq!(template.dimension("traj_strlen").unwrap().len(), 20);
        assert!(template.dimension("time").unwrap().is_unlimited());
        assert!(template.validate().is_ok());
    }

    #[test]
    fn test_global_attributes_are_sorted() {
        let template = primary_template().unwrap();
        let keys: Vec<&String> = template.global_attributes().keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(keys[0], "Conventions");
        assert_eq!(keys[1], "Metadata_Conventions");
    }

    #[test]
    fn test_companions_for_catalog() {
        let primaries = primary_template().unwrap();
        let template = glider_template().unwrap();
        let eligible: Vec<_> = primaries
            .variables()
            .iter()
            .filter(|v| is_qc_eligible(v))
            .collect();
        assert_eq!(eligible.len(), 16);
        assert_eq!(template.variables().len(), 21 + 16);
        for name in NO_QC_VARIABLES {
            assert!(template.variable(&qc_variable_name(name)).is_none());
        }
        for name in ["trajectory", "platform", "instrument_ctd", "profile_id"] {
            assert!(template.variable(&qc_variable_name(name)).is_none());
        }
        assert!(template.variable("u_qc").unwrap().is_scalar());
    }

    #[test]
    fn test_platform_and_instrument_are_attributed_independently() {
        let template = primary_template().unwrap();
        let platform = template.variable("platform").unwrap();
        let instrument = template.variable("instrument_ctd").unwrap();
        assert_eq!(platform.attributes.len(), 6);
        assert_eq!(instrument.attributes.len(), 9);
        assert_eq!(platform.attribute("instrument"), Some(&AttrValue::from("instrument_ctd")));
        assert_eq!(instrument.attribute("platform"), Some(&AttrValue::from("instrument_ctd")));
        assert_eq!(
            instrument.attribute("make_model"),
            Some(&AttrValue::from("Seabird GPCTD"))
        );
        assert!(platform.attribute("make_model").is_none());
    }

    #[test]
    fn test_ctd_variables_share_instrument() {
        let template = primary_template().unwrap();
        for name in ["pressure", "depth", "temperature", "conductivity", "salinity", "density"] {
            let variable = template.variable(name).unwrap();
            assert_eq!(variable.attribute("instrument"), Some(&AttrValue::from("instrument_ctd")));
            assert_eq!(
                variable.attribute("ancillary_variables"),
                Some(&AttrValue::from(format!("{name}_qc")))
            );
        }
    }
}
