//! Fixed settings of the glider template and its schema export.

/// Template file written by `create_template`
pub const TEMPLATE_FILE: &str = "IOOS_Glider_NetCDF_Flat_v1.0.nc";

/// Template file read by `schema_to_json`
pub const SCHEMA_INPUT_FILE: &str = "../nc-template/IOOS_Glider_NetCDF_Flat_v1.0.nc";

/// Schema document written by `schema_to_json`
pub const SCHEMA_OUTPUT_FILE: &str = "../json/IOOS_Glider_NetCDF_Flat_v1.0.json";

/// Deflate level of every compressed variable
pub const COMPRESSION_LEVEL: i32 = 1;

/// Pattern of a trajectory name, its length sizes `traj_strlen`
pub const TRAJECTORY_STRING: &str = "glider-YYYYmmddTHHMM";

pub const TIME_DIMENSION: &str = "time";
pub const TRAJECTORY_DIMENSION: &str = "traj_strlen";

/// Fill value of the primary measurement variables
pub const MISSING_VALUE: f64 = -999.0;

// libnetcdf default fill values (NC_FILL_BYTE, NC_FILL_INT)
pub const NC_FILL_BYTE: i8 = -127;
pub const NC_FILL_INT: i32 = -2147483647;

/// Variables that never get a quality flag companion
pub const NO_QC_VARIABLES: [&str; 3] = ["time", "trajectory", "profile_id"];

pub const QC_SUFFIX: &str = "_qc";

/// Flag meanings of the QC companions, flag code `i` is the `i`-th token.
pub const QC_FLAG_MEANINGS: [&str; 10] = [
    "no_qc_performed",
    "good_data",
    "probably_good_data",
    "bad_data_that_are_potentially_correctable",
    "bad_data",
    "value_changed",
    "not_used",
    "not_used",
    "interpolated_value",
    "missing_value",
];
