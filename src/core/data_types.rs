use netcdf::types::{FloatType, IntType, NcVariableType};

/// Element types of the NetCDF classic data model used by glider files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DataType {
    Char = 0,
    Int8 = 1,
    Int16 = 2,
    Int32 = 3,
    Float = 4,
    Double = 5,
}

impl DataType {
    /// Type name as written in CDL (`ncdump -h`)
    pub fn cdl_name(&self) -> &'static str {
        match self {
            DataType::Char => "char",
            DataType::Int8 => "byte",
            DataType::Int16 => "short",
            DataType::Int32 => "int",
            DataType::Float => "float",
            DataType::Double => "double",
        }
    }

    pub fn to_nc(&self) -> NcVariableType {
        match self {
            DataType::Char => NcVariableType::Char,
            DataType::Int8 => NcVariableType::Int(IntType::I8),
            DataType::Int16 => NcVariableType::Int(IntType::I16),
            DataType::Int32 => NcVariableType::Int(IntType::I32),
            DataType::Float => NcVariableType::Float(FloatType::F32),
            DataType::Double => NcVariableType::Float(FloatType::F64),
        }
    }

    /// Maps a type read from a file back, `None` for anything outside the classic model.
    pub fn from_nc(nc_type: &NcVariableType) -> Option<Self> {
        match nc_type {
            NcVariableType::Char => Some(DataType::Char),
            NcVariableType::Int(IntType::I8) => Some(DataType::Int8),
            NcVariableType::Int(IntType::I16) => Some(DataType::Int16),
            NcVariableType::Int(IntType::I32) => Some(DataType::Int32),
            NcVariableType::Float(FloatType::F32) => Some(DataType::Float),
            NcVariableType::Float(FloatType::F64) => Some(DataType::Double),
            _ => None,
        }
    }
}

impl TryFrom<u8> for DataType {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DataType::Char),
            1 => Ok(DataType::Int8),
            2 => Ok(DataType::Int16),
            3 => Ok(DataType::Int32),
            4 => Ok(DataType::Float),
            5 => Ok(DataType::Double),
            _ => Err("Invalid data type value"),
        }
    }
}

/// Sentinel written as `_FillValue` for a variable
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillValue {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Float(f32),
    Double(f64),
}

impl FillValue {
    pub fn data_type(&self) -> DataType {
        match self {
            FillValue::Int8(_) => DataType::Int8,
            FillValue::Int16(_) => DataType::Int16,
            FillValue::Int32(_) => DataType::Int32,
            FillValue::Float(_) => DataType::Float,
            FillValue::Double(_) => DataType::Double,
        }
    }
}
