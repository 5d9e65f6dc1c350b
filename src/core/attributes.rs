//! Attribute values attached to a dataset or a variable.
//!
//! NetCDF attributes are always one-dimensional: a text string or a vector of
//! numbers of a single type. [`AttrValue`] keeps scalar and array variants apart
//! so that a template declares exactly what gets written, while files read back
//! report every numeric attribute as an array. [`AttrValue::normalize`] folds a
//! single-element array into its scalar, which is also how values serialize.

use crate::errors::GliderTemplateError;
use netcdf::AttributeValue;
use num_traits::ToPrimitive;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Texts(Vec<String>),
    Bytes(Vec<i8>),
    Shorts(Vec<i16>),
    Ints(Vec<i32>),
    Longs(Vec<i64>),
    Floats(Vec<f32>),
    Doubles(Vec<f64>),
}

impl AttrValue {
    /// Unwraps single-element arrays into plain scalars.
    pub fn normalize(self) -> Self {
        match self {
            AttrValue::Texts(mut v) if v.len() == 1 => AttrValue::Text(v.remove(0)),
            AttrValue::Bytes(v) if v.len() == 1 => AttrValue::Byte(v[0]),
            AttrValue::Shorts(v) if v.len() == 1 => AttrValue::Short(v[0]),
            AttrValue::Ints(v) if v.len() == 1 => AttrValue::Int(v[0]),
            AttrValue::Longs(v) if v.len() == 1 => AttrValue::Long(v[0]),
            AttrValue::Floats(v) if v.len() == 1 => AttrValue::Float(v[0]),
            AttrValue::Doubles(v) if v.len() == 1 => AttrValue::Double(v[0]),
            other => other,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether a NetCDF-4 classic model file can store the value. 64-bit
    /// integers and string arrays need the enhanced model.
    pub fn is_classic(&self) -> bool {
        !matches!(
            self,
            AttrValue::Long(_) | AttrValue::Longs(_) | AttrValue::Texts(_)
        )
    }

    /// Converts a value read by libnetcdf. Unsigned types, which the classic
    /// model cannot declare but foreign files may contain, are widened.
    pub fn from_nc(name: &str, value: AttributeValue) -> Result<Self, GliderTemplateError> {
        let value = match value {
            AttributeValue::Str(s) => AttrValue::Text(s),
            AttributeValue::Strs(v) => AttrValue::Texts(v),
            AttributeValue::Schar(x) => AttrValue::Byte(x),
            AttributeValue::Schars(v) => AttrValue::Bytes(v),
            AttributeValue::Short(x) => AttrValue::Short(x),
            AttributeValue::Shorts(v) => AttrValue::Shorts(v),
            AttributeValue::Int(x) => AttrValue::Int(x),
            AttributeValue::Ints(v) => AttrValue::Ints(v),
            AttributeValue::Longlong(x) => AttrValue::Long(x),
            AttributeValue::Longlongs(v) => AttrValue::Longs(v),
            AttributeValue::Float(x) => AttrValue::Float(x),
            AttributeValue::Floats(v) => AttrValue::Floats(v),
            AttributeValue::Double(x) => AttrValue::Double(x),
            AttributeValue::Doubles(v) => AttrValue::Doubles(v),
            AttributeValue::Uchar(x) => widen_unsigned(vec![x]),
            AttributeValue::Uchars(v) => widen_unsigned(v),
            AttributeValue::Ushort(x) => widen_unsigned(vec![x]),
            AttributeValue::Ushorts(v) => widen_unsigned(v),
            AttributeValue::Uint(x) => widen_unsigned(vec![x]),
            AttributeValue::Uints(v) => widen_unsigned(v),
            AttributeValue::Ulonglong(x) => widen_unsigned(vec![x]),
            AttributeValue::Ulonglongs(v) => widen_unsigned(v),
            #[allow(unreachable_patterns)]
            _ => {
                return Err(GliderTemplateError::UnsupportedAttributeType {
                    name: name.to_owned(),
                })
            }
        };
        Ok(value.normalize())
    }
}

/// Unsigned values go to `i64` when they all fit, to `f64` otherwise.
fn widen_unsigned<T: ToPrimitive + Copy>(values: Vec<T>) -> AttrValue {
    let longs: Option<Vec<i64>> = values.iter().map(|x| x.to_i64()).collect();
    match longs {
        Some(longs) => AttrValue::Longs(longs),
        None => AttrValue::Doubles(values.iter().filter_map(|x| x.to_f64()).collect()),
    }
}

impl From<AttrValue> for AttributeValue {
    fn from(value: AttrValue) -> Self {
        match value {
            AttrValue::Text(s) => AttributeValue::Str(s),
            AttrValue::Texts(v) => AttributeValue::Strs(v),
            AttrValue::Byte(x) => AttributeValue::Schar(x),
            AttrValue::Short(x) => AttributeValue::Short(x),
            AttrValue::Int(x) => AttributeValue::Int(x),
            AttrValue::Long(x) => AttributeValue::Longlong(x),
            AttrValue::Float(x) => AttributeValue::Float(x),
            AttrValue::Double(x) => AttributeValue::Double(x),
            AttrValue::Bytes(v) => AttributeValue::Schars(v),
            AttrValue::Shorts(v) => AttributeValue::Shorts(v),
            AttrValue::Ints(v) => AttributeValue::Ints(v),
            AttrValue::Longs(v) => AttributeValue::Longlongs(v),
            AttrValue::Floats(v) => AttributeValue::Floats(v),
            AttrValue::Doubles(v) => AttributeValue::Doubles(v),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttrValue::Text(s) => serializer.serialize_str(s),
            AttrValue::Byte(x) => serializer.serialize_i8(*x),
            AttrValue::Short(x) => serializer.serialize_i16(*x),
            AttrValue::Int(x) => serializer.serialize_i32(*x),
            AttrValue::Long(x) => serializer.serialize_i64(*x),
            AttrValue::Float(x) => serializer.serialize_f32(*x),
            AttrValue::Double(x) => serializer.serialize_f64(*x),
            AttrValue::Texts(v) => serialize_unwrapped(v, serializer),
            AttrValue::Bytes(v) => serialize_unwrapped(v, serializer),
            AttrValue::Shorts(v) => serialize_unwrapped(v, serializer),
            AttrValue::Ints(v) => serialize_unwrapped(v, serializer),
            AttrValue::Longs(v) => serialize_unwrapped(v, serializer),
            AttrValue::Floats(v) => serialize_unwrapped(v, serializer),
            AttrValue::Doubles(v) => serialize_unwrapped(v, serializer),
        }
    }
}

fn serialize_unwrapped<T: Serialize, S: Serializer>(
    values: &[T],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match values {
        [single] => single.serialize(serializer),
        _ => values.serialize(serializer),
    }
}
