//! Data type codes for Tally scalars
//!
//! The `DataTypeCode` member set is a fixed contract shared with the data
//! source readers and the aggregation layer. Classification is always an
//! explicit membership test; nothing here depends on the declaration
//! order of the members.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Tag identifying the runtime kind of a scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataTypeCode {
    /// Missing value
    Null,
    /// Boolean
    Boolean,
    /// Single character
    Char,
    /// Unicode string
    String,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 16-bit unsigned integer
    UInt16,
    /// 32-bit unsigned integer
    UInt32,
    /// 64-bit unsigned integer
    UInt64,
    /// 8-bit unsigned integer
    Byte,
    /// 8-bit signed integer
    SByte,
    /// 32-bit floating point
    Single,
    /// 64-bit floating point
    Double,
    /// Fixed-point decimal
    Decimal,
    /// Calendar date with time of day
    DateTime,
    /// Signed duration
    TimeSpan,
    /// Geodetic spatial data
    SqlGeography,
    /// Planar spatial data
    SqlGeometry,
}

impl DataTypeCode {
    /// Every member of the contract, in declaration order.
    pub const ALL: [Self; 19] = [
        Self::Null,
        Self::Boolean,
        Self::Char,
        Self::String,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::UInt16,
        Self::UInt32,
        Self::UInt64,
        Self::Byte,
        Self::SByte,
        Self::Single,
        Self::Double,
        Self::Decimal,
        Self::DateTime,
        Self::TimeSpan,
        Self::SqlGeography,
        Self::SqlGeometry,
    ];

    // === Classification Predicates ===

    /// Check if this code tags spatial data
    pub const fn is_spatial(self) -> bool {
        matches!(self, Self::SqlGeography | Self::SqlGeometry)
    }

    /// Check if this code tags one of the eleven numeric kinds
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Byte
                | Self::SByte
                | Self::Int16
                | Self::UInt16
                | Self::Int32
                | Self::UInt32
                | Self::Int64
                | Self::UInt64
                | Self::Single
                | Self::Double
                | Self::Decimal
        )
    }

    /// Check if this code tags a floating point kind
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Single | Self::Double)
    }

    /// Check if this code tags a signed integer kind
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::SByte | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Check if this code tags an unsigned integer kind
    pub const fn is_unsigned(self) -> bool {
        matches!(self, Self::Byte | Self::UInt16 | Self::UInt32 | Self::UInt64)
    }

    /// Check if this code tags an integer kind of at most 32 bits
    pub const fn is_32bit_or_less(self) -> bool {
        matches!(
            self,
            Self::Byte | Self::SByte | Self::Int16 | Self::UInt16 | Self::Int32 | Self::UInt32
        )
    }

    /// Check if this code tags an integer kind of at most 64 bits
    pub const fn is_64bit_or_less(self) -> bool {
        matches!(
            self,
            Self::Byte
                | Self::SByte
                | Self::Int16
                | Self::UInt16
                | Self::Int32
                | Self::UInt32
                | Self::Int64
                | Self::UInt64
        )
    }

    /// Get the simple name of this code
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Char => "Char",
            Self::String => "String",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::UInt16 => "UInt16",
            Self::UInt32 => "UInt32",
            Self::UInt64 => "UInt64",
            Self::Byte => "Byte",
            Self::SByte => "SByte",
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Decimal => "Decimal",
            Self::DateTime => "DateTime",
            Self::TimeSpan => "TimeSpan",
            Self::SqlGeography => "SqlGeography",
            Self::SqlGeometry => "SqlGeometry",
        }
    }

    /// Get the native numeric representation backing this code, if any.
    ///
    /// Byte and SByte have no dedicated storage representation in the
    /// contract and map to `None` along with every non-numeric code.
    pub const fn numeric_kind(self) -> Option<NumericKind> {
        match self {
            Self::Int16 => Some(NumericKind::Int16),
            Self::UInt16 => Some(NumericKind::UInt16),
            Self::Int32 => Some(NumericKind::Int32),
            Self::UInt32 => Some(NumericKind::UInt32),
            Self::Int64 => Some(NumericKind::Int64),
            Self::UInt64 => Some(NumericKind::UInt64),
            Self::Single => Some(NumericKind::Single),
            Self::Double => Some(NumericKind::Double),
            Self::Decimal => Some(NumericKind::Decimal),
            _ => None,
        }
    }
}

impl fmt::Display for DataTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a type code name is not part of the contract.
#[derive(Debug, Clone, Error)]
#[error("unknown data type code: {0}")]
pub struct ParseDataTypeError(String);

impl FromStr for DataTypeCode {
    type Err = ParseDataTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Null" => Ok(Self::Null),
            "Boolean" => Ok(Self::Boolean),
            "Char" => Ok(Self::Char),
            "String" => Ok(Self::String),
            "Int16" => Ok(Self::Int16),
            "Int32" => Ok(Self::Int32),
            "Int64" => Ok(Self::Int64),
            "UInt16" => Ok(Self::UInt16),
            "UInt32" => Ok(Self::UInt32),
            "UInt64" => Ok(Self::UInt64),
            "Byte" => Ok(Self::Byte),
            "SByte" => Ok(Self::SByte),
            "Single" => Ok(Self::Single),
            "Double" => Ok(Self::Double),
            "Decimal" => Ok(Self::Decimal),
            "DateTime" => Ok(Self::DateTime),
            "TimeSpan" => Ok(Self::TimeSpan),
            "SqlGeography" => Ok(Self::SqlGeography),
            "SqlGeometry" => Ok(Self::SqlGeometry),
            other => Err(ParseDataTypeError(other.to_string())),
        }
    }
}

/// Native numeric representation backing a numeric type code.
///
/// Used by callers that need a concrete storage representation rather
/// than a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericKind {
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Single,
    Double,
    Decimal,
}

impl NumericKind {
    /// Get the simple name of this kind
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int16 => "Int16",
            Self::UInt16 => "UInt16",
            Self::Int32 => "Int32",
            Self::UInt32 => "UInt32",
            Self::Int64 => "Int64",
            Self::UInt64 => "UInt64",
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Decimal => "Decimal",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
