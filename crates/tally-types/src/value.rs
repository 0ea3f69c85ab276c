//! Scalar values - runtime representation of tagged report data
//!
//! This module defines the `ScalarValue` union and its payload types.
//! Each variant pairs a `DataTypeCode` with that code's native payload,
//! so a mismatched tag/payload combination cannot be constructed. Values
//! are immutable and scoped to a single call; nothing here retains a
//! reference to caller data.

use chrono::{NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DataTypeCode;

/// A single tagged scalar as read from a data source.
///
/// The `Display` implementation is the value's invariant textual form:
/// `.` as the decimal separator, no grouping separators, independent of
/// any process or thread locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ScalarValue {
    /// Missing value
    Null,
    /// Boolean value
    Boolean(bool),
    /// Single character
    Char(char),
    /// String value
    String(String),
    /// 16-bit signed integer
    Int16(i16),
    /// 32-bit signed integer
    Int32(i32),
    /// 64-bit signed integer
    Int64(i64),
    /// 16-bit unsigned integer
    UInt16(u16),
    /// 32-bit unsigned integer
    UInt32(u32),
    /// 64-bit unsigned integer
    UInt64(u64),
    /// 8-bit unsigned integer
    Byte(u8),
    /// 8-bit signed integer
    SByte(i8),
    /// 32-bit floating point
    Single(f32),
    /// 64-bit floating point
    Double(f64),
    /// Fixed-point decimal
    Decimal(Decimal),
    /// Calendar date with time of day
    DateTime(NaiveDateTime),
    /// Signed duration
    TimeSpan(TimeSpanValue),
    /// Geodetic spatial data
    Geography(SpatialValue),
    /// Planar spatial data
    Geometry(SpatialValue),
}

impl ScalarValue {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get the type code tagging this value
    pub fn data_type(&self) -> DataTypeCode {
        match self {
            Self::Null => DataTypeCode::Null,
            Self::Boolean(_) => DataTypeCode::Boolean,
            Self::Char(_) => DataTypeCode::Char,
            Self::String(_) => DataTypeCode::String,
            Self::Int16(_) => DataTypeCode::Int16,
            Self::Int32(_) => DataTypeCode::Int32,
            Self::Int64(_) => DataTypeCode::Int64,
            Self::UInt16(_) => DataTypeCode::UInt16,
            Self::UInt32(_) => DataTypeCode::UInt32,
            Self::UInt64(_) => DataTypeCode::UInt64,
            Self::Byte(_) => DataTypeCode::Byte,
            Self::SByte(_) => DataTypeCode::SByte,
            Self::Single(_) => DataTypeCode::Single,
            Self::Double(_) => DataTypeCode::Double,
            Self::Decimal(_) => DataTypeCode::Decimal,
            Self::DateTime(_) => DataTypeCode::DateTime,
            Self::TimeSpan(_) => DataTypeCode::TimeSpan,
            Self::Geography(_) => DataTypeCode::SqlGeography,
            Self::Geometry(_) => DataTypeCode::SqlGeometry,
        }
    }

    /// Try to get as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Create a null value
    pub fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value
    pub fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    /// Create a string value
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create a 32-bit integer value
    pub fn int32(value: i32) -> Self {
        Self::Int32(value)
    }

    /// Create a 64-bit integer value
    pub fn int64(value: i64) -> Self {
        Self::Int64(value)
    }

    /// Create a double value
    pub fn double(value: f64) -> Self {
        Self::Double(value)
    }

    /// Create a decimal value
    pub fn decimal(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Char(c) => write!(f, "{}", c),
            Self::String(s) => write!(f, "{}", s),
            Self::Int16(v) => write!(f, "{}", v),
            Self::Int32(v) => write!(f, "{}", v),
            Self::Int64(v) => write!(f, "{}", v),
            Self::UInt16(v) => write!(f, "{}", v),
            Self::UInt32(v) => write!(f, "{}", v),
            Self::UInt64(v) => write!(f, "{}", v),
            Self::Byte(v) => write!(f, "{}", v),
            Self::SByte(v) => write!(f, "{}", v),
            Self::Single(v) => write!(f, "{}", v),
            Self::Double(v) => write!(f, "{}", v),
            Self::Decimal(d) => write!(f, "{}", d),
            Self::DateTime(dt) => write!(f, "{}", dt),
            Self::TimeSpan(ts) => write!(f, "{}", ts),
            Self::Geography(s) | Self::Geometry(s) => write!(f, "{}", s),
        }
    }
}

// ============================================================================
// Time Spans
// ============================================================================

/// Ticks per second; one tick is 100 nanoseconds.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Signed time span stored as a count of 100 nanosecond ticks.
///
/// The tick count is the span's numeric view; the aggregation layer sums
/// and compares spans through it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct TimeSpanValue {
    ticks: i64,
}

impl TimeSpanValue {
    /// Create a span from a raw tick count
    pub const fn from_ticks(ticks: i64) -> Self {
        Self { ticks }
    }

    /// Create a span from a whole number of seconds
    pub const fn from_seconds(seconds: i64) -> Self {
        Self {
            ticks: seconds * TICKS_PER_SECOND,
        }
    }

    /// Get the raw tick count
    pub const fn ticks(self) -> i64 {
        self.ticks
    }

    /// Convert a chrono delta to a span, `None` when the delta exceeds
    /// the representable tick range.
    pub fn from_delta(delta: TimeDelta) -> Option<Self> {
        let subsec = i64::from(delta.subsec_nanos()) / 100;
        let ticks = delta
            .num_seconds()
            .checked_mul(TICKS_PER_SECOND)?
            .checked_add(subsec)?;
        Some(Self { ticks })
    }

    /// Convert this span to a chrono delta
    pub fn to_delta(self) -> TimeDelta {
        let secs = self.ticks.div_euclid(TICKS_PER_SECOND);
        let nanos = (self.ticks.rem_euclid(TICKS_PER_SECOND) * 100) as u32;
        // Every i64 tick count sits well inside TimeDelta's range.
        TimeDelta::new(secs, nanos).unwrap_or_default()
    }
}

impl fmt::Display for TimeSpanValue {
    /// Fixed `[-][d.]hh:mm:ss[.fffffff]` rendering
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ticks < 0 {
            write!(f, "-")?;
        }
        let ticks = self.ticks.unsigned_abs();
        let frac = ticks % TICKS_PER_SECOND as u64;
        let total_seconds = ticks / TICKS_PER_SECOND as u64;
        let days = total_seconds / 86_400;
        if days > 0 {
            write!(f, "{}.", days)?;
        }
        write!(
            f,
            "{:02}:{:02}:{:02}",
            (total_seconds / 3_600) % 24,
            (total_seconds / 60) % 60,
            total_seconds % 60
        )?;
        if frac > 0 {
            write!(f, ".{:07}", frac)?;
        }
        Ok(())
    }
}

// ============================================================================
// Spatial Data
// ============================================================================

/// Spatial payload carried as well-known text.
///
/// Opaque to the coercion layer beyond classification and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpatialValue {
    /// Spatial reference identifier, when the source supplies one
    pub srid: Option<i32>,
    /// Well-known-text rendering of the shape
    pub wkt: String,
}

impl SpatialValue {
    /// Create spatial data from well-known text
    pub fn new(wkt: impl Into<String>) -> Self {
        Self {
            srid: None,
            wkt: wkt.into(),
        }
    }

    /// Set the spatial reference identifier
    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = Some(srid);
        self
    }
}

impl fmt::Display for SpatialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wkt)
    }
}
