//! Scalar to native numeric conversions

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tally_types::ScalarValue;

use crate::ScalarCoercer;

impl ScalarCoercer {
    /// Widen a numeric or time span scalar to `f64`.
    ///
    /// `Int64`, `UInt64` and `Decimal` magnitudes beyond 53 bits of
    /// mantissa lose precision; the cast is deliberate and documented,
    /// not an error. Time spans convert through their tick count.
    ///
    /// # Panics
    ///
    /// Panics when the scalar is neither numeric nor a time span.
    /// Callers gate on
    /// [`is_numeric`](tally_types::DataTypeCode::is_numeric) before
    /// converting; reaching the panic is a caller bug, never a
    /// data-driven state.
    pub fn to_double(&self, value: &ScalarValue) -> f64 {
        match value {
            ScalarValue::Double(v) => *v,
            ScalarValue::Single(v) => f64::from(*v),
            ScalarValue::Int16(v) => f64::from(*v),
            ScalarValue::Int32(v) => f64::from(*v),
            ScalarValue::Int64(v) => *v as f64,
            ScalarValue::UInt16(v) => f64::from(*v),
            ScalarValue::UInt32(v) => f64::from(*v),
            ScalarValue::UInt64(v) => *v as f64,
            ScalarValue::Byte(v) => f64::from(*v),
            ScalarValue::SByte(v) => f64::from(*v),
            ScalarValue::Decimal(d) => d.to_f64().unwrap_or(0.0),
            ScalarValue::TimeSpan(ts) => ts.ticks() as f64,
            other => panic!("no double conversion for {} scalars", other.data_type()),
        }
    }

    /// Narrow an integer scalar to `i32` when the value fits.
    ///
    /// Returns `None` for out-of-range values and for every non-integer
    /// kind. Float and decimal scalars never convert here, so no
    /// fractional value is silently truncated; callers branch on the
    /// `None` as routine control flow.
    pub fn try_to_int32(&self, value: &ScalarValue) -> Option<i32> {
        match value {
            ScalarValue::Int16(v) => Some(i32::from(*v)),
            ScalarValue::Int32(v) => Some(*v),
            ScalarValue::UInt16(v) => Some(i32::from(*v)),
            ScalarValue::Byte(v) => Some(i32::from(*v)),
            ScalarValue::SByte(v) => Some(i32::from(*v)),
            ScalarValue::Int64(v) => i32::try_from(*v).ok(),
            ScalarValue::UInt32(v) => i32::try_from(*v).ok(),
            ScalarValue::UInt64(v) => i32::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Check whether a numeric scalar is strictly below zero.
    ///
    /// Unsigned kinds are never negative, and every non-numeric kind
    /// counts as "not less than zero", so the test is total and never
    /// fails.
    pub fn is_negative(&self, value: &ScalarValue) -> bool {
        match value {
            ScalarValue::Int16(v) => *v < 0,
            ScalarValue::Int32(v) => *v < 0,
            ScalarValue::Int64(v) => *v < 0,
            ScalarValue::SByte(v) => *v < 0,
            ScalarValue::Single(v) => *v < 0.0,
            ScalarValue::Double(v) => *v < 0.0,
            ScalarValue::Decimal(d) => *d < Decimal::ZERO,
            ScalarValue::Byte(_)
            | ScalarValue::UInt16(_)
            | ScalarValue::UInt32(_)
            | ScalarValue::UInt64(_) => false,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_types::TimeSpanValue;

    #[test]
    fn test_to_double_widens_integers() {
        let coercer = ScalarCoercer::new();
        assert_eq!(coercer.to_double(&ScalarValue::Int16(-3)), -3.0);
        assert_eq!(coercer.to_double(&ScalarValue::Byte(255)), 255.0);
        assert_eq!(coercer.to_double(&ScalarValue::UInt64(12)), 12.0);
    }

    #[test]
    fn test_to_double_timespan_uses_ticks() {
        let coercer = ScalarCoercer::new();
        let span = ScalarValue::TimeSpan(TimeSpanValue::from_seconds(2));
        assert_eq!(coercer.to_double(&span), 20_000_000.0);
    }

    #[test]
    #[should_panic(expected = "no double conversion")]
    fn test_to_double_rejects_strings() {
        ScalarCoercer::new().to_double(&ScalarValue::string("12"));
    }
}
