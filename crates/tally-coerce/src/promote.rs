//! Common numeric denominator rules
//!
//! Mirrors conventional arithmetic type promotion: prefer the narrowest
//! kind that provably covers both operand ranges, and return
//! `DataTypeCode::Null` instead of guessing when no such kind exists.
//! Callers treat a `Null` result as "reject the operation".

use tally_types::DataTypeCode;

use crate::ScalarCoercer;

impl ScalarCoercer {
    /// Compute the common kind a pair of type codes promotes to.
    ///
    /// Decision order, first match wins:
    /// 1. either code non-numeric: `Null`
    /// 2. equal codes: that code
    /// 3. both signed: `Int64` if either is `Int64`, else `Int32`
    /// 4. both unsigned: `UInt64` if either is `UInt64`, else `UInt32`
    /// 5. both float: `Double`
    /// 6. signed paired with unsigned: the narrowest signed kind covering
    ///    the unsigned operand's range; `UInt32` forces `Int64`, and
    ///    `UInt64` has no covering signed kind so the pair yields `Null`
    /// 7. 32-bit-or-less paired with float: `Double`
    /// 8. 64-bit-or-less paired with `Decimal`: `Decimal`. `Int64` is
    ///    64-bit-or-less, so `Int64` with `Decimal` promotes to `Decimal`
    /// 9. anything else (for example `Decimal` with a float): `Null`
    ///
    /// The result is symmetric in its arguments.
    pub fn common_denominator(&self, x: DataTypeCode, y: DataTypeCode) -> DataTypeCode {
        if !x.is_numeric() || !y.is_numeric() {
            return DataTypeCode::Null;
        }
        if x == y {
            return x;
        }
        if x.is_signed() && y.is_signed() {
            if DataTypeCode::Int64 == x || DataTypeCode::Int64 == y {
                return DataTypeCode::Int64;
            }
            return DataTypeCode::Int32;
        }
        if x.is_unsigned() && y.is_unsigned() {
            if DataTypeCode::UInt64 == x || DataTypeCode::UInt64 == y {
                return DataTypeCode::UInt64;
            }
            return DataTypeCode::UInt32;
        }
        if x.is_float() && y.is_float() {
            return DataTypeCode::Double;
        }
        if x.is_signed() && y.is_unsigned() {
            return self.common_signed_unsigned(x, y);
        }
        if x.is_unsigned() && y.is_signed() {
            return self.common_signed_unsigned(y, x);
        }
        if (x.is_32bit_or_less() && y.is_float()) || (y.is_32bit_or_less() && x.is_float()) {
            return DataTypeCode::Double;
        }
        if (x.is_64bit_or_less() && DataTypeCode::Decimal == y)
            || (y.is_64bit_or_less() && DataTypeCode::Decimal == x)
        {
            return DataTypeCode::Decimal;
        }
        DataTypeCode::Null
    }

    // Precondition: signed is a signed kind, unsigned an unsigned one.
    // Only reachable through the dispatch above, which guarantees it.
    fn common_signed_unsigned(&self, signed: DataTypeCode, unsigned: DataTypeCode) -> DataTypeCode {
        debug_assert!(signed.is_signed() && unsigned.is_unsigned());
        if DataTypeCode::UInt64 == unsigned {
            return DataTypeCode::Null;
        }
        if DataTypeCode::UInt32 == unsigned {
            return DataTypeCode::Int64;
        }
        if DataTypeCode::Int64 == signed {
            return DataTypeCode::Int64;
        }
        DataTypeCode::Int32
    }
}
