//! Promotion properties for mixed numeric operands
//!
//! Covers the pairwise rules (signed/signed, unsigned/unsigned, float,
//! signed/unsigned resolution, float widening, decimal widening) and the
//! whole-table properties: symmetry, idempotence for numeric codes, and
//! closure of the result set.

use rstest::rstest;
use tally_coerce::ScalarCoercer;
use tally_types::DataTypeCode;
use tally_types::DataTypeCode::{
    Byte, Decimal, Double, Int16, Int32, Int64, Null, SByte, Single, TimeSpan, UInt16, UInt32,
    UInt64,
};

#[rstest]
// Signed pairs widen to the widest signed operand, never below Int32.
#[case(Int16, Int32, Int32)]
#[case(SByte, Int16, Int32)]
#[case(Int16, Int64, Int64)]
// Unsigned pairs behave symmetrically.
#[case(Byte, UInt16, UInt32)]
#[case(UInt16, UInt32, UInt32)]
#[case(UInt32, UInt64, UInt64)]
// Floats always meet at Double.
#[case(Single, Double, Double)]
// Signed/unsigned resolution.
#[case(Int32, UInt32, Int64)]
#[case(Int64, UInt32, Int64)]
#[case(Int64, UInt16, Int64)]
#[case(SByte, Byte, Int32)]
#[case(Int32, UInt64, Null)]
#[case(Int64, UInt64, Null)]
// Small integers widen to Double against floats.
#[case(Int16, Single, Double)]
#[case(UInt32, Double, Double)]
// 64-bit-or-less integers widen to Decimal, Int64 included.
#[case(Int64, Decimal, Decimal)]
#[case(UInt64, Decimal, Decimal)]
#[case(Byte, Decimal, Decimal)]
// No defined promotion.
#[case(Decimal, Single, Null)]
#[case(Decimal, Double, Null)]
#[case(Null, Int32, Null)]
#[case(TimeSpan, Int32, Null)]
fn test_promotes(
    #[case] x: DataTypeCode,
    #[case] y: DataTypeCode,
    #[case] expected: DataTypeCode,
) {
    let coercer = ScalarCoercer::new();
    assert_eq!(coercer.common_denominator(x, y), expected, "{x} with {y}");
    assert_eq!(coercer.common_denominator(y, x), expected, "{y} with {x}");
}

#[test]
fn test_commutative_over_the_full_table() {
    let coercer = ScalarCoercer::new();
    for x in DataTypeCode::ALL {
        for y in DataTypeCode::ALL {
            assert_eq!(
                coercer.common_denominator(x, y),
                coercer.common_denominator(y, x),
                "{x} with {y}"
            );
        }
    }
}

#[test]
fn test_equal_codes_promote_to_themselves() {
    let coercer = ScalarCoercer::new();
    for x in DataTypeCode::ALL {
        let expected = if x.is_numeric() { x } else { Null };
        assert_eq!(coercer.common_denominator(x, x), expected, "{x}");
    }
}

#[test]
fn test_result_is_always_numeric_or_null() {
    let coercer = ScalarCoercer::new();
    for x in DataTypeCode::ALL {
        for y in DataTypeCode::ALL {
            let result = coercer.common_denominator(x, y);
            assert!(
                result == Null || result.is_numeric(),
                "{x} with {y} gave {result}"
            );
        }
    }
}

#[test]
fn test_exactly_three_numeric_pairings_have_no_promotion() {
    // Every numeric pair resolves to a real kind except: UInt64 against
    // a signed operand, Decimal against a float, and a 64-bit integer
    // against a float (a double cannot cover 64 bits losslessly).
    let coercer = ScalarCoercer::new();
    let is_64bit_only = |c: DataTypeCode| c == Int64 || c == UInt64;
    for x in DataTypeCode::ALL {
        for y in DataTypeCode::ALL {
            if !x.is_numeric() || !y.is_numeric() {
                continue;
            }
            let uint64_vs_signed = (x == UInt64 && y.is_signed()) || (y == UInt64 && x.is_signed());
            let decimal_vs_float =
                (x == Decimal && y.is_float()) || (y == Decimal && x.is_float());
            let wide_int_vs_float =
                (is_64bit_only(x) && y.is_float()) || (is_64bit_only(y) && x.is_float());
            let result = coercer.common_denominator(x, y);
            if uint64_vs_signed || decimal_vs_float || wide_int_vs_float {
                assert_eq!(result, Null, "{x} with {y}");
            } else {
                assert!(result.is_numeric(), "{x} with {y} gave {result}");
            }
        }
    }
}
