//! Locale invariant string rendering

use tally_types::ScalarValue;

use crate::ScalarCoercer;

impl ScalarCoercer {
    /// Render a scalar in its fixed, locale independent textual form.
    ///
    /// Returns `None` for null scalars. The rendering always uses `.` as
    /// the decimal separator and no grouping separators, whatever locale
    /// the process or thread runs under; no ambient state is read or
    /// written on any path, so concurrent callers never observe each
    /// other.
    pub fn to_invariant_string(&self, value: &ScalarValue) -> Option<String> {
        if value.is_null() {
            return None;
        }
        Some(value.to_string())
    }
}
