//! Numeric text helpers used when writing condition thresholds.

/// Largest magnitude that still round-trips exactly through an `i64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Format a threshold the way spreadsheet applications write it back.
///
/// Integral values are written without a fractional part (`0`, `-10`), all
/// other values use the shortest representation that round-trips.
///
/// # Examples
///
/// ```
/// use numstyle::common::format_number;
/// assert_eq!(format_number(100.0), "100");
/// assert_eq!(format_number(-0.5), "-0.5");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }

    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        let mut buffer = itoa::Buffer::new();
        return buffer.format(value as i64).to_string();
    }

    let mut buffer = ryu::Buffer::new();
    buffer.format(value).to_string()
}

/// Format an unsigned digit count for an XML attribute.
#[cfg_attr(not(feature = "odf"), allow(dead_code))]
#[inline]
pub(crate) fn format_count(value: u32) -> String {
    let mut buffer = itoa::Buffer::new();
    buffer.format(value).to_string()
}
