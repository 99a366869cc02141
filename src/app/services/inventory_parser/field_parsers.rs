//! Field coercion utilities for decoded inventory values
//!
//! Export columns are free text, so numbers often carry units ("650W",
//! "16GB"). Integer parsing reads the leading number and ignores the rest.

/// Parse the leading base-10 integer of a value.
///
/// Leading whitespace and a single `+`/`-` sign are accepted; parsing stops
/// at the first non-digit. Returns `None` when no digit is found or the
/// value does not fit in an `i64`.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();

    let sign_len = match trimmed.as_bytes().first() {
        Some(b'-' | b'+') => 1,
        _ => 0,
    };

    let digit_count = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digit_count == 0 {
        return None;
    }

    // Parse sign and digits together so i64::MIN stays representable
    trimmed[..sign_len + digit_count].parse().ok()
}

/// Parse a non-negative count (price, stock, sold).
///
/// Negative values are treated like unparsable ones.
pub fn parse_count(value: &str) -> Option<u64> {
    parse_leading_int(value).and_then(|n| u64::try_from(n).ok())
}

/// Availability flag: only the literal "true", in any case
pub fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Split a pipe-packed list column into its entries, in order
pub fn split_list(value: &str, separator: char) -> Vec<String> {
    value.split(separator).map(str::to_string).collect()
}
