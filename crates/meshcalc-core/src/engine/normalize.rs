//! Decimal text handling for form fields.
//!
//! Both `.` and `,` are accepted as the decimal separator; only the first
//! comma is rewritten, so `"1,234,5"` reads as `1.234`.

use crate::domain::{MeshError, MeshResult};

#[derive(Debug, Clone, Copy, PartialEq)]
struct DecimalPrefix {
    value: f64,
    consumed: usize,
}

/// Lenient parse: the longest leading decimal literal, or 0 when there is none.
pub fn normalize(raw: &str) -> f64 {
    let text = raw.replacen(',', ".", 1);
    scan_decimal_prefix(text.trim_start())
        .map(|prefix| prefix.value)
        .filter(|value| !value.is_nan())
        .unwrap_or(0.0)
}

/// Strict parse: `Ok(None)` for blank text, `Ok(Some(_))` when the whole
/// trimmed text is one decimal literal, an input-validation error otherwise.
pub fn parse_decimal(raw: &str) -> MeshResult<Option<f64>> {
    let text = raw.replacen(',', ".", 1);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match scan_decimal_prefix(trimmed) {
        Some(prefix) if prefix.consumed == trimmed.len() && !prefix.value.is_nan() => {
            Ok(Some(prefix.value))
        }
        _ => Err(MeshError::input_validation(
            "INPUT.MALFORMED_NUMBER",
            format!("'{}' is not a valid decimal number", raw.trim()),
        )),
    }
}

fn scan_decimal_prefix(text: &str) -> Option<DecimalPrefix> {
    let bytes = text.as_bytes();
    let mut index = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            index = 1;
            true
        }
        Some(b'+') => {
            index = 1;
            false
        }
        _ => false,
    };

    if text[index..].starts_with("Infinity") {
        let value = if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some(DecimalPrefix {
            value,
            consumed: index + "Infinity".len(),
        });
    }

    let integer_start = index;
    index = skip_digits(bytes, index);
    let integer_digits = &text[integer_start..index];

    let mut fraction_digits = "";
    if bytes.get(index) == Some(&b'.') {
        let fraction_start = index + 1;
        let fraction_end = skip_digits(bytes, fraction_start);
        if !integer_digits.is_empty() || fraction_end > fraction_start {
            fraction_digits = &text[fraction_start..fraction_end];
            index = fraction_end;
        }
    }

    if integer_digits.is_empty() && fraction_digits.is_empty() {
        return None;
    }

    let mut exponent = "";
    if matches!(bytes.get(index), Some(b'e' | b'E')) {
        let mut end = index + 1;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let digits_end = skip_digits(bytes, end);
        if digits_end > end {
            exponent = &text[index..digits_end];
            index = digits_end;
        }
    }

    let literal = format!(
        "{}{}.{}{}",
        if negative { "-" } else { "" },
        if integer_digits.is_empty() {
            "0"
        } else {
            integer_digits
        },
        if fraction_digits.is_empty() {
            "0"
        } else {
            fraction_digits
        },
        exponent
    );

    literal.parse::<f64>().ok().map(|value| DecimalPrefix {
        value,
        consumed: index,
    })
}

fn skip_digits(bytes: &[u8], mut index: usize) -> usize {
    while bytes.get(index).is_some_and(u8::is_ascii_digit) {
        index += 1;
    }
    index
}
