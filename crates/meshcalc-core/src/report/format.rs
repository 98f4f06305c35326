//! pt-BR number and BRL currency rendering.

pub const RESULT_DECIMALS: usize = 3;

const NO_BREAK_SPACE: char = '\u{a0}';

/// `.` thousands separator, `,` decimal separator, exactly `decimals` fraction digits.
pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = fixed_half_away(value.abs(), decimals);
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (fixed.as_str(), ""),
    };

    let mut rendered = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if value < 0.0 {
        rendered.push('-');
    }
    rendered.push_str(&group_thousands(integer));
    if !fraction.is_empty() {
        rendered.push(',');
        rendered.push_str(fraction);
    }
    rendered
}

pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!(
        "{}R${}{}",
        sign,
        NO_BREAK_SPACE,
        format_number(value.abs(), 2)
    )
}

/// Fixed decimals with a comma separator and no grouping, as used in share messages.
pub fn format_fixed_comma(value: f64, decimals: usize) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}", sign, fixed_half_away(value.abs(), decimals)).replacen('.', ",", 1)
}

/// `{:.N}` formatting with exact ties rounded away from zero instead of to even.
fn fixed_half_away(magnitude: f64, decimals: usize) -> String {
    if !is_exact_tie(magnitude, decimals) {
        return format!("{:.*}", decimals, magnitude);
    }

    // One more digit is exact for a tie and ends in `5`; drop it and round up.
    let mut digits = format!("{:.*}", decimals + 1, magnitude).into_bytes();
    digits.pop();
    if digits.last() == Some(&b'.') {
        digits.pop();
    }
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if *digit == b'.' {
            continue;
        }
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        digits.insert(0, b'1');
    }
    String::from_utf8_lossy(&digits).into_owned()
}

/// True when `magnitude` lies exactly halfway between two values with `decimals` digits.
///
/// Writing the value as `m * 2^e` with `m` odd, that happens iff `e == -(decimals + 1)`.
fn is_exact_tie(magnitude: f64, decimals: usize) -> bool {
    if !magnitude.is_finite() || magnitude == 0.0 {
        return false;
    }
    let bits = magnitude.to_bits();
    let exponent_bits = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if exponent_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exponent_bits - 1075)
    };
    let exponent = exponent + i64::from(mantissa.trailing_zeros());
    exponent == -(decimals as i64 + 1)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}
