use std::fmt::Write;

use crate::types::{ExponentialNotation, FormatSection, FormatToken, LocaleSettings};

/// Format a number in exponential notation
pub(super) fn format_exponential(
    value: f64,
    section: &FormatSection,
    exp_token_idx: usize,
    locale: &LocaleSettings,
) -> String {
    let mut result = String::new();

    let abs_value = value.abs();
    let (mantissa, exponent) = if abs_value == 0.0 {
        (0.0, 0)
    } else {
        let exponent_val = abs_value.log10().floor();
        let mantissa_val = abs_value / 10.0_f64.powf(exponent_val);
        (mantissa_val, exponent_val as i32)
    };

    let is_negative = value < 0.0;
    let sign = if is_negative { "-" } else { "" };

    // Mantissa precision is the number of placeholders between the decimal
    // point and the exponent token.
    let mut mantissa_precision = 0;
    let mut in_mantissa_decimal_part = false;
    for token in section.tokens.iter().take(exp_token_idx) {
        if matches!(token, FormatToken::DecimalPoint) {
            in_mantissa_decimal_part = true;
            continue;
        }
        if in_mantissa_decimal_part && token.is_digit_placeholder() {
            mantissa_precision += 1;
        }
    }

    let power = 10.0_f64.powi(mantissa_precision as i32);
    let rounded_mantissa = (mantissa * power).round() / power;

    // Rounding may push the mantissa out of [1, 10).
    let (final_mantissa, final_exponent) = if rounded_mantissa == 0.0 {
        (0.0, 0)
    } else if rounded_mantissa >= 10.0 {
        (rounded_mantissa / 10.0, exponent + 1)
    } else {
        (rounded_mantissa, exponent)
    };

    write!(result, "{sign}").unwrap();

    let mut mantissa_str = format!(
        "{:.precision$}",
        final_mantissa,
        precision = mantissa_precision
    );
    if locale.decimal_point != '.' {
        mantissa_str = mantissa_str.replace('.', &locale.decimal_point.to_string());
    }
    write!(result, "{mantissa_str}").unwrap();

    let exp_sign = if final_exponent < 0 {
        "-"
    } else {
        match &section.tokens[exp_token_idx] {
            FormatToken::Exponential(ExponentialNotation::Plus) => "+",
            FormatToken::Exponential(ExponentialNotation::Minus) => "",
            _ => unreachable!(),
        }
    };
    write!(result, "E{}{:02}", exp_sign, final_exponent.abs()).unwrap();

    result
}
