use std::fmt::Write;

use crate::types::{FormatSection, FormatToken, LocaleSettings};

const EPSILON: f64 = 1e-9;

/// Render a value against a non-exponential section.
///
/// `adjusted_value` is the absolute value with percent scaling already
/// applied; `original_value` only contributes its sign. With
/// `negative_fallback` the section is the positive one standing in for a
/// missing negative section, and the minus sign is prepended at the end.
pub(super) fn format_numeric(
    original_value: f64,
    adjusted_value: f64,
    section: &FormatSection,
    locale: &LocaleSettings,
    currency_symbol: &str,
    negative_fallback: bool,
) -> String {
    let mut result = String::new();

    // Sections without numeric tokens render their literals verbatim.
    if !section.tokens.iter().any(FormatToken::is_numeric) {
        for token in &section.tokens {
            match token {
                FormatToken::LiteralChar(c) => result.push(*c),
                FormatToken::QuotedText(text) => result.push_str(text),
                FormatToken::SkipWidth(_) => result.push(' '),
                _ => {}
            }
        }
        return result;
    }

    // Count fractional placeholders.
    let mut decimal_places = 0;
    let mut after_decimal = false;
    for token in &section.tokens {
        if after_decimal && token.is_digit_placeholder() {
            decimal_places += 1;
        } else if matches!(token, FormatToken::DecimalPoint) {
            after_decimal = true;
        }
    }

    // Extract fractional digits and resolve rounding carry.
    let mut decimal_digits: Vec<u8> = Vec::with_capacity(decimal_places);
    let integer_to_format: i64;
    if decimal_places == 0 {
        integer_to_format = adjusted_value.round() as i64;
    } else {
        let mut remaining = adjusted_value.fract();
        for _ in 0..decimal_places {
            remaining *= 10.0;
            let digit = remaining.trunc() as u8;
            decimal_digits.push(digit.min(9));
            remaining -= remaining.trunc();
        }

        let mut integer_part = adjusted_value.trunc() as i64;
        if remaining.abs() >= 0.5 - EPSILON {
            let mut carry = true;
            for i in (0..decimal_digits.len()).rev() {
                if !carry {
                    break;
                }
                decimal_digits[i] += 1;
                if decimal_digits[i] == 10 {
                    decimal_digits[i] = 0;
                    if i == 0 {
                        integer_part += 1;
                    }
                } else {
                    carry = false;
                }
            }
        }
        integer_to_format = integer_part;
    }

    // An all-zero fraction with only optional placeholders drops the
    // decimal separator along with its digits.
    let omit_decimal_point = decimal_digits.iter().all(|&d| d == 0)
        && trailing_placeholders_optional(section, 0);

    let integer_str = integer_to_format.to_string();
    let int_digits: Vec<char> = integer_str.chars().collect();

    let is_negative = original_value < 0.0;
    let uses_parentheses = section
        .tokens
        .iter()
        .any(|t| matches!(t, FormatToken::LiteralChar('(') | FormatToken::LiteralChar(')')));

    // Group integer digits when the pattern asks for it.
    let group_digits = section
        .tokens
        .iter()
        .any(|t| matches!(t, FormatToken::ThousandsSeparator));
    let grouped: Vec<char> = if group_digits && integer_to_format != 0 {
        let mut grouped =
            Vec::with_capacity(int_digits.len() + int_digits.len().saturating_sub(1) / 3);
        for (count, digit) in int_digits.iter().rev().enumerate() {
            if count > 0 && count % 3 == 0 {
                grouped.push(locale.thousands_separator);
            }
            grouped.push(*digit);
        }
        grouped.reverse();
        grouped
    } else {
        int_digits.clone()
    };

    let mut int_iter = grouped.iter().copied().peekable();
    let mut sign_printed = false;
    let mut in_decimal = false;
    let mut frac_pos = 0;

    // Integer placeholders are the ones before the first decimal point.
    let mut integer_placeholders: usize = 0;
    for token in &section.tokens {
        if matches!(token, FormatToken::DecimalPoint) {
            break;
        }
        if token.is_digit_placeholder() {
            integer_placeholders += 1;
        }
    }

    let raw_int_digits = if integer_to_format == 0 && integer_placeholders > 0 {
        1
    } else {
        int_digits.len()
    };
    let padding_len = integer_placeholders.saturating_sub(raw_int_digits);
    let mut placeholder_idx = 0;
    let mut int_digit_printed = false;

    for token in &section.tokens {
        match token {
            FormatToken::LiteralChar(c) => {
                // Digits the placeholders could not absorb flush before a literal.
                if !in_decimal
                    && (integer_placeholders == 0 || placeholder_idx >= integer_placeholders)
                {
                    for digit in int_iter.by_ref() {
                        result.push(digit);
                        int_digit_printed = true;
                    }
                }

                let acts_as_sign = is_negative
                    && !negative_fallback
                    && ((*c == '(' && uses_parentheses) || (*c == '-' && !uses_parentheses));
                if acts_as_sign && !sign_printed {
                    sign_printed = true;
                }
                result.push(*c);
            }
            FormatToken::QuotedText(text) => {
                if !in_decimal
                    && (integer_placeholders == 0 || placeholder_idx >= integer_placeholders)
                {
                    for digit in int_iter.by_ref() {
                        result.push(digit);
                        int_digit_printed = true;
                    }
                }

                if !sign_printed
                    && is_negative
                    && !negative_fallback
                    && ((!uses_parentheses && text.starts_with('-'))
                        || (uses_parentheses && text.starts_with('(')))
                {
                    sign_printed = true;
                }
                result.push_str(text);
            }
            FormatToken::DecimalPoint => {
                if !int_digit_printed && integer_to_format == 0 {
                    let has_mandatory_zero = section
                        .tokens
                        .iter()
                        .take_while(|t| !matches!(t, FormatToken::DecimalPoint))
                        .any(|t| matches!(t, FormatToken::DigitOrZero));
                    if has_mandatory_zero || integer_placeholders == 0 {
                        result.push('0');
                        int_digit_printed = true;
                    }
                }
                for digit in int_iter.by_ref() {
                    result.push(digit);
                    int_digit_printed = true;
                }
                if !omit_decimal_point {
                    result.push(locale.decimal_point);
                }
                in_decimal = true;
            }
            FormatToken::DigitOrZero | FormatToken::DigitIfNeeded | FormatToken::DigitOrSpace => {
                if !in_decimal {
                    let mut char_to_print: Option<char> = None;
                    let mut consumed_digit = false;

                    if placeholder_idx < padding_len {
                        match token {
                            FormatToken::DigitOrZero => char_to_print = Some('0'),
                            FormatToken::DigitOrSpace => char_to_print = Some(' '),
                            FormatToken::DigitIfNeeded => {}
                            _ => unreachable!(),
                        }
                    } else if let Some(digit_char) = int_iter.peek().copied() {
                        match token {
                            FormatToken::DigitOrZero | FormatToken::DigitOrSpace => {
                                char_to_print = Some(digit_char);
                                consumed_digit = true;
                            }
                            FormatToken::DigitIfNeeded => {
                                // Suppress a leading zero unless it is the
                                // entire integer part.
                                if int_digit_printed
                                    || digit_char != '0'
                                    || integer_to_format == 0
                                {
                                    char_to_print = Some(digit_char);
                                }
                                consumed_digit = true;
                            }
                            _ => unreachable!(),
                        }
                    } else {
                        match token {
                            FormatToken::DigitOrZero => char_to_print = Some('0'),
                            FormatToken::DigitOrSpace => char_to_print = Some(' '),
                            FormatToken::DigitIfNeeded => {}
                            _ => unreachable!(),
                        }
                    }

                    if let Some(c) = char_to_print {
                        result.push(c);
                        if c.is_ascii_digit() {
                            int_digit_printed = true;
                        }
                    }
                    if consumed_digit {
                        int_iter.next();
                    }
                    placeholder_idx += 1;
                } else {
                    if frac_pos < decimal_digits.len() {
                        let digit = decimal_digits[frac_pos];
                        match token {
                            FormatToken::DigitOrZero | FormatToken::DigitOrSpace => {
                                write!(result, "{digit}").unwrap();
                            }
                            FormatToken::DigitIfNeeded => {
                                let rest_is_zero =
                                    decimal_digits[frac_pos..].iter().all(|&d| d == 0);
                                if !(digit == 0
                                    && rest_is_zero
                                    && trailing_placeholders_optional(section, frac_pos))
                                {
                                    write!(result, "{digit}").unwrap();
                                }
                            }
                            _ => unreachable!(),
                        }
                    } else {
                        match token {
                            FormatToken::DigitOrZero => result.push('0'),
                            FormatToken::DigitOrSpace => result.push(' '),
                            FormatToken::DigitIfNeeded => {}
                            _ => unreachable!(),
                        }
                    }
                    frac_pos += 1;
                }
            }
            FormatToken::Percentage => {
                for digit in int_iter.by_ref() {
                    result.push(digit);
                    int_digit_printed = true;
                }
                if !int_digit_printed && integer_to_format == 0 {
                    result.push('0');
                    int_digit_printed = true;
                }
                result.push('%');
            }
            FormatToken::CurrencySymbol => {
                result.push_str(currency_symbol);
            }
            FormatToken::SkipWidth(_) => {
                result.push(' ');
            }
            FormatToken::ThousandsSeparator | FormatToken::Fill(_) => {
                // Grouping is handled when digits are prepared; fill
                // alignment produces no output.
            }
            FormatToken::Exponential(_) => {
                // Handled by the exponential renderer before this one runs.
            }
        }
    }

    for digit in int_iter {
        result.push(digit);
        int_digit_printed = true;
    }

    // A zero rendered by a pattern whose placeholders never fired still
    // needs a digit.
    if !int_digit_printed
        && adjusted_value == 0.0
        && result
            .chars()
            .all(|c| c.is_whitespace() || c == '(' || c == ')')
    {
        let has_mandatory_zero = section
            .tokens
            .iter()
            .any(|t| matches!(t, FormatToken::DigitOrZero));
        if result.is_empty() && has_mandatory_zero {
            result.push('0');
        }
    }

    if is_negative {
        if uses_parentheses {
            if !sign_printed {
                result.insert(0, '(');
            }
            if result.starts_with('(') && !result.ends_with(')') {
                result.push(')');
            }
        } else if negative_fallback || !sign_printed {
            result.insert(0, '-');
        }
    }

    result
}

/// True when every fractional placeholder from `frac_pos` on is optional.
fn trailing_placeholders_optional(section: &FormatSection, frac_pos: usize) -> bool {
    section
        .tokens
        .iter()
        .skip_while(|t| !matches!(t, FormatToken::DecimalPoint))
        .skip(1)
        .skip(frac_pos)
        .all(|t| !matches!(t, FormatToken::DigitOrZero))
}
