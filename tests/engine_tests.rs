use number_spellout::{FormatError, FormatStyle, Formatter, NumericKind, PatternError, TextAttribute};

fn decimal(locale: &str, pattern: &str) -> Formatter {
    Formatter::new(locale, FormatStyle::Decimal, Some(pattern)).unwrap()
}

#[test]
fn test_basic_format() {
    let formatter = decimal("en_US", "0.00");
    assert_eq!(formatter.format(123.456, NumericKind::Default), "123.46");
    assert_eq!(formatter.format(0.789, NumericKind::Default), "0.79");
}

#[test]
fn test_negative_format() {
    let formatter = decimal("en_US", "0.00;-0.00");
    assert_eq!(formatter.format(123.456, NumericKind::Default), "123.46");
    assert_eq!(formatter.format(-123.456, NumericKind::Default), "-123.46");
}

#[test]
fn test_negative_fallback_through_positive_section() {
    let formatter = decimal("en_US", "0.00");
    assert_eq!(formatter.format(-123.456, NumericKind::Default), "-123.46");
}

#[test]
fn test_parenthesized_negative() {
    let formatter = decimal("en_US", "0.00;(0.00)");
    assert_eq!(formatter.format(-5.0, NumericKind::Default), "(5.00)");
}

#[test]
fn test_digit_placeholders() {
    let formatter = decimal("en_US", "#0.0#");
    assert_eq!(formatter.format(123.456, NumericKind::Default), "123.46");
    assert_eq!(formatter.format(123.4, NumericKind::Default), "123.4");
    assert_eq!(formatter.format(0.456, NumericKind::Default), "0.46");
}

#[test]
fn test_zero_padding() {
    let formatter = decimal("en_US", "0000");
    assert_eq!(formatter.format(42.0, NumericKind::Default), "0042");
}

#[test]
fn test_rounding() {
    let formatter = decimal("en_US", "0.0");
    assert_eq!(formatter.format(0.04, NumericKind::Default), "0.0");
    assert_eq!(formatter.format(0.05, NumericKind::Default), "0.1");
    assert_eq!(formatter.format(0.95, NumericKind::Default), "1.0");

    let formatter2 = decimal("en_US", "0.00");
    assert_eq!(formatter2.format(0.994, NumericKind::Default), "0.99");
    assert_eq!(formatter2.format(0.995, NumericKind::Default), "1.00");
}

#[test]
fn test_thousands_separator_default_locale() {
    let formatter = decimal("en_US", "#,##0.00");
    assert_eq!(
        formatter.format(1234567.89, NumericKind::Default),
        "1,234,567.89"
    );
    assert_eq!(formatter.format(1234.56, NumericKind::Default), "1,234.56");
    assert_eq!(formatter.format(123.45, NumericKind::Default), "123.45");
    assert_eq!(
        formatter.format(-12345.67, NumericKind::Default),
        "-12,345.67"
    );
}

#[test]
fn test_thousands_separator_localized() {
    let formatter = decimal("de_DE", "#,##0.00");
    assert_eq!(
        formatter.format(1234567.89, NumericKind::Default),
        "1.234.567,89"
    );
    assert_eq!(
        formatter.format(-12345.67, NumericKind::Default),
        "-12.345,67"
    );
}

#[test]
fn test_language_subtag_fallback_in_formatting() {
    let formatter = decimal("pl_PL", "#,##0.00");
    assert_eq!(
        formatter.format(1234.5, NumericKind::Default),
        "1\u{a0}234,50"
    );
}

#[test]
fn test_zero_section() {
    let formatter = decimal("en_US", "0.00;-0.00;\"zero\"");
    assert_eq!(formatter.format(0.0, NumericKind::Default), "zero");
}

#[test]
fn test_conditional_sections() {
    let formatter = decimal("en_US", "[>100]\"big\";[<=100]\"small\"");
    assert_eq!(formatter.format(150.0, NumericKind::Default), "big");
    assert_eq!(formatter.format(50.0, NumericKind::Default), "small");
}

#[test]
fn test_percent_style() {
    let formatter = Formatter::new("en_US", FormatStyle::Percent, None).unwrap();
    assert_eq!(formatter.format(0.12, NumericKind::Default), "12%");
}

#[test]
fn test_currency_style() {
    let formatter = Formatter::new("en_US", FormatStyle::Currency, None).unwrap();
    assert_eq!(formatter.format(1234.5, NumericKind::Default), "$1,234.50");

    let formatter_de = Formatter::new("de_DE", FormatStyle::Currency, None).unwrap();
    assert_eq!(
        formatter_de.format(1234.5, NumericKind::Default),
        "€1.234,50"
    );
}

#[test]
fn test_currency_code_attribute_overrides_symbol() {
    let mut formatter = Formatter::new("en_US", FormatStyle::Currency, None).unwrap();
    assert!(formatter.set_text_attribute(TextAttribute::CurrencyCode, "USD"));
    assert_eq!(formatter.format(1234.5, NumericKind::Default), "USD1,234.50");
    assert_eq!(
        formatter.get_text_attribute(TextAttribute::CurrencyCode),
        "USD"
    );
}

#[test]
fn test_affix_attributes() {
    let mut formatter = Formatter::new("en_US", FormatStyle::Decimal, None).unwrap();
    assert!(formatter.set_text_attribute(TextAttribute::PositivePrefix, "+"));
    assert_eq!(formatter.format(1234.5, NumericKind::Default), "+1,234.5");

    let mut accounting = Formatter::new("en_US", FormatStyle::Decimal, None).unwrap();
    assert!(accounting.set_text_attribute(TextAttribute::NegativePrefix, "("));
    assert!(accounting.set_text_attribute(TextAttribute::NegativeSuffix, ")"));
    assert_eq!(
        accounting.format(-1234.5, NumericKind::Default),
        "(1,234.5)"
    );
    // Unset attributes fall back to engine defaults.
    assert_eq!(
        accounting.get_text_attribute(TextAttribute::PositivePrefix),
        ""
    );
}

#[test]
fn test_negative_prefix_default() {
    let formatter = Formatter::new("en_US", FormatStyle::Decimal, None).unwrap();
    assert_eq!(
        formatter.get_text_attribute(TextAttribute::NegativePrefix),
        "-"
    );
}

#[test]
fn test_numeric_kinds() {
    let formatter = decimal("en_US", "0.##");
    assert_eq!(formatter.format(42.9, NumericKind::Int64), "42");
    assert_eq!(formatter.format(42.9, NumericKind::Double), "42.9");
    assert_eq!(formatter.format(-42.9, NumericKind::Int32), "-42");
}

#[test]
fn test_exponential_format() {
    let formatter = decimal("en_US", "0.00E+00");
    assert_eq!(formatter.format(12345.0, NumericKind::Default), "1.23E+04");
    assert_eq!(formatter.format(0.0123, NumericKind::Default), "1.23E-02");
    assert_eq!(formatter.format(-12345.0, NumericKind::Default), "-1.23E+04");

    let formatter2 = decimal("en_US", "0E+00");
    assert_eq!(formatter2.format(12345.0, NumericKind::Default), "1E+04");
}

#[test]
fn test_spellout_without_renderer_uses_numeric_path() {
    let formatter = Formatter::new("en_US", FormatStyle::Spellout, None).unwrap();
    assert_eq!(formatter.format(42.0, NumericKind::Default), "42");
    assert_eq!(formatter.format(1234.5, NumericKind::Default), "1,234.5");
}

#[test]
fn test_invalid_pattern_propagates() {
    let result = Formatter::new("en_US", FormatStyle::Decimal, Some("0;-0;0;@"));
    assert!(matches!(
        result,
        Err(FormatError::InvalidPattern(PatternError::TrailingInput(_)))
    ));

    let result2 = Formatter::new("en_US", FormatStyle::Decimal, Some("[>0]0;[<0]0;[=0]0"));
    assert!(matches!(
        result2,
        Err(FormatError::InvalidPattern(PatternError::TooManyConditions))
    ));
}

#[test]
fn test_locale_accessor() {
    let formatter = Formatter::new("pl", FormatStyle::Spellout, None).unwrap();
    assert_eq!(formatter.locale(), "pl");
    assert_eq!(formatter.style(), FormatStyle::Spellout);
}
