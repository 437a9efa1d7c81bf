use winnow::ascii::Caseless;
use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::error::ErrMode;
use winnow::token::{any, literal, none_of, one_of};
use winnow::{ModalResult, Parser};

use crate::types::*;

// Number format parsers
pub fn parse_digit_or_zero(input: &mut &str) -> ModalResult<FormatToken> {
    literal("0")
        .value(FormatToken::DigitOrZero)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_digit_if_needed(input: &mut &str) -> ModalResult<FormatToken> {
    literal("#")
        .value(FormatToken::DigitIfNeeded)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_digit_or_space(input: &mut &str) -> ModalResult<FormatToken> {
    literal("?")
        .value(FormatToken::DigitOrSpace)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_decimal_point(input: &mut &str) -> ModalResult<FormatToken> {
    literal(".")
        .value(FormatToken::DecimalPoint)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_thousands_separator(input: &mut &str) -> ModalResult<FormatToken> {
    literal(",")
        .value(FormatToken::ThousandsSeparator)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_percentage(input: &mut &str) -> ModalResult<FormatToken> {
    literal("%")
        .value(FormatToken::Percentage)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_exponential(input: &mut &str) -> ModalResult<FormatToken> {
    alt((
        literal(Caseless("E+")).value(FormatToken::Exponential(ExponentialNotation::Plus)),
        literal(Caseless("E-")).value(FormatToken::Exponential(ExponentialNotation::Minus)),
    ))
    .parse_next(input)
    .map_err(ErrMode::Backtrack)
}

pub fn parse_currency_symbol(input: &mut &str) -> ModalResult<FormatToken> {
    literal("\u{a4}")
        .value(FormatToken::CurrencySymbol)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

// Text and special character parsers
pub fn parse_escaped_char_as_literal(input: &mut &str) -> ModalResult<FormatToken> {
    preceded('\\', any)
        .map(FormatToken::LiteralChar)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_literal_passthrough(input: &mut &str) -> ModalResult<FormatToken> {
    one_of(['$', '-', '+', '/', '(', ')', ' ', ':'])
        .map(FormatToken::LiteralChar)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_fill(input: &mut &str) -> ModalResult<FormatToken> {
    preceded('*', any)
        .map(FormatToken::Fill)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_skip_width(input: &mut &str) -> ModalResult<FormatToken> {
    preceded('_', any)
        .map(FormatToken::SkipWidth)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_quoted_text(input: &mut &str) -> ModalResult<FormatToken> {
    let content_parser = repeat(0.., alt((preceded('\\', any), none_of(['"']))))
        .map(|chars: Vec<char>| chars.into_iter().collect::<String>());

    delimited('"', content_parser, '"')
        .map(FormatToken::QuotedText)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}
