use winnow::ascii::float;
use winnow::combinator::{alt, delimited};
use winnow::token::literal;
use winnow::{ModalResult, Parser};

use crate::parser::tokens::*;
use crate::types::*;

/// Parse a single token from the pattern string
pub fn parse_single_token(input: &mut &str) -> ModalResult<FormatToken> {
    let group_textual = alt((
        parse_quoted_text,
        parse_escaped_char_as_literal,
        parse_fill,
        parse_skip_width,
    ));

    let group_number_symbols = alt((
        parse_exponential,
        parse_digit_or_zero,
        parse_digit_if_needed,
        parse_digit_or_space,
        parse_decimal_point,
        parse_thousands_separator,
        parse_percentage,
        parse_currency_symbol,
    ));

    let mut parser = alt((group_textual, group_number_symbols, parse_literal_passthrough));

    parser.parse_next(input)
}

/// Parse a comparison operator
pub fn parse_comparison_operator(input: &mut &str) -> ModalResult<ComparisonOperator> {
    alt((
        literal("<=").value(ComparisonOperator::Le),
        literal(">=").value(ComparisonOperator::Ge),
        literal("<>").value(ComparisonOperator::Ne),
        literal("=").value(ComparisonOperator::Eq),
        literal("<").value(ComparisonOperator::Lt),
        literal(">").value(ComparisonOperator::Gt),
    ))
    .parse_next(input)
}

/// Parse a condition value (a floating point number)
pub fn parse_condition_value(input: &mut &str) -> ModalResult<f64> {
    float.parse_next(input)
}

/// Parse a condition in the format [operator value]
pub fn parse_condition(input: &mut &str) -> ModalResult<Condition> {
    let core_parser = (parse_comparison_operator, parse_condition_value)
        .map(|(operator, value)| Condition { operator, value });

    delimited('[', core_parser, ']').parse_next(input)
}
