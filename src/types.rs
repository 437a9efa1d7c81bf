//! Type definitions shared across the formatter
//!
//! This module defines the style/attribute vocabulary of the public
//! formatter and the type system used to represent parsed format patterns.

/// Formatting style, fixed at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatStyle {
    /// Plain decimal formatting
    Decimal,
    /// Currency formatting with the locale's currency symbol
    Currency,
    /// Percent formatting (value scaled by 100)
    Percent,
    /// Number-to-words formatting
    Spellout,
}

impl FormatStyle {
    /// The pattern used when the caller does not supply one.
    ///
    /// Spellout shares the decimal pattern: without a custom renderer
    /// installed, spellout values render through the standard numeric path.
    pub fn default_pattern(self) -> &'static str {
        match self {
            FormatStyle::Decimal | FormatStyle::Spellout => "#,##0.###",
            FormatStyle::Currency => "\u{a4}#,##0.00",
            FormatStyle::Percent => "#,##0%",
        }
    }
}

/// Text attribute codes understood by the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAttribute {
    /// Prefix prepended to non-negative results
    PositivePrefix,
    /// Suffix appended to non-negative results
    PositiveSuffix,
    /// Prefix replacing the minus sign on negative results
    NegativePrefix,
    /// Suffix appended to negative results
    NegativeSuffix,
    /// Currency symbol override for the `¤` pattern token
    CurrencyCode,
    /// The active spellout ruleset name
    DefaultRuleset,
    /// The listing of public spellout rulesets
    PublicRulesets,
}

impl TextAttribute {
    /// Checks if the attribute is one of the two ruleset-selector codes.
    pub fn is_ruleset(self) -> bool {
        matches!(
            self,
            TextAttribute::DefaultRuleset | TextAttribute::PublicRulesets
        )
    }
}

/// Numeric kind hint passed to `format`.
///
/// Integer kinds truncate toward zero before formatting. The hint is
/// ignored entirely when a custom spellout renderer is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericKind {
    /// Use the value as given
    #[default]
    Default,
    /// Treat the value as a 32-bit integer
    Int32,
    /// Treat the value as a 64-bit integer
    Int64,
    /// Treat the value as a double
    Double,
}

impl NumericKind {
    /// Coerce a value according to the kind.
    pub fn coerce(self, value: f64) -> f64 {
        match self {
            NumericKind::Default | NumericKind::Double => value,
            NumericKind::Int32 => value.trunc() as i32 as f64,
            NumericKind::Int64 => value.trunc() as i64 as f64,
        }
    }
}

/// Represents a single format token parsed from the pattern string
#[derive(Debug, Clone, PartialEq)]
pub enum FormatToken {
    /// Number placeholder (0) that shows zero if no digit exists
    DigitOrZero,
    /// Number placeholder (#) that shows nothing if no digit exists
    DigitIfNeeded,
    /// Number placeholder (?) that shows a space if no digit exists
    DigitOrSpace,
    /// Decimal point (.)
    DecimalPoint,
    /// Thousands separator (,)
    ThousandsSeparator,
    /// Percentage symbol (%)
    Percentage,
    /// Exponential notation, such as E+ or E-
    Exponential(ExponentialNotation),
    /// Locale currency symbol placeholder (¤)
    CurrencySymbol,
    /// Literal character to display directly
    LiteralChar(char),
    /// Fill character, * followed by a character
    Fill(char),
    /// Skip width, _ followed by a character
    SkipWidth(char),
    /// Quoted text, like "text"
    QuotedText(String),
}

impl FormatToken {
    /// Checks if the token takes part in numeric rendering.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FormatToken::DigitOrZero
                | FormatToken::DigitIfNeeded
                | FormatToken::DigitOrSpace
                | FormatToken::DecimalPoint
                | FormatToken::ThousandsSeparator
                | FormatToken::Percentage
                | FormatToken::Exponential(_)
                | FormatToken::CurrencySymbol
        )
    }

    /// Checks if the token is a digit placeholder.
    pub fn is_digit_placeholder(&self) -> bool {
        matches!(
            self,
            FormatToken::DigitOrZero | FormatToken::DigitIfNeeded | FormatToken::DigitOrSpace
        )
    }
}

/// Type of exponential notation
#[derive(Debug, Clone, PartialEq)]
pub enum ExponentialNotation {
    /// E+ notation
    Plus,
    /// E- notation
    Minus,
}

/// Comparison operators for conditional sections
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonOperator {
    /// Equal to (=)
    Eq,
    /// Greater than (>)
    Gt,
    /// Less than (<)
    Lt,
    /// Greater than or equal to (>=)
    Ge,
    /// Less than or equal to (<=)
    Le,
    /// Not equal to (<>)
    Ne,
}

/// Represents a section condition with an operator and a comparison value
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// The comparison operator
    pub operator: ComparisonOperator,
    /// The value to compare against
    pub value: f64,
}

/// Represents one section of a pattern with an optional condition
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormatSection {
    /// The section's condition, if any
    pub condition: Option<Condition>,
    /// Sequence of format tokens
    pub tokens: Vec<FormatToken>,
}

/// Represents a complete number format pattern with all sections
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    /// Positive section format (required)
    pub positive_section: FormatSection,
    /// Negative section format (optional)
    pub negative_section: Option<FormatSection>,
    /// Zero value section format (optional)
    pub zero_section: Option<FormatSection>,
}

/// Locale-specific separator and currency settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSettings {
    /// Character separating the integer and fractional parts
    pub decimal_point: char,
    /// Character grouping integer digits in threes
    pub thousands_separator: char,
    /// Symbol substituted for the `¤` pattern token
    pub currency_symbol: String,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            decimal_point: '.',
            thousands_separator: ',',
            currency_symbol: "$".to_string(),
        }
    }
}
