//! The base formatting engine
//!
//! Pattern-driven numeric rendering with locale-specific separators. The
//! engine knows nothing about custom spellout renderers; `Formatter`
//! composes an engine with the renderer registry and falls back here
//! whenever no override is active.

mod exponential;
mod numeric;
mod sections;

use std::collections::HashMap;

use crate::error::FormatError;
use crate::locale::resolve_locale_settings;
use crate::parser::parse_pattern;
use crate::types::{
    FormatStyle, FormatToken, LocaleSettings, NumberFormat, NumericKind, TextAttribute,
};

/// Default ruleset name reported for spellout-style formatters.
const SPELLOUT_NUMBERING: &str = "%spellout-numbering";

/// Locale-aware, pattern-driven number formatter.
pub struct BaseEngine {
    locale: String,
    style: FormatStyle,
    settings: LocaleSettings,
    format: NumberFormat,
    attributes: HashMap<TextAttribute, String>,
}

impl BaseEngine {
    /// Construct an engine for a locale and style.
    ///
    /// When `pattern` is `None` the style's default pattern is used. A
    /// malformed pattern is the engine's only construction failure.
    pub fn new(
        locale: &str,
        style: FormatStyle,
        pattern: Option<&str>,
    ) -> Result<Self, FormatError> {
        let effective_pattern = pattern.unwrap_or_else(|| style.default_pattern());
        let format = parse_pattern(effective_pattern)?;

        Ok(Self {
            locale: locale.to_string(),
            style,
            settings: resolve_locale_settings(locale),
            format,
            attributes: HashMap::new(),
        })
    }

    /// The locale tag this engine was constructed with.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The style this engine was constructed with.
    pub fn style(&self) -> FormatStyle {
        self.style
    }

    /// The separator and currency settings resolved for the locale.
    pub fn settings(&self) -> &LocaleSettings {
        &self.settings
    }

    /// Store a text attribute.
    ///
    /// Ruleset attributes are only meaningful for the spellout style;
    /// setting one on any other style reports failure.
    pub fn set_text_attribute(&mut self, attr: TextAttribute, value: &str) -> bool {
        if attr.is_ruleset() && self.style != FormatStyle::Spellout {
            return false;
        }
        self.attributes.insert(attr, value.to_string());
        true
    }

    /// Read a text attribute, or its default when unset.
    pub fn get_text_attribute(&self, attr: TextAttribute) -> String {
        if let Some(value) = self.attributes.get(&attr) {
            return value.clone();
        }
        match attr {
            TextAttribute::NegativePrefix => "-".to_string(),
            TextAttribute::DefaultRuleset | TextAttribute::PublicRulesets
                if self.style == FormatStyle::Spellout =>
            {
                SPELLOUT_NUMBERING.to_string()
            }
            _ => String::new(),
        }
    }

    /// Format a numeric value against the engine's pattern.
    pub fn format(&self, value: f64, kind: NumericKind) -> String {
        let value = kind.coerce(value);
        let section = sections::select_section(value, &self.format);

        let body = if section.tokens.is_empty() {
            String::new()
        } else if let Some(exp_idx) = section
            .tokens
            .iter()
            .position(|t| matches!(t, FormatToken::Exponential(_)))
        {
            exponential::format_exponential(value, section, exp_idx, &self.settings)
        } else {
            let has_percentage = section
                .tokens
                .iter()
                .any(|t| matches!(t, FormatToken::Percentage));
            let adjusted_value = if has_percentage {
                value.abs() * 100.0
            } else {
                value.abs()
            };
            // A negative value rendered through the positive section gets
            // its sign prepended by the renderer.
            let negative_fallback =
                value < 0.0 && std::ptr::eq(section, &self.format.positive_section);
            numeric::format_numeric(
                value,
                adjusted_value,
                section,
                &self.settings,
                self.currency_symbol(),
                negative_fallback,
            )
        };

        self.apply_affixes(value, body)
    }

    fn currency_symbol(&self) -> &str {
        self.attributes
            .get(&TextAttribute::CurrencyCode)
            .map(String::as_str)
            .unwrap_or(&self.settings.currency_symbol)
    }

    /// Apply prefix/suffix attributes to a rendered body.
    ///
    /// A configured negative prefix replaces the leading minus sign.
    fn apply_affixes(&self, value: f64, body: String) -> String {
        let (prefix, suffix) = if value < 0.0 {
            (
                self.attributes.get(&TextAttribute::NegativePrefix),
                self.attributes.get(&TextAttribute::NegativeSuffix),
            )
        } else {
            (
                self.attributes.get(&TextAttribute::PositivePrefix),
                self.attributes.get(&TextAttribute::PositiveSuffix),
            )
        };

        if prefix.is_none() && suffix.is_none() {
            return body;
        }

        let core = if value < 0.0 && prefix.is_some() {
            body.strip_prefix('-').unwrap_or(&body)
        } else {
            &body
        };

        let mut result = String::with_capacity(core.len() + 8);
        if let Some(prefix) = prefix {
            result.push_str(prefix);
        }
        result.push_str(core);
        if let Some(suffix) = suffix {
            result.push_str(suffix);
        }
        result
    }
}
