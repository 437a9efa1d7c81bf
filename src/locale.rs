//! Locale support for number formatting
//!
//! This module handles loading and managing locale-specific settings
//! for number formatting based on locale identifiers.

use std::collections::HashMap;
use std::sync::OnceLock;

use thiserror::Error;

use crate::types::LocaleSettings;

/// Error type for locale data parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocaleError {
    /// An error occurred while parsing locale data
    #[error("error parsing locale data: {0}")]
    ParseError(String),
}

type Result<T> = std::result::Result<T, LocaleError>;

/// Represents a locale manager that provides access to locale-specific settings
pub struct LocaleManager {
    locale_settings: HashMap<String, LocaleSettings>,
}

// Global singleton for locale settings
static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

impl LocaleManager {
    /// Create a new locale manager with the default locale data
    fn new() -> Self {
        let mut manager = Self {
            locale_settings: HashMap::new(),
        };

        // Parse and load the built-in locale data
        if let Err(e) = manager.load_embedded_data() {
            tracing::warn!("failed to load embedded locale data: {e}");
        }

        manager
    }

    /// Load the embedded locale data from the TOML table
    fn load_embedded_data(&mut self) -> Result<()> {
        let locale_settings_toml = include_str!("locale/locale_settings.toml");
        self.parse_locale_settings(locale_settings_toml)
    }

    /// Parse the locale settings TOML data
    fn parse_locale_settings(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("root is not a table".to_string()))?;

        // First load base settings if available
        let base_settings = if let Some(base) = table.get("base") {
            let mut settings = LocaleSettings::default();
            Self::apply_locale_specific_settings(&mut settings, base)?;
            settings
        } else {
            LocaleSettings::default()
        };

        // Now load each locale's settings over the base settings
        for (locale_id, value) in table {
            if locale_id == "base" {
                continue; // Already handled
            }

            let mut locale_settings = base_settings.clone();
            Self::apply_locale_specific_settings(&mut locale_settings, value)?;

            self.locale_settings
                .insert(locale_id.to_string(), locale_settings);
        }

        Ok(())
    }

    /// Apply locale-specific settings from TOML to a LocaleSettings object
    fn apply_locale_specific_settings(
        settings: &mut LocaleSettings,
        value: &toml::Value,
    ) -> Result<()> {
        let table = value
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("locale setting is not a table".to_string()))?;

        // Decimal point
        if let Some(decimal) = table.get("decimal").and_then(|v| v.as_str()) {
            if let Some(c) = decimal.chars().next() {
                settings.decimal_point = c;
            }
        }

        // Thousands separator
        if let Some(group) = table.get("group").and_then(|v| v.as_str()) {
            if let Some(c) = group.chars().next() {
                settings.thousands_separator = c;
            }
        }

        // Currency symbol
        if let Some(currency) = table.get("currency_symbol").and_then(|v| v.as_str()) {
            settings.currency_symbol = currency.to_string();
        }

        Ok(())
    }

    /// Get the global locale manager instance
    fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }

    /// Get locale settings by locale identifier (e.g., "en_US", "pl")
    fn get_locale_settings(&self, locale_id: &str) -> Option<&LocaleSettings> {
        self.locale_settings.get(locale_id)
    }
}

/// Get locale settings by locale identifier (e.g., "en_US", "pl")
pub fn get_locale_settings(locale_id: &str) -> Option<LocaleSettings> {
    LocaleManager::get().get_locale_settings(locale_id).cloned()
}

/// Resolve settings for a locale tag.
///
/// Falls back from the exact tag to the bare language subtag and finally to
/// the root defaults; an unrecognized locale is never an error.
pub fn resolve_locale_settings(locale_id: &str) -> LocaleSettings {
    let manager = LocaleManager::get();

    if let Some(settings) = manager.get_locale_settings(locale_id) {
        return settings.clone();
    }

    if let Some((language, _)) = locale_id.split_once(['_', '-']) {
        if let Some(settings) = manager.get_locale_settings(language) {
            return settings.clone();
        }
    }

    tracing::debug!(locale = locale_id, "no settings for locale, using root defaults");
    LocaleSettings::default()
}

/// List all available locale identifiers
pub fn list_available_locales() -> Vec<String> {
    LocaleManager::get()
        .locale_settings
        .keys()
        .cloned()
        .collect()
}
