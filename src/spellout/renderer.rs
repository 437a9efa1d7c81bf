use crate::types::LocaleSettings;

/// Construction-time snapshot of the owning formatter's base engine.
///
/// Handed to renderer factories so a renderer can reuse the primitives the
/// engine already resolved: the locale tag and its separator/currency
/// settings.
#[derive(Debug, Clone)]
pub struct EngineContext {
    /// Locale tag of the owning formatter
    pub locale: String,
    /// Settings the base engine resolved for that locale
    pub settings: LocaleSettings,
}

/// A custom spellout renderer.
///
/// Implementations take over formatting entirely for the ruleset they were
/// registered under; the numeric-kind hint never reaches them.
pub trait SpelloutRenderer: Send {
    /// Render the value as words.
    fn format(&self, value: f64) -> String;
}
