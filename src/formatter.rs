//! The public number formatter
//!
//! `Formatter` composes the base engine with the renderer registry:
//! ruleset-setting calls are resolved against the registry, and format
//! calls dispatch to the active renderer when one is installed, falling
//! back to the engine otherwise.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::engine::BaseEngine;
use crate::error::FormatError;
use crate::spellout::{
    EngineContext, RendererIdentity, RendererRegistry, SpelloutRenderer, global_registry,
};
use crate::types::{FormatStyle, NumericKind, TextAttribute};

/// Locale-aware number formatter with pluggable spellout renderers.
///
/// Instances are single-threaded mutable state; share one across threads
/// only with external synchronization.
///
/// # Examples
/// ```
/// use number_spellout::{FormatStyle, Formatter, NumericKind};
///
/// let formatter = Formatter::new("de_DE", FormatStyle::Decimal, None).unwrap();
/// assert_eq!(formatter.format(1234.5, NumericKind::Default), "1.234,5");
/// ```
pub struct Formatter {
    engine: BaseEngine,
    is_spellout: bool,
    /// Attribute values claimed by the custom-renderer path.
    attributes: HashMap<TextAttribute, String>,
    /// At most one active renderer; replaced or cleared on every
    /// ruleset-setting call.
    renderer: Option<Box<dyn SpelloutRenderer>>,
    registry: Arc<RwLock<RendererRegistry>>,
}

impl Formatter {
    /// Create a formatter backed by the process-wide renderer registry.
    ///
    /// The only failure is the base engine rejecting a malformed pattern.
    pub fn new(
        locale: &str,
        style: FormatStyle,
        pattern: Option<&str>,
    ) -> Result<Self, FormatError> {
        Self::with_registry(locale, style, pattern, global_registry())
    }

    /// Create a formatter that resolves renderers against `registry`.
    pub fn with_registry(
        locale: &str,
        style: FormatStyle,
        pattern: Option<&str>,
        registry: Arc<RwLock<RendererRegistry>>,
    ) -> Result<Self, FormatError> {
        let engine = BaseEngine::new(locale, style, pattern)?;

        Ok(Self {
            engine,
            is_spellout: style == FormatStyle::Spellout,
            attributes: HashMap::new(),
            renderer: None,
            registry,
        })
    }

    /// The locale tag this formatter was constructed with.
    pub fn locale(&self) -> &str {
        self.engine.locale()
    }

    /// The style this formatter was constructed with.
    pub fn style(&self) -> FormatStyle {
        self.engine.style()
    }

    /// Check whether a custom renderer is currently active.
    pub fn has_active_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    /// Set a text attribute.
    ///
    /// A ruleset value that resolves to a registered renderer is claimed
    /// here: the renderer becomes active and the value is echoed back by
    /// [`Formatter::get_text_attribute`] without ever reaching the base
    /// engine. Any other call clears the active renderer (and the values it
    /// claimed) and forwards to the engine, returning the engine's result.
    pub fn set_text_attribute(&mut self, attr: TextAttribute, value: &str) -> bool {
        if self.is_spellout_override_available(attr, value) {
            self.attributes.insert(attr, value.to_string());
            return true;
        }

        self.renderer = None;
        self.attributes.clear();
        self.engine.set_text_attribute(attr, value)
    }

    /// Read a text attribute, preferring values claimed by the custom
    /// renderer path over the base engine's own.
    pub fn get_text_attribute(&self, attr: TextAttribute) -> String {
        match self.attributes.get(&attr) {
            Some(value) => value.clone(),
            None => self.engine.get_text_attribute(attr),
        }
    }

    /// Check whether a custom renderer can take over for this attribute and
    /// ruleset selector.
    ///
    /// Resolution and instantiation are a single atomic step: a `true`
    /// result means the renderer has already been installed as the active
    /// renderer. Absence of a matching factory is a normal `false` outcome,
    /// never an error.
    pub fn is_spellout_override_available(&mut self, attr: TextAttribute, value: &str) -> bool {
        if !self.is_spellout || !attr.is_ruleset() {
            return false;
        }

        let Some(identity) = RendererIdentity::derive(self.engine.locale(), value) else {
            return false;
        };

        let context = EngineContext {
            locale: self.engine.locale().to_string(),
            settings: self.engine.settings().clone(),
        };
        let renderer = {
            let registry = self.registry.read().unwrap_or_else(PoisonError::into_inner);
            registry.instantiate(&identity, context)
        };

        match renderer {
            Some(renderer) => {
                tracing::debug!(identity = %identity, "spellout override active");
                self.renderer = Some(renderer);
                true
            }
            None => false,
        }
    }

    /// Format a numeric value.
    ///
    /// With an active renderer the call delegates to it entirely and the
    /// numeric-kind hint is ignored; otherwise the base engine formats the
    /// value with the given hint.
    pub fn format(&self, value: f64, kind: NumericKind) -> String {
        if self.is_spellout {
            if let Some(renderer) = &self.renderer {
                return renderer.format(value);
            }
        }

        self.engine.format(value, kind)
    }
}
