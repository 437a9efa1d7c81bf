//! Custom spellout renderer resolution and dispatch
//!
//! Maps a (locale, ruleset-selector) pair to a renderer identity, looks the
//! identity up in a factory registry, and hands instantiated renderers to
//! the owning `Formatter`.
//!
//! A renderer for ruleset selector `%part1-part2-...` under locale `L` is
//! registered under the fully-qualified path
//! `Lang/<Capitalize(L)>/<Capitalize(part1)>/<Capitalize(part2)>/...`; this
//! mapping is the extension point's only wire format.
//!
//! # Examples
//! ```
//! use number_spellout::{
//!     register_renderer, FormatStyle, Formatter, NumericKind, SpelloutRenderer, TextAttribute,
//! };
//!
//! struct EnglishCardinal;
//!
//! impl SpelloutRenderer for EnglishCardinal {
//!     fn format(&self, value: f64) -> String {
//!         match value as i64 {
//!             42 => "forty-two".to_string(),
//!             n => n.to_string(),
//!         }
//!     }
//! }
//!
//! register_renderer("en_US", "%spellout-cardinal", |_context| Box::new(EnglishCardinal));
//!
//! let mut formatter = Formatter::new("en_US", FormatStyle::Spellout, None).unwrap();
//! assert!(formatter.set_text_attribute(TextAttribute::DefaultRuleset, "%spellout-cardinal"));
//! assert_eq!(formatter.format(42.0, NumericKind::Default), "forty-two");
//! ```

mod identity;
mod registry;
mod renderer;

pub use identity::RendererIdentity;
pub use registry::{RendererFactory, RendererRegistry, global_registry, register_renderer};
pub use renderer::{EngineContext, SpelloutRenderer};
