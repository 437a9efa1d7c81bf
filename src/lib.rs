pub mod engine;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod spellout;
pub mod types;

// Re-export the main API
pub use engine::BaseEngine;
pub use error::{FormatError, PatternError};
pub use formatter::Formatter;
pub use parser::parse_pattern;
pub use spellout::{
    EngineContext, RendererFactory, RendererIdentity, RendererRegistry, SpelloutRenderer,
    global_registry, register_renderer,
};
pub use types::*;
