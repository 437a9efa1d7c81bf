use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::spellout::identity::RendererIdentity;
use crate::spellout::renderer::{EngineContext, SpelloutRenderer};

/// Factory producing a renderer for a resolved identity.
pub type RendererFactory = Arc<dyn Fn(EngineContext) -> Box<dyn SpelloutRenderer> + Send + Sync>;

/// Registry mapping renderer identities to factories.
///
/// Only constructible factories can be registered, so resolution never has
/// to test instantiability: a lookup hit is always usable.
#[derive(Default, Clone)]
pub struct RendererRegistry {
    factories: HashMap<RendererIdentity, RendererFactory>,
}

impl RendererRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under an identity, replacing any previous entry.
    pub fn register<F>(&mut self, identity: RendererIdentity, factory: F)
    where
        F: Fn(EngineContext) -> Box<dyn SpelloutRenderer> + Send + Sync + 'static,
    {
        self.factories.insert(identity, Arc::new(factory));
    }

    /// Check whether a factory is registered under the identity.
    pub fn contains(&self, identity: &RendererIdentity) -> bool {
        self.factories.contains_key(identity)
    }

    /// Instantiate the renderer registered under `identity`, if any.
    pub fn instantiate(
        &self,
        identity: &RendererIdentity,
        context: EngineContext,
    ) -> Option<Box<dyn SpelloutRenderer>> {
        self.factories.get(identity).map(|factory| factory(context))
    }

    /// Number of registered factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut identities: Vec<String> = self.factories.keys().map(ToString::to_string).collect();
        identities.sort();
        f.debug_struct("RendererRegistry")
            .field("identities", &identities)
            .finish()
    }
}

/// The process-wide registry used by `Formatter::new`.
pub fn global_registry() -> Arc<RwLock<RendererRegistry>> {
    static GLOBAL: OnceLock<Arc<RwLock<RendererRegistry>>> = OnceLock::new();
    GLOBAL
        .get_or_init(|| Arc::new(RwLock::new(RendererRegistry::new())))
        .clone()
}

/// Register a renderer factory in the process-wide registry.
///
/// The identity is derived from `locale` and `selector` per the naming
/// convention; returns `false` when the selector is not a well-formed
/// ruleset reference.
pub fn register_renderer<F>(locale: &str, selector: &str, factory: F) -> bool
where
    F: Fn(EngineContext) -> Box<dyn SpelloutRenderer> + Send + Sync + 'static,
{
    let Some(identity) = RendererIdentity::derive(locale, selector) else {
        return false;
    };

    tracing::debug!(identity = %identity, "registering spellout renderer");
    let registry = global_registry();
    let mut guard = registry.write().unwrap_or_else(PoisonError::into_inner);
    guard.register(identity, factory);
    true
}
