use std::fmt;

/// Marker character introducing a ruleset selector.
const RULESET_MARKER: char = '%';

/// Fixed namespace root all renderer identities live under.
const NAMESPACE_ROOT: &str = "Lang";

/// Structured key locating a custom spellout renderer.
///
/// Derived deterministically from a locale tag and a ruleset selector:
/// locale `pl` with selector `%spellout-cardinal-feminine` yields the path
/// `Lang/Pl/Spellout/Cardinal/Feminine`. Renderer authors register factories
/// under this path; the `Display` form is the naming convention's
/// fully-qualified spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RendererIdentity {
    locale: String,
    parts: Vec<String>,
}

impl RendererIdentity {
    /// Derive the identity for a locale and ruleset selector.
    ///
    /// Returns `None` when the selector does not look like a custom-ruleset
    /// reference: it must start with the `%` marker and every `-`-separated
    /// part after the marker must be non-empty.
    pub fn derive(locale: &str, selector: &str) -> Option<Self> {
        if locale.is_empty() {
            return None;
        }

        let name = selector.strip_prefix(RULESET_MARKER)?;
        if name.is_empty() {
            return None;
        }

        let parts: Vec<String> = name.split('-').map(capitalize).collect();
        if parts.iter().any(String::is_empty) {
            return None;
        }

        Some(Self {
            locale: capitalize(locale),
            parts,
        })
    }

    /// The capitalized locale component.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The capitalized ruleset parts, in selector order.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

impl fmt::Display for RendererIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{NAMESPACE_ROOT}/{}", self.locale)?;
        for part in &self.parts {
            write!(f, "/{part}")?;
        }
        Ok(())
    }
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
