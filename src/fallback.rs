//! Name-keyed fallback operations
//!
//! When a primary tool is known to be unreliable (a search backend that rate
//! limits, a transcript API that 403s), the caller registers a substitute
//! under the tool's name and consults the registry after the primary gives up.
//!
//! The registry is a plain, caller-owned map: construct one during setup and
//! pass it to whatever needs lookups. It is not synchronized; sharing it
//! across threads requires an external lock.

use std::collections::HashMap;

/// Caller-owned mapping from tool name to substitute operation.
///
/// Generic over the stored operation type, so one registry holds operations of
/// a uniform callable shape (boxed closures, function pointers, trait
/// objects). Entries live until replaced; they are never removed
/// automatically.
pub struct FallbackRegistry<T> {
    entries: HashMap<String, T>,
}

impl<T> FallbackRegistry<T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register `fallback` for `tool`, replacing and returning any previous
    /// entry. Last write wins.
    pub fn register(&mut self, tool: impl Into<String>, fallback: T) -> Option<T> {
        self.entries.insert(tool.into(), fallback)
    }

    /// Look up the fallback registered for `tool`. Missing names are a normal
    /// `None`, valid to ask at any time, including before any registration.
    pub fn lookup(&self, tool: &str) -> Option<&T> {
        self.entries.get(tool)
    }

    /// Whether a fallback is registered for `tool`
    pub fn contains(&self, tool: &str) -> bool {
        self.entries.contains_key(tool)
    }

    /// Number of registered fallbacks
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for FallbackRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
