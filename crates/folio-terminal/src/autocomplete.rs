//! Prefix autocomplete over the known command names.
//!
//! Candidates are scanned in registry declaration order, then the interpreter
//! built-ins in [`BUILTIN_NAMES`] order. The first strict-prefix match wins;
//! only one suggestion is ever offered.

use crate::interpreter::CommandRegistry;
use crate::session::BUILTIN_NAMES;

/// Completion engine over a fixed, ordered name list.
#[derive(Debug, Clone)]
pub struct Autocomplete {
    candidates: Vec<String>,
}

impl Autocomplete {
    /// Snapshot the registry names followed by the built-ins.
    pub fn new(registry: &CommandRegistry) -> Self {
        let mut candidates: Vec<String> = registry.names().map(str::to_lowercase).collect();
        for builtin in BUILTIN_NAMES {
            if !candidates.iter().any(|c| c == builtin) {
                candidates.push(builtin.to_string());
            }
        }
        Self { candidates }
    }

    /// Candidate names in scan order.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(String::as_str)
    }

    /// First candidate strictly extending the trimmed, case-folded draft.
    pub fn suggest(&self, draft: &str) -> Option<&str> {
        let needle = draft.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        let hit = self
            .candidates
            .iter()
            .find(|c| c.starts_with(&needle) && **c != needle)
            .map(String::as_str);
        log::trace!("autocomplete: {needle:?} -> {hit:?}");
        hit
    }
}
