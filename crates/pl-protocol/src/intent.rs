//! Intent identifier derivation from free text.

use std::sync::LazyLock;

use regex::Regex;

/// Characters dropped from identifiers: everything outside the ASCII
/// word class. Underscores survive so identifiers like `appt_make`
/// round-trip through derivation unchanged.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9_]").unwrap());

/// Derive a stable intent identifier from free text: lower-case, then
/// strip everything outside `[a-z0-9_]`.
///
/// Deterministic by construction. Distinct texts may collide ("We're
/// Closed!" and "were closed" both yield `wereclosed`); that is
/// accepted, not guarded against.
pub fn derive_intent_id(text: &str) -> String {
    NON_WORD.replace_all(&text.to_lowercase(), "").into_owned()
}
