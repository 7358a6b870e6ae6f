//! Identifier sanitization for generated declarations.

use crate::{Error, Result};

/// Characters removed from display names before they become identifiers.
const STRIPPED: &[char] = &['`', '"', '.', '_', ' ', '\t', '(', ')'];

/// Turns a display name into a capitalized Go identifier.
///
/// Stripped punctuation is removed with no replacement; the first surviving
/// character is uppercased and the remainder kept verbatim. No further case
/// normalization is applied.
///
/// # Errors
/// Returns a schema error if no character survives the stripping pass.
pub fn sanitize(name: &str) -> Result<String> {
    let mut chars = name.chars().filter(|c| !STRIPPED.contains(c));
    match chars.next() {
        Some(first) => Ok(first.to_uppercase().chain(chars).collect()),
        None => Err(Error::Schema(format!(
            "name {name:?} has no identifier characters"
        ))),
    }
}
