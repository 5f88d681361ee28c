//! Slug derivation for category identifiers.
//!
//! A derived slug is the trimmed name in lowercase with every run of
//! whitespace replaced by a single hyphen.

/// Derive a slug from a display name.
///
/// ```
/// use pharmacy_backend::domain::derive_slug;
///
/// assert_eq!(derive_slug("Pain Relief"), "pain-relief");
/// assert_eq!(derive_slug("  Cold   and Flu "), "cold-and-flu");
/// ```
pub fn derive_slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
