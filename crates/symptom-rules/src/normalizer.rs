//! Symptom Key Normalization

/// Normalize a symptom name into a lookup key (trimmed, lower-cased).
///
/// Applied both to the `symptom` column at load time and to every query,
/// so `"  Fever "` and `"fever"` address the same rule.
pub fn normalize_symptom(raw: &str) -> String {
    raw.trim().to_lowercase()
}
