use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Pattern — the matching language for role names and matcher fields
// ---------------------------------------------------------------------------

/// A pattern over name strings.
///
/// The language is deliberately small:
/// - `"*"` matches every name
/// - a trailing `*` is a prefix match (`"admin*"` matches `"admin-eu"`)
/// - anything else is an exact, case-sensitive match
///
/// A `*` anywhere but the end has no special meaning. Patterns serialize as
/// plain strings in policy documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern(String);

impl Pattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// The pattern that matches every name. This is what an absent role
    /// pattern normalizes to.
    pub fn match_all() -> Self {
        Self("*".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, name: &str) -> bool {
        if self.0 == "*" {
            return true;
        }
        if let Some(prefix) = self.0.strip_suffix('*') {
            return name.starts_with(prefix);
        }
        self.0 == name
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::match_all()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_matches_everything() {
        let pattern = Pattern::match_all();
        assert!(pattern.matches("anything"));
        assert!(pattern.matches(""));
    }

    #[test]
    fn test_exact_match() {
        let pattern = Pattern::new("billing");
        assert!(pattern.matches("billing"));
        assert!(!pattern.matches("billing-eu"));
        assert!(!pattern.matches("Billing"));
    }

    #[test]
    fn test_prefix_match() {
        let pattern = Pattern::new("admin*");
        assert!(pattern.matches("admin"));
        assert!(pattern.matches("admin-eu"));
        assert!(!pattern.matches("superadmin"));
    }

    #[test]
    fn test_inner_star_is_literal() {
        let pattern = Pattern::new("a*c");
        assert!(!pattern.matches("abc"));
        assert!(pattern.matches("a*c"));
    }

    #[test]
    fn test_empty_pattern_matches_only_empty_name() {
        let pattern = Pattern::new("");
        assert!(pattern.matches(""));
        assert!(!pattern.matches("anything"));
    }

    #[test]
    fn test_default_is_match_all() {
        assert_eq!(Pattern::default(), Pattern::match_all());
    }

    #[test]
    fn test_serde_transparent() {
        let pattern = Pattern::new("ops*");
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(json, "\"ops*\"");
        let back: Pattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pattern);
    }
}
