use serde::{Deserialize, Serialize};
use std::fmt;
use warden_core::{SecurableMatcher, WardenResult};

use crate::pattern::Pattern;

// ---------------------------------------------------------------------------
// Method-call securables — the bundled matcher specialization
// ---------------------------------------------------------------------------

/// Entry-side identifying fields for method-call securables: a pattern over
/// the namespace (class, module, service) name and one over the method name.
///
/// A field omitted in a policy document defaults to match-all, so the
/// `Default` target matches every method call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MethodTarget {
    #[serde(default)]
    pub namespace: Pattern,
    #[serde(default)]
    pub method: Pattern,
}

impl MethodTarget {
    pub fn new(namespace: impl Into<Pattern>, method: impl Into<Pattern>) -> Self {
        Self {
            namespace: namespace.into(),
            method: method.into(),
        }
    }
}

/// Runtime description of a method call about to be made.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodCall {
    pub namespace: String,
    pub method: String,
}

impl MethodCall {
    pub fn new(namespace: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            method: method.into(),
        }
    }
}

impl fmt::Display for MethodCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.namespace, self.method)
    }
}

/// Matches a [`MethodCall`] when both the namespace pattern and the method
/// pattern of the entry are satisfied.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodMatcher;

impl SecurableMatcher for MethodMatcher {
    type Target = MethodTarget;
    type Securable = MethodCall;

    fn matches(&self, target: &MethodTarget, call: &MethodCall) -> WardenResult<bool> {
        Ok(target.namespace.matches(&call.namespace) && target.method.matches(&call.method))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(target: &MethodTarget, call: &MethodCall) -> bool {
        MethodMatcher.matches(target, call).unwrap()
    }

    #[test]
    fn test_both_patterns_must_match() {
        let target = MethodTarget::new("billing*", "refund");

        assert!(matches(&target, &MethodCall::new("billing", "refund")));
        assert!(matches(&target, &MethodCall::new("billing-eu", "refund")));
        assert!(!matches(&target, &MethodCall::new("billing", "close_books")));
        assert!(!matches(&target, &MethodCall::new("inventory", "refund")));
    }

    #[test]
    fn test_default_target_matches_everything() {
        let target = MethodTarget::default();
        assert!(matches(&target, &MethodCall::new("anything", "at_all")));
        assert!(matches(&target, &MethodCall::new("", "")));
    }

    #[test]
    fn test_method_call_display() {
        let call = MethodCall::new("billing", "refund");
        assert_eq!(call.to_string(), "billing#refund");
    }

    #[test]
    fn test_target_serde() {
        let target = MethodTarget::new("billing*", "*");
        let json = serde_json::to_string(&target).unwrap();
        assert_eq!(json, r#"{"namespace":"billing*","method":"*"}"#);
        let back: MethodTarget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, target);
    }

    #[test]
    fn test_target_deserialize_with_omitted_fields() {
        let target: MethodTarget = serde_json::from_str(r#"{"method":"refund"}"#).unwrap();
        assert_eq!(target.namespace, Pattern::match_all());
        assert_eq!(target.method, Pattern::new("refund"));
    }
}
