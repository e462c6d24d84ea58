use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use warden_core::RoleName;

use crate::error::PolicyResult;
use crate::pattern::Pattern;

// ---------------------------------------------------------------------------
// Strategy — what a matching entry decides
// ---------------------------------------------------------------------------

/// A caller-supplied predicate strategy.
///
/// Receives the single role under scan, the securable description, and the
/// opaque contextual payload, untouched. Fallible: an `Err` propagates
/// unchanged to whoever called `permits`/`explicitly_denies`; the engine
/// never catches, retries, or substitutes a default outcome.
pub type PredicateFn<S> =
    Arc<dyn Fn(&RoleName, &S, Option<&Value>) -> PolicyResult<bool> + Send + Sync>;

/// The strategy of one policy entry, resolved once at normalization time.
pub enum Strategy<S> {
    /// Unconditionally grants under grant-polarity interrogation.
    Grant,
    /// Unconditionally denies under deny-polarity interrogation. This is
    /// what an absent strategy normalizes to.
    Deny,
    /// Defers to a caller-supplied predicate.
    Predicate(PredicateFn<S>),
}

impl<S> Strategy<S> {
    /// Wrap a closure as a predicate strategy.
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&RoleName, &S, Option<&Value>) -> PolicyResult<bool> + Send + Sync + 'static,
    {
        Strategy::Predicate(Arc::new(predicate))
    }
}

impl<S> Clone for Strategy<S> {
    fn clone(&self) -> Self {
        match self {
            Strategy::Grant => Strategy::Grant,
            Strategy::Deny => Strategy::Deny,
            Strategy::Predicate(f) => Strategy::Predicate(Arc::clone(f)),
        }
    }
}

impl<S> fmt::Debug for Strategy<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Grant => write!(f, "Grant"),
            Strategy::Deny => write!(f, "Deny"),
            Strategy::Predicate(_) => write!(f, "Predicate(..)"),
        }
    }
}

// ---------------------------------------------------------------------------
// Policy entries — raw (as authored) and normalized (as stored)
// ---------------------------------------------------------------------------

/// A policy entry as authored, before normalization.
///
/// `target` holds the securable-identifying fields; the engine treats them
/// as opaque and hands them to the securable matcher unread.
#[derive(Debug, Clone)]
pub struct RawPolicyEntry<T, S> {
    pub role: Option<Pattern>,
    pub target: T,
    pub strategy: Option<Strategy<S>>,
}

impl<T, S> RawPolicyEntry<T, S> {
    pub fn new(target: T) -> Self {
        Self {
            role: None,
            target,
            strategy: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<Pattern>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy<S>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn granting(self) -> Self {
        self.with_strategy(Strategy::Grant)
    }

    pub fn denying(self) -> Self {
        self.with_strategy(Strategy::Deny)
    }

    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&RoleName, &S, Option<&Value>) -> PolicyResult<bool> + Send + Sync + 'static,
    {
        self.with_strategy(Strategy::when(predicate))
    }
}

/// A normalized policy entry. Never mutated after construction; entry order
/// within a policy is the order the author declared.
#[derive(Debug, Clone)]
pub struct PolicyEntry<T, S> {
    pub role: Pattern,
    pub target: T,
    pub strategy: Strategy<S>,
}

impl<T, S> PolicyEntry<T, S> {
    /// Normalize one authored entry: an absent role pattern becomes
    /// match-all, an absent strategy becomes `Deny`.
    pub(crate) fn from_raw(raw: RawPolicyEntry<T, S>) -> Self {
        Self {
            role: raw.role.unwrap_or_else(Pattern::match_all),
            target: raw.target,
            strategy: raw.strategy.unwrap_or(Strategy::Deny),
        }
    }
}

// ---------------------------------------------------------------------------
// Roles — the role field of a decision request
// ---------------------------------------------------------------------------

/// A single role name, or an ordered list of role names.
///
/// The two forms are interrogated differently: a single name runs one
/// polarity scan directly, while a list is aggregated role by role (each
/// against its own freshly filtered entry set). A one-element list is NOT
/// collapsed to the single-name form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Roles {
    One(RoleName),
    Many(Vec<RoleName>),
}

impl Roles {
    pub fn one(role: impl Into<RoleName>) -> Self {
        Roles::One(role.into())
    }

    pub fn many<I, R>(roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RoleName>,
    {
        Roles::Many(roles.into_iter().map(Into::into).collect())
    }
}

impl From<RoleName> for Roles {
    fn from(role: RoleName) -> Self {
        Roles::One(role)
    }
}

impl From<&str> for Roles {
    fn from(role: &str) -> Self {
        Roles::One(RoleName::from(role))
    }
}

impl From<String> for Roles {
    fn from(role: String) -> Self {
        Roles::One(RoleName::from(role))
    }
}

impl From<Vec<RoleName>> for Roles {
    fn from(roles: Vec<RoleName>) -> Self {
        Roles::Many(roles)
    }
}

impl From<Vec<&str>> for Roles {
    fn from(roles: Vec<&str>) -> Self {
        Roles::many(roles)
    }
}

impl From<Vec<String>> for Roles {
    fn from(roles: Vec<String>) -> Self {
        Roles::many(roles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_debug_hides_the_closure() {
        let strategy: Strategy<()> = Strategy::when(|_, _, _| Ok(true));
        assert_eq!(format!("{:?}", strategy), "Predicate(..)");
        assert_eq!(format!("{:?}", Strategy::<()>::Grant), "Grant");
    }

    #[test]
    fn test_strategy_clone_shares_the_predicate() {
        let strategy: Strategy<u32> = Strategy::when(|_, securable, _| Ok(*securable > 10));
        let clone = strategy.clone();
        let role = RoleName::new("any");
        match (&strategy, &clone) {
            (Strategy::Predicate(a), Strategy::Predicate(b)) => {
                assert_eq!(a(&role, &42, None).unwrap(), b(&role, &42, None).unwrap());
            }
            _ => panic!("clone changed the variant"),
        }
    }

    #[test]
    fn test_normalization_defaults() {
        let entry = PolicyEntry::<&str, ()>::from_raw(RawPolicyEntry::new("target"));
        assert_eq!(entry.role, Pattern::match_all());
        assert!(matches!(entry.strategy, Strategy::Deny));
    }

    #[test]
    fn test_normalization_keeps_authored_fields() {
        let entry = PolicyEntry::<&str, ()>::from_raw(
            RawPolicyEntry::new("target").with_role("admin*").granting(),
        );
        assert_eq!(entry.role, Pattern::new("admin*"));
        assert!(matches!(entry.strategy, Strategy::Grant));
        assert_eq!(entry.target, "target");
    }

    #[test]
    fn test_roles_from_impls() {
        assert_eq!(Roles::from("admin"), Roles::One(RoleName::new("admin")));
        assert_eq!(
            Roles::from(vec!["a", "b"]),
            Roles::Many(vec![RoleName::new("a"), RoleName::new("b")])
        );
    }

    #[test]
    fn test_single_and_one_element_list_are_distinct() {
        assert_ne!(Roles::from("admin"), Roles::from(vec!["admin"]));
    }
}
