use serde_json::Value;
use warden_core::{RoleName, SecurableMatcher};

use crate::error::PolicyResult;
use crate::store::Policy;
use crate::types::{PolicyEntry, Roles, Strategy};

// ---------------------------------------------------------------------------
// Interrogator — the decision engine
// ---------------------------------------------------------------------------

/// Which question a scan is answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
    Grant,
    Deny,
}

/// Interrogates an ordered policy on behalf of a caller that intercepts
/// real operations.
///
/// Holds the write-once [`Policy`] and the securable matcher for the
/// engine's lifetime. Every interrogation is a pure, synchronous scan over
/// the immutable entries; a single instance can be shared across threads
/// without coordination.
pub struct Interrogator<M: SecurableMatcher> {
    matcher: M,
    policy: Policy<M::Target, M::Securable>,
}

impl<M: SecurableMatcher> Interrogator<M> {
    pub fn new(matcher: M, policy: Policy<M::Target, M::Securable>) -> Self {
        Self { matcher, policy }
    }

    /// An engine over the built-in default policy, which grants every role
    /// access to every securable.
    pub fn with_default_policy(matcher: M) -> Self
    where
        M::Target: Default,
    {
        Self::new(matcher, Policy::allow_all())
    }

    pub fn policy(&self) -> &Policy<M::Target, M::Securable> {
        &self.policy
    }

    /// Is this access permitted?
    ///
    /// For a single role, scans the filtered entries under grant polarity.
    /// For a role list, the access is permitted only if no listed role is
    /// explicitly denied and at least one listed role is independently
    /// permitted; each role is interrogated against its own freshly
    /// filtered entry set.
    pub fn permits(
        &self,
        roles: impl Into<Roles>,
        securable: &M::Securable,
        data: Option<&Value>,
    ) -> PolicyResult<bool> {
        let roles = roles.into();
        let permitted = match &roles {
            Roles::One(role) => self.scan(Polarity::Grant, role, securable, data)?,
            Roles::Many(list) => {
                let mut vetoed = false;
                for role in list {
                    if self.scan(Polarity::Deny, role, securable, data)? {
                        vetoed = true;
                        break;
                    }
                }
                if vetoed {
                    false
                } else {
                    let mut granted = false;
                    for role in list {
                        if self.scan(Polarity::Grant, role, securable, data)? {
                            granted = true;
                            break;
                        }
                    }
                    granted
                }
            }
        };
        tracing::trace!(?roles, permitted, "grant interrogation complete");
        Ok(permitted)
    }

    /// Is this access explicitly denied?
    ///
    /// For a role list, true as soon as any listed role yields an explicit
    /// denial.
    ///
    /// Ordering hazard for policy authors: under deny polarity, a predicate
    /// that answers false closes the question immediately, so a later
    /// `Deny` entry for the same securable is never reached. Once any
    /// predicate strategy is in play, entry order subtly decides what this
    /// operation returns.
    pub fn explicitly_denies(
        &self,
        roles: impl Into<Roles>,
        securable: &M::Securable,
        data: Option<&Value>,
    ) -> PolicyResult<bool> {
        let roles = roles.into();
        let denied = match &roles {
            Roles::One(role) => self.scan(Polarity::Deny, role, securable, data)?,
            Roles::Many(list) => {
                let mut denied = false;
                for role in list {
                    if self.scan(Polarity::Deny, role, securable, data)? {
                        denied = true;
                        break;
                    }
                }
                denied
            }
        };
        tracing::trace!(?roles, denied, "deny interrogation complete");
        Ok(denied)
    }

    /// The ordered sublist of entries whose role pattern matches `role` and
    /// whose target the matcher accepts for `securable`.
    ///
    /// Pure filter: every entry is tested independently, in order, with no
    /// short-circuiting across entries.
    fn matching_entries(
        &self,
        role: &RoleName,
        securable: &M::Securable,
    ) -> PolicyResult<Vec<&PolicyEntry<M::Target, M::Securable>>> {
        let mut matched = Vec::new();
        for entry in self.policy.entries() {
            if !entry.role.matches(role.as_str()) {
                continue;
            }
            if !self.matcher.matches(&entry.target, securable)? {
                continue;
            }
            matched.push(entry);
        }
        Ok(matched)
    }

    /// One polarity scan over the filtered entries, in declaration order.
    ///
    /// Entries whose strategy sits on the opposite polarity are skipped
    /// rather than resolving the scan. Predicates are asymmetric: under
    /// grant polarity only a true result ends the scan (in favor), while
    /// under deny polarity a false result ends the scan against explicit
    /// denial, without inspecting later entries.
    fn scan(
        &self,
        polarity: Polarity,
        role: &RoleName,
        securable: &M::Securable,
        data: Option<&Value>,
    ) -> PolicyResult<bool> {
        for entry in self.matching_entries(role, securable)? {
            match &entry.strategy {
                Strategy::Grant if polarity == Polarity::Grant => return Ok(true),
                Strategy::Deny if polarity == Polarity::Deny => return Ok(true),
                Strategy::Grant | Strategy::Deny => {}
                Strategy::Predicate(predicate) => {
                    let granted = predicate(role, securable, data)?;
                    match polarity {
                        Polarity::Grant if granted => return Ok(true),
                        Polarity::Deny if !granted => return Ok(false),
                        _ => {}
                    }
                }
            }
        }
        Ok(false)
    }
}
