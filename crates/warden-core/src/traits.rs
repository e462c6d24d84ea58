use crate::error::{WardenError, WardenResult};

// ---------------------------------------------------------------------------
// SecurableMatcher — the seam a specialization supplies
//
// The engine never inspects what a securable looks like. A specialization
// fixes two shapes: the identifying fields stored in each policy entry
// (`Target`) and the runtime description of the thing being accessed
// (`Securable`), and supplies the one matching function between them.
// ---------------------------------------------------------------------------

/// Decides whether a policy entry's securable-identifying fields match a
/// securable description.
///
/// Implementations must be pure and total over their inputs and must not
/// mutate either argument. The default body exists only to surface misuse:
/// a specialization that does not override [`SecurableMatcher::matches`]
/// gets `WardenError::MatcherNotImplemented` on first use, at call time.
pub trait SecurableMatcher: Send + Sync {
    /// Securable-identifying fields carried by each policy entry.
    type Target;
    /// Runtime description of the securable under interrogation.
    type Securable;

    fn matches(&self, target: &Self::Target, securable: &Self::Securable) -> WardenResult<bool> {
        let _ = (target, securable);
        Err(WardenError::MatcherNotImplemented)
    }
}
