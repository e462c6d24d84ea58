//! Warden Policy Engine
//!
//! Role-based access-control interrogation over an abstract "securable".
//! A caller that intercepts real operations asks two questions before
//! letting one proceed: `permits` (is this access permitted?) and
//! `explicitly_denies` (is this access explicitly denied?). Both are
//! answered by an ordered scan of a declared, write-once policy.
//!
//! Key features:
//! - Ordered, immutable policy store; entry order is significant and never
//!   re-sorted
//! - Normalization at construction time (absent role pattern becomes
//!   match-all, absent strategy becomes deny)
//! - Three-way strategies: unconditional grant, unconditional deny, or a
//!   caller-supplied predicate over {role, securable, contextual data}
//! - Pluggable securable matching via the `SecurableMatcher` seam, with a
//!   bundled namespace+method specialization
//! - Role lists aggregate with denial veto: one explicit denial outweighs
//!   any number of grants
//! - Default-deny throughout: no matching entry means no access
//!
//! Policy-authoring hazard: under deny-polarity interrogation, a predicate
//! strategy that answers false settles "not explicitly denied" on the spot,
//! masking any later deny entry for the same securable. Entry order matters
//! subtly once predicate strategies are present; see
//! [`Interrogator::explicitly_denies`].

pub mod engine;
pub mod error;
pub mod method;
pub mod pattern;
pub mod store;
pub mod types;

// Re-export primary types for convenience
pub use engine::Interrogator;
pub use error::{PolicyError, PolicyResult};
pub use method::{MethodCall, MethodMatcher, MethodTarget};
pub use pattern::Pattern;
pub use store::{EntrySpec, Policy};
pub use types::{PolicyEntry, PredicateFn, RawPolicyEntry, Roles, Strategy};
