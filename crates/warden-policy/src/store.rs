use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PolicyError, PolicyResult};
use crate::pattern::Pattern;
use crate::types::{PolicyEntry, RawPolicyEntry, Strategy};

/// Upper bound on a policy document, matching the engine's expectation that
/// policies are hand-authored rule lists, not bulk data.
const MAX_POLICY_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

// ---------------------------------------------------------------------------
// Policy — the ordered, write-once rule store
// ---------------------------------------------------------------------------

/// An ordered, immutable collection of normalized policy entries.
///
/// Built once, at engine construction. Entries are never mutated, added,
/// removed, or re-sorted afterwards; changing policy means building a new
/// engine. The only structural validation performed here is "a non-empty
/// ordered list": matcher-specific target fields are opaque to the store
/// and are the specialization's business to validate, if it cares to.
#[derive(Debug, Clone)]
pub struct Policy<T, S> {
    entries: Vec<PolicyEntry<T, S>>,
}

impl<T, S> Policy<T, S> {
    /// Normalize an authored entry list into a policy.
    ///
    /// Output has the same length and order as the input; every entry ends
    /// up with a concrete role pattern (absent becomes match-all) and a
    /// concrete strategy (absent becomes `Deny`).
    pub fn new(entries: Vec<RawPolicyEntry<T, S>>) -> PolicyResult<Self> {
        if entries.is_empty() {
            return Err(PolicyError::InvalidPolicy(
                "policy must be a non-empty list of entries".to_string(),
            ));
        }
        Ok(Self {
            entries: entries.into_iter().map(PolicyEntry::from_raw).collect(),
        })
    }

    /// The built-in default policy: one entry granting every role access to
    /// every securable. By convention a `Default` target matches every
    /// securable; the bundled matchers uphold this.
    pub fn allow_all() -> Self
    where
        T: Default,
    {
        Self {
            entries: vec![PolicyEntry {
                role: Pattern::match_all(),
                target: T::default(),
                strategy: Strategy::Grant,
            }],
        }
    }

    /// Load a policy from a JSON document of [`EntrySpec`] values.
    ///
    /// A `null` document means the caller required a policy and supplied
    /// none (`MissingPolicy`); any non-array shape, parse failure, or
    /// oversized document is `InvalidPolicy`. Declarative entries can only
    /// express the boolean strategies; predicate strategies exist solely in
    /// code-constructed policies.
    pub fn from_json(document: &[u8]) -> PolicyResult<Self>
    where
        T: DeserializeOwned,
    {
        if document.is_empty() {
            return Err(PolicyError::InvalidPolicy(
                "policy document is empty".to_string(),
            ));
        }
        if document.len() > MAX_POLICY_DOCUMENT_BYTES {
            return Err(PolicyError::InvalidPolicy(format!(
                "policy document exceeds {} bytes",
                MAX_POLICY_DOCUMENT_BYTES
            )));
        }

        let value: Value = serde_json::from_slice(document)
            .map_err(|e| PolicyError::InvalidPolicy(format!("malformed policy document: {}", e)))?;

        let items = match value {
            Value::Null => return Err(PolicyError::MissingPolicy),
            Value::Array(items) => items,
            other => {
                return Err(PolicyError::InvalidPolicy(format!(
                    "policy document must be a list, got {}",
                    json_kind(&other)
                )))
            }
        };

        let mut entries = Vec::with_capacity(items.len());
        for item in items {
            let spec: EntrySpec<T> = serde_json::from_value(item)
                .map_err(|e| PolicyError::InvalidPolicy(format!("invalid policy entry: {}", e)))?;
            entries.push(spec.into_raw());
        }
        tracing::debug!(entries = entries.len(), "loaded policy document");
        Self::new(entries)
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[PolicyEntry<T, S>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// EntrySpec — the declarative (JSON) shape of one entry
// ---------------------------------------------------------------------------

/// One policy entry as it appears in a JSON policy document.
///
/// The matcher-specific target fields are flattened alongside `role` and
/// `strategy`, so a method-matcher document reads:
///
/// ```json
/// [{"role": "admin*", "namespace": "billing*", "method": "*", "strategy": true}]
/// ```
///
/// `strategy` is the serializable half of the boolean-or-function union:
/// `true` is a grant, `false` an explicit deny, and an absent value falls
/// to the deny default during normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrySpec<T> {
    #[serde(default)]
    pub role: Option<Pattern>,
    #[serde(flatten)]
    pub target: T,
    #[serde(default)]
    pub strategy: Option<bool>,
}

impl<T> EntrySpec<T> {
    pub(crate) fn into_raw<S>(self) -> RawPolicyEntry<T, S> {
        RawPolicyEntry {
            role: self.role,
            target: self.target,
            strategy: self.strategy.map(|granted| {
                if granted {
                    Strategy::Grant
                } else {
                    Strategy::Deny
                }
            }),
        }
    }
}
