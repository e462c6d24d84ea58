use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// RoleName — the acting role in a decision request
// ---------------------------------------------------------------------------

/// The name of a role as presented by the caller.
///
/// Roles are flat: there is no hierarchy and no resolution step. A role name
/// is matched against policy entry patterns verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleName(pub String);

impl RoleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RoleName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RoleName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
