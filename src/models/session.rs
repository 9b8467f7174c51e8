use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity attached to every API request.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub organization: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("organization", &self.organization)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish()
    }
}
