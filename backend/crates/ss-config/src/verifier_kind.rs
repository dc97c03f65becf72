use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which identity verifier the server talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerifierKind {
    /// Local JWT signature check (HS256 secret or RS256 public key)
    #[default]
    Jwt,
    /// Remote account lookup against the provider's REST API
    Lookup,
}

impl FromStr for VerifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jwt" => Ok(Self::Jwt),
            "lookup" => Ok(Self::Lookup),
            other => Err(format!("unknown verifier '{}'", other)),
        }
    }
}

impl fmt::Display for VerifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jwt => write!(f, "jwt"),
            Self::Lookup => write!(f, "lookup"),
        }
    }
}
