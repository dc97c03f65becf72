pub mod bearer_token;
pub mod claims;
pub mod error;
pub mod identity_verifier;
pub mod jwt_identity_verifier;
pub mod lookup_identity_verifier;

pub use bearer_token::extract_bearer;
pub use claims::{ProviderClaims, roles_from_claims};
pub use error::{AuthError, Result};
pub use identity_verifier::IdentityVerifier;
pub use jwt_identity_verifier::JwtIdentityVerifier;
pub use lookup_identity_verifier::LookupIdentityVerifier;

#[cfg(test)]
mod tests;
