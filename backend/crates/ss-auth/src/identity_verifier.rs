use crate::Result as AuthErrorResult;

use ss_core::VerifiedIdentity;

use async_trait::async_trait;

/// External identity service: turns an opaque credential into a verified identity.
///
/// One call per request. Implementations must keep the failure kinds distinct:
/// a bad credential, an unknown account and an unreachable provider map to
/// different client responses.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, credential: &str) -> AuthErrorResult<VerifiedIdentity>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}
