//! Session Bridge: turns a provider credential into a local account.
//!
//! Every operation verifies the credential exactly once, then reads or writes the
//! local user store. Accounts are correlated by the provider subject id; the email
//! is a mutable attribute synchronised from the verified identity.

pub mod bridge;
pub mod error;
pub mod outcomes;
pub mod principal;

pub use bridge::SessionBridge;
pub use error::{Result as SessionResult, SessionError};
pub use outcomes::{AccountStatus, EmailVerification, FederatedSignIn, LoginSession, Registration};
pub use principal::Principal;
