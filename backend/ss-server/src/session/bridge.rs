use crate::session::{
    AccountStatus, EmailVerification, FederatedSignIn, LoginSession, Principal, Registration,
    SessionError, SessionResult,
};

use ss_auth::IdentityVerifier;
use ss_core::{ErrorLocation, LocalUser, VerifiedIdentity};
use ss_db::{DbError, ProfileRepository, SettingsRepository, UserRepository};

use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};
use sqlx::SqlitePool;

pub struct SessionBridge {
    verifier: Arc<dyn IdentityVerifier>,
    users: UserRepository,
    profiles: ProfileRepository,
    settings: SettingsRepository,
}

impl SessionBridge {
    pub fn new(pool: SqlitePool, verifier: Arc<dyn IdentityVerifier>) -> Self {
        Self {
            verifier,
            users: UserRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool.clone()),
            settings: SettingsRepository::new(pool),
        }
    }

    /// Create an inactive local account for a freshly verified identity.
    pub async fn register(&self, credential: &str) -> SessionResult<Registration> {
        let identity = self.verify(credential).await?;
        self.ensure_registrations_open().await?;

        let user = LocalUser::registered(&identity);
        match self.users.create(&user).await {
            Ok(()) => {}
            Err(DbError::Conflict { .. }) => {
                return Err(SessionError::duplicate(format!(
                    "an account for {} already exists",
                    identity.email
                )));
            }
            Err(e) => return Err(e.into()),
        }

        info!("Registered {} as {}", identity.subject_id, user.id);

        Ok(Registration {
            identity,
            user_id: user.id,
        })
    }

    /// Read-only view of the caller's account.
    pub async fn status(&self, credential: &str) -> SessionResult<AccountStatus> {
        let identity = self.verify(credential).await?;
        let user = self.require_user(&identity).await?;
        let profile = self.profiles.find_or_empty(user.id).await?;

        Ok(AccountStatus {
            identity,
            user,
            profile,
        })
    }

    /// Activate the account once the provider reports the email as verified.
    /// An unverified email is reported back without touching the store.
    pub async fn verify_email(&self, credential: &str) -> SessionResult<EmailVerification> {
        let identity = self.verify(credential).await?;
        let user = self.require_user(&identity).await?;

        if !identity.email_verified {
            debug!("Email of {} not yet verified", user.id);
            return Ok(EmailVerification {
                identity,
                user_id: user.id,
                email_verified: false,
                activated: false,
                active: user.is_active,
            });
        }

        self.sync_identity(&user, &identity).await?;
        let activated = self.users.mark_email_verified(user.id, Utc::now()).await?;
        if activated {
            info!("Email verified, account {} activated", user.id);
        }

        let active = match self.users.find_by_id(user.id).await? {
            Some(current) => current.is_active,
            None => false,
        };

        Ok(EmailVerification {
            identity,
            user_id: user.id,
            email_verified: true,
            activated,
            active,
        })
    }

    /// Sign in through the provider, provisioning the local account on first use.
    pub async fn federated_sign_in(&self, credential: &str) -> SessionResult<FederatedSignIn> {
        let identity = self.verify(credential).await?;

        let (user, created) = match self.users.find_by_subject(&identity.subject_id).await? {
            Some(user) => {
                refuse_suspended(&user)?;
                self.sync_identity(&user, &identity).await?;
                if identity.email_verified && !user.is_email_confirmed() {
                    self.users.mark_email_verified(user.id, Utc::now()).await?;
                }
                (user, false)
            }
            None => self.provision(&identity).await?,
        };

        self.profiles.touch_last_active(user.id, Utc::now()).await?;

        Ok(FederatedSignIn {
            identity,
            user_id: user.id,
            created,
        })
    }

    /// Password-less login: the provider must vouch for the email and the local
    /// account must not be suspended.
    pub async fn login(&self, credential: &str) -> SessionResult<LoginSession> {
        let identity = self.verify(credential).await?;

        if !identity.email_verified {
            return Err(SessionError::EmailNotVerified {
                email: identity.email.clone(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let user = self.require_user(&identity).await?;
        self.sync_identity(&user, &identity).await?;
        if !user.is_email_confirmed() {
            self.users.mark_email_verified(user.id, Utc::now()).await?;
        }

        let user = self.require_user(&identity).await?;
        if !user.is_active {
            warn!("Login refused for suspended account {}", user.id);
            return Err(SessionError::AccountSuspended {
                user_id: user.id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.profiles.touch_last_active(user.id, Utc::now()).await?;
        let profile = self.profiles.find_or_empty(user.id).await?;

        Ok(LoginSession {
            identity,
            user,
            profile,
        })
    }

    /// Resolve the caller into a principal with roles.
    pub async fn authenticate(&self, credential: &str) -> SessionResult<Principal> {
        let identity = self.verify(credential).await?;
        let user = self.require_user(&identity).await?;
        let profile = self.profiles.find_or_empty(user.id).await?;

        Ok(Principal::new(user, profile, identity))
    }

    /// Resolve the caller and require an active account holding the `Admin` role.
    /// A verified caller with no local account is refused the same way.
    pub async fn require_admin(&self, credential: &str) -> SessionResult<Principal> {
        let principal = match self.authenticate(credential).await {
            Ok(principal) => principal,
            Err(SessionError::AccountNotFound { subject_id, .. }) => {
                warn!("Admin access denied for unknown subject {}", subject_id);
                return Err(SessionError::admin_required());
            }
            Err(e) => return Err(e),
        };

        if !principal.user.is_active || !principal.is_admin() {
            warn!(
                "Admin access denied for {} (active: {}, admin: {})",
                principal.user_id(),
                principal.user.is_active,
                principal.is_admin()
            );
            return Err(SessionError::admin_required());
        }

        Ok(principal)
    }

    async fn verify(&self, credential: &str) -> SessionResult<VerifiedIdentity> {
        let credential = credential.trim();
        if credential.is_empty() {
            return Err(SessionError::MissingCredential {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let identity = self.verifier.verify(credential).await.map_err(|e| {
            warn!("{} verifier rejected credential: {}", self.verifier.name(), e);
            SessionError::from(e)
        })?;

        debug!("Verified subject {}", identity.subject_id);

        Ok(identity)
    }

    async fn require_user(&self, identity: &VerifiedIdentity) -> SessionResult<LocalUser> {
        self.users
            .find_by_subject(&identity.subject_id)
            .await?
            .ok_or_else(|| SessionError::AccountNotFound {
                subject_id: identity.subject_id.clone(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    async fn ensure_registrations_open(&self) -> SessionResult<()> {
        if !self.settings.get().await?.allow_new_registrations {
            return Err(SessionError::RegistrationClosed {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Copy the provider's current email and display name onto the local record.
    async fn sync_identity(&self, user: &LocalUser, identity: &VerifiedIdentity) -> SessionResult<()> {
        let unchanged = user.email == identity.email
            && (identity.display_name.is_none() || user.display_name == identity.display_name);
        if unchanged {
            return Ok(());
        }

        match self
            .users
            .sync_identity(user.id, &identity.email, identity.display_name.as_deref())
            .await
        {
            Ok(()) => Ok(()),
            Err(DbError::Conflict { .. }) => Err(SessionError::duplicate(format!(
                "{} is already used by another account",
                identity.email
            ))),
            Err(e) => Err(e.into()),
        }
    }

    async fn provision(&self, identity: &VerifiedIdentity) -> SessionResult<(LocalUser, bool)> {
        self.ensure_registrations_open().await?;

        let user = LocalUser::provisioned(identity);
        match self.users.create(&user).await {
            Ok(()) => {
                info!("Provisioned {} as {}", identity.subject_id, user.id);
                Ok((user, true))
            }
            Err(DbError::Conflict { .. }) => {
                // Either a concurrent sign-in for the same subject won the race, or
                // the email belongs to a different subject.
                match self.users.find_by_subject(&identity.subject_id).await? {
                    Some(existing) => {
                        refuse_suspended(&existing)?;
                        Ok((existing, false))
                    }
                    None => Err(SessionError::duplicate(format!(
                        "{} is already used by another account",
                        identity.email
                    ))),
                }
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[track_caller]
fn refuse_suspended(user: &LocalUser) -> SessionResult<()> {
    if user.is_suspended() {
        warn!("Sign-in refused for suspended account {}", user.id);
        return Err(SessionError::AccountSuspended {
            user_id: user.id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
