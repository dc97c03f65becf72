use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOOKUP_BASE_URL, DEFAULT_LOOKUP_TIMEOUT_SECS,
    MAX_LOOKUP_TIMEOUT_SECS, MIN_JWT_SECRET_LENGTH, VerifierKind,
};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub verifier: VerifierKind,
    /// Provider project; when set, tokens must carry the matching issuer and audience
    pub project_id: Option<String>,
    /// HS256 secret
    pub jwt_secret: Option<String>,
    /// RS256 public key (PEM), relative to the config directory
    pub jwt_public_key_path: Option<String>,
    pub lookup_api_key: Option<String>,
    pub lookup_base_url: String,
    pub lookup_timeout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            verifier: VerifierKind::default(),
            project_id: None,
            jwt_secret: None,
            jwt_public_key_path: None,
            lookup_api_key: None,
            lookup_base_url: String::from(DEFAULT_LOOKUP_BASE_URL),
            lookup_timeout_secs: DEFAULT_LOOKUP_TIMEOUT_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if let Some(project_id) = &self.project_id
            && project_id.trim().is_empty()
        {
            return Err(ConfigError::auth("auth.project_id cannot be empty when set"));
        }

        match self.verifier {
            VerifierKind::Jwt => self.validate_jwt(config_dir),
            VerifierKind::Lookup => self.validate_lookup(),
        }
    }

    /// Public key location resolved against the config directory
    pub fn public_key_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.jwt_public_key_path
            .as_ref()
            .map(|path| config_dir.join(path))
    }

    fn validate_jwt(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        match (&self.jwt_secret, self.public_key_path(config_dir)) {
            (None, None) => Err(ConfigError::auth(
                "auth.verifier = \"jwt\" requires jwt_secret or jwt_public_key_path",
            )),
            (Some(_), Some(_)) => Err(ConfigError::auth(
                "Set only one of jwt_secret and jwt_public_key_path",
            )),
            (Some(secret), None) => {
                if secret.len() < MIN_JWT_SECRET_LENGTH {
                    return Err(ConfigError::auth(format!(
                        "jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    )));
                }
                Ok(())
            }
            (None, Some(path)) => {
                if !path.is_file() {
                    return Err(ConfigError::auth(format!(
                        "jwt_public_key_path not found: {}",
                        path.display()
                    )));
                }
                Ok(())
            }
        }
    }

    fn validate_lookup(&self) -> ConfigErrorResult<()> {
        if self
            .lookup_api_key
            .as_deref()
            .is_none_or(|key| key.trim().is_empty())
        {
            return Err(ConfigError::auth(
                "auth.verifier = \"lookup\" requires lookup_api_key",
            ));
        }

        if !self.lookup_base_url.starts_with("http://")
            && !self.lookup_base_url.starts_with("https://")
        {
            return Err(ConfigError::auth(format!(
                "lookup_base_url must be an http(s) URL, got {}",
                self.lookup_base_url
            )));
        }

        if self.lookup_timeout_secs == 0 || self.lookup_timeout_secs > MAX_LOOKUP_TIMEOUT_SECS {
            return Err(ConfigError::auth(format!(
                "lookup_timeout_secs must be 1-{}, got {}",
                MAX_LOOKUP_TIMEOUT_SECS, self.lookup_timeout_secs
            )));
        }

        Ok(())
    }
}
