use crate::types::{AppError, Result, TokenResponse};
use crate::utils::toml_config::{ConfigError, ToolboxConfig};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::RngCore;

/// Number of random bytes in an issued access token.
const TOKEN_BYTES: usize = 32;

/// Single-account sign-in service.
///
/// The configured password is hashed with Argon2id when the service is built
/// and only the hash is kept. Issued tokens are opaque random strings; nothing
/// downstream validates them beyond their presence in the session.
pub struct AuthService {
    username: String,
    password_hash: String,
}

impl AuthService {
    /// Creates a service accepting `username` with `password`.
    pub fn new(username: impl Into<String>, password: &str) -> Result<Self> {
        Ok(Self {
            username: username.into(),
            password_hash: Self::hash_password(password)?,
        })
    }

    /// Builds the service from `[auth]`, reading the password from the
    /// environment variable the config names.
    pub fn from_config(config: &ToolboxConfig) -> std::result::Result<Self, ConfigError> {
        let password = config.password()?;
        Self::new(config.auth.username.clone(), &password)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    /// Configured account name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Hashes a password using Argon2id.
    ///
    /// Returns a PHC-formatted hash string.
    pub fn hash_password(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }

    /// Verifies a password against the stored Argon2 hash.
    pub fn verify_password(&self, password: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(&self.password_hash)
            .map_err(|e| AppError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Checks the credentials and issues a bearer token.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<TokenResponse> {
        let password_ok = self.verify_password(password)?;
        if username != self.username || !password_ok {
            tracing::warn!(username, "Rejected sign-in");
            return Err(AppError::Auth("Incorrect username or password".to_string()));
        }

        tracing::info!(username, "Issued access token");
        Ok(TokenResponse::bearer(Self::generate_token()))
    }

    fn generate_token() -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new("admin", "admin123").unwrap()
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = AuthService::hash_password("admin123").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains("admin123"));
    }

    #[test]
    fn test_authenticate_issues_hex_token() {
        let token = service().authenticate("admin", "admin123").unwrap();
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.access_token.len(), TOKEN_BYTES * 2);
        assert!(token.access_token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let service = service();
        let a = service.authenticate("admin", "admin123").unwrap();
        let b = service.authenticate("admin", "admin123").unwrap();
        assert_ne!(a.access_token, b.access_token);
    }

    #[test]
    fn test_wrong_password_rejected() {
        let err = service().authenticate("admin", "nope").unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }

    #[test]
    fn test_wrong_username_rejected() {
        let err = service().authenticate("root", "admin123").unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }

    #[test]
    fn test_from_config_requires_password_env() {
        let mut config = ToolboxConfig::default();
        config.auth.password_env = "TOOLBOX_TEST_AUTH_UNSET".to_string();
        assert!(matches!(
            AuthService::from_config(&config),
            Err(ConfigError::MissingEnvVar(_))
        ));
    }
}
