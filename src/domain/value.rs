use secrecy::{ExposeSecret, SecretString};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone)]
/// Sendblue public API key id (`sb-api-key-id`).
///
/// Invariant: non-empty after trimming. The value is redacted in `Debug` output.
pub struct ApiKeyId(SecretString);

impl ApiKeyId {
    /// Header name used by Sendblue (`sb-api-key-id`).
    pub const HEADER: &'static str = "sb-api-key-id";

    /// Environment variable read by [`Credentials::from_env`].
    pub const ENV: &'static str = "SENDBLUE_API_KEY_ID";

    /// Create a validated [`ApiKeyId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::HEADER,
            });
        }
        Ok(Self(SecretString::from(trimmed.to_owned())))
    }

    /// Borrow the key id. Only the request pipeline should need this.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

#[derive(Debug, Clone)]
/// Sendblue secret API key (`sb-api-secret-key`).
///
/// Invariant: must not be empty (whitespace is preserved). Redacted in `Debug` output.
pub struct ApiSecretKey(SecretString);

impl ApiSecretKey {
    /// Header name used by Sendblue (`sb-api-secret-key`).
    pub const HEADER: &'static str = "sb-api-secret-key";

    /// Environment variable read by [`Credentials::from_env`].
    pub const ENV: &'static str = "SENDBLUE_API_SECRET_KEY";

    /// Create a validated [`ApiSecretKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::HEADER,
            });
        }
        Ok(Self(SecretString::from(value)))
    }

    /// Borrow the secret as provided.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

#[derive(Debug, Clone)]
/// The credential pair sent with every request.
pub struct Credentials {
    key_id: ApiKeyId,
    secret_key: ApiSecretKey,
}

impl Credentials {
    /// Validate and pair a key id with its secret.
    pub fn new(
        key_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            key_id: ApiKeyId::new(key_id)?,
            secret_key: ApiSecretKey::new(secret_key)?,
        })
    }

    /// Read `SENDBLUE_API_KEY_ID` and `SENDBLUE_API_SECRET_KEY` from the environment.
    pub fn from_env() -> Result<Self, ValidationError> {
        let key_id = std::env::var(ApiKeyId::ENV)
            .map_err(|_| ValidationError::MissingEnv { name: ApiKeyId::ENV })?;
        let secret_key = std::env::var(ApiSecretKey::ENV).map_err(|_| {
            ValidationError::MissingEnv {
                name: ApiSecretKey::ENV,
            }
        })?;
        Self::new(key_id, secret_key)
    }

    pub fn key_id(&self) -> &ApiKeyId {
        &self.key_id
    }

    pub fn secret_key(&self) -> &ApiSecretKey {
        &self.secret_key
    }

    pub(crate) fn headers(&self) -> [(&'static str, String); 2] {
        [
            (ApiKeyId::HEADER, self.key_id.expose().to_owned()),
            (ApiSecretKey::HEADER, self.secret_key.expose().to_owned()),
        ]
    }
}
