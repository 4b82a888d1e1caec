use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use ocuscreen_core::models::user::UserIdentity;

use crate::error::AuthError;

/// Claims carried by an access token from the hosted auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,
    pub exp: u64,
    #[serde(default)]
    pub iat: Option<u64>,
    #[serde(default)]
    pub aud: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl AccessClaims {
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            id: self.sub.clone(),
            email: self.email.clone(),
        }
    }
}

/// Shared-secret settings used to verify HS256 access tokens.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    audience: Option<String>,
}

impl TokenVerifier {
    pub fn new(secret: &[u8], audience: Option<String>) -> Self {
        Self {
            key: DecodingKey::from_secret(secret),
            audience,
        }
    }

    /// Validate a token and return its claims.
    pub fn validate(&self, token: &str) -> Result<AccessClaims, AuthError> {
        validate_token(token, &self.key, self.audience.as_deref())
    }

    /// Validate the value of an `Authorization` header (`Bearer <token>`).
    pub fn identify(&self, authorization: Option<&str>) -> Result<UserIdentity, AuthError> {
        let token = authorization
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;
        Ok(self.validate(token)?.identity())
    }
}

/// Validate an HS256 access token.
///
/// Expiry is always enforced. When `audience` is given the token's `aud`
/// must match it.
pub fn validate_token(
    token: &str,
    key: &DecodingKey,
    audience: Option<&str>,
) -> Result<AccessClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    match audience {
        Some(aud) => validation.set_audience(&[aud]),
        None => validation.validate_aud = false,
    }

    let token_data = decode::<AccessClaims>(token, key, &validation)?;

    if token_data.claims.sub.is_empty() {
        return Err(AuthError::InvalidToken("empty subject".to_string()));
    }

    debug!(sub = %token_data.claims.sub, "access token validated");
    Ok(token_data.claims)
}
