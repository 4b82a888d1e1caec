use jsonwebtoken::{EncodingKey, Header, encode};

use ocuscreen_auth::error::AuthError;
use ocuscreen_auth::jwt::{AccessClaims, TokenVerifier};

const SECRET: &[u8] = b"test-secret";

fn now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

fn token(sub: &str, exp: u64, aud: Option<&str>, secret: &[u8]) -> String {
    let claims = AccessClaims {
        sub: sub.to_string(),
        exp,
        iat: Some(now()),
        aud: aud.map(str::to_string),
        email: Some(format!("{sub}@example.com")),
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret)).unwrap()
}

fn verifier() -> TokenVerifier {
    TokenVerifier::new(SECRET, Some("authenticated".to_string()))
}

#[test]
fn valid_token_yields_identity() {
    let t = token("user-1", now() + 3600, Some("authenticated"), SECRET);
    let identity = verifier().identify(Some(&format!("Bearer {t}"))).unwrap();
    assert_eq!(identity.id, "user-1");
    assert_eq!(identity.email.as_deref(), Some("user-1@example.com"));
}

#[test]
fn missing_or_malformed_header_is_rejected() {
    assert!(matches!(verifier().identify(None), Err(AuthError::MissingToken)));
    assert!(matches!(
        verifier().identify(Some("Basic abc")),
        Err(AuthError::MissingToken)
    ));
    assert!(matches!(
        verifier().identify(Some("Bearer ")),
        Err(AuthError::MissingToken)
    ));
}

#[test]
fn expired_token_is_rejected() {
    let t = token("user-1", now() - 3600, Some("authenticated"), SECRET);
    assert!(matches!(verifier().validate(&t), Err(AuthError::TokenExpired)));
}

#[test]
fn wrong_secret_or_audience_is_rejected() {
    let forged = token("user-1", now() + 3600, Some("authenticated"), b"other-secret");
    assert!(matches!(verifier().validate(&forged), Err(AuthError::Jwt(_))));

    let wrong_aud = token("user-1", now() + 3600, Some("anon"), SECRET);
    assert!(verifier().validate(&wrong_aud).is_err());

    let no_aud_check = TokenVerifier::new(SECRET, None);
    assert_eq!(no_aud_check.validate(&wrong_aud).unwrap().sub, "user-1");
}
