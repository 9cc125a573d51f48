use crate::api::auth::error::AuthError;
use crate::api::auth::interfaces::AuthClaims;
use chrono::{DateTime, Duration, Utc};
use color_eyre::eyre::eyre;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

pub const TOKEN_LIFETIME_DAYS: i64 = 7;

/// The authenticated identity behind a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i32,
    pub username: String,
}

/// Signing and verification keys for identity tokens. Built once at start-up.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenKeys {
    pub fn from_secret(secret: &str) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::Internal(eyre!("token signing secret is empty")));
        }
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Issues a token that expires `TOKEN_LIFETIME_DAYS` from now.
    pub fn issue(&self, user_id: i32, username: &str) -> Result<String, AuthError> {
        self.issue_at(user_id, username, Utc::now())
    }

    pub fn issue_at(
        &self,
        user_id: i32,
        username: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let claims = AuthClaims {
            sub: user_id,
            username: username.to_owned(),
            exp: (issued_at + Duration::days(TOKEN_LIFETIME_DAYS)).timestamp(),
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Checks signature and expiry. The error kind is only meant for logging,
    /// every variant renders the same 401.
    pub fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        let claims = decode::<AuthClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken,
            })?;
        Ok(Principal {
            user_id: claims.sub,
            username: claims.username,
        })
    }
}
