use crate::auth::middlewares::common::extract_token;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use common_services::api::auth::error::AuthError;
use common_services::api::auth::token::{Principal, TokenKeys};

/// Requires a valid bearer token. The verified `Principal` is also put in the request
/// extensions so handlers behind the route layer can read it with `Extension<Principal>`.
#[derive(Clone, Debug)]
pub struct ApiUser(pub Principal);

impl<S> FromRequestParts<S> for ApiUser
where
    S: Send + Sync,
    TokenKeys: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let principal = TokenKeys::from_ref(state).verify(extract_token(parts)?)?;
        parts.extensions.insert(principal.clone());
        Ok(Self(principal))
    }
}
