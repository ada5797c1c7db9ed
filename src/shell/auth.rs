// Bridge to the upstream authentication layer.
//
// The gateway verifies the session and forwards the user id in `x-user-id`.
// Requests without a usable id never reach the hotel handlers.

use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;

use crate::shared::core::primitives::UserId;

pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        raw.parse::<UserId>().map(AuthenticatedUser).map_err(|_| {
            tracing::debug!(header = raw, "rejected malformed user id");
            StatusCode::UNAUTHORIZED
        })
    }
}
