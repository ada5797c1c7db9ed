use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::hotels::core::errors::{ApplicationError, EntitlementError};
use crate::shell::auth::AuthenticatedUser;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> impl IntoResponse {
    match state.list_hotels.handle(user_id).await {
        Ok(hotels) => Json(hotels).into_response(),
        Err(ApplicationError::Entitlement(EntitlementError::NotFound)) => {
            StatusCode::NOT_FOUND.into_response()
        }
        Err(ApplicationError::Entitlement(EntitlementError::Unauthorized)) => {
            StatusCode::UNAUTHORIZED.into_response()
        }
        Err(ApplicationError::Store(error)) => {
            tracing::error!(%user_id, error = ?error, "listing hotels failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
