use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::hotels::core::errors::{ApplicationError, EntitlementError};
use crate::shared::core::primitives::HotelId;
use crate::shell::auth::AuthenticatedUser;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(hotel_id): Path<String>,
) -> impl IntoResponse {
    // A malformed id can never name a hotel.
    let Ok(hotel_id) = hotel_id.parse::<HotelId>() else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match state.get_hotel_rooms.handle(user_id, hotel_id).await {
        Ok(hotel) => Json(hotel).into_response(),
        Err(ApplicationError::Entitlement(EntitlementError::NotFound)) => {
            StatusCode::NOT_FOUND.into_response()
        }
        Err(ApplicationError::Entitlement(EntitlementError::Unauthorized)) => {
            StatusCode::UNAUTHORIZED.into_response()
        }
        Err(ApplicationError::Store(error)) => {
            tracing::error!(%user_id, %hotel_id, error = ?error, "loading hotel rooms failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
