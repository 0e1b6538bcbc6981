use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        hotel::{HotelDto, HotelWithRoomsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::hotel::HotelService,
        state::AppState,
    },
};

pub static HOTEL_TAG: &str = "hotel";

/// GET /hotels - List every hotel
///
/// A failure while loading the hotel list yields 404 Not Found.
///
/// # Authentication
/// Requires a bearer token and a paid, in-person ticket that includes hotel access.
#[utoipa::path(
    get,
    path = "/hotels",
    tag = HOTEL_TAG,
    responses(
        (status = 200, description = "All hotels, possibly empty", body = Vec<HotelDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 402, description = "Ticket is unpaid, remote, or excludes hotel", body = ErrorDto),
        (status = 404, description = "User has no enrollment or no ticket, or hotels could not be loaded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotels(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::HotelAccess])
        .await?;

    let hotels = match HotelService::new(&state.db).get_hotels().await {
        Ok(hotels) => hotels,
        Err(e) => {
            tracing::debug!("Failed to load hotels: {}", e);
            return Err(AppError::NotFound("Hotels not found".to_string()));
        }
    };

    let hotels_dto: Vec<HotelDto> = hotels.into_iter().map(|h| h.into_dto()).collect();

    Ok((StatusCode::OK, Json(hotels_dto)))
}

/// GET /hotels/{hotel_id} - Get a hotel with its rooms
///
/// The identifier is taken as a string so that authentication runs before it is parsed.
/// A malformed identifier, a missing hotel, or any failure while loading rooms yields
/// 204 No Content.
///
/// # Authentication
/// Requires a bearer token and a paid, in-person ticket that includes hotel access.
#[utoipa::path(
    get,
    path = "/hotels/{hotel_id}",
    tag = HOTEL_TAG,
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "Hotel with its rooms", body = HotelWithRoomsDto),
        (status = 204, description = "Hotel could not be loaded"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 402, description = "Ticket is unpaid, remote, or excludes hotel", body = ErrorDto),
        (status = 404, description = "User has no enrollment or no ticket", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(hotel_id): Path<String>,
) -> Result<Response, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::HotelAccess])
        .await?;

    let Ok(hotel_id) = hotel_id.parse::<i32>() else {
        tracing::debug!("Rejected malformed hotel id '{}'", hotel_id);
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    match HotelService::new(&state.db).get_rooms(hotel_id).await {
        Ok(hotel) => Ok((StatusCode::OK, Json(hotel.into_dto())).into_response()),
        Err(e) => {
            tracing::debug!("Failed to load rooms for hotel {}: {}", hotel_id, e);
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}
