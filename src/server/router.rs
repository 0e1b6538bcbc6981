use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        hotel::{HotelDto, HotelWithRoomsDto, RoomDto},
    },
    server::{
        controller::hotel::{self, get_hotels, get_rooms},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Event Hotels API"),
    paths(hotel::get_hotels, hotel::get_rooms),
    components(schemas(HotelDto, RoomDto, HotelWithRoomsDto, ErrorDto)),
    tags((name = "hotel", description = "Hotels and rooms for ticket holders with lodging"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hotels", get(get_hotels))
        .route("/hotels/{hotel_id}", get(get_rooms))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}

/// Builds the complete application with middleware layers and state applied.
pub fn app(state: AppState) -> Router {
    router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
