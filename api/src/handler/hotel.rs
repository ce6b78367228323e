use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use kernel::model::id::HotelId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::AuthorizedUser,
    model::hotel::{HotelResponse, HotelWithRoomsResponse},
};

pub async fn show_hotel_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<(StatusCode, Json<Vec<HotelResponse>>)> {
    registry
        .hotel_service()
        .list_hotels(user.id())
        .await
        .map(|hotels| {
            (
                StatusCode::CREATED,
                Json(hotels.into_iter().map(HotelResponse::from).collect()),
            )
        })
}

pub async fn show_hotel_rooms(
    user: AuthorizedUser,
    Path(hotel_id): Path<HotelId>,
    State(registry): State<AppRegistry>,
) -> AppResult<(StatusCode, Json<HotelWithRoomsResponse>)> {
    registry
        .hotel_service()
        .get_hotel_rooms(hotel_id, user.id())
        .await
        .map(|hotel| (StatusCode::CREATED, Json(hotel.into())))
}
