use axum::{
    extract::{Path, State},
    Json,
};
use garde::Validate;
use kernel::model::id::{BookingId, RoomId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        BookingResponse, CreateBookingRequest, CreatedBookingResponse, UpdateBookingRequest,
        UpdatedBookingResponse,
    },
};

// roomId の欠落・0 は「部屋未選択」なので、ストレージを読む前に拒否する
fn require_room_id(room_id: Option<RoomId>) -> AppResult<RoomId> {
    match room_id {
        Some(room_id) if room_id.raw() != 0 => Ok(room_id),
        _ => Err(AppError::ForbiddenOperation(
            "部屋が選択されていません。".into(),
        )),
    }
}

pub async fn create_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<Json<CreatedBookingResponse>> {
    req.validate(&())?;
    let room_id = require_room_id(req.room_id)?;

    registry
        .booking_service()
        .create_booking(room_id, user.id())
        .await
        .map(|booking_id| Json(CreatedBookingResponse { booking_id }))
}

pub async fn show_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .booking_service()
        .get_booking(user.id())
        .await
        .map(BookingResponse::from)
        .map(Json)
}

pub async fn change_booking_room(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookingRequest>,
) -> AppResult<Json<UpdatedBookingResponse>> {
    req.validate(&())?;
    let room_id = require_room_id(req.room_id)?;

    registry
        .booking_service()
        .update_booking(room_id, user.id(), booking_id)
        .await
        .map(|id| Json(UpdatedBookingResponse { id }))
}
