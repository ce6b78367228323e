use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    booking::Booking,
    id::{BookingId, RoomId, UserId},
};
use serde::{Deserialize, Serialize};

use crate::model::hotel::RoomResponse;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub room_id: Option<RoomId>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    #[garde(skip)]
    pub room_id: Option<RoomId>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBookingResponse {
    pub booking_id: BookingId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedBookingResponse {
    pub id: BookingId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: BookingId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub room: RoomResponse,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            id,
            user_id,
            created_at,
            updated_at,
            room,
        } = value;
        Self {
            id,
            user_id,
            room_id: room.id,
            created_at,
            updated_at,
            room: room.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::{id::HotelId, room::Room};

    #[test]
    fn booking_response_serializes_in_camel_case() {
        let res = BookingResponse::from(Booking {
            id: BookingId::new(1),
            user_id: UserId::new(2),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            room: Room {
                id: RoomId::new(3),
                name: "101".into(),
                capacity: 2,
                hotel_id: HotelId::new(4),
            },
        });

        let value = serde_json::to_value(&res).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["userId"], 2);
        assert_eq!(value["roomId"], 3);
        assert_eq!(value["room"]["hotelId"], 4);
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn created_booking_response_exposes_the_booking_id() {
        let value =
            serde_json::to_value(CreatedBookingResponse {
                booking_id: BookingId::new(7),
            })
            .unwrap();
        assert_eq!(value, serde_json::json!({ "bookingId": 7 }));
    }
}
