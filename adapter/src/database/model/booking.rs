use kernel::model::{
    booking::Booking,
    id::{BookingId, HotelId, RoomId, UserId},
    room::Room,
};
use sqlx::types::chrono::{DateTime, Utc};

// 予約と部屋を INNER JOIN した結果を受ける型
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub id: BookingId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub room_id: RoomId,
    pub room_name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            id,
            user_id,
            created_at,
            updated_at,
            room_id,
            room_name,
            capacity,
            hotel_id,
        } = value;
        Booking {
            id,
            user_id,
            created_at,
            updated_at,
            room: Room {
                id: room_id,
                name: room_name,
                capacity,
                hotel_id,
            },
        }
    }
}
