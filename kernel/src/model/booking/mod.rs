use crate::model::{
    id::{BookingId, UserId},
    room::Room,
};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub room: Room,
}
